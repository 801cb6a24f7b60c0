//! users list and delete

use crate::cli::UserAction;
use crate::console::{Console, Outcome};
use crate::prompt::Prompt;
use crate::render;
use anyhow::Result;
use brcms_common::auth::{require_admin_access, Session};
use brcms_common::editor::{UserDeleteOutcome, UserRegistry};
use std::io::Write;

impl<C: Prompt> Console<C> {
    pub(crate) fn users<W: Write>(&mut self, action: UserAction, out: &mut W) -> Result<Outcome> {
        let session = Session::current(&self.store);
        let access = match require_admin_access(session.as_ref(), self.location) {
            Ok(access) => access,
            Err(redirect) => return Ok(Outcome::Redirected(redirect)),
        };
        let registry = UserRegistry::open(self.store.clone(), &access);

        match action {
            UserAction::List => {
                for row in registry.list() {
                    writeln!(out, "{}", render::user_row(&row))?;
                }
            }
            UserAction::Delete { id } => match registry.delete(id, &mut self.prompt)? {
                UserDeleteOutcome::Deleted => writeln!(out, "Gelöscht (ID {})", id)?,
                UserDeleteOutcome::Protected => {
                    writeln!(out, "Der Administrator kann nicht gelöscht werden")?
                }
                UserDeleteOutcome::NotFound => writeln!(out, "Benutzer {} nicht gefunden", id)?,
                UserDeleteOutcome::Cancelled => writeln!(out, "Abgebrochen")?,
            },
        }
        Ok(Outcome::Done)
    }
}
