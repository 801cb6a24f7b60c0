//! Command dispatch
//!
//! The console plays the presentation layer: it reads the visibility flags,
//! shows inline errors, reports redirects and asks for confirmations. All
//! state lives in the store, so each invocation starts from storage.

use crate::cli::Command;
use crate::prompt::Prompt;
use anyhow::Result;
use brcms_common::auth::{Location, Redirect};
use brcms_common::Store;
use std::io::Write;
use tracing::debug;

/// How a command ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// Credentials rejected; the session was left untouched
    LoginFailed,
    /// A gate refused the page and navigated to the landing page
    Redirected(Redirect),
}

impl Outcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Done => 0,
            Outcome::LoginFailed => 1,
            Outcome::Redirected(_) => 2,
        }
    }
}

pub struct Console<C: Prompt> {
    pub(crate) store: Store,
    pub(crate) location: Location,
    pub(crate) prompt: C,
}

impl<C: Prompt> Console<C> {
    pub fn new(store: Store, location: Location, prompt: C) -> Self {
        Self {
            store,
            location,
            prompt,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Run one command, writing operator-facing text to `out`
    pub async fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Outcome> {
        debug!("Executing {:?}", command);

        let outcome = match command {
            Command::Login { username, password } => self.login(&username, password, out)?,
            Command::Logout => self.logout(out)?,
            Command::Whoami => self.whoami(out)?,
            Command::Public => self.public(out)?,
            Command::Gigs { action } => self.gigs(action, out).await?,
            Command::Tracks { action } => self.tracks(action, out).await?,
            Command::Gallery { action } => self.gallery(action, out).await?,
            Command::Users { action } => self.users(action, out)?,
        };

        if let Outcome::Redirected(redirect) = &outcome {
            if let Some(notice) = redirect.notice {
                writeln!(out, "{}", notice)?;
            }
            writeln!(out, "Weiterleitung zu {}", redirect.target)?;
        }

        Ok(outcome)
    }
}
