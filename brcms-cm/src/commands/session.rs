//! login, logout and whoami

use crate::console::{Console, Outcome};
use crate::prompt::Prompt;
use anyhow::Result;
use brcms_common::auth::{logout, Session, Visibility};
use brcms_common::Error;
use std::io::Write;

impl<C: Prompt> Console<C> {
    pub(crate) fn login<W: Write>(
        &mut self,
        username: &str,
        password: Option<String>,
        out: &mut W,
    ) -> Result<Outcome> {
        let password = match password {
            Some(password) => password,
            None => self.prompt.read_password("Passwort: ")?,
        };

        match Session::login(&self.store, username, &password) {
            Ok(session) => {
                writeln!(
                    out,
                    "Angemeldet als {} ({})",
                    session.username(),
                    session.user().role
                )?;
                Ok(Outcome::Done)
            }
            Err(e @ Error::InvalidCredentials) => {
                writeln!(out, "{}", e)?;
                Ok(Outcome::LoginFailed)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub(crate) fn logout<W: Write>(&mut self, out: &mut W) -> Result<Outcome> {
        let redirect = logout(&self.store, self.location)?;
        writeln!(out, "Abgemeldet")?;
        writeln!(out, "Weiterleitung zu {}", redirect.target)?;
        Ok(Outcome::Done)
    }

    pub(crate) fn whoami<W: Write>(&mut self, out: &mut W) -> Result<Outcome> {
        let session = Session::current(&self.store);

        match &session {
            Some(session) => writeln!(
                out,
                "Angemeldet als {} ({}, Stufe {})",
                session.username(),
                session.user().role,
                session.role_level()
            )?,
            None => writeln!(out, "Nicht angemeldet")?,
        }

        let visibility = Visibility::for_session(session.as_ref());
        writeln!(out, "{}", serde_json::to_string_pretty(&visibility)?)?;
        Ok(Outcome::Done)
    }
}
