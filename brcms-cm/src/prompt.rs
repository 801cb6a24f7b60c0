//! Terminal prompts

use brcms_common::editor::Confirmation;
use std::io::{self, BufRead, Write};

/// Confirmation read from stdin, `j`/`ja`/`y`/`yes` accept
///
/// With `assume_yes` every prompt is accepted without reading input.
#[derive(Debug, Clone, Copy)]
pub struct TerminalConfirmation {
    assume_yes: bool,
}

impl TerminalConfirmation {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Confirmation for TerminalConfirmation {
    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        match ask(&format!("{} [j/N] ", message)) {
            Ok(answer) => is_yes(&answer),
            Err(_) => false,
        }
    }
}

/// Operator input the console may ask for
pub trait Prompt: Confirmation {
    /// Read a password without echoing it
    fn read_password(&mut self, prompt: &str) -> io::Result<String>;
}

impl Prompt for TerminalConfirmation {
    fn read_password(&mut self, prompt: &str) -> io::Result<String> {
        rpassword::prompt_password(prompt)
    }
}

/// Canned answers, for driving the console without a terminal
#[derive(Debug, Clone, Default)]
pub struct FixedAnswer {
    pub confirm: bool,
    pub password: Option<String>,
}

impl FixedAnswer {
    pub fn new(confirm: bool) -> Self {
        Self {
            confirm,
            password: None,
        }
    }

    pub fn with_password(mut self, password: &str) -> Self {
        self.password = Some(password.to_string());
        self
    }
}

impl Confirmation for FixedAnswer {
    fn confirm(&mut self, _message: &str) -> bool {
        self.confirm
    }
}

impl Prompt for FixedAnswer {
    fn read_password(&mut self, _prompt: &str) -> io::Result<String> {
        self.password
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no password input"))
    }
}

/// Print `prompt` to stderr and read one line from stdin
fn ask(prompt: &str) -> io::Result<String> {
    let mut stderr = io::stderr();
    stderr.write_all(prompt.as_bytes())?;
    stderr.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "j" | "ja" | "y" | "yes"
    )
}
