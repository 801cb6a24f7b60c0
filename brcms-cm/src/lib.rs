//! brcms-cm: operator console for band room content management
//!
//! Command-line front end over `brcms-common`. The binary in `main.rs` only
//! bootstraps config, logging and storage; everything else is here so the
//! commands can be driven from tests.

pub mod cli;
mod commands;
pub mod console;
pub mod prompt;
mod render;

pub use cli::Cli;
pub use console::{Console, Outcome};
