//! Subcommand implementations, one `impl Console` block per area

mod content;
mod public;
mod session;
mod users;
