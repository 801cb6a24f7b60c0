//! brcms-cm - Main entry point
//!
//! Bootstrap order: parse arguments, load config, initialize tracing, open
//! the storage root, then run the subcommand.

use std::process::ExitCode;

use anyhow::{Context, Result};
use brcms_cm::prompt::TerminalConfirmation;
use brcms_cm::{Cli, Console};
use brcms_common::auth::Location;
use brcms_common::config::{load_bootstrap, resolve_root_folder, TomlConfig};
use brcms_common::{FileStorage, Store};
use clap::Parser;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Config errors are reported once tracing is up
    let (config, config_error) = match load_bootstrap(cli.config.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (TomlConfig::default(), Some(e)),
    };

    // Log to stderr so command output on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.level.clone().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Starting brcms-cm v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    if let Some(e) = config_error {
        warn!("Config ignored, using defaults: {}", e);
    }

    let root_folder = resolve_root_folder(cli.root_folder.as_deref(), &config);
    info!("Root folder: {}", root_folder.display());

    let storage = FileStorage::open(&root_folder)
        .with_context(|| format!("Failed to open storage at {}", root_folder.display()))?;
    let store = Store::new(storage);
    store.initialize().context("Failed to seed storage")?;

    let location = if cli.components {
        Location::Components
    } else {
        Location::Root
    };

    let mut console = Console::new(store, location, TerminalConfirmation::new(cli.yes));
    let mut stdout = std::io::stdout().lock();
    let outcome = console.execute(cli.command, &mut stdout).await?;

    Ok(ExitCode::from(outcome.exit_code()))
}
