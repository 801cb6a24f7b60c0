//! Command-line definition

use brcms_common::models::RecordId;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for brcms-cm
#[derive(Parser, Debug)]
#[command(name = "brcms-cm")]
#[command(about = "Band room content management console")]
#[command(version)]
pub struct Cli {
    /// Folder holding the storage documents
    #[arg(short, long, global = true)]
    pub root_folder: Option<PathBuf>,

    /// Config file (default: ~/.config/brcms/config.toml)
    #[arg(short, long, global = true, env = "BRCMS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Answer yes to every confirmation
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    /// Resolve redirects as a page inside components/
    #[arg(long, global = true)]
    pub components: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Log in as a user
    Login {
        username: String,

        /// Read from the terminal when omitted
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Clear the current session
    Logout,

    /// Show the current user and visible affordances
    Whoami,

    /// Show the public landing page views
    Public,

    /// Manage performance listings
    Gigs {
        #[command(subcommand)]
        action: GigAction,
    },

    /// Manage audio tracks
    Tracks {
        #[command(subcommand)]
        action: TrackAction,
    },

    /// Manage gallery images
    Gallery {
        #[command(subcommand)]
        action: GalleryAction,
    },

    /// Manage user accounts
    Users {
        #[command(subcommand)]
        action: UserAction,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum GigAction {
    List,
    Add {
        /// YYYY-MM-DD
        #[arg(long)]
        date: String,
        #[arg(long)]
        venue: String,
        #[arg(long)]
        description: Option<String>,
        /// Image file to attach
        #[arg(long)]
        image: Option<PathBuf>,
    },
    Edit {
        id: RecordId,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        venue: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Replacement image; the stored one is kept when omitted
        #[arg(long)]
        image: Option<PathBuf>,
    },
    Delete {
        id: RecordId,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum TrackAction {
    List,
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        artist: String,
        /// Audio file to attach
        #[arg(long)]
        file: Option<PathBuf>,
    },
    Edit {
        id: RecordId,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        artist: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
    },
    Delete {
        id: RecordId,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum GalleryAction {
    List,
    Add {
        #[arg(long)]
        caption: String,
        /// Image file to attach
        #[arg(long)]
        file: Option<PathBuf>,
    },
    Edit {
        id: RecordId,
        #[arg(long)]
        caption: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
    },
    Delete {
        id: RecordId,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    List,
    Delete { id: RecordId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["brcms-cm", "gigs", "delete", "42", "--yes", "--components"]);

        assert!(cli.yes);
        assert!(cli.components);
        assert_eq!(
            cli.command,
            Command::Gigs {
                action: GigAction::Delete { id: 42 }
            }
        );
    }

    #[test]
    fn test_edit_fields_are_optional() {
        let cli = Cli::parse_from(["brcms-cm", "tracks", "edit", "7", "--title", "Neu"]);

        assert_eq!(
            cli.command,
            Command::Tracks {
                action: TrackAction::Edit {
                    id: 7,
                    title: Some("Neu".into()),
                    artist: None,
                    file: None,
                }
            }
        );
    }
}
