//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use truckchat_types::{IdentityMode, OutputFormat};

#[derive(Parser)]
#[command(name = "truck-chat")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Chat about your trucks and keep a record of the answers")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory (reference list, results, transcripts). Uses config value if not specified.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Truck identity mode. Uses config value if not specified.
    #[arg(long, short = 'm', global = true)]
    pub mode: Option<IdentityMode>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start a conversation
    Chat {
        /// Name the chatbot introduces itself with
        #[arg(long)]
        name: Option<String>,

        /// Ask for consent before collecting anything (overrides config)
        #[arg(long, conflicts_with = "no_consent")]
        consent: bool,

        /// Skip the consent question (overrides config)
        #[arg(long)]
        no_consent: bool,

        /// Ask for the year of manufacture (overrides config)
        #[arg(long)]
        year: Option<bool>,
    },

    /// Create the data directory and an empty reference list
    Init,

    /// Show the known trucks
    References,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the chatbot name
        #[arg(long)]
        set_name: Option<String>,

        /// Set the identity mode
        #[arg(long)]
        set_mode: Option<IdentityMode>,

        /// Enable/disable the consent question
        #[arg(long)]
        set_consent: Option<bool>,

        /// Enable/disable the year question
        #[arg(long)]
        set_year: Option<bool>,

        /// Set the data directory
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_chat_overrides() {
        let cli = Cli::parse_from([
            "truck-chat",
            "chat",
            "--consent",
            "--name",
            "Rita",
            "--mode",
            "manufacturer-model",
        ]);
        assert_eq!(cli.mode, Some(IdentityMode::ManufacturerModel));
        match cli.command {
            Commands::Chat {
                name,
                consent,
                no_consent,
                year,
            } => {
                assert_eq!(name.as_deref(), Some("Rita"));
                assert!(consent);
                assert!(!no_consent);
                assert_eq!(year, None);
            }
            _ => panic!("expected chat command"),
        }
    }

    #[test]
    fn test_consent_flags_conflict() {
        assert!(Cli::try_parse_from(["truck-chat", "chat", "--consent", "--no-consent"]).is_err());
    }
}
