//! CLI interface for Civicdesk

pub mod commands;
mod output;

pub use output::*;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "civicdesk")]
#[command(version = "0.3.0")]
#[command(about = "Citizen services administration portal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new civicdesk.toml configuration file
    Init,

    /// Start the admin portal server and JSON API
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value = "4820")]
        port: u16,
    },

    /// Manage admin accounts in the configuration file
    Admins {
        #[command(subcommand)]
        action: AdminsAction,
    },

    /// Show portal configuration and seeded record counts
    Status,
}

#[derive(Subcommand)]
pub enum AdminsAction {
    /// List provisioned admin accounts
    List,

    /// Add an admin account (interactive)
    Add,
}
