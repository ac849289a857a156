use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "localmate-tui")]
#[command(about = "Terminal client for the LocalMate to-do and study timer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the task list and timer against the configured backend
    Run,
    /// Log in and store the session locally
    Login,
    /// Create a new account and log it in
    Register,
    /// Remove the local session and any saved timer snapshot
    Logout,
    /// Print config path and create default file if missing
    ConfigPath,
}
