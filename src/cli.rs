use clap::{Parser, Subcommand};

/// Approvd — approval request tracking service
#[derive(Parser)]
#[command(name = "approvd", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to bind (overrides APPROVD_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
}
