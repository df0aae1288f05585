use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(version, about = "Inspect and exercise the shared service client")]
pub struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate SERVICE_URL / SERVICE_API_KEY and show the resulting client
    Check {
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Send an authenticated GET to the service and print the status
    Ping {
        /// Endpoint path relative to SERVICE_URL
        #[arg(default_value = "")]
        path: String,
    },
}
