//! `session-gate` binary: loads configuration and runs the selected command.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use session_gate::{
    cli::{Cli, Commands},
    commands,
    config::Config,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match Config::from_env() {
        Ok(config) => {
            tracing::debug!(?config, "Configuration loaded");
            match cli.command {
                Commands::Serve(args) => commands::serve::execute(args, config).await,
            }
        }
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "session-gate exited with an error");
        std::process::exit(1);
    }
}

/// `--verbose` forces debug output, otherwise `RUST_LOG` (default `info`) applies.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
