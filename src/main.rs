use anyhow::Result;
use clap::Parser;
use secret_tunnel::cli::{run, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment
    dotenv::dotenv().ok();

    // Initialize tracing for the CLI. Logs go to stderr; stdout carries the
    // rendered secrets document.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = run(cli).await;
    match &result {
        Ok(_) => tracing::info!("secret-tunnel completed successfully"),
        Err(e) => tracing::error!(error = %e, "secret-tunnel exited with error"),
    }
    result
}
