//! CLI glue for secret-tunnel.
//!
//! All decision logic lives in [`crate::transform`] and [`crate::pipeline`];
//! this module only parses arguments, wires the optional Postgres allowlist
//! source, and writes the rendered document to stdout. Logs go to stderr so
//! stdout stays a clean output artifact.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use crate::config::RunConfig;
use crate::enabled::PostgresEnabledSource;
use crate::output::render;
use crate::pipeline::collect_secrets;

/// CLI for secret-tunnel: consolidate sensor credential documents.
#[derive(Parser)]
#[clap(
    name = "secret-tunnel",
    version,
    about = "Consolidate sensor credential YAML documents into one secrets document for provisioning"
)]
pub struct Cli {
    /// Single instead of double quotes for strings in the output document.
    #[clap(long)]
    pub single_quote: bool,

    /// Paths to the sensor YAML documents, in output order.
    pub files: Vec<PathBuf>,
}

/// Extracted async CLI logic entrypoint for integration tests and main()
pub async fn run(cli: Cli) -> Result<()> {
    let config = RunConfig::new(cli.single_quote);
    config.trace_loaded();

    let provider = config
        .postgres_url
        .as_deref()
        .map(PostgresEnabledSource::new);

    let output = match collect_secrets(provider.as_ref(), &cli.files).await {
        Ok(output) => output,
        Err(e) => {
            error!(error = %e, "Pipeline failed; no output produced");
            return Err(e.into());
        }
    };

    info!(secret_count = output.secrets.len(), "Pipeline complete");
    print!("{}", render(&output, config.quote_style));
    Ok(())
}
