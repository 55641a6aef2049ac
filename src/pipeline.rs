//! Sequential pipeline driver: enabled-set lookup, then per-file transform.
//!
//! - The enabled set (if a source is wired) is fetched fully before any
//!   document is touched.
//! - Documents are processed one at a time, in input order; included records
//!   are appended to the output collection in that order.
//! - Fail-fast: any read, decode or encode failure aborts the run and discards
//!   everything accumulated so far. There is no partial output.
//!
//! Callable from both the CLI and integration tests; tests inject a
//! `MockEnabledSource` in place of the Postgres-backed one.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::enabled::{EnabledSet, EnabledSource};
use crate::error::PipelineError;
use crate::output::Output;
use crate::transform::{transform, FIELD_ALLOWLIST};

/// Runs the whole pipeline over `paths`, returning the aggregated output.
pub async fn collect_secrets<S>(
    provider: Option<&S>,
    paths: &[PathBuf],
) -> Result<Output, PipelineError>
where
    S: EnabledSource,
{
    let enabled: Option<EnabledSet> = match provider {
        Some(source) => {
            let set = source.fetch_enabled().await?;
            info!(enabled_count = set.len(), "Enabled-sensor set ready");
            Some(set)
        }
        None => {
            info!("No enabled-sensor store wired; treating every sensor as enabled");
            None
        }
    };

    let mut output = Output::default();

    for path in paths {
        debug!(file = %path.display(), "Processing sensor document");

        let text = fs::read_to_string(path).map_err(|source| PipelineError::Io {
            path: path.clone(),
            source,
        })?;

        let doc: serde_yaml::Value =
            serde_yaml::from_str(&text).map_err(|source| PipelineError::Decode {
                path: path.clone(),
                source,
            })?;

        match transform(&doc, FIELD_ALLOWLIST, enabled.as_ref())? {
            Some(record) => {
                info!(file = %path.display(), name = %record.name, "Sensor included");
                output.push(record);
            }
            None => {
                info!(file = %path.display(), "Sensor skipped");
            }
        }
    }

    Ok(output)
}
