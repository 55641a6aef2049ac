use std::path::PathBuf;

use thiserror::Error;

/// Fatal pipeline errors. Every variant aborts the whole run: the tool never
/// emits a partial secrets document. A failed run is re-run after fixing the
/// input; there is no retry or partial-success path.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The enabled-sensor lookup against the external store failed.
    #[error("cannot fetch enabled sensors")]
    Lookup(#[source] sqlx::Error),

    /// An input file could not be opened or read.
    #[error("cannot read sensor file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An input file is not valid YAML.
    #[error("cannot decode sensor file {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The projected fields could not be serialized into the kvpairs blob.
    #[error("cannot encode kvpairs")]
    Encode(#[source] serde_json::Error),
}
