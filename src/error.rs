use std::path::PathBuf;

use thiserror::Error;

/**
 * Every failure mode of a reconciliation run. All of these are fatal:
 * the run aborts before the output file is written, so a failed run
 * never leaves a partial recon.out behind.
 */
#[derive(Debug, Error)]
pub enum ReconError {
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("unsupported action {0:?}")]
    UnsupportedAction(String),

    #[error("not a number: {token:?}")]
    NumericParse { token: String },
}
