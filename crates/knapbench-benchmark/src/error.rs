//! Error types for the comparison driver.

use std::path::PathBuf;

use knapbench_config::ConfigError;
use thiserror::Error;

/// Errors raised while running sweeps or writing output files.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// An output file or directory could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The harness configuration cannot drive the requested run.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl HarnessError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        HarnessError::Io {
            path: path.into(),
            source,
        }
    }
}
