use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Could not write report to [{path}]: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error
    }
}
