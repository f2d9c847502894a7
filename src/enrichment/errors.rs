use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Catalog responded with status {0}")]
    Status(u16),
    #[error("Catalog payload is malformed: {0}")]
    Json(#[from] serde_json::Error)
}

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("Could not write [{path}]: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error
    },
    #[error("Could not serialize enriched record: {0}")]
    Csv(#[from] csv::Error)
}
