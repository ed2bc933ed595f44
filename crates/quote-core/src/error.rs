//! Errors raised while loading gazetteer and fleet snapshots.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate city name '{0}'")]
    DuplicateCity(String),
    #[error("duplicate aircraft id '{0}'")]
    DuplicateAircraft(String),
}

pub(crate) fn read_file(path: &std::path::Path) -> Result<String, CatalogError> {
    std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}
