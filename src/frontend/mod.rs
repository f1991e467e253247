//! persistgen frontend
//!
//! Everything a host needs before the core runs:
//! - `model`: the raw host model (classes, fields, annotation arguments)
//! - `diagnostics`: the warning/error record returned from every pass
//!
//! Plus the JSON model loader used by the CLI host.

pub mod diagnostics;
pub mod model;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use model::RawModel;

/// Errors raised while loading a model file.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("cannot read model file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid model in '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse a model from JSON text. `origin` only labels errors.
pub fn parse_model(source: &str, origin: &Path) -> Result<RawModel, ModelError> {
    serde_json::from_str(source).map_err(|source| ModelError::Json {
        path: origin.to_path_buf(),
        source,
    })
}

/// Read and parse a model file.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_model(path: &Path) -> Result<RawModel, ModelError> {
    let source = fs::read_to_string(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let model = parse_model(&source, path)?;
    tracing::debug!(classes = model.classes.len(), "model loaded");
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_model_reports_origin() {
        let err = parse_model("{ \"classes\": 3 }", Path::new("broken.json")).unwrap_err();
        assert!(matches!(err, ModelError::Json { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_model(Path::new("definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ModelError::Io { .. }));
    }
}
