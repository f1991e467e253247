//! Artifact writer - persists generated units for the CLI host
//!
//! Layout:
//! - `<output_dir>/<namespace_snake>/<class_snake><suffix>.rs`
//!
//! Every pass overwrites earlier output for the same class; nothing else in the directory is touched.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use persistgen_core::strings::to_snake_case;
use thiserror::Error;

use super::ir::{ClassIdentity, GeneratedUnit};

/// Errors raised while writing generated units.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("output directory '{0}' must not contain '..'")]
    ParentDirectory(PathBuf),

    #[error("cannot write '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Writes generated units below an output directory.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    output_dir: PathBuf,
    file_suffix: String,
}

impl ArtifactWriter {
    /// Create a writer for `output_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError::ParentDirectory`] when the path contains a `..` component.
    pub fn new(output_dir: impl AsRef<Path>, file_suffix: impl Into<String>) -> Result<Self, OutputError> {
        let output_dir = output_dir.as_ref();
        if output_dir.components().any(|c| matches!(c, Component::ParentDir)) {
            return Err(OutputError::ParentDirectory(output_dir.to_path_buf()));
        }
        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            file_suffix: file_suffix.into(),
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path a unit for `identity` is written to.
    pub fn path_for(&self, identity: &ClassIdentity) -> PathBuf {
        let namespace: PathBuf = identity
            .namespace
            .split("::")
            .filter(|s| !s.is_empty())
            .map(to_snake_case)
            .collect();
        self.output_dir.join(namespace).join(format!(
            "{}{}.rs",
            to_snake_case(&identity.class_name),
            self.file_suffix
        ))
    }

    /// Write one unit, creating parent directories as needed.
    pub fn write_unit(&self, unit: &GeneratedUnit) -> Result<PathBuf, OutputError> {
        let path = self.path_for(&unit.identity);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| OutputError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, &unit.text).map_err(|source| OutputError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "unit written");
        Ok(path)
    }

    /// Write every unit; stops at the first I/O error.
    pub fn write_all(&self, units: &[GeneratedUnit]) -> Result<Vec<PathBuf>, OutputError> {
        units.iter().map(|u| self.write_unit(u)).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn unit(namespace: &str, class: &str, text: &str) -> GeneratedUnit {
        GeneratedUnit {
            identity: ClassIdentity::new(namespace, class),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_rejects_parent_directory() {
        assert!(matches!(
            ArtifactWriter::new("out/../elsewhere", "_managed_entity"),
            Err(OutputError::ParentDirectory(_))
        ));
    }

    #[test]
    fn test_path_layout() {
        let writer = ArtifactWriter::new("generated", "_managed_entity").unwrap();
        let path = writer.path_for(&ClassIdentity::new("Billing::Accounts", "ManagedEntity"));
        assert_eq!(
            path,
            Path::new("generated/billing/accounts/managed_entity_managed_entity.rs")
        );
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ArtifactWriter::new(dir.path(), "_managed_entity").unwrap();

        let path = writer.write_unit(&unit("demo", "Entity", "first")).unwrap();
        writer.write_unit(&unit("demo", "Entity", "second")).unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "second");
    }
}
