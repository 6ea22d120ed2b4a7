use crate::compliance::domain::InstanceRecord;
use crate::shared::error::ComplianceError;
use crate::shared::security::{read_regular_file, validate_not_symlink};
use crate::shared::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// CatalogSnapshotFile adapter for the on-disk JSON form of the catalog
///
/// The file holds a JSON array of records. Writes go to a temporary file in
/// the same directory which is then renamed over the target, so readers never
/// see a half-written snapshot.
#[derive(Debug, Clone)]
pub struct CatalogSnapshotFile {
    path: PathBuf,
}

impl CatalogSnapshotFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the snapshot; a missing file is an empty catalog
    pub fn read(&self) -> Result<Vec<InstanceRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = read_regular_file(&self.path, "catalog snapshot")
            .map_err(|e| self.persistence_error(e.to_string()))?;

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            self.persistence_error(format!("Snapshot is not a valid record list: {}", e))
        })
    }

    /// Replaces the snapshot with `records`
    pub fn write(&self, records: &[InstanceRecord]) -> Result<()> {
        let parent = match self.path.parent() {
            Some(p) if p != Path::new("") => p.to_path_buf(),
            _ => PathBuf::from("."),
        };

        fs::create_dir_all(&parent).map_err(|e| {
            self.persistence_error(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;

        if self.path.exists() {
            validate_not_symlink(&self.path, "write")
                .map_err(|e| self.persistence_error(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(records)?;

        let mut temp = NamedTempFile::new_in(&parent)
            .map_err(|e| self.persistence_error(format!("Failed to create temp file: {}", e)))?;
        temp.write_all(json.as_bytes())
            .and_then(|_| temp.write_all(b"\n"))
            .map_err(|e| self.persistence_error(e.to_string()))?;
        temp.persist(&self.path)
            .map_err(|e| self.persistence_error(e.error.to_string()))?;

        Ok(())
    }

    fn persistence_error(&self, details: String) -> anyhow::Error {
        ComplianceError::CatalogPersistence {
            path: self.path.clone(),
            details,
        }
        .into()
    }
}
