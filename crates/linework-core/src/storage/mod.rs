//! Persistence for curve collections.

mod schema;

use crate::shapes::Curve;
use schema::CurveRecord;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The persisted text is malformed: unknown discriminator, missing
    /// field, or non-finite numeric value.
    #[error("Format error: {0}")]
    Format(String),
    /// File access failed.
    #[error("IO error: {0}")]
    Io(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Serialize curves to the persisted JSON form.
///
/// Each record carries a stable variant discriminator; presentation
/// attributes are not persisted.
pub fn curves_to_json(curves: &[Curve]) -> StorageResult<String> {
    let records: Vec<CurveRecord> = curves.iter().map(CurveRecord::from).collect();
    serde_json::to_string_pretty(&records).map_err(|e| StorageError::Format(e.to_string()))
}

/// Reconstruct curves from the persisted JSON form.
///
/// All-or-nothing: a malformed record anywhere fails the whole call and
/// produces no curves.
pub fn curves_from_json(json: &str) -> StorageResult<Vec<Curve>> {
    let records: Vec<CurveRecord> =
        serde_json::from_str(json).map_err(|e| StorageError::Format(e.to_string()))?;
    records.into_iter().map(Curve::try_from).collect()
}

/// Write curves to a file.
pub fn save_curves(path: impl AsRef<Path>, curves: &[Curve]) -> StorageResult<()> {
    let path = path.as_ref();
    let json = curves_to_json(curves)?;
    fs::write(path, json)
        .map_err(|e| StorageError::Io(format!("Failed to write {}: {}", path.display(), e)))?;
    log::info!("saved {} curves to {}", curves.len(), path.display());
    Ok(())
}

/// Read curves from a file.
pub fn load_curves(path: impl AsRef<Path>) -> StorageResult<Vec<Curve>> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .map_err(|e| StorageError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
    let curves = curves_from_json(&json)?;
    log::info!("loaded {} curves from {}", curves.len(), path.display());
    Ok(curves)
}

/// Platform default directory for saved drawings.
///
/// On Unix this resolves under the local data directory, falling back to
/// the home directory.
pub fn default_document_dir() -> StorageResult<PathBuf> {
    let base = dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| StorageError::Io("Could not determine home directory".to_string()))?;
    Ok(base.join("linework").join("drawings"))
}
