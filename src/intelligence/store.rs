//! Append-only storage of recorded telemetry vectors.
//!
//! The full ride history lives in one flat JSON file, field-tagged so later
//! field additions stay backward-compatible. The file is loaded once at
//! startup and rewritten in full on every successful save.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::vector::TelemetryVector;

/// Errors from vector history persistence.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}

/// Append-only collection of recorded vectors, one per completed ride.
///
/// Vectors are never mutated or deleted; the store only grows.
#[derive(Debug)]
pub struct VectorStore {
    path: PathBuf,
    vectors: Vec<TelemetryVector>,
}

impl VectorStore {
    /// Create an empty store that will persist to `path`.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            vectors: Vec::new(),
        }
    }

    /// Load the vector history from `path`.
    ///
    /// A missing file is a fresh install and yields an empty store. An
    /// unreadable or unparsable file is an error so the caller can decide to
    /// start over with empty history.
    pub fn load(path: PathBuf) -> Result<Self, StoreError> {
        if !path.exists() {
            return Ok(Self::new(path));
        }

        let content =
            std::fs::read_to_string(&path).map_err(|e| StoreError::IoError(e.to_string()))?;
        let vectors: Vec<TelemetryVector> =
            serde_json::from_str(&content).map_err(|e| StoreError::ParseError(e.to_string()))?;

        Ok(Self { path, vectors })
    }

    /// Append a recorded vector. Never rejects a well-formed vector.
    pub fn append(&mut self, vector: TelemetryVector) {
        self.vectors.push(vector);
    }

    /// Read-only snapshot of the full history, in ingestion order.
    pub fn all(&self) -> &[TelemetryVector] {
        &self.vectors
    }

    /// Number of recorded vectors.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Whether the store holds no history.
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Rewrite the full history to disk.
    ///
    /// Failure leaves the in-memory state untouched: an appended vector is
    /// never rolled back, so a crash can lose data but never duplicate it.
    pub fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::IoError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(&self.vectors)
            .map_err(|e| StoreError::SerializeError(e.to_string()))?;

        std::fs::write(&self.path, content).map_err(|e| StoreError::IoError(e.to_string()))
    }

    /// Path of the backing history file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
