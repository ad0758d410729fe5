use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use crate::domain::new_subscriber::SubscriberRecord;

/// Persists subscribers as a JSON array in a single backing file. The file is
/// read and rewritten in full on every append.
pub struct SubscriberStore {
    file_path: PathBuf,
    // Serializes the read-modify-rewrite cycle. Without it two overlapping
    // appends can read the same sequence and the later rewrite silently
    // drops the earlier record.
    write_guard: Mutex<()>,
}

impl SubscriberStore {
    pub fn new(file_path: impl Into<PathBuf>) -> SubscriberStore {
        Self {
            file_path: file_path.into(),
            write_guard: Mutex::new(()),
        }
    }

    /// Appends one validated record to the end of the persisted sequence and
    /// returns it back unchanged.
    pub fn append(&self, record: SubscriberRecord) -> Result<SubscriberRecord, StoreError> {
        let _guard = self
            .write_guard
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut records = self.read_records()?;
        records.push(serde_json::to_value(&record).map_err(StoreError::Encode)?);

        let content = serde_json::to_vec_pretty(&records).map_err(StoreError::Encode)?;
        fs::write(&self.file_path, content)?;

        Ok(record)
    }

    // A missing file is an empty sequence; anything else unreadable is an error.
    fn read_records(&self) -> Result<Vec<serde_json::Value>, StoreError> {
        match fs::read(&self.file_path) {
            Ok(content) => serde_json::from_slice(&content).map_err(StoreError::Malformed),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(error) => Err(StoreError::Io(error)),
        }
    }
}

#[derive(thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read or write the subscribers file.")]
    Io(#[from] std::io::Error),
    #[error("The subscribers file does not contain a valid record sequence.")]
    Malformed(#[source] serde_json::Error),
    #[error("Failed to encode a subscriber record.")]
    Encode(#[source] serde_json::Error),
}

impl std::fmt::Debug for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Caused by:\n\t({})", self)
    }
}
