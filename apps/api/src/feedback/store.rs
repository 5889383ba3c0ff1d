//! File-backed feedback store: one JSON array, rewritten atomically per append.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;
use tempfile::NamedTempFile;
use tokio::sync::Mutex;
use tracing::debug;

use crate::feedback::models::StoredFeedback;
use crate::feedback::FeedbackError;

pub struct FeedbackStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process. The owned
    /// guard travels into the blocking task, so a dropped caller cannot
    /// release it before the file is written.
    write_lock: Arc<Mutex<()>>,
}

impl FeedbackStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one record and returns the number of records now stored.
    pub async fn append(&self, record: &StoredFeedback) -> Result<usize, FeedbackError> {
        let value = serde_json::to_value(record)?;
        let guard = Arc::clone(&self.write_lock).lock_owned().await;

        let path = self.path.clone();
        tokio::task::spawn_blocking(move || -> Result<usize, FeedbackError> {
            let _guard = guard;
            let mut records = read_records(&path)?;
            records.push(value);
            write_records(&path, &records)?;
            Ok(records.len())
        })
        .await?
    }

    /// Every stored record, oldest first.
    pub async fn load_all(&self) -> Result<Vec<Value>, FeedbackError> {
        let guard = Arc::clone(&self.write_lock).lock_owned().await;
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || {
            let _guard = guard;
            read_records(&path)
        })
        .await?
    }
}

/// Missing or blank file reads as an empty store.
fn read_records(path: &Path) -> Result<Vec<Value>, FeedbackError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    match serde_json::from_str::<Value>(&content) {
        Ok(Value::Array(records)) => Ok(records),
        Ok(_) => Err(FeedbackError::Corrupt {
            path: path.to_path_buf(),
            reason: "top-level value is not an array".to_string(),
        }),
        Err(e) => Err(FeedbackError::Corrupt {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }),
    }
}

fn write_records(path: &Path, records: &[Value]) -> Result<(), FeedbackError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    // Same directory so the final rename never crosses filesystems.
    let mut tmp = NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(&mut tmp, records)?;
    tmp.write_all(b"\n")?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)?;

    debug!("Wrote {} feedback records to {}", records.len(), path.display());
    Ok(())
}
