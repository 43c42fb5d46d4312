//! Durable key-value persistence for the tracker state.
//!
//! Two independent entries under fixed keys: the serialized operation log and
//! the accumulator value as decimal text. Each key maps to one file inside the
//! store directory; writes go through a temp file and rename so a key is never
//! left half-written.

use crate::error::{Result, TrackerError};
use crate::records::OperationLog;
use crate::types::OperationRecord;
use fs2::FileExt;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Key for the serialized operation log (JSON array, newest first).
pub const OPERATIONS_KEY: &str = "numtracker-operations";

/// Key for the accumulator value (decimal text).
pub const CURRENT_KEY: &str = "numtracker-current";

/// Directory-backed local store.
///
/// Holds an exclusive lock on the directory for its lifetime, so two
/// processes cannot mutate the same store at once.
pub struct LocalStore {
    path: PathBuf,
    _lock_file: File,
}

impl LocalStore {
    /// Open a store directory, creating it if missing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        fs::create_dir_all(&path)?;

        let lock_file = Self::acquire_lock(&path)?;

        Ok(Self {
            path,
            _lock_file: lock_file,
        })
    }

    /// Load the persisted accumulator value and log.
    ///
    /// Absent, malformed, or unparseable entries fall back to defaults
    /// (`0.0`, empty log). Startup-time best-effort recovery: nothing is
    /// surfaced to the caller.
    pub fn load(&self) -> (f64, OperationLog) {
        let current = match self.read_key(CURRENT_KEY) {
            Some(text) => match text.trim().parse::<f64>() {
                Ok(value) => value,
                Err(_) => {
                    warn!(key = CURRENT_KEY, "malformed accumulator entry, using 0");
                    0.0
                }
            },
            None => 0.0,
        };

        let log = match self.read_key(OPERATIONS_KEY) {
            Some(text) => match serde_json::from_str::<Vec<OperationRecord>>(&text) {
                Ok(records) => OperationLog::from_records(records),
                Err(e) => {
                    warn!(key = OPERATIONS_KEY, error = %e, "malformed log entry, starting empty");
                    OperationLog::new()
                }
            },
            None => OperationLog::new(),
        };

        (current, log)
    }

    /// Serialize and write both entries, overwriting prior contents.
    pub fn save(&self, current: f64, log: &OperationLog) -> Result<()> {
        let records: Vec<&OperationRecord> = log.iter().collect();
        let serialized = serde_json::to_string(&records)?;

        self.write_key(OPERATIONS_KEY, serialized.as_bytes())?;
        self.write_key(CURRENT_KEY, current.to_string().as_bytes())?;

        Ok(())
    }

    /// Read one entry, or None if absent/unreadable.
    fn read_key(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path.join(key)).ok()
    }

    /// Write one entry atomically (temp file, sync, rename).
    fn write_key(&self, key: &str, contents: &[u8]) -> Result<()> {
        let final_path = self.path.join(key);
        let tmp_path = self.path.join(format!("{key}.tmp"));

        let mut file = File::create(&tmp_path)?;
        file.write_all(contents)?;
        file.sync_all()?;
        fs::rename(&tmp_path, &final_path)?;

        Ok(())
    }

    fn acquire_lock(path: &Path) -> Result<File> {
        let lock_path = path.join("LOCK");
        let lock_file = File::create(lock_path)?;

        lock_file
            .try_lock_exclusive()
            .map_err(|_| TrackerError::Locked)?;

        Ok(lock_file)
    }
}
