//! Flat-file credential store
//!
//! Append-oriented store with linear scans. A missing file is treated as an
//! empty store and created on first write. Malformed lines are skipped by
//! read-time scans and removed by compaction.

use log::{error, info};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::store::record::CredentialRecord;

/// File-backed credential store.
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true iff a record with this username is present. O(n) scan.
    pub fn exists(&self, username: &str) -> Result<bool, StorageError> {
        Ok(self.lookup(username)?.is_some())
    }

    /// Returns the first record matching `username` in file order, so lookup
    /// stays deterministic even if the file somehow holds duplicates.
    pub fn lookup(&self, username: &str) -> Result<Option<CredentialRecord>, StorageError> {
        let records = self.read_records()?;
        Ok(records.into_iter().find(|r| r.username == username))
    }

    /// Appends one record.
    ///
    /// Precondition: the caller has already verified `exists(username)` is
    /// false. The store does not re-check uniqueness, to avoid a double scan.
    pub fn insert(&self, record: &CredentialRecord) -> Result<(), StorageError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                error!("Failed to open store {}: {}", self.path.display(), e);
                StorageError::from(e)
            })?;
        writeln!(file, "{}", record.to_line())?;
        info!("Stored credential record for {}", record.username);
        Ok(())
    }

    /// Rewrites the store keeping only well-formed records, dropping
    /// malformed lines left by partial writes or external corruption.
    /// Atomic with respect to crashes: writes a temporary file in the same
    /// directory and renames it over the store. Returns the kept count.
    pub fn compact(&self) -> Result<usize, StorageError> {
        let records = self.read_records()?;

        let temp_path = self.path.with_extension("tmp");
        {
            let mut file = fs::File::create(&temp_path)?;
            for record in &records {
                writeln!(file, "{}", record.to_line())?;
            }
        }
        fs::rename(&temp_path, &self.path)?;

        info!(
            "Compacted store {} - {} records kept",
            self.path.display(),
            records.len()
        );
        Ok(records.len())
    }

    /// Reads every well-formed record in file order. A missing file is an
    /// empty store.
    fn read_records(&self) -> Result<Vec<CredentialRecord>, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                error!("Failed to read store {}: {}", self.path.display(), e);
                return Err(StorageError::from(e));
            }
        };
        Ok(contents.lines().filter_map(CredentialRecord::parse).collect())
    }
}
