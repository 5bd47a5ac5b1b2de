//! Durable key/value storage for the studio records.
//! `SledStorage` is the on-disk vault; `MemoryStorage` keeps everything in-process.

use crate::error::StorageError;
use dashmap::DashMap;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

pub const DEFAULT_VAULT_PATH: &str = "./data/interiorswala_vault";

/// Whole-record key/value storage. Writes replace the previous value.
pub trait DurableStorage: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;
    fn write(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;
}

/// Sled-backed vault on the host filesystem.
pub struct SledStorage {
    db: sled::Db,
}

impl SledStorage {
    /// Open the vault at the given path, or at `./data/interiorswala_vault`.
    pub fn open(path: Option<impl AsRef<Path>>) -> Result<Self, StorageError> {
        let p = path
            .map(|x| x.as_ref().to_path_buf())
            .unwrap_or_else(|| Path::new(DEFAULT_VAULT_PATH).to_path_buf());
        let db = sled::open(p)?;
        Ok(Self { db })
    }
}

impl DurableStorage for SledStorage {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.db.get(key.as_bytes())?.map(|v| v.to_vec()))
    }

    fn write(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        self.db.insert(key.as_bytes(), value)?;
        self.db.flush()?;
        Ok(())
    }
}

/// In-process storage. Can be switched to reject writes (quota exceeded, storage disabled).
#[derive(Default)]
pub struct MemoryStorage {
    entries: DashMap<String, Vec<u8>>,
    reject_writes: AtomicBool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw record, bypassing the reject switch.
    pub fn with_record(self, key: &str, value: impl Into<Vec<u8>>) -> Self {
        self.entries.insert(key.to_string(), value.into());
        self
    }

    pub fn set_reject_writes(&self, reject: bool) {
        self.reject_writes.store(reject, Ordering::SeqCst);
    }

    /// Raw record as text, for inspection.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries
            .get(key)
            .map(|v| String::from_utf8_lossy(v.value()).into_owned())
    }
}

impl DurableStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    fn write(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        if self.reject_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Rejected(format!("quota exceeded for {}", key)));
        }
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
