//! File-backed persistent store.
//!
//! Stands in for the watch's persistent key-value storage. The whole store is
//! rewritten after every write as a `postcard`-encoded list of entries, which
//! is plenty for the handful of keys a watchface uses.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use uncertainty_common::{PersistentStore, StorageError};

/// Value stored under a key.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum StoredValue {
    Int(i32),
    Bool(bool),
}

/// Key-value store persisted to a single file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<u32, StoredValue>,
}

impl FileStore {
    /// Open the store at `path`.
    ///
    /// A missing file yields an empty store. So does an unreadable or corrupt
    /// one, after logging the reason, matching a watch whose storage was wiped.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match load_entries(&path) {
            Ok(Some(entries)) => {
                info!("loaded {} entries from {}", entries.len(), path.display());
                entries
            }
            Ok(None) => {
                info!("no store at {}, starting empty", path.display());
                BTreeMap::new()
            }
            Err(e) => {
                warn!("discarding store: {e:#}");
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    pub fn path(&self) -> &Path { &self.path }

    fn save(&self) -> Result<()> {
        let entries: Vec<(u32, StoredValue)> = self.entries.iter().map(|(&k, &v)| (k, v)).collect();
        let bytes = postcard::to_allocvec(&entries).context("encoding store")?;
        fs::write(&self.path, bytes).with_context(|| format!("writing {}", self.path.display()))
    }

    fn write_value(
        &mut self,
        key: u32,
        value: StoredValue,
    ) -> Result<(), StorageError> {
        let previous = self.entries.insert(key, value);
        self.save().map_err(|e| {
            warn!("{e:#}");
            // Reads must only see what reached the file
            match previous {
                Some(old) => self.entries.insert(key, old),
                None => self.entries.remove(&key),
            };
            StorageError::Io
        })
    }
}

fn load_entries(path: &Path) -> Result<Option<BTreeMap<u32, StoredValue>>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).with_context(|| format!("reading {}", path.display())),
    };
    let entries: Vec<(u32, StoredValue)> =
        postcard::from_bytes(&bytes).with_context(|| format!("decoding {}", path.display()))?;
    Ok(Some(entries.into_iter().collect()))
}

impl PersistentStore for FileStore {
    fn exists(
        &self,
        key: u32,
    ) -> bool {
        self.entries.contains_key(&key)
    }

    fn read_int(
        &self,
        key: u32,
    ) -> Option<i32> {
        match self.entries.get(&key) {
            Some(StoredValue::Int(v)) => Some(*v),
            _ => None,
        }
    }

    fn write_int(
        &mut self,
        key: u32,
        value: i32,
    ) -> Result<(), StorageError> {
        self.write_value(key, StoredValue::Int(value))
    }

    fn read_bool(
        &self,
        key: u32,
    ) -> Option<bool> {
        match self.entries.get(&key) {
            Some(StoredValue::Bool(v)) => Some(*v),
            _ => None,
        }
    }

    fn write_bool(
        &mut self,
        key: u32,
        value: bool,
    ) -> Result<(), StorageError> {
        self.write_value(key, StoredValue::Bool(value))
    }
}
