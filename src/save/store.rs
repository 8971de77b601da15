//! Key-value blob storage the save manager writes through.

use super::error::StoreError;
use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Opaque persistent key-value storage.
///
/// A `set` only has to be visible to a later `get` in the same process; no
/// durability beyond that is assumed.
pub trait BlobStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;
    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-process store, for tests and embedding hosts that persist elsewhere.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// One file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    /// Uses `dir`, creating it if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Uses the platform data directory for the game
    /// (e.g. `~/.local/share/galactic-explorer` on Linux).
    pub fn platform_default() -> Result<Self, StoreError> {
        let project_dirs =
            ProjectDirs::from("", "", "galactic-explorer").ok_or(StoreError::NoDataDir)?;
        Self::new(project_dirs.data_dir())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Creates a store in a unique temporary directory
    #[cfg(test)]
    pub(crate) fn new_for_test() -> Result<Self, StoreError> {
        use std::sync::atomic::{AtomicU64, Ordering};
        static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

        let test_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let temp_dir = std::env::temp_dir().join(format!(
            "galactic-explorer-test-{}-{}",
            std::process::id(),
            test_id
        ));
        Self::new(temp_dir)
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        // Temp file plus rename keeps the previous save intact on a failed write.
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_get_set_remove() {
        let mut store = MemoryBlobStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", b"hello").unwrap();
        assert_eq!(store.get("k").unwrap(), Some(b"hello".to_vec()));
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_file_store_round_trip() {
        let mut store = FileBlobStore::new_for_test().expect("Failed to create store");
        assert_eq!(store.get("save").unwrap(), None);

        store.set("save", b"{\"currency\": 1}").unwrap();
        assert_eq!(store.get("save").unwrap(), Some(b"{\"currency\": 1}".to_vec()));

        store.set("save", b"{}").unwrap();
        assert_eq!(store.get("save").unwrap(), Some(b"{}".to_vec()));

        store.remove("save").unwrap();
        assert_eq!(store.get("save").unwrap(), None);
        let _ = fs::remove_dir_all(store.dir());
    }

    #[test]
    fn test_file_store_remove_missing_is_ok() {
        let mut store = FileBlobStore::new_for_test().expect("Failed to create store");
        assert!(store.remove("never-written").is_ok());
        let _ = fs::remove_dir_all(store.dir());
    }
}
