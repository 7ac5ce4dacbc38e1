//! Storage backends
//!
//! A backend is a flat string-keyed map of whole-value payloads. Each write
//! replaces one key's full payload; there is no partial update and no
//! cross-key atomicity. That mirrors the contract of the medium the store was
//! designed for, and keeps both implementations trivially correct.
//!
//! ## Implementations
//!
//! - [`MemoryBackend`]: `RwLock<HashMap>`; ephemeral, for tests and demos
//! - [`FileBackend`]: one `<key>.json` file per collection in a directory;
//!   writes go through a temp file + rename so a crashed write never leaves
//!   a half-written collection behind

use gridkit_core::{Error, Result};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Seam between [`EntityStore`](crate::EntityStore) and the byte medium
///
/// Implementations must be safe to share across threads; the store itself
/// performs unsynchronized read-modify-write cycles, so last write wins when
/// two stores race on one key.
pub trait StorageBackend: Send + Sync {
    /// Read the payload stored under `key`, or `None` if the key was never
    /// written
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the full payload stored under `key`
    fn write(&self, key: &str, payload: &str) -> Result<()>;

    /// Remove `key` entirely; absent keys are a no-op
    fn delete(&self, key: &str) -> Result<()>;

    /// All keys currently present, in unspecified order
    fn keys(&self) -> Result<Vec<String>>;
}

// ============================================================================
// MemoryBackend
// ============================================================================

/// In-memory backend
///
/// Ephemeral; contents vanish on drop. The default choice for tests.
#[derive(Default)]
pub struct MemoryBackend {
    slots: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.read().get(key).cloned())
    }

    fn write(&self, key: &str, payload: &str) -> Result<()> {
        self.slots
            .write()
            .insert(key.to_string(), payload.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.slots.write().remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.slots.read().keys().cloned().collect())
    }
}

// ============================================================================
// FileBackend
// ============================================================================

/// Directory-backed backend, one JSON file per collection key
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Open a backend rooted at `dir`, creating the directory if needed
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(FileBackend { dir })
    }

    /// Root directory holding the collection files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

/// Reject keys that could escape the backend directory
///
/// Collection keys are identifiers like `journal_entries`, not paths.
fn validate_key(key: &str) -> Result<()> {
    if key.is_empty()
        || !key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(Error::InvalidKey(key.to_string()));
    }
    Ok(())
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, payload: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        {
            let mut f = fs::File::create(&tmp)?;
            f.write_all(payload.as_bytes())?;
            f.sync_all()?;
        }
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn keys(&self) -> Result<Vec<String>> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if let Some(stem) = name.strip_suffix(".json") {
                if validate_key(stem).is_ok() {
                    keys.push(stem.to_string());
                }
            }
        }
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_roundtrip() {
        let b = MemoryBackend::new();
        assert_eq!(b.read("k").unwrap(), None);
        b.write("k", "[1,2]").unwrap();
        assert_eq!(b.read("k").unwrap().as_deref(), Some("[1,2]"));
        b.delete("k").unwrap();
        assert_eq!(b.read("k").unwrap(), None);
    }

    #[test]
    fn test_memory_delete_absent_is_noop() {
        let b = MemoryBackend::new();
        b.delete("never-written").unwrap();
    }

    #[test]
    fn test_memory_keys() {
        let b = MemoryBackend::new();
        b.write("a", "[]").unwrap();
        b.write("b", "[]").unwrap();
        let mut keys = b.keys().unwrap();
        keys.sort();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_key_validation() {
        assert!(validate_key("journal_entries").is_ok());
        assert!(validate_key("po-2024").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../escape").is_err());
        assert!(validate_key("with space").is_err());
    }
}
