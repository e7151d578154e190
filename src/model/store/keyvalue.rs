use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// The opaque storage substrate: a synchronous, text-valued store addressed
/// by string keys.
///
/// This is the full extent of what the crate assumes about persistence.
/// There are no transactions and no compare-and-swap; concurrent writers
/// sharing a store can silently overwrite each other, and the collection
/// layer above accepts that.
pub trait KeyValueStore {
    /// Read the text stored under `key`, if any.
    fn get(&self, key: &str) -> io::Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous text.
    fn set(&self, key: &str, value: &str) -> io::Result<()>;
}

/// An in-process store. State dies with the value; this is the substrate
/// for unit tests and throwaway demos.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// A directory-backed store: one file per key, whose content is the stored
/// text. State written here is still present the next time a store opens
/// the same directory, which is what lets booth data survive restarts.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl AsRef<Path>) -> io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.entry_path(key)) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        fs::write(self.entry_path(key), value)
    }
}
