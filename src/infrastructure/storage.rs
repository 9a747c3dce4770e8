#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;

use std::collections::HashMap;
use std::fs;
use std::path;
use std::sync::Arc;
use std::sync::Mutex;

use anyhow::Result;

pub type StorageBox = Arc<dyn Storage + Send + Sync>;

/// Scalar key/value persistence, the moral equivalent of the browser's
/// local storage. Last writer wins, no expiry, no locking across
/// processes.
pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

pub struct FileStorage {
    pub file_path: path::PathBuf,
}

impl Default for FileStorage {
    fn default() -> FileStorage {
        let file_path = dirs::cache_dir().unwrap().join("gearchat/storage.json");

        return FileStorage::new(file_path);
    }
}

impl FileStorage {
    pub fn new(file_path: path::PathBuf) -> FileStorage {
        return FileStorage { file_path };
    }

    fn read_all(&self) -> HashMap<String, String> {
        if !self.file_path.exists() {
            return HashMap::new();
        }

        let payload = fs::read_to_string(&self.file_path).unwrap_or_default();
        return serde_json::from_str(&payload).unwrap_or_default();
    }

    fn write_all(&self, entries: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.file_path, serde_json::to_string(entries)?)?;
        return Ok(());
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        return self.read_all().get(key).cloned();
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_all();
        entries.insert(key.to_string(), value.to_string());
        return self.write_all(&entries);
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.read_all();
        entries.remove(key);
        return self.write_all(&entries);
    }
}

#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> MemoryStorage {
        return MemoryStorage::default();
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        return self.entries.lock().unwrap().get(key).cloned();
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        return Ok(());
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().unwrap().remove(key);
        return Ok(());
    }
}
