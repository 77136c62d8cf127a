// Durable key-value storage for the session pair.
//
// The web dashboard kept these two entries in browser localStorage; the CLI
// keeps them in a JSON file under the user's config directory, written whole
// on every mutation. The trait exists so tests and embedders can supply an
// in-memory store.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// Storage key for the raw bearer token.
pub const TOKEN_KEY: &str = "token";

/// Storage key for the serialized `CurrentUser` snapshot.
pub const CURRENT_USER_KEY: &str = "currentUser";

/// Infallible string key-value storage. IO failures are logged and degrade to
/// "key absent" rather than propagating; a broken session file reads as a
/// logged-out session.
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

pub fn storage_dir() -> anyhow::Result<PathBuf> {
    let dir = if let Ok(custom) = std::env::var("OPSDECK_CONFIG_DIR") {
        PathBuf::from(custom)
    } else {
        let home = std::env::var("HOME")
            .map_err(|_| anyhow::anyhow!("HOME environment variable not set"))?;
        PathBuf::from(home).join(".config").join("opsdeck")
    };

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

/// File-backed storage at `<config dir>/session.json`.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn open_default() -> anyhow::Result<Self> {
        Ok(Self::new(storage_dir()?.join("session.json")))
    }

    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn load(&self) -> HashMap<String, String> {
        if !self.path.exists() {
            return HashMap::new();
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read session file");
                return HashMap::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "session file is not valid json");
                HashMap::new()
            }
        }
    }

    fn save(&self, entries: &HashMap<String, String>) {
        let content = match serde_json::to_string_pretty(entries) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize session entries");
                return;
            }
        };

        if let Err(e) = fs::write(&self.path, content) {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to write session file");
        }
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.load().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.load();
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.load();
        if entries.remove(key).is_some() {
            self.save(&entries);
        }
    }
}

/// In-memory storage for tests and embedders without a filesystem.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: &[(&str, &str)]) -> Self {
        let storage = Self::new();
        for (key, value) in entries {
            storage.set(key, value);
        }
        storage
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trips() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get(TOKEN_KEY), None);
        storage.set(TOKEN_KEY, "abc");
        assert_eq!(storage.get(TOKEN_KEY), Some("abc".to_string()));
        storage.remove(TOKEN_KEY);
        assert_eq!(storage.get(TOKEN_KEY), None);
    }

    #[test]
    fn file_storage_survives_missing_file() {
        let storage = FileStorage::new(PathBuf::from("/nonexistent/opsdeck/session.json"));
        assert_eq!(storage.get(TOKEN_KEY), None);
    }
}
