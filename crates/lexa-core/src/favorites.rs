use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// String-keyed persistent store
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Store lock poisoned")]
    Poisoned,
}

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Whole-file JSON object store, rewritten on every `set`
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl JsonFileStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let entries = if path.exists() {
            let data = fs::read_to_string(&path)?;
            if data.trim().is_empty() {
                HashMap::new()
            } else {
                serde_json::from_str(&data)?
            }
        } else {
            HashMap::new()
        };

        tracing::debug!("Opened store {} with {} keys", path.display(), entries.len());

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&*entries)?)?;
        Ok(())
    }
}

/// Insertion-ordered, deduplicated favorite words.
///
/// Loaded once from the store, written back on every mutation.
pub struct Favorites {
    store: Arc<dyn KeyValueStore>,
    words: Vec<String>,
}

impl Favorites {
    pub const KEY: &'static str = "favorites";

    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let words = match store.get(Self::KEY) {
            Ok(Some(raw)) => serde_json::from_str::<Vec<String>>(&raw).unwrap_or_else(|e| {
                tracing::warn!("Discarding unreadable favorites: {}", e);
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read favorites: {}", e);
                Vec::new()
            }
        };

        let mut favorites = Self {
            store,
            words: Vec::with_capacity(words.len()),
        };
        for word in words {
            if !favorites.words.contains(&word) {
                favorites.words.push(word);
            }
        }
        favorites
    }

    /// Returns false when the word was already present
    pub fn add(&mut self, word: &str) -> Result<bool, StoreError> {
        let word = word.trim();
        if word.is_empty() || self.contains(word) {
            return Ok(false);
        }

        self.words.push(word.to_string());
        self.save()?;
        Ok(true)
    }

    /// Returns false when the word was not present
    pub fn remove(&mut self, word: &str) -> Result<bool, StoreError> {
        let word = word.trim();
        let before = self.words.len();
        self.words.retain(|w| w != word);
        if self.words.len() == before {
            return Ok(false);
        }

        self.save()?;
        Ok(true)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    fn save(&self) -> Result<(), StoreError> {
        let serialized = serde_json::to_string(&self.words)?;
        self.store.set(Self::KEY, &serialized)
    }
}
