//! High score persistence
//!
//! A single best score, stored as a decimal string under one key of a
//! key-value store (LocalStorage in the browser). Storage trouble never
//! reaches the game: reads fall back to 0 and writes are best effort.

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

/// Failures from the key-value collaborator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("failed to read key `{0}`")]
    Read(String),
    #[error("failed to write key `{0}`")]
    Write(String),
}

/// Key-value string storage scoped to the browser/session
pub trait ScoreStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store used natively and in tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
    failing: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails, for exercising fallbacks
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    /// Seed a value directly
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.failing {
            return Err(StorageError::Read(key.to_string()));
        }
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.failing {
            return Err(StorageError::Write(key.to_string()));
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: ScoreStore + ?Sized> ScoreStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Browser LocalStorage (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(target_arch = "wasm32")]
impl ScoreStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| StorageError::Read(key.to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }
}

/// Best score across sessions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighScore {
    pub best: u64,
}

impl HighScore {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "snakeHighScore";

    /// Read the stored best score. Missing, corrupt or unreadable means 0.
    pub fn load(store: &impl ScoreStore) -> Self {
        let best = match store.get(Self::STORAGE_KEY) {
            Ok(Some(raw)) => match raw.trim().parse::<u64>() {
                Ok(best) => {
                    log::info!("Loaded high score {}", best);
                    best
                }
                Err(_) => {
                    log::warn!("Ignoring corrupt high score {:?}", raw);
                    0
                }
            },
            Ok(None) => {
                log::info!("No high score found, starting fresh");
                0
            }
            Err(e) => {
                log::warn!("High score unavailable: {}", e);
                0
            }
        };
        Self { best }
    }

    /// Record a finished run's score.
    ///
    /// Raises and saves the best score when `score` beats it. Returns whether
    /// a new record was set; a failed save still counts for this session.
    pub fn submit(&mut self, score: u64, store: &impl ScoreStore) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        match store.set(Self::STORAGE_KEY, &score.to_string()) {
            Ok(()) => log::info!("New high score saved: {}", score),
            Err(e) => log::warn!("Could not save high score {}: {}", score, e),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_is_zero() {
        let store = MemoryStore::new();
        assert_eq!(HighScore::load(&store).best, 0);
    }

    #[test]
    fn test_load_stored_value() {
        let store = MemoryStore::with_value(HighScore::STORAGE_KEY, "120");
        assert_eq!(HighScore::load(&store).best, 120);
    }

    #[test]
    fn test_load_corrupt_is_zero() {
        let store = MemoryStore::with_value(HighScore::STORAGE_KEY, "lots");
        assert_eq!(HighScore::load(&store).best, 0);
    }

    #[test]
    fn test_load_failure_is_zero() {
        assert_eq!(HighScore::load(&MemoryStore::failing()).best, 0);
    }

    #[test]
    fn test_submit_only_raises() {
        let store = MemoryStore::new();
        let mut high = HighScore { best: 50 };

        assert!(!high.submit(40, &store));
        assert!(!high.submit(50, &store));
        assert_eq!(store.get(HighScore::STORAGE_KEY), Ok(None));

        assert!(high.submit(60, &store));
        assert_eq!(high.best, 60);
        assert_eq!(
            store.get(HighScore::STORAGE_KEY),
            Ok(Some("60".to_string()))
        );
    }

    #[test]
    fn test_submit_survives_write_failure() {
        let store = MemoryStore::failing();
        let mut high = HighScore::default();
        assert!(high.submit(30, &store));
        assert_eq!(high.best, 30);
    }

    #[test]
    fn test_round_trip_through_store() {
        let store = MemoryStore::new();
        let mut high = HighScore::load(&store);
        high.submit(90, &store);
        assert_eq!(HighScore::load(&store), HighScore { best: 90 });
    }
}
