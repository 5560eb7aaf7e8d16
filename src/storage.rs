use crate::model::Session;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

/// Almacén clave-valor persistente (localStorage en web, fichero en nativo).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Sobrescribe el snapshot completo bajo `key`.
pub fn save_snapshot(
    store: &mut dyn KeyValueStore,
    key: &str,
    snapshot: &Session,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(snapshot)?;
    store.set(key, &json)
}

/// Ausente, ilegible o inválido: `None`. Nunca falla.
pub fn load_snapshot(store: &dyn KeyValueStore, key: &str) -> Option<Session> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            log::warn!("could not read saved progress: {err}");
            return None;
        }
    };

    match serde_json::from_str::<Session>(&raw) {
        Ok(snapshot) if snapshot.is_valid() => Some(snapshot),
        Ok(_) => {
            log::warn!("saved progress is inconsistent, ignoring it");
            None
        }
        Err(err) => {
            log::warn!("saved progress is not valid JSON, ignoring it: {err}");
            None
        }
    }
}

pub fn clear_snapshot(store: &mut dyn KeyValueStore, key: &str) -> Result<(), StorageError> {
    store.remove(key)
}

/// En memoria; los clones comparten el mismo mapa.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Un fichero JSON `{clave: valor}` en disco.
#[cfg(not(target_arch = "wasm32"))]
pub struct FileStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<HashMap<String, String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn write_all(&self, entries: &HashMap<String, String>) -> Result<(), StorageError> {
        if entries.is_empty() {
            return match std::fs::remove_file(&self.path) {
                Err(err) if err.kind() != std::io::ErrorKind::NotFound => Err(err.into()),
                _ => Ok(()),
            };
        }
        let json = serde_json::to_string(entries)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        // Un fichero corrupto se reemplaza entero
        let mut entries = self.read_all().unwrap_or_default();
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.read_all().unwrap_or_default();
        entries.remove(key);
        self.write_all(&entries)
    }
}

/// `window.localStorage` del navegador.
#[cfg(target_arch = "wasm32")]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".into()))?
            .local_storage()
            .map_err(|err| StorageError::Unavailable(format!("{err:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".into()))
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|err| StorageError::Unavailable(format!("{err:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Unavailable(format!("{err:?}")))
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|err| StorageError::Unavailable(format!("{err:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_question;

    const KEY: &str = "quizProgress";

    fn session(index: usize) -> Session {
        Session {
            current_index: index,
            questions: (0..6).map(sample_question).collect(),
        }
    }

    #[test]
    fn save_then_load_gives_same_snapshot() {
        let mut store = MemoryStore::new();
        save_snapshot(&mut store, KEY, &session(3)).unwrap();
        assert_eq!(load_snapshot(&store, KEY), Some(session(3)));
    }

    #[test]
    fn absent_or_corrupt_data_is_no_snapshot() {
        let mut store = MemoryStore::new();
        assert_eq!(load_snapshot(&store, KEY), None);

        store.set(KEY, "{not json").unwrap();
        assert_eq!(load_snapshot(&store, KEY), None);

        store.set(KEY, r#"{"currentIndex": 9, "questions": []}"#).unwrap();
        assert_eq!(load_snapshot(&store, KEY), None);
    }

    #[test]
    fn clear_removes_the_key() {
        let mut store = MemoryStore::new();
        save_snapshot(&mut store, KEY, &session(1)).unwrap();
        clear_snapshot(&mut store, KEY).unwrap();
        assert_eq!(store.raw(KEY), None);
    }

    #[test]
    fn file_store_round_trips_and_removes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");
        let mut store = FileStore::new(&path);

        assert_eq!(load_snapshot(&store, KEY), None);
        save_snapshot(&mut store, KEY, &session(5)).unwrap();
        assert_eq!(load_snapshot(&store, KEY), Some(session(5)));

        clear_snapshot(&mut store, KEY).unwrap();
        assert!(!path.exists());
        assert_eq!(load_snapshot(&store, KEY), None);
    }

    #[test]
    fn file_store_survives_garbage_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");
        std::fs::write(&path, "garbage").unwrap();

        let mut store = FileStore::new(&path);
        assert_eq!(load_snapshot(&store, KEY), None);

        save_snapshot(&mut store, KEY, &session(0)).unwrap();
        assert_eq!(load_snapshot(&store, KEY), Some(session(0)));
    }
}
