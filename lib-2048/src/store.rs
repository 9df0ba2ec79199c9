use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Where the best score lives between sessions.
pub trait ScoreStore {
    /// The stored best score, `None` if nothing has been stored yet.
    fn load(&mut self) -> Result<Option<u64>, StoreError>;

    fn save(&mut self, best: u64) -> Result<(), StoreError>;
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn load(&mut self) -> Result<Option<u64>, StoreError> {
        (**self).load()
    }

    fn save(&mut self, best: u64) -> Result<(), StoreError> {
        (**self).save(best)
    }
}

/// Keeps the best score in memory only.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    best: Option<u64>,
}

impl MemoryStore {
    pub const fn new() -> Self {
        Self { best: None }
    }

    pub const fn with_best(best: u64) -> Self {
        Self { best: Some(best) }
    }

    pub const fn best(&self) -> Option<u64> {
        self.best
    }
}

impl ScoreStore for MemoryStore {
    fn load(&mut self) -> Result<Option<u64>, StoreError> {
        Ok(self.best)
    }

    fn save(&mut self, best: u64) -> Result<(), StoreError> {
        self.best = Some(best);
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
struct BestScore {
    best: u64,
}

/// Keeps the best score in a small JSON file, `{"best": 1234}`.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileStore {
    fn load(&mut self) -> Result<Option<u64>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let stored: BestScore = serde_json::from_str(&contents)?;

        Ok(Some(stored.best))
    }

    fn save(&mut self, best: u64) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string(&BestScore { best })?;
        fs::write(&self.path, contents)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn memory_store_remembers_last_save() {
        let mut store = MemoryStore::new();

        assert_eq!(store.load().unwrap(), None);

        store.save(128).unwrap();

        assert_eq!(store.load().unwrap(), Some(128));
        assert_eq!(store.best(), Some(128));
    }

    #[test]
    fn missing_file_has_no_best() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("best.json"));

        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn file_store_round_trips_and_creates_parents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("best.json");
        let mut store = FileStore::new(&path);

        store.save(2048).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"best":2048}"#);
        assert_eq!(FileStore::new(&path).load().unwrap(), Some(2048));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("best.json");
        fs::write(&path, "not json").unwrap();

        let err = FileStore::new(&path).load().unwrap_err();

        assert!(matches!(err, StoreError::Json(_)));
    }

    #[test]
    fn boxed_store_forwards() {
        let mut store: Box<dyn ScoreStore> = Box::new(MemoryStore::with_best(4));

        assert_eq!(store.load().unwrap(), Some(4));
    }
}
