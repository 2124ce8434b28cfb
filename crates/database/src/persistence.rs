//! Backends that load and save whole collections.

use crate::error::DbResult;
use log::{debug, warn};
use models::collection::Collection;
use parking_lot::Mutex;
use serde_json::Value;
use std::{
    collections::HashMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

/// Durable home of the collections
///
/// Collections are read once when the store opens and overwritten in full
/// after every successful mutation.
pub trait Persistence: Send + Sync {
    /// Reads every record of a collection, in stored order
    fn load_collection(&self, collection: Collection) -> DbResult<Vec<Value>>;

    /// Replaces the stored collection with `records`
    fn save_collection(&self, collection: Collection, records: &[Value]) -> DbResult<()>;
}

/// Stores each collection as a pretty-printed JSON array in `<dir>/<name>.json`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `collection`
    pub fn path_for(&self, collection: Collection) -> PathBuf {
        self.dir.join(format!("{collection}.json"))
    }
}

impl Persistence for JsonFileStore {
    fn load_collection(&self, collection: Collection) -> DbResult<Vec<Value>> {
        let path = self.path_for(collection);

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(
                    "No data file at {}, starting with an empty {collection} collection",
                    path.display()
                );
                return Ok(vec![]);
            }
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_str(&contents)?)
    }

    fn save_collection(&self, collection: Collection, records: &[Value]) -> DbResult<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        let path = self.path_for(collection);
        let tmp_path = path.with_extension("json.tmp");

        let output = serde_json::to_string_pretty(records)?;
        fs::write(&tmp_path, output)?;
        fs::rename(&tmp_path, &path)?;

        debug!("Wrote {} records to {}", records.len(), path.display());
        Ok(())
    }
}

/// Keeps collections in memory and counts how often each one is saved
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<Collection, Vec<Value>>>,
    saves: Mutex<HashMap<Collection, usize>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds `collection` with `records`
    pub fn with_records(self, collection: Collection, records: Vec<Value>) -> Self {
        self.collections.lock().insert(collection, records);
        self
    }

    /// Current contents of `collection`
    pub fn records(&self, collection: Collection) -> Vec<Value> {
        self.collections
            .lock()
            .get(&collection)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of times `collection` has been saved
    pub fn save_count(&self, collection: Collection) -> usize {
        self.saves.lock().get(&collection).copied().unwrap_or(0)
    }
}

impl Persistence for MemoryStore {
    fn load_collection(&self, collection: Collection) -> DbResult<Vec<Value>> {
        Ok(self.records(collection))
    }

    fn save_collection(&self, collection: Collection, records: &[Value]) -> DbResult<()> {
        self.collections.lock().insert(collection, records.to_vec());
        *self.saves.lock().entry(collection).or_default() += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        assert!(store.load_collection(Collection::Courses).unwrap().is_empty());
    }

    #[test]
    fn test_json_file_store_roundtrip_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested"));
        let records = vec![json!({"id": 2, "name": "B"}), json!({"id": 1, "name": "A"})];

        store.save_collection(Collection::Faculty, &records).unwrap();

        assert!(store.path_for(Collection::Faculty).ends_with("faculty.json"));
        assert!(!store.dir().join("faculty.json.tmp").exists());
        assert_eq!(store.load_collection(Collection::Faculty).unwrap(), records);
    }

    #[test]
    fn test_json_file_store_writes_indented_array() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        store
            .save_collection(Collection::Courses, &[json!({"id": 1})])
            .unwrap();

        let text = fs::read_to_string(store.path_for(Collection::Courses)).unwrap();
        assert_eq!(text, "[\n  {\n    \"id\": 1\n  }\n]");
    }

    #[test]
    fn test_json_file_store_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        fs::write(store.path_for(Collection::Courses), "{ not json").unwrap();

        assert!(store.load_collection(Collection::Courses).is_err());
    }

    #[test]
    fn test_memory_store_counts_saves() {
        let store = MemoryStore::new().with_records(Collection::Courses, vec![json!({"id": 1})]);

        assert_eq!(store.load_collection(Collection::Courses).unwrap().len(), 1);
        assert_eq!(store.save_count(Collection::Courses), 0);

        store.save_collection(Collection::Courses, &[]).unwrap();

        assert_eq!(store.save_count(Collection::Courses), 1);
        assert_eq!(store.save_count(Collection::Faculty), 0);
        assert!(store.records(Collection::Courses).is_empty());
    }
}
