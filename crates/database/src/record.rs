use crate::{
    error::{DbError, DbResult},
    persistence::Persistence,
};
use log::{debug, error};
use models::{collection::Collection, course_data::Course, faculty_data::Faculty};
use parking_lot::RwLock;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use std::sync::Arc;

/// A record type that lives in its own collection
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync {
    /// Collection the records are persisted under
    const COLLECTION: Collection;

    /// Whether deleting an id that is not present fails with `NotFound`.
    /// When false, the delete succeeds and the collection is still persisted.
    const STRICT_DELETE: bool;

    fn id(&self) -> i64;
}

impl Record for Course {
    const COLLECTION: Collection = Collection::Courses;
    const STRICT_DELETE: bool = false;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Record for Faculty {
    const COLLECTION: Collection = Collection::Faculty;
    const STRICT_DELETE: bool = true;

    fn id(&self) -> i64 {
        self.id
    }
}

/// An ordered, in-memory collection of records
///
/// Lookups are linear scans. Each mutation holds the write lock across the
/// whole read-modify-persist sequence and only swaps in the new contents once
/// the collection has been saved.
pub struct Table<T> {
    records: RwLock<Vec<T>>,
    persistence: Arc<dyn Persistence>,
}

impl<T: Record> Table<T> {
    /// Loads the collection from `persistence`
    pub fn load(persistence: Arc<dyn Persistence>) -> DbResult<Self> {
        let records = persistence
            .load_collection(T::COLLECTION)?
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()?;

        Ok(Self {
            records: RwLock::new(records),
            persistence,
        })
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Runs `f` against the current contents under the read lock
    pub fn read<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        f(&self.records.read())
    }

    pub fn all(&self) -> Vec<T> {
        self.records.read().clone()
    }

    /// First record with the given id
    pub fn get(&self, id: i64) -> Option<T> {
        self.find(|r| r.id() == id)
    }

    /// First record matching `predicate`
    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.records.read().iter().find(|r| predicate(r)).cloned()
    }

    /// Every record matching `predicate`, in collection order
    pub fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.records
            .read()
            .iter()
            .filter(|r| predicate(r))
            .cloned()
            .collect()
    }

    /// Appends `record` unless its id is already taken
    pub fn insert(&self, record: T) -> DbResult<T> {
        let mut records = self.records.write();

        if records.iter().any(|r| r.id() == record.id()) {
            return Err(DbError::DuplicateId {
                collection: T::COLLECTION,
                id: record.id(),
            });
        }

        let mut updated = records.clone();
        updated.push(record.clone());
        self.commit(&mut records, updated)?;

        debug!("Inserted {} {}", T::COLLECTION, record.id());
        Ok(record)
    }

    /// Replaces the first record with `id` by `record`
    ///
    /// The replacement may carry a different id; uniqueness is only checked
    /// on insert.
    pub fn replace(&self, id: i64, record: T) -> DbResult<T> {
        let mut records = self.records.write();

        let index = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| DbError::not_found(T::COLLECTION, id))?;

        let mut updated = records.clone();
        updated[index] = record.clone();
        self.commit(&mut records, updated)?;

        debug!("Replaced {} {id}", T::COLLECTION);
        Ok(record)
    }

    /// Overwrites the fields of record `id` named in `updates`
    ///
    /// Keys the record does not already have are ignored, so a patch can
    /// never add a field.
    pub fn patch(&self, id: i64, updates: &Map<String, Value>) -> DbResult<T> {
        let mut records = self.records.write();

        let index = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| DbError::not_found(T::COLLECTION, id))?;

        let mut value = serde_json::to_value(&records[index])?;
        if let Value::Object(fields) = &mut value {
            for (key, new_value) in updates {
                if let Some(slot) = fields.get_mut(key) {
                    *slot = new_value.clone();
                }
            }
        }

        let patched: T = serde_json::from_value(value)
            .map_err(|e| DbError::InvalidArgument(format!("invalid patch: {e}")))?;

        let mut updated = records.clone();
        updated[index] = patched.clone();
        self.commit(&mut records, updated)?;

        debug!("Patched {} {id}", T::COLLECTION);
        Ok(patched)
    }

    /// Removes every record with `id`
    ///
    /// See [`Record::STRICT_DELETE`] for what happens when none exists.
    pub fn delete(&self, id: i64) -> DbResult<()> {
        let mut records = self.records.write();

        let updated: Vec<T> = records.iter().filter(|r| r.id() != id).cloned().collect();
        if T::STRICT_DELETE && updated.len() == records.len() {
            return Err(DbError::not_found(T::COLLECTION, id));
        }

        self.commit(&mut records, updated)?;

        debug!("Deleted {} {id}", T::COLLECTION);
        Ok(())
    }

    /// Persists `updated` and, once saved, makes it the live collection
    fn commit(&self, live: &mut Vec<T>, updated: Vec<T>) -> DbResult<()> {
        let values = updated
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;

        if let Err(e) = self.persistence.save_collection(T::COLLECTION, &values) {
            error!("Failed to save {}: {e}", T::COLLECTION);
            return Err(e);
        }

        *live = updated;
        Ok(())
    }
}
