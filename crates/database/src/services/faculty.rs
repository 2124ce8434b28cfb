use crate::{
    db::Store,
    error::{DbError, DbResult},
};
use models::{collection::Collection, faculty_data::Faculty};
use serde_json::{Map, Value};

pub struct FacultyService;

impl FacultyService {
    pub fn get_all_faculty(store: &Store) -> Vec<Faculty> {
        store.faculty().all()
    }

    pub fn get_faculty_by_id(store: &Store, faculty_id: i64) -> DbResult<Faculty> {
        store
            .faculty()
            .get(faculty_id)
            .ok_or_else(|| DbError::not_found(Collection::Faculty, faculty_id))
    }

    pub fn create_faculty(store: &Store, faculty: Faculty) -> DbResult<Faculty> {
        store.faculty().insert(faculty)
    }

    pub fn update_faculty(store: &Store, faculty_id: i64, faculty: Faculty) -> DbResult<Faculty> {
        store.faculty().replace(faculty_id, faculty)
    }

    pub fn patch_faculty(
        store: &Store,
        faculty_id: i64,
        updates: &Map<String, Value>,
    ) -> DbResult<Faculty> {
        store.faculty().patch(faculty_id, updates)
    }

    /// Delete a faculty member, failing with `NotFound` if the id is absent
    pub fn delete_faculty(store: &Store, faculty_id: i64) -> DbResult<()> {
        store.faculty().delete(faculty_id)
    }
}
