use crate::{
    db::Store,
    error::{DbError, DbResult},
};
use models::{collection::Collection, course_data::Course};
use serde_json::{Map, Value};

pub struct CourseService;

impl CourseService {
    /// Get a single course by id
    pub fn get_course_by_id(store: &Store, course_id: i64) -> DbResult<Course> {
        store
            .courses()
            .get(course_id)
            .ok_or_else(|| DbError::not_found(Collection::Courses, course_id))
    }

    /// Add a new course, rejecting ids that are already taken
    pub fn create_course(store: &Store, course: Course) -> DbResult<Course> {
        store.courses().insert(course)
    }

    /// Replace an existing course wholesale
    pub fn update_course(store: &Store, course_id: i64, course: Course) -> DbResult<Course> {
        store.courses().replace(course_id, course)
    }

    /// Overwrite the fields of a course named in `updates`, ignoring unknown keys
    pub fn patch_course(
        store: &Store,
        course_id: i64,
        updates: &Map<String, Value>,
    ) -> DbResult<Course> {
        store.courses().patch(course_id, updates)
    }

    /// Delete a course
    ///
    /// Deleting an id that does not exist succeeds and still rewrites the
    /// collection.
    pub fn delete_course(store: &Store, course_id: i64) -> DbResult<()> {
        store.courses().delete(course_id)
    }
}
