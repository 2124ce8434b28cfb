use crate::{
    error::DbResult,
    persistence::{JsonFileStore, Persistence},
    record::Table,
};
use log::info;
use models::{course_data::Course, faculty_data::Faculty};
use std::{path::PathBuf, sync::Arc};

/// The in-memory catalog: one table per collection, backed by a persistence
/// collaborator
pub struct Store {
    courses: Table<Course>,
    faculty: Table<Faculty>,
}

impl Store {
    /// Loads both collections from `persistence`
    pub fn open(persistence: Arc<dyn Persistence>) -> DbResult<Self> {
        let courses = Table::load(Arc::clone(&persistence))?;
        let faculty = Table::load(persistence)?;

        info!(
            "Loaded {} courses and {} faculty",
            courses.len(),
            faculty.len()
        );

        Ok(Self { courses, faculty })
    }

    pub fn courses(&self) -> &Table<Course> {
        &self.courses
    }

    pub fn faculty(&self) -> &Table<Faculty> {
        &self.faculty
    }

    /// Runs `f` with both collections read-locked
    ///
    /// This is the only place the two locks are held together. Courses are
    /// always locked before faculty.
    pub fn read_both<R>(&self, f: impl FnOnce(&[Course], &[Faculty]) -> R) -> R {
        self.courses
            .read(|courses| self.faculty.read(|faculty| f(courses, faculty)))
    }
}


/// Opens a store whose collections live as JSON files under `data_dir`
pub fn create_store(data_dir: impl Into<PathBuf>) -> DbResult<Store> {
    Store::open(Arc::new(JsonFileStore::new(data_dir)))
}
