use crate::text::contains_ci;
use models::{course_data::Course, faculty_data::Faculty};

pub mod analytics;
pub mod course;
pub mod faculty;
pub mod query_course;
pub mod query_faculty;

/// The faculty member a course points at, if one exists
pub(crate) fn faculty_for<'a>(faculty: &'a [Faculty], course: &Course) -> Option<&'a Faculty> {
    faculty.iter().find(|f| f.id == course.faculty_id)
}

/// Whether any specialization contains `term` (lowercase)
pub(crate) fn specializes_in(faculty: &Faculty, term: &str) -> bool {
    faculty.specialization.iter().any(|s| contains_ci(s, term))
}
