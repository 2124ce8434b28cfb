pub mod collection;
pub mod course_data;
pub mod faculty_data;
pub mod query;
