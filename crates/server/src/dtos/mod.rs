pub mod advanced;
pub mod course;
pub mod faculty;
