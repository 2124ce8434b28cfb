pub mod advanced;
pub mod course;
pub mod faculty;
pub mod health;
pub mod root;
