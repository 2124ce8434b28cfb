use serde::{Deserialize, Serialize};

/// Represents a faculty member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Faculty {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    /// Topics the faculty member specializes in (e.g., "ML", "Robotics")
    pub specialization: Vec<String>,
    /// Office room (e.g., "Room 142")
    pub office_location: String,
    /// Free-text office hours (e.g., "Mon/Wed 9:00-17:00")
    pub office_hours: String,
}

impl Faculty {
    /// Full name in "first last" form
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Contact card for a faculty member
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FacultyContact {
    pub name: String,
    pub email: String,
    pub office_location: String,
}

impl From<&Faculty> for FacultyContact {
    fn from(faculty: &Faculty) -> Self {
        Self {
            name: faculty.full_name(),
            email: faculty.email.clone(),
            office_location: faculty.office_location.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FacultySummary {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<&Faculty> for FacultySummary {
    fn from(faculty: &Faculty) -> Self {
        Self {
            id: faculty.id,
            name: faculty.full_name(),
            email: faculty.email.clone(),
        }
    }
}

/// Every faculty member tied for the largest number of courses taught
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TopFaculty {
    pub max_courses: usize,
    pub faculty: Vec<Faculty>,
}

/// The single faculty member with the heaviest course load
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FacultyLoad {
    pub max_courses: usize,
    pub faculty: FacultySummary,
}
