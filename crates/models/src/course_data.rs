use crate::faculty_data::Faculty;
use serde::{Deserialize, Serialize};

/// Represents a course offered by the college
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Course {
    /// Unique course identifier (e.g., 101)
    pub id: i64,
    /// Course title (e.g., "Intro to AI")
    pub name: String,
    /// Catalog code (e.g., "CS101")
    pub code: String,
    pub description: String,
    pub credits: i64,
    pub department: String,
    /// Ids of courses that must be taken first, in listed order.
    /// Ids are not checked against the catalog and may form cycles.
    pub prerequisites: Vec<i64>,
    /// Id of the faculty member teaching the course, which may not exist
    pub faculty_id: i64,
    /// Semester the course is offered in, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semester: Option<String>,
}

impl Course {
    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }

    /// Display name used for fuzzy matching
    pub fn display_name(&self) -> &str {
        &self.name
    }
}

/// Minimal projection of a course used by the prerequisite path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CourseSummary {
    pub id: i64,
    pub name: String,
}

impl From<&Course> for CourseSummary {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id,
            name: course.name.clone(),
        }
    }
}

/// A course joined with the faculty member it references
///
/// `faculty_details` is left out entirely when the course points at a faculty
/// id that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CourseWithFaculty {
    #[serde(flatten)]
    pub course: Course,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faculty_details: Option<Faculty>,
}

/// One direct prerequisite of a course along with its instructor's contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PrerequisiteDetail {
    pub course_id: i64,
    pub course_code: String,
    pub course_name: String,
    pub faculty_id: Option<i64>,
    pub faculty_name: Option<String>,
    pub faculty_email: Option<String>,
}

/// Direct prerequisites of a course, resolved against both collections
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PrerequisiteReport {
    /// Name of the course the report is for
    pub course: String,
    pub prerequisites: Vec<PrerequisiteDetail>,
}
