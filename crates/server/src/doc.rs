use crate::routes::{advanced, course, faculty, health, root};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        course::get_courses,
        course::search_courses,
        course::get_course_by_id,
        course::create_course,
        course::update_course,
        course::patch_course,
        course::delete_course,
        course::get_prerequisite_report,
        course::get_prerequisite_path,
        course::get_course_with_faculty,
        course::get_most_prerequisites,
        course::get_courses_without_prerequisites,
        course::get_courses_by_semester,
        course::get_courses_by_specialization,
        course::get_courses_matching_interest,
        course::get_recommended_courses,
        course::fuzzy_search_courses,
        faculty::get_all_faculty,
        faculty::search_faculty,
        faculty::get_faculty_by_id,
        faculty::create_faculty,
        faculty::update_faculty,
        faculty::patch_faculty,
        faculty::delete_faculty,
        faculty::get_faculty_courses,
        faculty::get_faculty_with_most_courses,
        faculty::get_faculty_availability,
        faculty::get_contact_list,
        faculty::fuzzy_search_faculty,
        advanced::get_courses_by_credits,
        advanced::search_course_text,
        advanced::get_courses_with_faculty,
        advanced::get_faculty_available_on,
        advanced::get_faculty_by_specialization,
        advanced::get_faculty_course_load,
        advanced::search_all,
        advanced::get_department_course_count
    ),
    tags(
        (name = "Root", description = "Landing page"),
        (name = "Health", description = "Service status"),
        (name = "Courses", description = "Course related endpoints"),
        (name = "Faculty", description = "Faculty related endpoints"),
        (name = "Advanced", description = "Cross-collection queries and analytics"),
    ),
    info(
        title = "College Campus API",
        version = "1.0.0",
        description = "Courses and faculty of a college campus",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
