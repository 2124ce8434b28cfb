use crate::{
    AppState,
    dtos::{
        advanced::{DayParams, MinCreditParams, TopicParams},
        course::SearchParams,
    },
    error::ApiError,
};
use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use database::services::{
    analytics::AnalyticsService, query_course::QueryCourseService,
    query_faculty::QueryFacultyService,
};
use models::{
    course_data::{Course, CourseWithFaculty},
    faculty_data::{Faculty, FacultyLoad},
    query::SearchAll,
};
use std::collections::HashMap;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/advanced/courses/by-credits", get(get_courses_by_credits))
        .route("/advanced/courses/search", get(search_course_text))
        .route("/advanced/courses/with-faculty", get(get_courses_with_faculty))
        .route("/advanced/faculty/available-on", get(get_faculty_available_on))
        .route("/advanced/faculty/specialization", get(get_faculty_by_specialization))
        .route("/advanced/analytics/faculty-course-load", get(get_faculty_course_load))
        .route("/advanced/search/all", get(search_all))
        .route("/advanced/departments/course-count", get(get_department_course_count))
}

/// Courses worth at least `min_credit` credits
#[utoipa::path(
    get,
    path = "/advanced/courses/by-credits",
    params(MinCreditParams),
    responses(
        (status = 200, description = "Matching courses", body = Vec<Course>)
    ),
    tag = "Advanced"
)]
pub async fn get_courses_by_credits(
    State(state): State<AppState>,
    Query(params): Query<MinCreditParams>,
) -> Json<Vec<Course>> {
    Json(QueryCourseService::courses_by_min_credits(
        &state.store,
        params.min_credit,
    ))
}

/// Search course names and descriptions
#[utoipa::path(
    get,
    path = "/advanced/courses/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching courses", body = Vec<Course>)
    ),
    tag = "Advanced"
)]
pub async fn search_course_text(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Course>> {
    Json(QueryCourseService::search_course_text(
        &state.store,
        &params.query,
    ))
}

/// Every course whose faculty member exists, with that member attached
#[utoipa::path(
    get,
    path = "/advanced/courses/with-faculty",
    responses(
        (status = 200, description = "Courses with faculty details", body = Vec<CourseWithFaculty>)
    ),
    tag = "Advanced"
)]
pub async fn get_courses_with_faculty(
    State(state): State<AppState>,
) -> Json<Vec<CourseWithFaculty>> {
    Json(AnalyticsService::courses_with_faculty(&state.store))
}

/// Faculty whose office hours mention a day
#[utoipa::path(
    get,
    path = "/advanced/faculty/available-on",
    params(DayParams),
    responses(
        (status = 200, description = "Available faculty", body = Vec<Faculty>)
    ),
    tag = "Advanced"
)]
pub async fn get_faculty_available_on(
    State(state): State<AppState>,
    Query(params): Query<DayParams>,
) -> Json<Vec<Faculty>> {
    Json(QueryFacultyService::faculty_available_on(
        &state.store,
        &params.day,
    ))
}

/// Faculty with a specialization containing a topic
#[utoipa::path(
    get,
    path = "/advanced/faculty/specialization",
    params(TopicParams),
    responses(
        (status = 200, description = "Matching faculty", body = Vec<Faculty>)
    ),
    tag = "Advanced"
)]
pub async fn get_faculty_by_specialization(
    State(state): State<AppState>,
    Query(params): Query<TopicParams>,
) -> Json<Vec<Faculty>> {
    Json(QueryFacultyService::faculty_by_specialization(
        &state.store,
        &params.topic,
    ))
}

/// The faculty member referenced by the most courses
#[utoipa::path(
    get,
    path = "/advanced/analytics/faculty-course-load",
    responses(
        (status = 200, description = "Busiest faculty member", body = FacultyLoad),
        (status = 404, description = "No courses, or the busiest faculty ID has no record")
    ),
    tag = "Advanced"
)]
pub async fn get_faculty_course_load(
    State(state): State<AppState>,
) -> Result<Json<FacultyLoad>, ApiError> {
    AnalyticsService::faculty_course_load(&state.store)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("No faculty course load available"))
}

/// Search courses and faculty together
#[utoipa::path(
    get,
    path = "/advanced/search/all",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching courses and faculty", body = SearchAll)
    ),
    tag = "Advanced"
)]
pub async fn search_all(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchAll> {
    Json(AnalyticsService::search_all(&state.store, &params.query))
}

/// Number of courses per department
#[utoipa::path(
    get,
    path = "/advanced/departments/course-count",
    responses(
        (status = 200, description = "Department to course count", body = HashMap<String, usize>)
    ),
    tag = "Advanced"
)]
pub async fn get_department_course_count(
    State(state): State<AppState>,
) -> Json<HashMap<String, usize>> {
    Json(AnalyticsService::department_course_count(&state.store))
}
