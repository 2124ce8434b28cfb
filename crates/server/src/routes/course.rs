use crate::{
    AppState,
    dtos::course::{
        CourseListParams, FuzzyParams, InterestFieldsParams, InterestsParams, MessageResponse,
        SearchParams, TopParams, TopicsParams,
    },
    error::ApiError,
};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use database::services::{
    analytics::AnalyticsService, course::CourseService, query_course::QueryCourseService,
};
use models::course_data::{Course, CourseSummary, CourseWithFaculty, PrerequisiteReport};
use serde_json::{Map, Value};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/courses", get(get_courses).post(create_course))
        .route("/courses/search", get(search_courses))
        .route("/courses/most-prerequisites", get(get_most_prerequisites))
        .route("/courses/no-prerequisites", get(get_courses_without_prerequisites))
        .route("/courses/by-semester/{semester}", get(get_courses_by_semester))
        .route("/courses/specialization", get(get_courses_by_specialization))
        .route("/courses/match-interest", get(get_courses_matching_interest))
        .route("/courses/recommend", get(get_recommended_courses))
        .route("/courses/fuzzy", get(fuzzy_search_courses))
        .route(
            "/courses/{id}",
            get(get_course_by_id)
                .put(update_course)
                .patch(patch_course)
                .delete(delete_course),
        )
        .route("/courses/{id}/prerequisites/full", get(get_prerequisite_report))
        .route("/courses/{id}/prerequisite-path", get(get_prerequisite_path))
        .route("/courses/{id}/with-faculty", get(get_course_with_faculty))
}

/// Get a sorted page of courses
#[utoipa::path(
    get,
    path = "/courses",
    params(CourseListParams),
    responses(
        (status = 200, description = "Courses retrieved successfully", body = Vec<Course>),
        (status = 400, description = "Unsupported sort field or order")
    ),
    tag = "Courses"
)]
pub async fn get_courses(
    State(state): State<AppState>,
    Query(params): Query<CourseListParams>,
) -> Result<Json<Vec<Course>>, ApiError> {
    let courses = QueryCourseService::list_courses(
        &state.store,
        params.limit,
        params.offset,
        &params.sort_by,
        &params.order,
    )?;

    Ok(Json(courses))
}

/// Search across every course field
#[utoipa::path(
    get,
    path = "/courses/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching courses", body = Vec<Course>)
    ),
    tag = "Courses"
)]
pub async fn search_courses(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Course>> {
    Json(QueryCourseService::search_courses(&state.store, &params.query))
}

/// Get a specific course by ID
#[utoipa::path(
    get,
    path = "/courses/{id}",
    params(
        ("id" = i64, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course found", body = Course),
        (status = 404, description = "Course not found")
    ),
    tag = "Courses"
)]
pub async fn get_course_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Course>, ApiError> {
    Ok(Json(CourseService::get_course_by_id(&state.store, id)?))
}

/// Add a new course
#[utoipa::path(
    post,
    path = "/courses",
    request_body = Course,
    responses(
        (status = 200, description = "Course created", body = Course),
        (status = 400, description = "Course ID already exists")
    ),
    tag = "Courses"
)]
pub async fn create_course(
    State(state): State<AppState>,
    Json(course): Json<Course>,
) -> Result<Json<Course>, ApiError> {
    let course = state
        .write(move |store| CourseService::create_course(store, course))
        .await?;

    Ok(Json(course))
}

/// Replace a course
#[utoipa::path(
    put,
    path = "/courses/{id}",
    params(
        ("id" = i64, Path, description = "Course ID")
    ),
    request_body = Course,
    responses(
        (status = 200, description = "Course replaced", body = Course),
        (status = 404, description = "Course not found")
    ),
    tag = "Courses"
)]
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(course): Json<Course>,
) -> Result<Json<Course>, ApiError> {
    let course = state
        .write(move |store| CourseService::update_course(store, id, course))
        .await?;

    Ok(Json(course))
}

/// Overwrite some fields of a course; unknown fields are ignored
#[utoipa::path(
    patch,
    path = "/courses/{id}",
    params(
        ("id" = i64, Path, description = "Course ID")
    ),
    request_body = Value,
    responses(
        (status = 200, description = "Course updated", body = Course),
        (status = 400, description = "A field has the wrong type"),
        (status = 404, description = "Course not found")
    ),
    tag = "Courses"
)]
pub async fn patch_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(updates): Json<Map<String, Value>>,
) -> Result<Json<Course>, ApiError> {
    let course = state
        .write(move |store| CourseService::patch_course(store, id, &updates))
        .await?;

    Ok(Json(course))
}

/// Delete a course; deleting an unknown ID also succeeds
#[utoipa::path(
    delete,
    path = "/courses/{id}",
    params(
        ("id" = i64, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course deleted", body = MessageResponse)
    ),
    tag = "Courses"
)]
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .write(move |store| CourseService::delete_course(store, id))
        .await?;

    Ok(Json(MessageResponse {
        message: "Course deleted".to_string(),
    }))
}

/// Direct prerequisites of a course with each instructor's contact
#[utoipa::path(
    get,
    path = "/courses/{id}/prerequisites/full",
    params(
        ("id" = i64, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Prerequisite report", body = PrerequisiteReport),
        (status = 404, description = "Course not found")
    ),
    tag = "Courses"
)]
pub async fn get_prerequisite_report(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PrerequisiteReport>, ApiError> {
    Ok(Json(AnalyticsService::prerequisite_report(&state.store, id)?))
}

/// Every course that must be taken before this one, dependencies first
#[utoipa::path(
    get,
    path = "/courses/{id}/prerequisite-path",
    params(
        ("id" = i64, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Flattened prerequisite chain ending with the course itself", body = Vec<CourseSummary>)
    ),
    tag = "Courses"
)]
pub async fn get_prerequisite_path(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Json<Vec<CourseSummary>> {
    let chain = QueryCourseService::prerequisite_chain(&state.store, id);
    Json(chain.iter().map(CourseSummary::from).collect())
}

/// A course with its faculty member attached, when that member exists
#[utoipa::path(
    get,
    path = "/courses/{id}/with-faculty",
    params(
        ("id" = i64, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course with faculty details", body = CourseWithFaculty),
        (status = 404, description = "Course not found")
    ),
    tag = "Courses"
)]
pub async fn get_course_with_faculty(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CourseWithFaculty>, ApiError> {
    Ok(Json(AnalyticsService::enriched_course(&state.store, id)?))
}

/// Courses with the most prerequisites
#[utoipa::path(
    get,
    path = "/courses/most-prerequisites",
    params(TopParams),
    responses(
        (status = 200, description = "Courses ordered by prerequisite count", body = Vec<Course>)
    ),
    tag = "Courses"
)]
pub async fn get_most_prerequisites(
    State(state): State<AppState>,
    Query(params): Query<TopParams>,
) -> Json<Vec<Course>> {
    Json(QueryCourseService::most_prerequisites(&state.store, params.top))
}

/// Courses that have no prerequisites
#[utoipa::path(
    get,
    path = "/courses/no-prerequisites",
    responses(
        (status = 200, description = "Entry-level courses", body = Vec<Course>)
    ),
    tag = "Courses"
)]
pub async fn get_courses_without_prerequisites(
    State(state): State<AppState>,
) -> Json<Vec<Course>> {
    Json(QueryCourseService::courses_without_prerequisites(&state.store))
}

/// Courses offered in a semester
#[utoipa::path(
    get,
    path = "/courses/by-semester/{semester}",
    params(
        ("semester" = String, Path, description = "Semester name, case-insensitive")
    ),
    responses(
        (status = 200, description = "Courses offered in the semester", body = Vec<Course>)
    ),
    tag = "Courses"
)]
pub async fn get_courses_by_semester(
    State(state): State<AppState>,
    Path(semester): Path<String>,
) -> Json<Vec<Course>> {
    Json(QueryCourseService::courses_by_semester(&state.store, &semester))
}

/// Courses taught by faculty covering every listed specialization
#[utoipa::path(
    get,
    path = "/courses/specialization",
    params(TopicsParams),
    responses(
        (status = 200, description = "Matching courses", body = Vec<Course>)
    ),
    tag = "Courses"
)]
pub async fn get_courses_by_specialization(
    State(state): State<AppState>,
    Query(params): Query<TopicsParams>,
) -> Json<Vec<Course>> {
    Json(QueryCourseService::courses_by_specializations(
        &state.store,
        &params.topics,
    ))
}

/// Courses matching any interest field
#[utoipa::path(
    get,
    path = "/courses/match-interest",
    params(InterestFieldsParams),
    responses(
        (status = 200, description = "Matching courses", body = Vec<Course>)
    ),
    tag = "Courses"
)]
pub async fn get_courses_matching_interest(
    State(state): State<AppState>,
    Query(params): Query<InterestFieldsParams>,
) -> Json<Vec<Course>> {
    Json(QueryCourseService::courses_match_interest(
        &state.store,
        &params.fields,
    ))
}

/// Recommend courses for a list of interests
#[utoipa::path(
    get,
    path = "/courses/recommend",
    params(InterestsParams),
    responses(
        (status = 200, description = "Recommended courses", body = Vec<Course>)
    ),
    tag = "Courses"
)]
pub async fn get_recommended_courses(
    State(state): State<AppState>,
    Query(params): Query<InterestsParams>,
) -> Json<Vec<Course>> {
    Json(QueryCourseService::recommend_courses(
        &state.store,
        &params.interests,
    ))
}

/// Courses whose name approximately matches a term
#[utoipa::path(
    get,
    path = "/courses/fuzzy",
    params(FuzzyParams),
    responses(
        (status = 200, description = "Closely matching courses", body = Vec<Course>),
        (status = 400, description = "Threshold outside 0-100")
    ),
    tag = "Courses"
)]
pub async fn fuzzy_search_courses(
    State(state): State<AppState>,
    Query(params): Query<FuzzyParams>,
) -> Result<Json<Vec<Course>>, ApiError> {
    Ok(Json(QueryCourseService::fuzzy_courses(
        &state.store,
        &params.term,
        params.threshold,
    )?))
}
