use crate::{
    AppState,
    dtos::{
        course::{FuzzyParams, SearchParams},
        faculty::AvailabilityParams,
    },
    error::ApiError,
};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use database::services::{
    analytics::AnalyticsService, faculty::FacultyService, query_course::QueryCourseService,
    query_faculty::QueryFacultyService,
};
use models::{
    course_data::Course,
    faculty_data::{Faculty, FacultyContact, TopFaculty},
};
use serde_json::{Map, Value};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/faculty", get(get_all_faculty).post(create_faculty))
        .route("/faculty/search", get(search_faculty))
        .route("/faculty/most-courses", get(get_faculty_with_most_courses))
        .route("/faculty/availability", get(get_faculty_availability))
        .route("/faculty/contact-list/{department}", get(get_contact_list))
        .route("/faculty/fuzzy", get(fuzzy_search_faculty))
        .route(
            "/faculty/{id}",
            get(get_faculty_by_id)
                .put(update_faculty)
                .patch(patch_faculty)
                .delete(delete_faculty),
        )
        .route("/faculty/{id}/courses", get(get_faculty_courses))
}

/// Get every faculty member
#[utoipa::path(
    get,
    path = "/faculty",
    responses(
        (status = 200, description = "Faculty retrieved successfully", body = Vec<Faculty>)
    ),
    tag = "Faculty"
)]
pub async fn get_all_faculty(State(state): State<AppState>) -> Json<Vec<Faculty>> {
    Json(FacultyService::get_all_faculty(&state.store))
}

/// Search across every faculty field
#[utoipa::path(
    get,
    path = "/faculty/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching faculty", body = Vec<Faculty>)
    ),
    tag = "Faculty"
)]
pub async fn search_faculty(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Faculty>> {
    Json(QueryFacultyService::search_faculty(&state.store, &params.query))
}

/// Get a specific faculty member by ID
#[utoipa::path(
    get,
    path = "/faculty/{id}",
    params(
        ("id" = i64, Path, description = "Faculty ID")
    ),
    responses(
        (status = 200, description = "Faculty found", body = Faculty),
        (status = 404, description = "Faculty not found")
    ),
    tag = "Faculty"
)]
pub async fn get_faculty_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Faculty>, ApiError> {
    Ok(Json(FacultyService::get_faculty_by_id(&state.store, id)?))
}

/// Add a new faculty member
#[utoipa::path(
    post,
    path = "/faculty",
    request_body = Faculty,
    responses(
        (status = 201, description = "Faculty created", body = Faculty),
        (status = 400, description = "Faculty ID already exists")
    ),
    tag = "Faculty"
)]
pub async fn create_faculty(
    State(state): State<AppState>,
    Json(faculty): Json<Faculty>,
) -> Result<(StatusCode, Json<Faculty>), ApiError> {
    let faculty = state
        .write(move |store| FacultyService::create_faculty(store, faculty))
        .await?;
    Ok((StatusCode::CREATED, Json(faculty)))
}

/// Replace a faculty member
#[utoipa::path(
    put,
    path = "/faculty/{id}",
    params(
        ("id" = i64, Path, description = "Faculty ID")
    ),
    request_body = Faculty,
    responses(
        (status = 200, description = "Faculty replaced", body = Faculty),
        (status = 404, description = "Faculty not found")
    ),
    tag = "Faculty"
)]
pub async fn update_faculty(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(faculty): Json<Faculty>,
) -> Result<Json<Faculty>, ApiError> {
    let faculty = state
        .write(move |store| FacultyService::update_faculty(store, id, faculty))
        .await?;

    Ok(Json(faculty))
}

/// Overwrite some fields of a faculty member; unknown fields are ignored
#[utoipa::path(
    patch,
    path = "/faculty/{id}",
    params(
        ("id" = i64, Path, description = "Faculty ID")
    ),
    request_body = Value,
    responses(
        (status = 200, description = "Faculty updated", body = Faculty),
        (status = 400, description = "A field has the wrong type"),
        (status = 404, description = "Faculty not found")
    ),
    tag = "Faculty"
)]
pub async fn patch_faculty(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(updates): Json<Map<String, Value>>,
) -> Result<Json<Faculty>, ApiError> {
    let faculty = state
        .write(move |store| FacultyService::patch_faculty(store, id, &updates))
        .await?;

    Ok(Json(faculty))
}

/// Delete a faculty member
#[utoipa::path(
    delete,
    path = "/faculty/{id}",
    params(
        ("id" = i64, Path, description = "Faculty ID")
    ),
    responses(
        (status = 204, description = "Faculty deleted"),
        (status = 404, description = "Faculty not found")
    ),
    tag = "Faculty"
)]
pub async fn delete_faculty(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state
        .write(move |store| FacultyService::delete_faculty(store, id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Courses taught by a faculty member
#[utoipa::path(
    get,
    path = "/faculty/{id}/courses",
    params(
        ("id" = i64, Path, description = "Faculty ID")
    ),
    responses(
        (status = 200, description = "Courses taught", body = Vec<Course>)
    ),
    tag = "Faculty"
)]
pub async fn get_faculty_courses(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Json<Vec<Course>> {
    Json(QueryCourseService::courses_by_faculty(&state.store, id))
}

/// Faculty members tied for teaching the most courses
#[utoipa::path(
    get,
    path = "/faculty/most-courses",
    responses(
        (status = 200, description = "Top faculty with their course count", body = TopFaculty)
    ),
    tag = "Faculty"
)]
pub async fn get_faculty_with_most_courses(State(state): State<AppState>) -> Json<TopFaculty> {
    Json(AnalyticsService::faculty_with_most_courses(&state.store))
}

/// Faculty holding office hours on a day
#[utoipa::path(
    get,
    path = "/faculty/availability",
    params(AvailabilityParams),
    responses(
        (status = 200, description = "Available faculty", body = Vec<Faculty>)
    ),
    tag = "Faculty"
)]
pub async fn get_faculty_availability(
    State(state): State<AppState>,
    Query(params): Query<AvailabilityParams>,
) -> Json<Vec<Faculty>> {
    Json(QueryFacultyService::faculty_available_on(
        &state.store,
        &params.day,
    ))
}

/// Contact cards for a department
#[utoipa::path(
    get,
    path = "/faculty/contact-list/{department}",
    params(
        ("department" = String, Path, description = "Department name, case-insensitive")
    ),
    responses(
        (status = 200, description = "Department contacts", body = Vec<FacultyContact>)
    ),
    tag = "Faculty"
)]
pub async fn get_contact_list(
    State(state): State<AppState>,
    Path(department): Path<String>,
) -> Json<Vec<FacultyContact>> {
    Json(QueryFacultyService::contact_list(&state.store, &department))
}

/// Faculty whose full name approximately matches a term
#[utoipa::path(
    get,
    path = "/faculty/fuzzy",
    params(FuzzyParams),
    responses(
        (status = 200, description = "Closely matching faculty", body = Vec<Faculty>),
        (status = 400, description = "Threshold outside 0-100")
    ),
    tag = "Faculty"
)]
pub async fn fuzzy_search_faculty(
    State(state): State<AppState>,
    Query(params): Query<FuzzyParams>,
) -> Result<Json<Vec<Faculty>>, ApiError> {
    Ok(Json(QueryFacultyService::fuzzy_faculty(
        &state.store,
        &params.term,
        params.threshold,
    )?))
}
