use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct CourseListParams {
    #[serde(default = "default_limit")]
    pub limit: usize,

    #[serde(default)]
    pub offset: usize,

    /// One of `id`, `name`, `code` or `credits`
    #[serde(default = "default_sort_by")]
    pub sort_by: String,

    /// `asc` or `desc`
    #[serde(default = "default_order")]
    pub order: String,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct SearchParams {
    pub query: String,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct TopParams {
    #[serde(default = "default_top")]
    pub top: usize,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct TopicsParams {
    /// Comma separated specializations; a course must match all of them
    pub topics: String,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct InterestFieldsParams {
    /// Comma separated interest fields; a course may match any of them
    pub fields: String,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct InterestsParams {
    /// Comma separated interests; a course may match any of them
    pub interests: String,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct FuzzyParams {
    pub term: String,

    /// Minimum similarity, from 0 to 100
    #[serde(default = "default_threshold")]
    pub threshold: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

fn default_limit() -> usize {
    10
}

fn default_sort_by() -> String {
    "id".to_string()
}

fn default_order() -> String {
    "asc".to_string()
}

fn default_top() -> usize {
    5
}

fn default_threshold() -> i64 {
    80
}
