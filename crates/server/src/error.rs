use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::error::DbError;
use log::error;
use serde_json::json;
use tokio::task::JoinError;

/// Maps catalog errors onto HTTP responses with a `{"detail": ...}` body
#[derive(Debug)]
pub enum ApiError {
    Db(DbError),
    /// A query had nothing to report
    NotFound(String),
    /// A blocking store task panicked or was cancelled
    Task(JoinError),
}

impl ApiError {
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound(detail.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) | Self::Db(DbError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Db(DbError::DuplicateId { .. } | DbError::InvalidArgument(_)) => {
                StatusCode::BAD_REQUEST
            }
            Self::Db(DbError::Io(_) | DbError::Serialization(_)) | Self::Task(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn detail(&self) -> String {
        match self {
            Self::Db(err) => err.to_string(),
            Self::NotFound(detail) => detail.clone(),
            Self::Task(err) => format!("store task failed: {err}"),
        }
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        Self::Db(err)
    }
}

impl From<JoinError> for ApiError {
    fn from(err: JoinError) -> Self {
        Self::Task(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.detail();
        if status.is_server_error() {
            error!("Request failed: {detail}");
        }

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
