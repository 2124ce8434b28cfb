use crate::{
    doc::ApiDoc,
    routes::{advanced, course, faculty, health, root},
};
use axum::{Router, routing::get};
use database::{db::Store, error::DbResult};
use error::ApiError;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod doc;
pub mod dtos;
pub mod error;
pub mod routes;
pub mod utils;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Runs a store mutation on the blocking pool
    ///
    /// Mutations hold a collection's write lock while the whole collection is
    /// written to disk, so they stay off the async workers.
    pub async fn write<T, F>(&self, mutation: F) -> Result<T, ApiError>
    where
        F: FnOnce(&Store) -> DbResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);
        let result = tokio::task::spawn_blocking(move || mutation(&store)).await?;
        Ok(result?)
    }
}

/// Builds the full application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root::root))
        .route("/health", get(health::health))
        .merge(course::router())
        .merge(faculty::router())
        .merge(advanced::router())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(state)
}
