use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct AvailabilityParams {
    pub day: String,

    /// Accepted for compatibility; availability only looks at the day
    pub start: Option<String>,

    /// Accepted for compatibility; availability only looks at the day
    pub end: Option<String>,
}
