use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct MinCreditParams {
    #[serde(default = "default_min_credit")]
    pub min_credit: i64,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct DayParams {
    pub day: String,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct TopicParams {
    pub topic: String,
}

fn default_min_credit() -> i64 {
    3
}
