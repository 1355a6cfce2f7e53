use axum::http::StatusCode;
use serde::Serialize;

use crate::inbound::http::responses::ApiSuccess;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponseData {
    status: &'static str,
}

pub async fn health() -> ApiSuccess<HealthResponseData> {
    ApiSuccess::new(StatusCode::OK, HealthResponseData { status: "ok" })
}
