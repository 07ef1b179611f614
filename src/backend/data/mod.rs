//! Sample data endpoints
//!
//! `GET /api/data` returns a fixed payload, `POST /api/data` echoes the
//! JSON body back. Both require a bearer token.

use axum::{http::StatusCode, response::Json};
use serde::Serialize;
use serde_json::Value;

/// Body of both `/api/data` responses
#[derive(Debug, Serialize)]
pub struct DataResponse {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// GET /api/data
pub async fn get_data() -> Json<DataResponse> {
    Json(DataResponse {
        message: "This is some sample data.",
        data: None,
    })
}

/// POST /api/data
pub async fn post_data(Json(data): Json<Value>) -> (StatusCode, Json<DataResponse>) {
    tracing::debug!("Received data payload");
    (
        StatusCode::CREATED,
        Json(DataResponse {
            message: "Data received successfully.",
            data: Some(data),
        }),
    )
}
