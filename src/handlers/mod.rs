pub mod admin;
pub mod items;

use axum::{http::StatusCode, Json};
use serde_json::json;

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok", "service": "item-service" })))
}

pub async fn home() -> &'static str {
    "Homepage Endpoint hit"
}
