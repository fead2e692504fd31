use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

pub const ACKNOWLEDGEMENT: &str = "hello : world";

pub fn router() -> Router {
    Router::new().route("/", get(get_health_check))
}

/// Fixed acknowledgement payload, a one-element array
async fn get_health_check() -> Json<Value> {
    Json(json!([ACKNOWLEDGEMENT]))
}
