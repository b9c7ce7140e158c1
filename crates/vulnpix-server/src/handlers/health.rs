// SPDX-License-Identifier: Apache-2.0

//! Liveness endpoint.

use axum::Json;
use serde_json::{Value, json};

/// Returns `{ "status": "ok" }`.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
