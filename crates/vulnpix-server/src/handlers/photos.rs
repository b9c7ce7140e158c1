// SPDX-License-Identifier: Apache-2.0

//! Photo detail, gallery, and upload endpoints.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::Value;
use vulnpix_core::{NewPhoto, Photo};

use super::photos_response;
use crate::error::ApiResult;
use crate::state::AppState;

/// Creates a photo record.
///
/// An empty `name` falls back to `upload`; a blank `upload` or `owner`
/// is rejected with 400.
pub async fn create(
    State(state): State<AppState>,
    Json(new_photo): Json<NewPhoto>,
) -> ApiResult<(StatusCode, Json<Photo>)> {
    let photo = state.store.insert(new_photo).await?;
    Ok((StatusCode::CREATED, Json(photo)))
}

/// Returns a public photo and counts the view.
///
/// Private and unknown ids both answer 404; the response carries the
/// already-incremented view counter.
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Photo>> {
    let photo = state.store.view_photo(id).await?;
    Ok(Json(photo))
}

/// Lists a user's public photos, newest first.
///
/// Rows go through the same summary projection as the search
/// endpoints; the detail view is the only place internal fields leave
/// the store.
pub async fn by_owner(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<Value>> {
    let photos = state.store.photos_by_owner(&username).await?;
    Ok(photos_response(photos))
}
