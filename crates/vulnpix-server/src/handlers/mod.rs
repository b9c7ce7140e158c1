// SPDX-License-Identifier: Apache-2.0

//! Request handlers.
//!
//! Each handler is a thin adapter from request fields to a core sink.
//! The vulnerable halves of the teaching pairs live next to their safe
//! counterparts; see [`crate::app`] for which routes get which.

use axum::Json;
use serde::Serialize;
use serde_json::{Value, json};
use vulnpix_core::Photo;

pub mod health;
pub mod lookup;
pub mod photos;
pub mod search;

/// Photo fields exposed by the listing endpoints.
///
/// Search results and user galleries both project rows through this
/// shape; only the detail view returns the full row with its view
/// counter and visibility flag.
#[derive(Debug, Serialize)]
pub struct PhotoSummary {
    /// Row identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Upload path or URL.
    pub upload: String,
    /// Owning username.
    pub owner: String,
}

impl From<Photo> for PhotoSummary {
    fn from(photo: Photo) -> Self {
        Self {
            id: photo.id,
            name: photo.name,
            description: photo.description,
            upload: photo.upload,
            owner: photo.owner,
        }
    }
}

/// Renders rows as the `{ "photos": [...] }` listing body.
pub(crate) fn photos_response(photos: Vec<Photo>) -> Json<Value> {
    let photos: Vec<PhotoSummary> = photos.into_iter().map(PhotoSummary::from).collect();
    Json(json!({ "photos": photos }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_summary_drops_internal_fields() {
        let photo = Photo {
            id: 1,
            name: "kittens".to_string(),
            description: "two kittens".to_string(),
            upload: "kittens.jpg".to_string(),
            owner: "alice".to_string(),
            is_public: true,
            uploaded_at: 1_700_000_000,
            views: 9,
        };
        let value = serde_json::to_value(PhotoSummary::from(photo)).expect("serialize");
        assert_eq!(value["name"], "kittens");
        assert!(value.get("views").is_none());
        assert!(value.get("is_public").is_none());
        assert!(value.get("uploaded_at").is_none());
    }
}
