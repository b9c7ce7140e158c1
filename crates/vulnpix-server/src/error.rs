// SPDX-License-Identifier: Apache-2.0

//! Error-to-response mapping for the HTTP surface.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use vulnpix_core::VulnpixError;

/// Convenience Result type for handlers.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Wrapper that renders [`VulnpixError`] as a JSON error response.
#[derive(Debug)]
pub struct ApiError(pub VulnpixError);

impl From<VulnpixError> for ApiError {
    fn from(err: VulnpixError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            VulnpixError::Validation { .. }
            | VulnpixError::XmlParse { .. }
            | VulnpixError::YamlParse { .. } => StatusCode::BAD_REQUEST,
            VulnpixError::NotFound { .. } => StatusCode::NOT_FOUND,
            VulnpixError::Lookup { .. }
            | VulnpixError::Database(_)
            | VulnpixError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        } else {
            tracing::warn!(error = %self.0, "request rejected");
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_errors_are_bad_request() {
        let response = ApiError(VulnpixError::xml_parse("boom")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = ApiError(VulnpixError::not_found("photo 7")).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let response = ApiError(VulnpixError::validation("bad input")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
