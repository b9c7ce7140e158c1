// SPDX-License-Identifier: Apache-2.0

//! Nameserver lookup pages.
//!
//! `GET /lookup` renders the form; `POST /lookup` resolves the
//! submitted domain. The default build routes the POST to [`perform`]
//! (argv execution behind the validation boundary); the `vulnerable`
//! feature routes it to [`perform_shell`] instead.

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::Html;
use serde::Deserialize;
use vulnpix_core::{VulnpixError, lookup, validate_domain};

use crate::state::AppState;

/// User-facing message for any failed or rejected lookup.
const LOOKUP_ERROR: &str = "Please enter valid domain.";

/// Form body for the lookup page.
#[derive(Debug, Deserialize)]
pub struct LookupForm {
    /// Domain name to resolve.
    pub domain: String,
}

/// Renders the lookup form.
pub async fn form() -> Html<String> {
    Html(page(None, None))
}

/// Resolves the submitted domain through the validation boundary.
///
/// The domain is validated first; only a value that passed the grammar
/// reaches the process sink, as a single argv element. Rejection means
/// no process is spawned at all.
pub async fn perform(
    State(state): State<AppState>,
    Form(form): Form<LookupForm>,
) -> (StatusCode, Html<String>) {
    match run_checked(&state, &form.domain).await {
        Ok(output) => (StatusCode::OK, Html(page(Some(&output), None))),
        Err(err) => {
            tracing::warn!(error = %err, "domain lookup rejected");
            let status = if matches!(err, VulnpixError::Validation { .. }) {
                StatusCode::BAD_REQUEST
            } else {
                // Resolver ran and failed; render the page with the
                // error line like a normal form round trip.
                StatusCode::OK
            };
            (status, Html(page(None, Some(LOOKUP_ERROR))))
        }
    }
}

async fn run_checked(state: &AppState, raw: &str) -> vulnpix_core::Result<String> {
    let domain = validate_domain(raw)?;
    lookup::resolve(&domain, &state.lookup).await
}

/// Resolves the submitted domain through a shell string.
///
/// Vulnerable pair of [`perform`]: the raw field goes straight into
/// `sh -c` with no validation. Routed only under the `vulnerable`
/// feature.
pub async fn perform_shell(
    State(state): State<AppState>,
    Form(form): Form<LookupForm>,
) -> (StatusCode, Html<String>) {
    match lookup::resolve_shell(&form.domain, &state.lookup).await {
        Ok(output) => (StatusCode::OK, Html(page(Some(&output), None))),
        Err(err) => {
            tracing::warn!(error = %err, "shell lookup failed");
            (StatusCode::OK, Html(page(None, Some(LOOKUP_ERROR))))
        }
    }
}

/// Renders the lookup page with optional resolver output or error.
fn page(output: Option<&str>, error: Option<&str>) -> String {
    let mut body = String::from(
        "<!DOCTYPE html>\n<html>\n<head><title>Domain lookup</title></head>\n<body>\n\
         <h1>Domain lookup</h1>\n\
         <form method=\"post\" action=\"/lookup\">\n\
         <label for=\"domain\">Domain:</label>\n\
         <input type=\"text\" id=\"domain\" name=\"domain\">\n\
         <button type=\"submit\">Lookup</button>\n\
         </form>\n",
    );
    if let Some(error) = error {
        body.push_str("<p class=\"error\">");
        body.push_str(&escape_html(error));
        body.push_str("</p>\n");
    }
    if let Some(output) = output {
        body.push_str("<pre>");
        body.push_str(&escape_html(output));
        body.push_str("</pre>\n");
    }
    body.push_str("</body>\n</html>\n");
    body
}

/// Escapes resolver output for embedding in the page.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
