// SPDX-License-Identifier: Apache-2.0

//! Photo search endpoints.
//!
//! `GET /search` is the vulnerable half of the SQL pair (interpolated
//! query text); `GET /advanced-search` is the bound half. The
//! structured-payload endpoints parse XML/YAML under the restricted
//! rules, then run the bound name search.

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;
use serde_json::Value;
use vulnpix_core::{
    PayloadFormat, PhotoFilter, UploadedWithin, VulnpixError, normalize_term,
    parse_structured_payload,
};

use super::photos_response;
use crate::error::ApiResult;
use crate::state::AppState;

/// Query string for the plain search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Raw search term.
    #[serde(default)]
    pub q: String,
}

/// Query string for the advanced search endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AdvancedParams {
    /// Term matched against photo names.
    pub name: String,
    /// Term matched against photo descriptions.
    pub description: String,
    /// Upload window: `hours`, `week`, or `month`.
    pub uploaded_at: String,
}

/// Searches public photos by splicing the term into the query text.
///
/// Vulnerable pair of [`advanced`]: quote characters in `q` become SQL
/// syntax, so `%' OR 1=1 --` returns private rows too. Blank input
/// short-circuits to an empty list.
pub async fn raw(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Value>> {
    let Some(term) = normalize_term(&params.q) else {
        return Ok(photos_response(Vec::new()));
    };
    let photos = state.store.search_public_raw(term).await?;
    Ok(photos_response(photos))
}

/// Searches public photos with bound predicates.
///
/// When every field is blank the handler answers with an empty list
/// without touching the store.
pub async fn advanced(
    State(state): State<AppState>,
    Query(params): Query<AdvancedParams>,
) -> ApiResult<Json<Value>> {
    let Some(filter) = parse_filter(&params)? else {
        return Ok(photos_response(Vec::new()));
    };
    let photos = state
        .store
        .advanced_search(&filter, state.search.max_results)
        .await?;
    Ok(photos_response(photos))
}

/// Builds the bound filter, or `None` when no predicate survives
/// normalization.
fn parse_filter(params: &AdvancedParams) -> Result<Option<PhotoFilter>, VulnpixError> {
    let filter = PhotoFilter {
        name: normalize_term(&params.name).map(str::to_string),
        description: normalize_term(&params.description).map(str::to_string),
        uploaded_within: parse_window(&params.uploaded_at)?,
    };
    if filter.name.is_none() && filter.description.is_none() && filter.uploaded_within.is_none() {
        return Ok(None);
    }
    Ok(Some(filter))
}

fn parse_window(raw: &str) -> Result<Option<UploadedWithin>, VulnpixError> {
    match normalize_term(raw) {
        None => Ok(None),
        Some(value) => UploadedWithin::parse(value)
            .map(Some)
            .ok_or_else(|| VulnpixError::validation(format!("unknown upload window {value:?}"))),
    }
}

/// Runs the bound name search for a query extracted from an XML body.
pub async fn xml(State(state): State<AppState>, body: String) -> ApiResult<Json<Value>> {
    structured(&state, &body, PayloadFormat::Xml).await
}

/// Runs the bound name search for a query extracted from a YAML body.
pub async fn yaml(State(state): State<AppState>, body: String) -> ApiResult<Json<Value>> {
    structured(&state, &body, PayloadFormat::Yaml).await
}

async fn structured(
    state: &AppState,
    body: &str,
    format: PayloadFormat,
) -> ApiResult<Json<Value>> {
    let query = parse_structured_payload(body, format)?;
    let Some(term) = query.as_deref().and_then(normalize_term) else {
        return Ok(photos_response(Vec::new()));
    };
    let photos = state
        .store
        .search_public(term, state.search.max_results)
        .await?;
    Ok(photos_response(photos))
}
