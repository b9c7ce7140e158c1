// SPDX-License-Identifier: Apache-2.0

//! Shared state handed to every handler.

use vulnpix_core::{LookupConfig, PhotoStore, SearchConfig};

/// Application state cloned into each request.
///
/// `PhotoStore` clones share one connection pool, so this stays cheap.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Photo storage backend.
    pub store: PhotoStore,
    /// Resolver settings for the lookup pair.
    pub lookup: LookupConfig,
    /// Search result shaping.
    pub search: SearchConfig,
}
