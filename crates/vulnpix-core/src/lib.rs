// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # Vulnpix Core
//!
//! Core library for Vulnpix, an intentionally vulnerable photo service
//! used for security training.
//!
//! This crate provides reusable components for:
//! - The input sanitization boundary (domain grammar, term binding,
//!   restricted XML/YAML parsing)
//! - Process execution sinks for the nameserver lookup pair
//! - SQLite photo storage with paired interpolated/bound search
//! - Configuration loading
//!
//! Each teaching pair keeps its unsafe half compiled and documented so
//! the before/after contrast stays testable; route selection between
//! the halves happens in the server crate.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vulnpix_core::{PhotoStore, load_config, lookup, validate_domain};
//!
//! # async fn example() -> vulnpix_core::Result<()> {
//! let config = load_config()?;
//!
//! // Validate at the boundary, then hand the value to the argv sink.
//! let domain = validate_domain("example.com")?;
//! let output = lookup::resolve(&domain, &config.lookup).await?;
//! println!("{output}");
//!
//! // Photos live in SQLite behind bound queries.
//! let store = PhotoStore::connect(&config.database).await?;
//! let photos = store.search_public("kittens", config.search.max_results).await?;
//! println!("{} match(es)", photos.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`sanitize`] - Input sanitization boundary
//! - [`lookup`] - Process execution sinks
//! - [`store`] - Photo storage
//! - [`config`] - Configuration loading and paths
//! - [`error`] - Error types

// ============================================================================
// Error Handling
// ============================================================================

pub use error::VulnpixError;

/// Convenience Result type for Vulnpix operations.
///
/// This is equivalent to `std::result::Result<T, VulnpixError>`.
pub type Result<T> = std::result::Result<T, VulnpixError>;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{
    AppConfig, DatabaseConfig, LookupConfig, SearchConfig, ServerConfig, config_dir,
    config_file_path, load_config,
};

// ============================================================================
// Sanitization Boundary
// ============================================================================

pub use sanitize::{
    DomainName, PayloadFormat, escape_like, normalize_term, parse_structured_payload,
    validate_domain,
};

// ============================================================================
// Photo Storage
// ============================================================================

pub use store::{NewPhoto, Photo, PhotoFilter, PhotoStore, UploadedWithin};

// ============================================================================
// Modules
// ============================================================================

pub mod config;
pub mod error;
pub mod lookup;
pub mod sanitize;
pub mod store;
