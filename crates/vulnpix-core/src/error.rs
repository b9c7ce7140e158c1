// SPDX-License-Identifier: Apache-2.0

//! Error types for Vulnpix.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! The server binary should use `anyhow::Result` for top-level startup
//! errors; request handlers map these variants to HTTP statuses.

use thiserror::Error;

/// Errors that can occur during Vulnpix operations.
#[derive(Error, Debug)]
pub enum VulnpixError {
    /// Input was rejected at the sanitization boundary.
    #[error("validation failed: {message}")]
    Validation {
        /// Reason the input was rejected.
        message: String,
    },

    /// XML payload could not be parsed under the restricted rules.
    ///
    /// The message wording is part of the API response contract.
    #[error("XML parse - {message}")]
    XmlParse {
        /// Parser diagnostic.
        message: String,
    },

    /// YAML payload could not be safe-loaded.
    #[error("YAML parse - {message}")]
    YamlParse {
        /// Parser diagnostic.
        message: String,
    },

    /// Resolver process could not be spawned or exited nonzero.
    #[error("{message}")]
    Lookup {
        /// User-facing lookup failure message.
        message: String,
    },

    /// No matching record.
    #[error("{resource} not found")]
    NotFound {
        /// Description of what was looked up.
        resource: String,
    },

    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration file or environment error.
    #[error("configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },
}

impl VulnpixError {
    /// Builds a [`VulnpixError::Validation`] from any message.
    pub fn validation(message: impl Into<String>) -> Self {
        VulnpixError::Validation {
            message: message.into(),
        }
    }

    /// Builds a [`VulnpixError::XmlParse`] from a parser diagnostic.
    pub fn xml_parse(message: impl Into<String>) -> Self {
        VulnpixError::XmlParse {
            message: message.into(),
        }
    }

    /// Builds a [`VulnpixError::YamlParse`] from a parser diagnostic.
    pub fn yaml_parse(message: impl Into<String>) -> Self {
        VulnpixError::YamlParse {
            message: message.into(),
        }
    }

    /// Builds a [`VulnpixError::Lookup`] from any message.
    pub fn lookup(message: impl Into<String>) -> Self {
        VulnpixError::Lookup {
            message: message.into(),
        }
    }

    /// Builds a [`VulnpixError::NotFound`] for a resource description.
    pub fn not_found(resource: impl Into<String>) -> Self {
        VulnpixError::NotFound {
            resource: resource.into(),
        }
    }
}

impl From<config::ConfigError> for VulnpixError {
    fn from(err: config::ConfigError) -> Self {
        VulnpixError::Config {
            message: err.to_string(),
        }
    }
}
