// SPDX-License-Identifier: Apache-2.0

//! Input sanitization boundary.
//!
//! Everything that crosses from an untrusted request field into a sink
//! (process spawn, SQL query, structured-payload parse) goes through
//! this module. Each function either rejects the input or produces a
//! value safe for one specific sink; the vulnerable halves of the
//! teaching pairs bypass this module entirely.

pub mod domain;
pub mod payload;
pub mod term;

pub use domain::{DomainName, MAX_DOMAIN_LEN, MAX_LABEL_LEN, validate_domain};
pub use payload::{PayloadFormat, parse_structured_payload};
pub use term::{escape_like, normalize_term};
