// SPDX-License-Identifier: Apache-2.0

//! Domain-name validation for the lookup sink.
//!
//! The grammar is deliberately narrow: ASCII alphanumerics, dots, and
//! hyphens with RFC 1035 length caps. Shell metacharacters, whitespace,
//! and control bytes all fall outside the character class, so nothing
//! that passes can smuggle extra tokens into a command line.

use std::fmt;

use crate::error::VulnpixError;

/// Maximum total length of a domain name in bytes, per RFC 1035.
pub const MAX_DOMAIN_LEN: usize = 253;

/// Maximum length of a single dot-separated label in bytes.
pub const MAX_LABEL_LEN: usize = 63;

/// A domain name that passed [`validate_domain`].
///
/// Only validation constructs this type, and it is not `Clone`: the
/// value is created once, handed to the process sink as a single argv
/// element, and dropped with the response.
#[derive(Debug, PartialEq, Eq)]
pub struct DomainName(String);

impl DomainName {
    /// Returns the validated domain as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value, yielding the validated string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validates an untrusted string against the domain grammar.
///
/// Accepts inputs matching `^[a-zA-Z0-9.-]{1,253}$` where every
/// dot-separated label is 1 to 63 bytes. No hyphen-position rules are
/// applied; `8.8.8.8` and `sub-domain.example.com` both pass.
///
/// # Errors
///
/// Returns [`VulnpixError::Validation`] when the input is empty,
/// longer than [`MAX_DOMAIN_LEN`], contains a character outside the
/// class, or has an empty or oversized label.
pub fn validate_domain(input: &str) -> Result<DomainName, VulnpixError> {
    if input.is_empty() {
        return Err(VulnpixError::validation("domain must not be empty"));
    }
    if input.len() > MAX_DOMAIN_LEN {
        return Err(VulnpixError::validation(format!(
            "domain exceeds {MAX_DOMAIN_LEN} bytes"
        )));
    }
    if let Some(bad) = input
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '.' || *c == '-'))
    {
        return Err(VulnpixError::validation(format!(
            "domain contains forbidden character {bad:?}"
        )));
    }
    for label in input.split('.') {
        if label.is_empty() {
            return Err(VulnpixError::validation("domain contains an empty label"));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(VulnpixError::validation(format!(
                "domain label exceeds {MAX_LABEL_LEN} bytes"
            )));
        }
    }
    Ok(DomainName(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rejects(input: &str) {
        assert!(
            validate_domain(input).is_err(),
            "expected rejection for {input:?}"
        );
    }

    #[test]
    fn test_accepts_plain_domains() {
        for input in ["example.com", "localhost", "8.8.8.8", "sub-domain.example.com", "a.b.c.d"] {
            let domain = validate_domain(input).expect("should accept");
            assert_eq!(domain.as_str(), input);
        }
    }

    #[test]
    fn test_accepts_max_label_length() {
        let label = "a".repeat(MAX_LABEL_LEN);
        let input = format!("{label}.com");
        assert!(validate_domain(&input).is_ok());
    }

    #[test]
    fn test_rejects_oversized_label() {
        let label = "a".repeat(MAX_LABEL_LEN + 1);
        let input = format!("{label}.com");
        assert_rejects(&input);
    }

    #[test]
    fn test_accepts_max_total_length() {
        // Three 63-byte labels and a 61-byte tail: 253 bytes total.
        let long = "a".repeat(MAX_LABEL_LEN);
        let input = format!("{long}.{long}.{long}.{}", "a".repeat(61));
        assert_eq!(input.len(), MAX_DOMAIN_LEN);
        assert!(validate_domain(&input).is_ok());
    }

    #[test]
    fn test_rejects_oversized_total_length() {
        let long = "a".repeat(MAX_LABEL_LEN);
        let input = format!("{long}.{long}.{long}.{}", "a".repeat(62));
        assert_eq!(input.len(), MAX_DOMAIN_LEN + 1);
        assert_rejects(&input);
    }

    #[test]
    fn test_rejects_empty_input() {
        assert_rejects("");
    }

    #[test]
    fn test_rejects_shell_metacharacters() {
        assert_rejects("8.8.8.8; rm -rf /");
        assert_rejects("example.com|id");
        assert_rejects("example.com&&id");
        assert_rejects("`id`.com");
        assert_rejects("$(id).com");
        assert_rejects("example.com>out");
    }

    #[test]
    fn test_rejects_whitespace_and_control_bytes() {
        assert_rejects("example .com");
        assert_rejects("example.com extra");
        assert_rejects("example\t.com");
        assert_rejects("example.com\n");
        assert_rejects("example\0.com");
    }

    #[test]
    fn test_rejects_empty_labels() {
        assert_rejects(".example.com");
        assert_rejects("example..com");
        assert_rejects("example.com.");
    }

    #[test]
    fn test_rejects_non_ascii() {
        assert_rejects("exämple.com");
        assert_rejects("例え.jp");
    }

    #[test]
    fn test_hyphens_pass_anywhere_in_a_label() {
        // Grammar is charset plus lengths only; edge hyphens are not
        // position-checked.
        assert!(validate_domain("-example.com").is_ok());
        assert!(validate_domain("example-.com").is_ok());
    }

    #[test]
    fn test_into_inner_round_trip() {
        let domain = validate_domain("example.com").expect("should accept");
        assert_eq!(domain.into_inner(), "example.com");
    }
}
