// SPDX-License-Identifier: Apache-2.0

//! Process execution sinks for the nameserver lookup pair.
//!
//! [`resolve`] is the safe half: the validated domain travels as a
//! single argument-vector element and never touches a shell.
//! [`resolve_shell`] is the vulnerable half kept for the before/after
//! contrast: the raw field is formatted into a shell string, so
//! metacharacters in it become shell syntax.

use tokio::process::Command;

use crate::config::LookupConfig;
use crate::error::VulnpixError;
use crate::sanitize::DomainName;

/// User-facing message for a failed lookup.
const LOOKUP_FAILED: &str = "Please enter valid domain.";

/// Runs the configured resolver with the domain as one argv element.
///
/// # Arguments
///
/// * `domain` - Domain that already passed [`crate::sanitize::validate_domain`]
/// * `config` - Resolver settings
///
/// # Errors
///
/// Returns [`VulnpixError::Lookup`] when the process cannot be spawned
/// or exits nonzero; the error message is the user-facing
/// `Please enter valid domain.` line in the nonzero-exit case.
pub async fn resolve(domain: &DomainName, config: &LookupConfig) -> Result<String, VulnpixError> {
    let output = Command::new(&config.program)
        .arg(domain.as_str())
        .output()
        .await
        .map_err(|e| VulnpixError::lookup(format!("failed to run {}: {e}", config.program)))?;

    if !output.status.success() {
        tracing::warn!(domain = %domain, status = ?output.status.code(), "resolver exited nonzero");
        return Err(VulnpixError::lookup(LOOKUP_FAILED));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Runs `"{program} {raw}"` through `sh -c`.
///
/// The raw field reaches the shell unvalidated: `8.8.8.8; id` runs a
/// second command. Only routed when the server's `vulnerable` feature
/// is enabled; never hand this function untrusted input outside a
/// training setup.
///
/// # Errors
///
/// Returns [`VulnpixError::Lookup`] when the shell cannot be spawned
/// or exits nonzero.
pub async fn resolve_shell(raw: &str, config: &LookupConfig) -> Result<String, VulnpixError> {
    let command_line = format!("{} {raw}", config.program);
    let output = Command::new("sh")
        .arg("-c")
        .arg(&command_line)
        .output()
        .await
        .map_err(|e| VulnpixError::lookup(format!("failed to run shell: {e}")))?;

    if !output.status.success() {
        tracing::warn!(status = ?output.status.code(), "shell lookup exited nonzero");
        return Err(VulnpixError::lookup(LOOKUP_FAILED));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sanitize::validate_domain;

    fn echo_config() -> LookupConfig {
        LookupConfig {
            program: "echo".to_string(),
        }
    }

    #[tokio::test]
    async fn test_resolve_passes_domain_as_single_argument() {
        let domain = validate_domain("8.8.8.8").expect("valid domain");
        let output = resolve(&domain, &echo_config()).await.expect("echo succeeds");
        assert_eq!(output.trim(), "8.8.8.8");
    }

    #[tokio::test]
    async fn test_resolve_nonzero_exit_is_user_facing_error() {
        let domain = validate_domain("example.com").expect("valid domain");
        let config = LookupConfig {
            program: "false".to_string(),
        };
        let err = resolve(&domain, &config).await.expect_err("false exits 1");
        assert_eq!(err.to_string(), "Please enter valid domain.");
    }

    #[tokio::test]
    async fn test_resolve_spawn_failure_is_error() {
        let domain = validate_domain("example.com").expect("valid domain");
        let config = LookupConfig {
            program: "/nonexistent/resolver-binary".to_string(),
        };
        assert!(resolve(&domain, &config).await.is_err());
    }

    #[tokio::test]
    async fn test_resolve_shell_interprets_metacharacters() {
        // The same input cannot reach resolve(): validate_domain
        // rejects the semicolon. Here the shell splits it into two
        // commands and the second one runs.
        let output = resolve_shell("8.8.8.8; echo INJECTED", &echo_config())
            .await
            .expect("shell succeeds");
        assert!(output.contains("8.8.8.8"));
        assert!(output.contains("INJECTED"));
    }

    #[tokio::test]
    async fn test_resolve_shell_plain_input_behaves() {
        let output = resolve_shell("example.com", &echo_config())
            .await
            .expect("shell succeeds");
        assert_eq!(output.trim(), "example.com");
    }
}
