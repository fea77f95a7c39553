//! User-facing diagnostics.
//!
//! The core can produce exactly one error of its own: an unsupported
//! toolchain configuration. Everything else (missing manifests, missing
//! build tools, build failures) is reported through `anyhow` at the ops
//! layer.

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

/// The toolchain cannot build this recipe.
///
/// Carries the human-readable reason distinguishing a compiler below its
/// floor version from a requested standard outside the supported set. Always
/// fatal to the current invocation: no retry, no degraded fallback, and the
/// external build tool is never invoked afterwards.
#[derive(Debug, Clone, Error, MietteDiagnostic)]
#[error("unsupported toolchain configuration: this library {reason}")]
#[diagnostic(
    code(slipway::toolchain::unsupported),
    help("select a compiler with real C++17 support (gcc >= 7, clang >= 5, apple-clang >= 9) or request a supported standard")
)]
pub struct UnsupportedToolchainError {
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_carries_reason() {
        let err = UnsupportedToolchainError {
            reason: "requires C++17 or higher support; gcc 6 is not supported".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("unsupported toolchain configuration"));
        assert!(msg.contains("gcc 6 is not supported"));
    }
}
