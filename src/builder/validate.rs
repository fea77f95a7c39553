//! Toolchain compatibility validation.
//!
//! Some compilers claim a language standard they cannot actually deliver.
//! The validator rejects those claims up front, before the external build
//! tool is ever invoked: a known compiler family below its floor version is
//! refused, and an explicitly requested standard must be one the recipe
//! supports. Everything else is accepted - the floor table is a blocklist of
//! known-bad combinations, not an allowlist, so unknown compiler identities
//! pass regardless of their version string.

use crate::core::settings::{CompilerId, ToolchainSettings};
use crate::core::version::CompilerVersion;
use crate::util::diagnostic::UnsupportedToolchainError;

/// The result of validating one toolchain against one recipe.
///
/// A rejection is terminal for the invocation; the lifecycle must abort
/// without touching the build tool rather than retry or fall back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Accepted,
    Rejected(String),
}

impl ValidationOutcome {
    /// Whether the toolchain was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationOutcome::Accepted)
    }

    /// The rejection reason, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            ValidationOutcome::Accepted => None,
            ValidationOutcome::Rejected(reason) => Some(reason),
        }
    }

    /// Convert into a `Result`, turning a rejection into the one error the
    /// core can produce.
    pub fn into_result(self) -> Result<(), UnsupportedToolchainError> {
        match self {
            ValidationOutcome::Accepted => Ok(()),
            ValidationOutcome::Rejected(reason) => Err(UnsupportedToolchainError { reason }),
        }
    }
}

/// Minimum version at which each known compiler family genuinely supports
/// C++17. Identities outside this table are not subject to a floor check.
fn version_floor(compiler: &CompilerId) -> Option<CompilerVersion> {
    match compiler {
        CompilerId::Gcc => Some(CompilerVersion::new("7")),
        CompilerId::Clang => Some(CompilerVersion::new("5")),
        CompilerId::AppleClang => Some(CompilerVersion::new("9")),
        CompilerId::Msvc | CompilerId::Other(_) => None,
    }
}

/// Validate a toolchain against the recipe's supported standard set.
///
/// Pure: no side effects, no ambient state. The floor check is evaluated
/// first; the standard-set check runs as well so either failure is
/// distinguishable through the reason string.
pub fn validate(settings: &ToolchainSettings, supported_standards: &[String]) -> ValidationOutcome {
    let floor_failure = version_floor(&settings.compiler)
        .filter(|floor| settings.compiler_version < *floor)
        .map(|_| {
            format!(
                "requires C++17 or higher support; {} {} is not supported",
                settings.compiler, settings.compiler_version
            )
        });

    let standard_failure = settings.cxx_standard.as_deref().and_then(|requested| {
        if supported_standards.iter().any(|s| s == requested) {
            None
        } else {
            Some(format!(
                "requires the c++17 standard or higher; {} requested",
                requested
            ))
        }
    });

    match (floor_failure, standard_failure) {
        (Some(reason), _) => ValidationOutcome::Rejected(reason),
        (None, Some(reason)) => ValidationOutcome::Rejected(reason),
        (None, None) => ValidationOutcome::Accepted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::settings::ToolchainSettings;

    fn supported() -> Vec<String> {
        ["17", "gnu17", "20", "gnu20"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn settings(compiler: &str, version: &str) -> ToolchainSettings {
        ToolchainSettings::new(compiler, version)
    }

    #[test]
    fn test_gcc_below_floor_rejected() {
        let outcome = validate(
            &settings("gcc", "6").with_cxx_standard(Some("17".to_string())),
            &supported(),
        );
        let reason = outcome.reason().expect("should be rejected");
        assert!(reason.contains("gcc 6 is not supported"), "{}", reason);
    }

    #[test]
    fn test_floors_are_exclusive_below_inclusive_at() {
        for (compiler, below, at) in [("gcc", "6.5", "7"), ("clang", "4.0.1", "5"), ("apple-clang", "8", "9")] {
            assert!(
                !validate(&settings(compiler, below), &supported()).is_accepted(),
                "{} {} should be rejected",
                compiler,
                below
            );
            assert!(
                validate(&settings(compiler, at), &supported()).is_accepted(),
                "{} {} should be accepted",
                compiler,
                at
            );
        }
    }

    #[test]
    fn test_version_comparison_is_numeric() {
        // "10" < "7" lexically; must still be accepted against floor 7.
        assert!(validate(&settings("gcc", "10"), &supported()).is_accepted());
        // "7.0" meets floor "7".
        assert!(validate(&settings("gcc", "7.0"), &supported()).is_accepted());
    }

    #[test]
    fn test_floor_rejection_ignores_requested_standard() {
        // Below the floor, the outcome is rejection no matter what standard
        // was requested - or whether one was requested at all.
        for std in [None, Some("17".to_string()), Some("98".to_string())] {
            let outcome = validate(
                &settings("clang", "4").with_cxx_standard(std),
                &supported(),
            );
            assert!(outcome.reason().unwrap().contains("clang 4"));
        }
    }

    #[test]
    fn test_unknown_compiler_never_version_rejected() {
        for version in ["1", "14", "11.2.0", "weird-version"] {
            assert!(
                validate(&settings("msvc", version), &supported()).is_accepted(),
                "msvc {} should be accepted",
                version
            );
            assert!(
                validate(&settings("icc", version), &supported()).is_accepted(),
                "icc {} should be accepted",
                version
            );
        }
    }

    #[test]
    fn test_unsupported_standard_rejected() {
        let outcome = validate(
            &settings("gcc", "9").with_cxx_standard(Some("14".to_string())),
            &supported(),
        );
        let reason = outcome.reason().expect("should be rejected");
        assert!(reason.contains("14 requested"), "{}", reason);
        assert!(reason.contains("c++17 standard or higher"), "{}", reason);
    }

    #[test]
    fn test_absent_standard_accepts_default() {
        assert!(validate(&settings("gcc", "9"), &supported()).is_accepted());
        // Scenario from the wire: clang exactly at its floor, no standard.
        assert!(validate(&settings("clang", "5"), &supported()).is_accepted());
    }

    #[test]
    fn test_accepted_scenarios() {
        assert!(validate(
            &settings("gcc", "9").with_cxx_standard(Some("20".to_string())),
            &supported()
        )
        .is_accepted());
        assert!(validate(
            &settings("msvc", "14").with_cxx_standard(Some("17".to_string())),
            &supported()
        )
        .is_accepted());
    }

    #[test]
    fn test_unsupported_standard_on_unknown_compiler_still_rejected() {
        // The standard-set check is independent of the floor table.
        let outcome = validate(
            &settings("msvc", "14").with_cxx_standard(Some("11".to_string())),
            &supported(),
        );
        assert!(!outcome.is_accepted());
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationOutcome::Accepted.into_result().is_ok());
        let err = ValidationOutcome::Rejected("nope".to_string())
            .into_result()
            .unwrap_err();
        assert!(err.to_string().contains("nope"));
    }
}
