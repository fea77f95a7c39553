//! Toolchain settings - the environment a build runs against.
//!
//! Settings describe the compiler, its version, and the target platform for
//! one invocation. They are supplied by the invoking environment (CLI flags
//! or `SLIPWAY_*` variables), passed explicitly into the validator and the
//! configuration builder, and never read from ambient global state.

use std::fmt;

use crate::core::version::CompilerVersion;

/// Compiler identity.
///
/// This is an open set: identities outside the known families parse to
/// `Other` and are carried through untouched. The validator treats unknown
/// compilers as permissible, so parsing must never reject them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompilerId {
    /// GCC (GNU Compiler Collection)
    Gcc,
    /// Clang/LLVM
    Clang,
    /// Apple Clang (macOS)
    AppleClang,
    /// Microsoft Visual C++
    Msvc,
    /// Any other compiler identity, kept verbatim
    Other(String),
}

impl CompilerId {
    /// Parse a compiler identity. Never fails; unrecognized names become
    /// `Other`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "gcc" | "g++" => CompilerId::Gcc,
            "clang" | "clang++" => CompilerId::Clang,
            "apple-clang" | "appleclang" => CompilerId::AppleClang,
            "msvc" | "cl" => CompilerId::Msvc,
            _ => CompilerId::Other(s.trim().to_string()),
        }
    }

    /// Get the identity name as a string.
    pub fn as_str(&self) -> &str {
        match self {
            CompilerId::Gcc => "gcc",
            CompilerId::Clang => "clang",
            CompilerId::AppleClang => "apple-clang",
            CompilerId::Msvc => "msvc",
            CompilerId::Other(name) => name,
        }
    }
}

impl From<&str> for CompilerId {
    fn from(s: &str) -> Self {
        CompilerId::parse(s)
    }
}

impl fmt::Display for CompilerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Target operating system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetOs {
    Linux,
    Macos,
    Windows,
    /// Any other OS name, kept verbatim
    Other(String),
}

impl TargetOs {
    /// Parse an OS name. Never fails; unrecognized names become `Other`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "linux" => TargetOs::Linux,
            "macos" | "darwin" => TargetOs::Macos,
            "windows" => TargetOs::Windows,
            _ => TargetOs::Other(s.trim().to_string()),
        }
    }

    /// The OS slipway itself is running on.
    pub fn host() -> Self {
        if cfg!(target_os = "windows") {
            TargetOs::Windows
        } else if cfg!(target_os = "macos") {
            TargetOs::Macos
        } else {
            TargetOs::Linux
        }
    }

    /// Windows-family targets reject position-independent-code flags.
    pub fn is_windows_family(&self) -> bool {
        matches!(self, TargetOs::Windows)
    }

    /// Linux-family targets need the system math library linked explicitly.
    pub fn is_linux_family(&self) -> bool {
        matches!(self, TargetOs::Linux)
    }

    /// Get the OS name as a string.
    pub fn as_str(&self) -> &str {
        match self {
            TargetOs::Linux => "linux",
            TargetOs::Macos => "macos",
            TargetOs::Windows => "windows",
            TargetOs::Other(name) => name,
        }
    }
}

impl From<&str> for TargetOs {
    fn from(s: &str) -> Self {
        TargetOs::parse(s)
    }
}

impl fmt::Display for TargetOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Build type handed to the external build tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildType {
    #[default]
    Debug,
    Release,
}

impl BuildType {
    /// The spelling the external build tool expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildType::Debug => "Debug",
            BuildType::Release => "Release",
        }
    }
}

impl std::str::FromStr for BuildType {
    type Err = BuildTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(BuildType::Debug),
            "release" => Ok(BuildType::Release),
            _ => Err(BuildTypeParseError(s.to_string())),
        }
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an invalid build type.
#[derive(Debug, Clone)]
pub struct BuildTypeParseError(pub String);

impl fmt::Display for BuildTypeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid build type '{}', valid values: debug, release",
            self.0
        )
    }
}

impl std::error::Error for BuildTypeParseError {}

/// The full toolchain description for one build or package invocation.
///
/// Immutable once constructed; the lifecycle passes it by reference into the
/// validator and the configuration builder.
#[derive(Debug, Clone)]
pub struct ToolchainSettings {
    /// Compiler identity (open set)
    pub compiler: CompilerId,

    /// Compiler version as reported by the environment
    pub compiler_version: CompilerVersion,

    /// Target operating system
    pub os: TargetOs,

    /// Target architecture (opaque, passed through)
    pub arch: String,

    /// Build type for the external build tool
    pub build_type: BuildType,

    /// Requested C++ standard token (e.g. "17", "gnu20"); `None` means
    /// unspecified, accept the default
    pub cxx_standard: Option<String>,
}

impl ToolchainSettings {
    /// Create settings for the given compiler and version, with host OS,
    /// host architecture, and a debug build type.
    pub fn new(compiler: impl Into<CompilerId>, version: impl Into<CompilerVersion>) -> Self {
        ToolchainSettings {
            compiler: compiler.into(),
            compiler_version: version.into(),
            os: TargetOs::host(),
            arch: std::env::consts::ARCH.to_string(),
            build_type: BuildType::default(),
            cxx_standard: None,
        }
    }

    /// Set the target OS.
    pub fn with_os(mut self, os: impl Into<TargetOs>) -> Self {
        self.os = os.into();
        self
    }

    /// Set the target architecture.
    pub fn with_arch(mut self, arch: impl Into<String>) -> Self {
        self.arch = arch.into();
        self
    }

    /// Set the build type.
    pub fn with_build_type(mut self, build_type: BuildType) -> Self {
        self.build_type = build_type;
        self
    }

    /// Set the requested C++ standard token.
    pub fn with_cxx_standard(mut self, std: Option<String>) -> Self {
        self.cxx_standard = std;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compiler_id_parse() {
        assert_eq!(CompilerId::parse("gcc"), CompilerId::Gcc);
        assert_eq!(CompilerId::parse("Clang"), CompilerId::Clang);
        assert_eq!(CompilerId::parse("apple-clang"), CompilerId::AppleClang);
        assert_eq!(CompilerId::parse("cl"), CompilerId::Msvc);
        assert_eq!(
            CompilerId::parse("icc"),
            CompilerId::Other("icc".to_string())
        );
    }

    #[test]
    fn test_target_os_parse() {
        assert_eq!(TargetOs::parse("Linux"), TargetOs::Linux);
        assert_eq!(TargetOs::parse("darwin"), TargetOs::Macos);
        assert_eq!(TargetOs::parse("Windows"), TargetOs::Windows);
        assert_eq!(
            TargetOs::parse("freebsd"),
            TargetOs::Other("freebsd".to_string())
        );
    }

    #[test]
    fn test_os_families() {
        assert!(TargetOs::Windows.is_windows_family());
        assert!(!TargetOs::Linux.is_windows_family());
        assert!(TargetOs::Linux.is_linux_family());
        assert!(!TargetOs::Macos.is_linux_family());
        assert!(!TargetOs::Other("freebsd".into()).is_linux_family());
    }

    #[test]
    fn test_build_type_parse() {
        assert_eq!("debug".parse::<BuildType>().unwrap(), BuildType::Debug);
        assert_eq!("Release".parse::<BuildType>().unwrap(), BuildType::Release);
        assert!("profile".parse::<BuildType>().is_err());
        assert_eq!(BuildType::Release.as_str(), "Release");
    }

    #[test]
    fn test_settings_builder() {
        let settings = ToolchainSettings::new("gcc", "9.3")
            .with_os("linux")
            .with_build_type(BuildType::Release)
            .with_cxx_standard(Some("17".to_string()));

        assert_eq!(settings.compiler, CompilerId::Gcc);
        assert_eq!(settings.compiler_version.as_str(), "9.3");
        assert_eq!(settings.os, TargetOs::Linux);
        assert_eq!(settings.build_type, BuildType::Release);
        assert_eq!(settings.cxx_standard.as_deref(), Some("17"));
    }
}
