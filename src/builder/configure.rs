//! Build configuration derivation.
//!
//! Turns validated settings plus declared options into the record the
//! external build tool consumes. Pure and idempotent: the same inputs always
//! produce a structurally identical record, and each lifecycle phase derives
//! its own record instead of sharing one.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::core::options::{OptionSet, OptionValue, POSITION_INDEPENDENT_CODE};
use crate::core::settings::{BuildType, ToolchainSettings};

/// Definition disabling external package-config file generation, so the
/// produced artifact stays self-contained.
const PKG_CONFIG: &str = "PKG_CONFIG";

/// One configure step's worth of input for the external build tool.
///
/// Value semantics: produced fresh per invocation, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationRecord {
    /// Fixed key/value definitions
    pub definitions: BTreeMap<String, OptionValue>,

    /// Recipe options after platform-conditional reduction
    pub options: OptionSet,

    /// Library source directory
    pub source_dir: PathBuf,

    /// Build type for the configure step
    pub build_type: BuildType,

    /// Ask the build tool to parallelize; the core itself never spawns
    pub parallel: bool,
}

/// Derive the configuration record for one configure step.
///
/// Windows-family toolchains commonly reject the position-independent-code
/// flag, so that option is removed from the working copy - removed, not set
/// to false, so the flag is never emitted at all and cannot reappear in a
/// later record with a default value.
pub fn derive_configuration(
    settings: &ToolchainSettings,
    options: &OptionSet,
    source_dir: &Path,
) -> ConfigurationRecord {
    let options = if settings.os.is_windows_family() {
        options.without(POSITION_INDEPENDENT_CODE)
    } else {
        options.clone()
    };

    let mut definitions = BTreeMap::new();
    definitions.insert(PKG_CONFIG.to_string(), OptionValue::Bool(false));

    ConfigurationRecord {
        definitions,
        options,
        source_dir: source_dir.to_path_buf(),
        build_type: settings.build_type,
        parallel: true,
    }
}
