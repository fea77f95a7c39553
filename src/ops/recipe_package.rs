//! Implementation of `slipway package`.
//!
//! The package phase re-enters configure with a freshly derived record, then
//! installs into the package directory, copies license files from the source
//! tree, and publishes the consumable metadata.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::builder::cmake::CmakeDriver;
use crate::builder::configure::derive_configuration;
use crate::builder::package_info::PackageInfo;
use crate::builder::validate::validate;
use crate::core::options::OptionValue;
use crate::core::recipe::Recipe;
use crate::core::settings::{TargetOs, ToolchainSettings};
use crate::ops::apply_option_overrides;
use crate::ops::recipe_build::build_dir;
use crate::util::fs::{collect_files, copy_license_files};

/// File name of the published metadata.
pub const PACKAGE_INFO_FILE: &str = "package-info.json";

/// Options for the package operation.
#[derive(Debug, Clone, Default)]
pub struct PackageOptions {
    /// Number of parallel jobs (None = let the build tool decide)
    pub jobs: Option<usize>,

    /// CLI option overrides (`-o name=value`)
    pub option_overrides: Vec<(String, OptionValue)>,

    /// Package output directory (defaults to `<recipe>/package`)
    pub dest: Option<PathBuf>,
}

/// Validate, configure, install, and publish one package.
///
/// Returns the package directory.
pub fn run_package(
    recipe: &Recipe,
    settings: &ToolchainSettings,
    opts: &PackageOptions,
) -> Result<PathBuf> {
    // Same fail-fast contract as the build phase.
    validate(settings, &recipe.supported_standards).into_result()?;

    let options = apply_option_overrides(recipe, &opts.option_overrides)?;
    // Fresh record for this phase; configure records are never shared.
    let record = derive_configuration(settings, &options, &recipe.source_path());

    let package_dir = opts
        .dest
        .clone()
        .unwrap_or_else(|| recipe.manifest_dir.join("package"));

    let driver = CmakeDriver::new(&record, build_dir(recipe, settings.build_type))
        .with_install_prefix(&package_dir)
        .with_jobs(opts.jobs);
    driver.configure()?;
    driver.build()?;
    driver.install()?;

    let licenses = copy_license_files(&recipe.source_path(), &package_dir.join("licenses"))?;
    tracing::debug!("copied {} license file(s)", licenses.len());

    publish_metadata(recipe, &settings.os, &package_dir)?;

    let files = collect_files(&package_dir)?;
    tracing::info!(
        "packaged {} {} ({} files) into {}",
        recipe.package.name,
        recipe.package.version,
        files.len(),
        package_dir.display()
    );

    Ok(package_dir)
}

/// Write package-info.json for downstream consumers.
fn publish_metadata(recipe: &Recipe, os: &TargetOs, package_dir: &Path) -> Result<()> {
    let info = PackageInfo::for_recipe(recipe, os);
    let json = serde_json::to_string_pretty(&info)?;

    let path = package_dir.join(PACKAGE_INFO_FILE);
    std::fs::write(&path, json).with_context(|| format!("failed to write `{}`", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::tests::test_recipe;
    use crate::util::diagnostic::UnsupportedToolchainError;

    #[test]
    fn test_rejected_toolchain_aborts_before_install() {
        let (_tmp, recipe) = test_recipe();
        let settings = ToolchainSettings::new("apple-clang", "8").with_os("macos");

        let err = run_package(&recipe, &settings, &PackageOptions::default()).unwrap_err();

        assert!(err.is::<UnsupportedToolchainError>());
        assert!(!recipe.manifest_dir.join("package").exists());
    }

    #[test]
    fn test_publish_metadata_is_independent_of_build() {
        let (tmp, recipe) = test_recipe();
        let dest = tmp.path().join("out");
        std::fs::create_dir(&dest).unwrap();

        publish_metadata(&recipe, &TargetOs::Linux, &dest).unwrap();

        let json = std::fs::read_to_string(dest.join(PACKAGE_INFO_FILE)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "libnine");
        assert_eq!(value["version"], "0.4.1");
        assert_eq!(value["libs"][0], "nine");
        assert_eq!(value["libs"][1], "m");
    }

    #[test]
    fn test_publish_metadata_windows_has_single_lib() {
        let (tmp, recipe) = test_recipe();
        let dest = tmp.path().join("out");
        std::fs::create_dir(&dest).unwrap();

        publish_metadata(&recipe, &TargetOs::Windows, &dest).unwrap();

        let json = std::fs::read_to_string(dest.join(PACKAGE_INFO_FILE)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["libs"].as_array().unwrap().len(), 1);
    }
}
