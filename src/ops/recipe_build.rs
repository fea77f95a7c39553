//! Implementation of `slipway build`.

use std::path::PathBuf;

use anyhow::Result;

use crate::builder::cmake::CmakeDriver;
use crate::builder::configure::derive_configuration;
use crate::builder::validate::validate;
use crate::core::options::OptionValue;
use crate::core::recipe::Recipe;
use crate::core::settings::{BuildType, ToolchainSettings};
use crate::ops::apply_option_overrides;

/// Options for the build operation.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Number of parallel jobs (None = let the build tool decide)
    pub jobs: Option<usize>,

    /// CLI option overrides (`-o name=value`)
    pub option_overrides: Vec<(String, OptionValue)>,
}

/// Where build trees live for a given build type.
pub fn build_dir(recipe: &Recipe, build_type: BuildType) -> PathBuf {
    recipe
        .manifest_dir
        .join("build")
        .join(build_type.as_str().to_lowercase())
}

/// Validate the toolchain, derive a configuration, and drive the external
/// build tool through configure and build.
pub fn run_build(
    recipe: &Recipe,
    settings: &ToolchainSettings,
    opts: &BuildOptions,
) -> Result<()> {
    // A rejected toolchain aborts here, before any build-tool invocation.
    validate(settings, &recipe.supported_standards).into_result()?;

    let options = apply_option_overrides(recipe, &opts.option_overrides)?;
    let record = derive_configuration(settings, &options, &recipe.source_path());

    let driver = CmakeDriver::new(&record, build_dir(recipe, settings.build_type))
        .with_jobs(opts.jobs);
    driver.configure()?;
    driver.build()?;

    tracing::info!(
        "built {} {} with {} {}",
        recipe.package.name,
        recipe.package.version,
        settings.compiler,
        settings.compiler_version
    );

    Ok(())
}
