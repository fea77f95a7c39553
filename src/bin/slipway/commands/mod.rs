//! Command implementations

use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};

use slipway::core::options::OptionValue;
use slipway::core::recipe::Recipe;
use slipway::core::settings::{BuildType, TargetOs, ToolchainSettings};

use crate::cli::ToolchainCliArgs;

pub mod build;
pub mod check;
pub mod completions;
pub mod info;
pub mod package;

/// Load the recipe from the given directory, or the current directory.
pub fn load_recipe(manifest_dir: &Option<PathBuf>) -> Result<Recipe> {
    let dir = match manifest_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    Recipe::load(&dir)
}

/// Convert CLI toolchain flags into settings.
pub fn toolchain_settings(args: &ToolchainCliArgs) -> Result<ToolchainSettings> {
    let build_type: BuildType = args
        .build_type
        .parse()
        .map_err(|e| anyhow!("{}", e))?;

    let mut settings = ToolchainSettings::new(args.compiler.as_str(), args.compiler_version.as_str())
        .with_build_type(build_type)
        .with_cxx_standard(args.cxx_standard.clone());

    if let Some(ref os) = args.os {
        settings = settings.with_os(TargetOs::parse(os));
    }
    if let Some(ref arch) = args.arch {
        settings = settings.with_arch(arch.clone());
    }

    Ok(settings)
}

/// Parse repeated `name=value` option overrides.
pub fn parse_option_overrides(raw: &[String]) -> Result<Vec<(String, OptionValue)>> {
    let mut overrides = Vec::new();

    for spec in raw {
        let Some((name, value)) = spec.split_once('=') else {
            bail!(
                "invalid option `{}`\n\
                 hint: options are passed as -o name=value",
                spec
            );
        };
        overrides.push((name.trim().to_string(), OptionValue::parse(value.trim())));
    }

    Ok(overrides)
}
