//! `slipway check` command

use std::path::PathBuf;

use anyhow::Result;

use slipway::builder::validate::validate;

use crate::cli::CheckArgs;
use crate::commands::{load_recipe, toolchain_settings};

pub fn execute(manifest_dir: &Option<PathBuf>, args: CheckArgs) -> Result<()> {
    let recipe = load_recipe(manifest_dir)?;
    let settings = toolchain_settings(&args.toolchain)?;

    validate(&settings, &recipe.supported_standards).into_result()?;

    println!(
        "{} {} on {} can build {} {}",
        settings.compiler,
        settings.compiler_version,
        settings.os,
        recipe.package.name,
        recipe.package.version
    );

    Ok(())
}
