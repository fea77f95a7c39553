//! `slipway package` command

use std::path::PathBuf;

use anyhow::Result;

use slipway::ops::recipe_package::{run_package, PackageOptions};

use crate::cli::PackageArgs;
use crate::commands::{load_recipe, parse_option_overrides, toolchain_settings};

pub fn execute(manifest_dir: &Option<PathBuf>, args: PackageArgs) -> Result<()> {
    let recipe = load_recipe(manifest_dir)?;
    let settings = toolchain_settings(&args.toolchain)?;

    let opts = PackageOptions {
        jobs: args.jobs,
        option_overrides: parse_option_overrides(&args.options)?,
        dest: args.dest,
    };

    let package_dir = run_package(&recipe, &settings, &opts)?;
    println!("packaged into {}", package_dir.display());

    Ok(())
}
