//! `slipway build` command

use std::path::PathBuf;

use anyhow::Result;

use slipway::ops::recipe_build::{run_build, BuildOptions};

use crate::cli::BuildArgs;
use crate::commands::{load_recipe, parse_option_overrides, toolchain_settings};

pub fn execute(manifest_dir: &Option<PathBuf>, args: BuildArgs) -> Result<()> {
    let recipe = load_recipe(manifest_dir)?;
    let settings = toolchain_settings(&args.toolchain)?;

    let opts = BuildOptions {
        jobs: args.jobs,
        option_overrides: parse_option_overrides(&args.options)?,
    };

    run_build(&recipe, &settings, &opts)
}
