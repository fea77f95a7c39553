//! `slipway info` command
//!
//! Prints the metadata downstream consumers will see. Works without a
//! build: link requirements depend only on the target OS.

use std::path::PathBuf;

use anyhow::Result;

use slipway::builder::package_info::PackageInfo;
use slipway::core::settings::TargetOs;

use crate::cli::InfoArgs;
use crate::commands::load_recipe;

pub fn execute(manifest_dir: &Option<PathBuf>, args: InfoArgs) -> Result<()> {
    let recipe = load_recipe(manifest_dir)?;

    let os = args
        .os
        .as_deref()
        .map(TargetOs::parse)
        .unwrap_or_else(TargetOs::host);

    let info = PackageInfo::for_recipe(&recipe, &os);
    println!("{}", serde_json::to_string_pretty(&info)?);

    Ok(())
}
