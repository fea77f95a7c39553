//! Lifecycle operations.
//!
//! Each operation runs the same fixed sequence - validate, then derive a
//! fresh configuration, then drive the external build tool - and aborts on
//! the first failure. A rejected validation aborts before the build tool is
//! invoked at all.

use anyhow::{bail, Result};

use crate::core::options::{OptionSet, OptionValue};
use crate::core::recipe::Recipe;

pub mod recipe_build;
pub mod recipe_package;

/// Apply CLI option overrides on top of the recipe's declared defaults.
///
/// Only options the recipe declares may be overridden; the schema is fixed
/// at authoring time.
pub fn apply_option_overrides(
    recipe: &Recipe,
    overrides: &[(String, OptionValue)],
) -> Result<OptionSet> {
    let mut options = recipe.default_options.clone();

    for (name, value) in overrides {
        if !options.contains(name) {
            let available: Vec<_> = recipe.default_options.names().collect();
            bail!(
                "unknown option `{}`\n\
                 available options: {}",
                name,
                if available.is_empty() {
                    "(none)".to_string()
                } else {
                    available.join(", ")
                }
            );
        }
        options = options.with(name.clone(), value.clone());
    }

    Ok(options)
}
