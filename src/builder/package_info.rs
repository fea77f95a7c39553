//! Package metadata published to downstream consumers.
//!
//! The link-requirement list is a pure function of the target OS: the
//! library name itself, plus the system math library on Linux-family
//! targets. It never depends on whether a build succeeded, so consumers can
//! query it at any point in the lifecycle.

use semver::Version;
use serde::Serialize;

use crate::core::recipe::Recipe;
use crate::core::settings::TargetOs;

/// Libraries a consumer must link, in link order.
pub fn link_requirements(lib_name: &str, os: &TargetOs) -> Vec<String> {
    let mut libs = vec![lib_name.to_string()];
    if os.is_linux_family() {
        libs.push("m".to_string());
    }
    libs
}

/// Consumable package description, serialized as package-info.json.
#[derive(Debug, Clone, Serialize)]
pub struct PackageInfo {
    pub name: String,
    pub version: Version,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    /// Libraries to link, in link order
    pub libs: Vec<String>,
}

impl PackageInfo {
    /// Compute the published metadata for a recipe on a target OS.
    pub fn for_recipe(recipe: &Recipe, os: &TargetOs) -> PackageInfo {
        PackageInfo {
            name: recipe.package.name.clone(),
            version: recipe.package.version.clone(),
            description: recipe.package.description.clone(),
            license: recipe.package.license.clone(),
            libs: link_requirements(&recipe.lib_name, os),
        }
    }
}
