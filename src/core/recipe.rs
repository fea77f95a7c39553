//! recipe.toml parsing and schema.
//!
//! A recipe declares, at authoring time, everything slipway needs to drive a
//! native library through configure/build/install: package metadata, the
//! packaged library name, the language standards the library supports, and
//! the option schema with its defaults.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use semver::Version;
use serde::Deserialize;

use crate::core::options::{OptionSet, OptionValue};

/// The canonical manifest file name.
pub const MANIFEST_FILE: &str = "recipe.toml";

/// Raw manifest as deserialized from recipe.toml.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RecipeToml {
    package: PackageToml,
    #[serde(default)]
    library: LibraryToml,
    #[serde(default)]
    options: BTreeMap<String, toml::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PackageToml {
    name: String,
    version: Version,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    license: Option<String>,
    #[serde(default)]
    authors: Vec<String>,
    #[serde(default)]
    homepage: Option<String>,
    #[serde(default)]
    topics: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct LibraryToml {
    /// Name of the produced library (defaults to the package name)
    #[serde(default)]
    name: Option<String>,

    /// Directory holding the library sources, relative to the manifest
    #[serde(default)]
    source_dir: Option<PathBuf>,

    /// Language standard tokens the library supports
    #[serde(default)]
    supported_standards: Vec<String>,
}

/// Package metadata from the `[package]` section.
#[derive(Debug, Clone)]
pub struct PackageMetadata {
    pub name: String,
    pub version: Version,
    pub description: Option<String>,
    pub license: Option<String>,
    pub authors: Vec<String>,
    pub homepage: Option<String>,
    pub topics: Vec<String>,
}

/// A validated recipe.
#[derive(Debug, Clone)]
pub struct Recipe {
    /// Package metadata
    pub package: PackageMetadata,

    /// Name of the library artifact consumers link against
    pub lib_name: String,

    /// Library source directory, relative to the manifest directory
    pub source_dir: PathBuf,

    /// Standard tokens the library supports (never empty)
    pub supported_standards: Vec<String>,

    /// Declared option defaults
    pub default_options: OptionSet,

    /// Directory containing recipe.toml
    pub manifest_dir: PathBuf,
}

impl Recipe {
    /// Load and validate the recipe in `dir`.
    pub fn load(dir: &Path) -> Result<Recipe> {
        let manifest_path = dir.join(MANIFEST_FILE);
        if !manifest_path.exists() {
            bail!(
                "no {} found in `{}`\n\
                 hint: run slipway from the recipe directory or pass --manifest-dir",
                MANIFEST_FILE,
                dir.display()
            );
        }

        let text = std::fs::read_to_string(&manifest_path)
            .with_context(|| format!("failed to read `{}`", manifest_path.display()))?;

        let raw: RecipeToml = toml::from_str(&text)
            .with_context(|| format!("failed to parse `{}`", manifest_path.display()))?;

        Recipe::from_raw(raw, dir)
    }

    fn from_raw(raw: RecipeToml, dir: &Path) -> Result<Recipe> {
        if raw.package.name.is_empty() {
            bail!("package name must not be empty");
        }

        if raw.library.supported_standards.is_empty() {
            bail!(
                "recipe `{}` declares no supported language standards\n\
                 hint: add `supported-standards = [\"17\", \"gnu17\", \"20\", \"gnu20\"]` \
                 to the [library] section",
                raw.package.name
            );
        }

        let mut default_options = OptionSet::new();
        for (name, value) in raw.options {
            let value = match value {
                toml::Value::Boolean(b) => OptionValue::Bool(b),
                toml::Value::String(s) => OptionValue::Str(s),
                other => bail!(
                    "option `{}` has unsupported type {}; only booleans and strings are allowed",
                    name,
                    other.type_str()
                ),
            };
            default_options = default_options.with(name, value);
        }

        let lib_name = raw
            .library
            .name
            .unwrap_or_else(|| raw.package.name.clone());

        Ok(Recipe {
            package: PackageMetadata {
                name: raw.package.name,
                version: raw.package.version,
                description: raw.package.description,
                license: raw.package.license,
                authors: raw.package.authors,
                homepage: raw.package.homepage,
                topics: raw.package.topics,
            },
            lib_name,
            source_dir: raw.library.source_dir.unwrap_or_else(|| PathBuf::from(".")),
            supported_standards: raw.library.supported_standards,
            default_options,
            manifest_dir: dir.to_path_buf(),
        })
    }

    /// Whether the recipe supports the given standard token.
    pub fn supports_standard(&self, token: &str) -> bool {
        self.supported_standards.iter().any(|s| s == token)
    }

    /// Absolute path to the library sources.
    pub fn source_path(&self) -> PathBuf {
        self.manifest_dir.join(&self.source_dir)
    }
}
