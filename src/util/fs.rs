//! Filesystem helpers.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// Create a directory and all parents if missing.
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)
        .with_context(|| format!("failed to create directory `{}`", path.display()))
}

/// Copy license files from the top level of `source_dir` into `dest_dir`.
///
/// Matches the conventional names (LICENSE, LICENSE.md, COPYING, ...) and
/// returns the copied file names.
pub fn copy_license_files(source_dir: &Path, dest_dir: &Path) -> Result<Vec<String>> {
    let mut copied = Vec::new();

    if !source_dir.is_dir() {
        return Ok(copied);
    }

    for entry in std::fs::read_dir(source_dir)
        .with_context(|| format!("failed to read `{}`", source_dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        let upper = name.to_uppercase();
        if upper.starts_with("LICENSE") || upper.starts_with("COPYING") || upper == "NOTICE" {
            ensure_dir(dest_dir)?;
            std::fs::copy(&path, dest_dir.join(name))
                .with_context(|| format!("failed to copy `{}`", path.display()))?;
            copied.push(name.to_string());
        }
    }

    copied.sort();
    Ok(copied)
}

/// Recursively collect all regular files under `dir`.
pub fn collect_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = entry.with_context(|| format!("failed to walk `{}`", dir.display()))?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}
