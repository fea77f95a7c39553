//! CMake adapter.
//!
//! Renders a `ConfigurationRecord` into cmake invocations for the
//! configure, build, and install steps. The adapter is a thin sequential
//! wrapper; all decision logic lives upstream in validation and
//! configuration derivation.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use crate::builder::configure::ConfigurationRecord;
use crate::core::options::{OptionValue, POSITION_INDEPENDENT_CODE, SHARED};
use crate::util::fs::ensure_dir;
use crate::util::process::{find_cmake, ProcessBuilder};

/// Map a recipe option name to its CMake cache variable.
fn cmake_name(option: &str) -> String {
    match option {
        SHARED => "BUILD_SHARED_LIBS".to_string(),
        POSITION_INDEPENDENT_CODE => "CMAKE_POSITION_INDEPENDENT_CODE".to_string(),
        other => other.to_uppercase(),
    }
}

/// Render an option value in CMake's spelling.
fn cmake_value(value: &OptionValue) -> String {
    match value {
        OptionValue::Bool(true) => "ON".to_string(),
        OptionValue::Bool(false) => "OFF".to_string(),
        OptionValue::Str(s) => s.clone(),
    }
}

/// Drives cmake for one configuration record.
pub struct CmakeDriver<'a> {
    record: &'a ConfigurationRecord,
    build_dir: PathBuf,
    install_prefix: Option<PathBuf>,
    jobs: Option<usize>,
}

impl<'a> CmakeDriver<'a> {
    /// Create a driver for the given record and build directory.
    pub fn new(record: &'a ConfigurationRecord, build_dir: impl Into<PathBuf>) -> Self {
        CmakeDriver {
            record,
            build_dir: build_dir.into(),
            install_prefix: None,
            jobs: None,
        }
    }

    /// Set the install prefix for the install step.
    pub fn with_install_prefix(mut self, prefix: impl Into<PathBuf>) -> Self {
        self.install_prefix = Some(prefix.into());
        self
    }

    /// Cap the parallel job count.
    pub fn with_jobs(mut self, jobs: Option<usize>) -> Self {
        self.jobs = jobs;
        self
    }

    fn cmake_path(&self) -> Result<PathBuf> {
        match find_cmake() {
            Some(path) => Ok(path),
            None => bail!(
                "cmake not found\n\
                 \n\
                 CMake is required to configure and build the library.\n\
                 Install CMake and ensure it's in your PATH."
            ),
        }
    }

    /// Arguments for the configure step.
    fn configure_args(&self) -> Vec<String> {
        let mut args = vec![
            "-S".to_string(),
            self.record.source_dir.display().to_string(),
            "-B".to_string(),
            self.build_dir.display().to_string(),
            format!("-DCMAKE_BUILD_TYPE={}", self.record.build_type),
        ];

        if let Some(ref prefix) = self.install_prefix {
            args.push(format!("-DCMAKE_INSTALL_PREFIX={}", prefix.display()));
        }

        for (key, value) in &self.record.definitions {
            args.push(format!("-D{}={}", key, cmake_value(value)));
        }

        for (name, value) in self.record.options.iter() {
            args.push(format!("-D{}={}", cmake_name(name), cmake_value(value)));
        }

        args
    }

    /// Arguments for the build step.
    fn build_args(&self) -> Vec<String> {
        let mut args = vec!["--build".to_string(), self.build_dir.display().to_string()];

        if self.record.parallel {
            args.push("--parallel".to_string());
            if let Some(jobs) = self.jobs {
                args.push(jobs.to_string());
            }
        }

        // Multi-config generators need --config
        args.push("--config".to_string());
        args.push(self.record.build_type.to_string());

        args
    }

    /// Arguments for the install step.
    fn install_args(&self) -> Vec<String> {
        let mut args = vec![
            "--install".to_string(),
            self.build_dir.display().to_string(),
            "--config".to_string(),
            self.record.build_type.to_string(),
        ];

        if let Some(ref prefix) = self.install_prefix {
            args.push("--prefix".to_string());
            args.push(prefix.display().to_string());
        }

        args
    }

    /// Run the configure step.
    pub fn configure(&self) -> Result<()> {
        tracing::info!("configuring {}", self.record.source_dir.display());

        ensure_dir(&self.build_dir)?;

        let cmake = self.cmake_path()?;
        let cmd = ProcessBuilder::new(cmake).args(self.configure_args());
        tracing::debug!("cmake configure: {}", cmd.display_command());

        let output = cmd.exec()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("cmake configure failed:\n{}", stderr);
        }

        Ok(())
    }

    /// Run the build step.
    pub fn build(&self) -> Result<()> {
        tracing::info!("building in {}", self.build_dir.display());

        let cmake = self.cmake_path()?;
        let cmd = ProcessBuilder::new(cmake).args(self.build_args());
        tracing::debug!("cmake build: {}", cmd.display_command());

        let output = cmd.exec()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("cmake build failed:\n{}", stderr);
        }

        Ok(())
    }

    /// Run the install step.
    pub fn install(&self) -> Result<()> {
        tracing::info!("installing from {}", self.build_dir.display());

        let cmake = self.cmake_path()?;
        let cmd = ProcessBuilder::new(cmake).args(self.install_args());
        tracing::debug!("cmake install: {}", cmd.display_command());

        let output = cmd.exec()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("cmake install failed:\n{}", stderr);
        }

        Ok(())
    }
}

/// Check if a directory contains a CMake project.
pub fn is_cmake_project(dir: &Path) -> bool {
    dir.join("CMakeLists.txt").exists()
}
