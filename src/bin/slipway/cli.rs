//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Slipway - a recipe-driven build and packaging tool for native libraries
#[derive(Parser)]
#[command(name = "slipway")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Recipe directory (defaults to the current directory)
    #[arg(long, global = true)]
    pub manifest_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the toolchain against the recipe without building
    Check(CheckArgs),

    /// Configure and build the library
    Build(BuildArgs),

    /// Build, install, and publish the package
    Package(PackageArgs),

    /// Show the metadata downstream consumers will see
    Info(InfoArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Toolchain description, normally injected by the invoking environment.
#[derive(Args, Debug, Clone)]
pub struct ToolchainCliArgs {
    /// Compiler identity (gcc, clang, apple-clang, msvc, ...)
    #[arg(long, env = "SLIPWAY_COMPILER")]
    pub compiler: String,

    /// Compiler version as reported by the environment
    #[arg(long, env = "SLIPWAY_COMPILER_VERSION")]
    pub compiler_version: String,

    /// Target operating system (defaults to the host)
    #[arg(long, env = "SLIPWAY_OS")]
    pub os: Option<String>,

    /// Target architecture (defaults to the host)
    #[arg(long, env = "SLIPWAY_ARCH")]
    pub arch: Option<String>,

    /// Build type (debug or release)
    #[arg(long, env = "SLIPWAY_BUILD_TYPE", default_value = "debug")]
    pub build_type: String,

    /// Requested C++ standard token (e.g. 17, gnu20)
    #[arg(long = "std", env = "SLIPWAY_CXX_STANDARD")]
    pub cxx_standard: Option<String>,
}

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub toolchain: ToolchainCliArgs,
}

#[derive(Args)]
pub struct BuildArgs {
    #[command(flatten)]
    pub toolchain: ToolchainCliArgs,

    /// Number of parallel jobs
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Override a recipe option (name=value)
    #[arg(short = 'o', long = "option", value_name = "NAME=VALUE")]
    pub options: Vec<String>,
}

#[derive(Args)]
pub struct PackageArgs {
    #[command(flatten)]
    pub toolchain: ToolchainCliArgs,

    /// Number of parallel jobs
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Override a recipe option (name=value)
    #[arg(short = 'o', long = "option", value_name = "NAME=VALUE")]
    pub options: Vec<String>,

    /// Package output directory (defaults to <recipe>/package)
    #[arg(long)]
    pub dest: Option<PathBuf>,
}

#[derive(Args)]
pub struct InfoArgs {
    /// Target operating system (defaults to the host)
    #[arg(long, env = "SLIPWAY_OS")]
    pub os: Option<String>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
