//! Slipway - a recipe-driven build and packaging tool for native libraries
//!
//! This crate provides the core library functionality for Slipway: deciding
//! whether a toolchain can build a recipe at all, deriving the configuration
//! handed to the external build tool, and publishing package metadata for
//! downstream consumers.

pub mod builder;
pub mod core;
pub mod ops;
pub mod util;

pub use crate::core::{
    options::OptionSet, recipe::Recipe, settings::ToolchainSettings, version::CompilerVersion,
};

pub use crate::builder::configure::ConfigurationRecord;
pub use crate::builder::validate::ValidationOutcome;
