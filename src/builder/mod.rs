//! The decision core and the build-tool adapter.
//!
//! `validate` decides whether a build is permissible at all, `configure`
//! derives the record handed to the external build tool, `cmake` drives that
//! tool, and `package_info` computes what downstream consumers see.

pub mod cmake;
pub mod configure;
pub mod package_info;
pub mod validate;

pub use cmake::CmakeDriver;
pub use configure::{derive_configuration, ConfigurationRecord};
pub use package_info::{link_requirements, PackageInfo};
pub use validate::{validate, ValidationOutcome};
