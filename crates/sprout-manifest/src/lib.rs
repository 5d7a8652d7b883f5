//! Manifest handling for the Sprout packaging toolkit
//!
//! This crate reads sprout.toml project manifests, loads requirements files,
//! discovers importable packages on disk, and assembles everything into a
//! distribution ready for metadata rendering.

pub mod config;
pub mod discover;
pub mod dist;
pub mod requirements;

// Re-export main types
pub use config::{PackageSection, PackagesSection, RequirementsSection, SproutToml};
pub use discover::{find_packages, find_packages_filtered};
pub use dist::{resolve_packages, Distribution};
pub use requirements::{load_requirements, parse_requirements, RequirementLine};

use sprout_core::error::SproutError;

/// Name of the project manifest file
pub const MANIFEST_FILE: &str = "sprout.toml";

/// Result type for manifest operations
pub type ManifestResult<T> = Result<T, SproutError>;
