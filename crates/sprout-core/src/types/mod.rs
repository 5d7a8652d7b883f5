//! Core data types for Sprout distribution handling.
//!
//! This module provides the fundamental types used throughout the Sprout
//! crates:
//! - Version type for release-segment versions
//! - Requirement specifiers with extras, constraints and markers
//! - Package metadata structures

pub mod metadata;
pub mod requirement;
pub mod version;

// Re-export all public types
pub use metadata::PackageMetadata;
pub use requirement::{CompareOp, Constraint, Requirement};
pub use version::{Version, VersionError};
