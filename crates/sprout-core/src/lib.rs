//! # sprout-core
//!
//! Core types and utilities shared across all Sprout crates.
//!
//! This crate provides:
//! - Version type for PEP 440 release-segment versions
//! - Requirement and PackageMetadata types for distribution declarations
//! - SproutError enum for unified error handling
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `types`: Core data types (Version, Requirement, PackageMetadata)
//! - `error`: Error types and result aliases

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{SproutError, SproutResult};
pub use types::{CompareOp, Constraint, PackageMetadata, Requirement, Version, VersionError};
