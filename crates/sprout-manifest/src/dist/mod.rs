//! Distribution assembly
//!
//! Combines manifest metadata, discovered packages, and loaded requirements
//! into a single distribution, and renders it as a core metadata document
//! for packaging tools.

use crate::config::SproutToml;
use crate::discover::find_packages_filtered;
use crate::requirements::{collect_specs, load_requirements};
use crate::ManifestResult;
use camino::Utf8Path;
use serde::Serialize;
use sprout_core::types::PackageMetadata;

/// A fully assembled distribution
#[derive(Debug, Clone, Serialize)]
pub struct Distribution {
    /// Static metadata from the manifest
    pub metadata: PackageMetadata,

    /// Dotted names of the packages shipped with the distribution
    pub packages: Vec<String>,

    /// Raw dependency entries, in requirements-file order
    pub install_requires: Vec<String>,
}

/// Resolve the package list for a manifest: an explicit include list wins,
/// otherwise packages are discovered on disk.
pub fn resolve_packages(root: &Utf8Path, config: &SproutToml) -> ManifestResult<Vec<String>> {
    if config.packages.include.is_empty() {
        find_packages_filtered(&root.join(&config.packages.root), &config.packages.exclude)
    } else {
        Ok(config.packages.include.clone())
    }
}

impl Distribution {
    /// Assemble a distribution from a project directory and its manifest
    pub fn assemble(root: &Utf8Path, config: &SproutToml) -> ManifestResult<Self> {
        let packages = resolve_packages(root, config)?;
        let install_requires = load_requirements(&root.join(&config.requirements.file))?;

        Ok(Distribution {
            metadata: config.package.metadata(),
            packages,
            install_requires,
        })
    }

    /// Render the distribution as a core metadata document (version 2.1).
    ///
    /// Dependency entries are validated here; blank lines and comments are
    /// dropped, and editable entries are an error.
    pub fn render_core_metadata(&self) -> ManifestResult<String> {
        let specs = collect_specs(&self.install_requires)?;

        let mut output = String::new();
        output.push_str("Metadata-Version: 2.1\n");
        output.push_str(&format!("Name: {}\n", self.metadata.name));
        output.push_str(&format!("Version: {}\n", self.metadata.version));

        if let Some(ref description) = self.metadata.description {
            output.push_str(&format!("Summary: {}\n", description));
        }
        if let Some(ref homepage) = self.metadata.homepage {
            output.push_str(&format!("Home-page: {}\n", homepage));
        }
        if let Some(ref author) = self.metadata.author {
            output.push_str(&format!("Author: {}\n", author));
        }
        if let Some(ref author_email) = self.metadata.author_email {
            output.push_str(&format!("Author-email: {}\n", author_email));
        }
        if let Some(ref license) = self.metadata.license {
            output.push_str(&format!("License: {}\n", license));
        }

        for spec in &specs {
            output.push_str(&format!("Requires-Dist: {}\n", spec));
        }

        Ok(output)
    }
}
