//! Package discovery
//!
//! Walks a project tree and reports importable packages as dotted names. A
//! directory counts as a package when its name is a valid identifier and it
//! contains an `__init__.py`; directories that fail the test are not
//! descended into.

use crate::ManifestResult;
use camino::Utf8Path;
use sprout_core::error::SproutError;
use walkdir::{DirEntry, WalkDir};

/// Marker file that makes a directory an importable package
pub const INIT_FILE: &str = "__init__.py";

/// Discover every package under a directory
pub fn find_packages(root: &Utf8Path) -> ManifestResult<Vec<String>> {
    find_packages_filtered(root, &[])
}

/// Discover packages, dropping dotted names that match an exclude pattern.
///
/// Excluded packages are still descended into, so a sub-package survives
/// even when its parent is filtered out.
pub fn find_packages_filtered(root: &Utf8Path, exclude: &[String]) -> ManifestResult<Vec<String>> {
    let mut patterns = Vec::with_capacity(exclude.len());
    for pattern in exclude {
        let compiled = glob::Pattern::new(pattern).map_err(|e| SproutError::ConfigValidation {
            field: "packages.exclude".to_string(),
            reason: format!("invalid pattern '{}': {}", pattern, e),
        })?;
        patterns.push(compiled);
    }

    let mut packages = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(is_package_candidate);

    for entry in walker {
        let entry = entry
            .map_err(|e| SproutError::io(format!("Failed to walk {}", root), e.into()))?;

        if entry.depth() == 0 {
            continue;
        }

        let relative = entry.path().strip_prefix(root.as_std_path()).map_err(|e| {
            SproutError::io(
                format!("Failed to strip prefix: {}", e),
                std::io::Error::new(std::io::ErrorKind::Other, e.to_string()),
            )
        })?;

        let name = relative
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join(".");

        if !patterns.iter().any(|pattern| pattern.matches(&name)) {
            packages.push(name);
        }
    }

    packages.sort();
    Ok(packages)
}

/// Keep the walk root, descend only into directories that are packages
fn is_package_candidate(entry: &DirEntry) -> bool {
    if entry.depth() == 0 {
        return true;
    }

    if !entry.file_type().is_dir() {
        return false;
    }

    let Some(name) = entry.file_name().to_str() else {
        return false;
    };

    is_python_identifier(name) && entry.path().join(INIT_FILE).is_file()
}

/// Check that a name is usable as a Python identifier
pub(crate) fn is_python_identifier(part: &str) -> bool {
    let mut chars = part.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {},
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
