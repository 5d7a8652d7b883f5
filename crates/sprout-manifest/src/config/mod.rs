//! sprout.toml manifest parsing and serialization

use crate::discover::is_python_identifier;
use crate::ManifestResult;
use serde::{Deserialize, Serialize};
use sprout_core::error::SproutError;
use sprout_core::types::{PackageMetadata, Version};

/// Complete sprout.toml configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SproutToml {
    /// Package metadata section
    pub package: PackageSection,

    /// Requirements file settings
    #[serde(default)]
    pub requirements: RequirementsSection,

    /// Package discovery settings
    #[serde(default)]
    pub packages: PackagesSection,
}

/// Package metadata section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageSection {
    /// Distribution name (required)
    pub name: String,

    /// Distribution version (required)
    pub version: Version,

    /// Author name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Author contact address
    #[serde(skip_serializing_if = "Option::is_none", rename = "author-email")]
    pub author_email: Option<String>,

    /// Short description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// License identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    /// Homepage URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
}

/// Requirements file settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementsSection {
    /// Requirements file path, relative to the project root
    #[serde(default = "default_requirements_file")]
    pub file: String,
}

/// Package discovery settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackagesSection {
    /// Directory to search, relative to the project root
    #[serde(default = "default_packages_root")]
    pub root: String,

    /// Glob patterns for dotted package names to exclude from discovery
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Explicit package list; when non-empty, discovery is skipped
    #[serde(default)]
    pub include: Vec<String>,
}

impl Default for RequirementsSection {
    fn default() -> Self {
        Self {
            file: default_requirements_file(),
        }
    }
}

impl Default for PackagesSection {
    fn default() -> Self {
        Self {
            root: default_packages_root(),
            exclude: Vec::new(),
            include: Vec::new(),
        }
    }
}

/// Default requirements file path ("requirements.txt")
fn default_requirements_file() -> String {
    "requirements.txt".to_string()
}

/// Default package discovery root (".")
fn default_packages_root() -> String {
    ".".to_string()
}

impl PackageSection {
    /// Convert the section into distribution metadata
    pub fn metadata(&self) -> PackageMetadata {
        PackageMetadata {
            name: self.name.clone(),
            version: self.version.clone(),
            author: self.author.clone(),
            author_email: self.author_email.clone(),
            description: self.description.clone(),
            license: self.license.clone(),
            homepage: self.homepage.clone(),
        }
    }
}

/// Parse TOML string to SproutToml configuration
pub fn parse_sprout_toml(content: &str) -> ManifestResult<SproutToml> {
    // First pass with toml_edit for better error reporting
    content.parse::<toml_edit::DocumentMut>().map_err(|e| SproutError::TomlParse {
        message: format!("TOML syntax error: {}", e),
    })?;

    // Then parse with serde for type safety
    let config: SproutToml = toml::from_str(content).map_err(|e| SproutError::TomlParse {
        message: format!("TOML parsing error: {}", e),
    })?;

    // Validate required fields
    validate_config(&config)?;

    Ok(config)
}

/// Serialize SproutToml to TOML string
pub fn serialize_sprout_toml(config: &SproutToml) -> ManifestResult<String> {
    toml::to_string_pretty(config).map_err(|e| SproutError::TomlParse {
        message: format!("TOML serialization error: {}", e),
    })
}

/// Validate configuration completeness
pub fn validate_config(config: &SproutToml) -> ManifestResult<()> {
    if config.package.name.is_empty() {
        return Err(SproutError::ConfigValidation {
            field: "package.name".to_string(),
            reason: "a distribution name is required".to_string(),
        });
    }

    if !PackageMetadata::is_valid_name(&config.package.name) {
        return Err(SproutError::ConfigValidation {
            field: "package.name".to_string(),
            reason: format!(
                "'{}' is not a valid distribution name; names are alphanumeric with '-', '_' or '.' between",
                config.package.name
            ),
        });
    }

    if config.requirements.file.is_empty() {
        return Err(SproutError::ConfigValidation {
            field: "requirements.file".to_string(),
            reason: "the requirements file path must not be empty".to_string(),
        });
    }

    for pattern in &config.packages.exclude {
        glob::Pattern::new(pattern).map_err(|e| SproutError::ConfigValidation {
            field: "packages.exclude".to_string(),
            reason: format!("invalid pattern '{}': {}", pattern, e),
        })?;
    }

    for name in &config.packages.include {
        if !is_valid_import_path(name) {
            return Err(SproutError::ConfigValidation {
                field: "packages.include".to_string(),
                reason: format!("'{}' is not a valid dotted import path", name),
            });
        }
    }

    Ok(())
}

/// Load and parse sprout.toml from a file path
pub fn load_from_file(path: &camino::Utf8Path) -> ManifestResult<SproutToml> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| SproutError::io(format!("Failed to read {}", path), e))?;

    parse_sprout_toml(&content).map_err(|e| match e {
        SproutError::TomlParse { message } => SproutError::TomlParse {
            message: format!("In file {}: {}", path, message),
        },
        SproutError::ConfigValidation { field, reason } => SproutError::ConfigValidation {
            field,
            reason: format!("In file {}: {}", path, reason),
        },
        other => other,
    })
}

/// Check that a name is a valid dotted import path (`pkg.sub.mod`)
pub fn is_valid_import_path(name: &str) -> bool {
    !name.is_empty() && name.split('.').all(is_python_identifier)
}
