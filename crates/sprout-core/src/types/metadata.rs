//! Distribution metadata types.

use crate::types::requirement::Requirement;
use crate::types::version::Version;
use serde::{Deserialize, Serialize};

/// Static metadata describing a distribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageMetadata {
    pub name: String,
    pub version: Version,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
}

impl PackageMetadata {
    /// Create metadata with just the required fields
    pub fn new(name: impl Into<String>, version: Version) -> Self {
        Self {
            name: name.into(),
            version,
            author: None,
            author_email: None,
            description: None,
            license: None,
            homepage: None,
        }
    }

    /// Check if a string is a valid distribution name
    pub fn is_valid_name(name: &str) -> bool {
        Requirement::is_valid_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_no_optional_fields() {
        let version = Version::new(vec![1, 0, 0, 0]);
        let metadata = PackageMetadata::new("student-performance-indicator", version);

        assert_eq!(metadata.name, "student-performance-indicator");
        assert_eq!(metadata.version.to_string(), "1.0.0.0");
        assert_eq!(metadata.author, None);
        assert_eq!(metadata.author_email, None);
    }

    #[test]
    fn test_name_validation() {
        assert!(PackageMetadata::is_valid_name("my-project"));
        assert!(PackageMetadata::is_valid_name("Project_2.0"));
        assert!(!PackageMetadata::is_valid_name("_private"));
        assert!(!PackageMetadata::is_valid_name(""));
    }

    #[test]
    fn test_serde_round_trip() {
        let mut metadata = PackageMetadata::new("demo", Version::new(vec![0, 3]));
        metadata.author = Some("Jane Doe".to_string());

        let json = serde_json::to_string(&metadata).unwrap();
        assert!(!json.contains("homepage"));

        let back: PackageMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(back, metadata);
    }
}
