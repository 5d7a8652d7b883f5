//! Requirements file loading
//!
//! Reads pip-style requirements files into an ordered list of entries. The
//! raw entries feed distribution metadata verbatim; a typed layer classifies
//! individual lines when a command needs to inspect them.

use crate::ManifestResult;
use camino::Utf8Path;
use sprout_core::error::SproutError;
use sprout_core::types::Requirement;

/// Entry that marks the project itself as an editable install
pub const EDITABLE_SELF_MARKER: &str = "-e .";

/// A single classified line from a requirements file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequirementLine {
    /// Empty or whitespace-only line
    Blank,
    /// Line starting with `#`
    Comment,
    /// Editable install (`-e <target>`), carrying the target
    Editable(String),
    /// Parsed dependency specifier
    Spec(Requirement),
}

/// Split requirements content into per-line entries.
///
/// Line terminators are stripped, blank lines stay as empty entries, and the
/// first `-e .` entry is dropped. Any further occurrences are kept.
pub fn parse_requirements(content: &str) -> Vec<String> {
    let mut requirements: Vec<String> = content.lines().map(str::to_string).collect();

    if let Some(position) = requirements
        .iter()
        .position(|entry| entry == EDITABLE_SELF_MARKER)
    {
        requirements.remove(position);
    }

    requirements
}

/// Load and parse a requirements file
pub fn load_requirements(path: &Utf8Path) -> ManifestResult<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| SproutError::io(format!("Failed to read {}", path), e))?;

    Ok(parse_requirements(&content))
}

/// Classify a single requirements entry
pub fn classify_requirement(line: &str) -> ManifestResult<RequirementLine> {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return Ok(RequirementLine::Blank);
    }

    if trimmed.starts_with('#') {
        return Ok(RequirementLine::Comment);
    }

    if let Some(target) = trimmed
        .strip_prefix("-e ")
        .or_else(|| trimmed.strip_prefix("--editable "))
    {
        return Ok(RequirementLine::Editable(target.trim().to_string()));
    }

    if trimmed.starts_with('-') {
        return Err(SproutError::invalid_requirement(
            line,
            "unsupported requirements option; only '-e' editable entries are recognized",
        ));
    }

    // Inline comments start at a '#' preceded by whitespace
    let spec = match trimmed.find(" #") {
        Some(index) => trimmed[..index].trim_end(),
        None => trimmed,
    };

    Ok(RequirementLine::Spec(Requirement::parse(spec)?))
}

/// Parse every installable entry into a typed specifier.
///
/// Blank lines and comments are skipped. Editable entries are rejected:
/// they describe a local checkout, not a dependency a distribution can
/// declare.
pub fn collect_specs(entries: &[String]) -> ManifestResult<Vec<Requirement>> {
    let mut specs = Vec::new();

    for entry in entries {
        match classify_requirement(entry)? {
            RequirementLine::Blank | RequirementLine::Comment => {},
            RequirementLine::Editable(target) => {
                return Err(SproutError::invalid_requirement(
                    entry,
                    format!("editable install of '{}' cannot be declared as a dependency", target),
                ));
            },
            RequirementLine::Spec(spec) => specs.push(spec),
        }
    }

    Ok(specs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    #[test]
    fn test_parse_basic_file() {
        let content = "numpy==1.21\n-e .\npandas==1.3\n";
        assert_eq!(
            parse_requirements(content),
            vec!["numpy==1.21".to_string(), "pandas==1.3".to_string()]
        );
    }

    #[test]
    fn test_marker_absent_leaves_entries_unchanged() {
        let content = "numpy==1.21\npandas>=1.3";
        assert_eq!(
            parse_requirements(content),
            vec!["numpy==1.21".to_string(), "pandas>=1.3".to_string()]
        );
    }

    #[test]
    fn test_marker_removed_only_once() {
        let content = "-e .\nnumpy\n-e .\n";
        assert_eq!(
            parse_requirements(content),
            vec!["numpy".to_string(), "-e .".to_string()]
        );
    }

    #[test]
    fn test_marker_must_match_exactly() {
        // Neither a prefix nor a padded variant counts
        let content = "-e ./subdir\n -e .\n-e .";
        assert_eq!(
            parse_requirements(content),
            vec!["-e ./subdir".to_string(), " -e .".to_string()]
        );
    }

    #[test]
    fn test_blank_lines_become_empty_entries() {
        let content = "numpy\n\npandas\n";
        assert_eq!(
            parse_requirements(content),
            vec!["numpy".to_string(), String::new(), "pandas".to_string()]
        );
    }

    #[test]
    fn test_empty_and_newline_only_content() {
        assert_eq!(parse_requirements(""), Vec::<String>::new());
        assert_eq!(parse_requirements("\n"), vec![String::new()]);
    }

    #[test]
    fn test_final_newline_adds_no_entry() {
        assert_eq!(parse_requirements("a\nb"), parse_requirements("a\nb\n"));
    }

    #[test]
    fn test_load_requirements_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("requirements.txt");
        std::fs::write(&path, "flask==2.3\n-e .\n").unwrap();

        let path = Utf8PathBuf::from_path_buf(path).unwrap();
        let entries = load_requirements(&path).unwrap();
        assert_eq!(entries, vec!["flask==2.3".to_string()]);
    }

    #[test]
    fn test_load_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("requirements.txt");
        std::fs::write(&path, "").unwrap();

        let path = Utf8PathBuf::from_path_buf(path).unwrap();
        assert_eq!(load_requirements(&path).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_load_twice_yields_equal_sequences() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("requirements.txt");
        std::fs::write(&path, "numpy==1.21\n-e .\npandas==1.3\n").unwrap();

        let path = Utf8PathBuf::from_path_buf(path).unwrap();
        assert_eq!(
            load_requirements(&path).unwrap(),
            load_requirements(&path).unwrap()
        );
    }

    #[test]
    fn test_load_requirements_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("requirements.txt")).unwrap();

        let err = load_requirements(&path).unwrap_err();
        match err {
            SproutError::Io { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            },
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_lines() {
        assert_eq!(classify_requirement("   ").unwrap(), RequirementLine::Blank);
        assert_eq!(
            classify_requirement("# pinned for reproducibility").unwrap(),
            RequirementLine::Comment
        );
        assert_eq!(
            classify_requirement("-e ./packages/core").unwrap(),
            RequirementLine::Editable("./packages/core".to_string())
        );
        assert_eq!(
            classify_requirement("--editable .").unwrap(),
            RequirementLine::Editable(".".to_string())
        );

        match classify_requirement("numpy==1.21  # keep in sync with CI").unwrap() {
            RequirementLine::Spec(spec) => {
                assert_eq!(spec.name, "numpy");
                assert_eq!(spec.constraints[0].version, "1.21");
            },
            other => panic!("expected spec, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_rejects_options() {
        assert!(classify_requirement("-r base.txt").is_err());
        assert!(classify_requirement("--index-url https://example.invalid/simple").is_err());
    }

    #[test]
    fn test_collect_specs_skips_noise() {
        let entries = vec![
            "# core".to_string(),
            "numpy==1.21".to_string(),
            String::new(),
            "pandas".to_string(),
        ];

        let specs = collect_specs(&entries).unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].name, "numpy");
        assert_eq!(specs[1].name, "pandas");
    }

    #[test]
    fn test_collect_specs_rejects_editable() {
        let entries = vec!["numpy".to_string(), "-e ../other".to_string()];
        let err = collect_specs(&entries).unwrap_err();
        assert!(err.to_string().contains("editable"));
    }
}
