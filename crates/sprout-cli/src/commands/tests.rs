//! Unit tests for CLI commands.

use super::*;
use camino::Utf8PathBuf;
use sprout_core::error::SproutError;
use sprout_manifest::config::parse_sprout_toml;
use std::fs;
use tempfile::TempDir;

/// Create a temporary directory for testing
fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test command context rooted in a temporary directory
fn create_test_context(temp_dir: &TempDir) -> CommandContext {
    CommandContext {
        cwd: Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf()).unwrap(),
        output: crate::output::OutputHandler::new(),
    }
}

/// Write a minimal valid project into the directory
fn write_project(temp_dir: &TempDir, requirements: &str) {
    let manifest = r#"
[package]
name = "demo"
version = "1.0.0.0"
author = "Jane Doe"
author-email = "jane@example.com"
"#;

    fs::write(temp_dir.path().join("sprout.toml"), manifest).unwrap();
    fs::write(temp_dir.path().join("requirements.txt"), requirements).unwrap();

    let pkg = temp_dir.path().join("demo");
    fs::create_dir_all(&pkg).unwrap();
    fs::write(pkg.join("__init__.py"), "").unwrap();
}

#[test]
fn test_init_creates_project_files() {
    let temp_dir = create_temp_dir();
    let ctx = create_test_context(&temp_dir);

    init::execute(&ctx).unwrap();

    assert!(temp_dir.path().join("sprout.toml").exists());

    let requirements = fs::read_to_string(temp_dir.path().join("requirements.txt")).unwrap();
    assert_eq!(requirements, "-e .\n");

    let dir_name = ctx.cwd.file_name().unwrap();
    let module = init::module_name(&init::sanitize_distribution_name(dir_name));
    assert!(temp_dir.path().join(&module).join("__init__.py").exists());
}

#[test]
fn test_init_generated_manifest_parses() {
    let temp_dir = create_temp_dir();
    let ctx = create_test_context(&temp_dir);

    init::execute(&ctx).unwrap();

    let content = fs::read_to_string(temp_dir.path().join("sprout.toml")).unwrap();
    let config = parse_sprout_toml(&content).unwrap();
    assert_eq!(config.package.version.to_string(), "0.1.0");
    assert_eq!(config.requirements.file, "requirements.txt");
}

#[test]
fn test_init_skips_existing_manifest() {
    let temp_dir = create_temp_dir();
    let ctx = create_test_context(&temp_dir);

    fs::write(temp_dir.path().join("sprout.toml"), "existing content").unwrap();

    init::execute(&ctx).unwrap();

    let content = fs::read_to_string(temp_dir.path().join("sprout.toml")).unwrap();
    assert_eq!(content, "existing content");
}

#[test]
fn test_init_preserves_existing_requirements() {
    let temp_dir = create_temp_dir();
    let ctx = create_test_context(&temp_dir);

    fs::write(temp_dir.path().join("requirements.txt"), "numpy==1.21\n").unwrap();

    init::execute(&ctx).unwrap();

    let content = fs::read_to_string(temp_dir.path().join("requirements.txt")).unwrap();
    assert_eq!(content, "numpy==1.21\n");
}

#[test]
fn test_check_happy_path() {
    let temp_dir = create_temp_dir();
    let ctx = create_test_context(&temp_dir);

    write_project(&temp_dir, "numpy==1.21\npandas>=1.3\n-e .\n");

    check::execute(&ctx).unwrap();
}

#[test]
fn test_check_missing_requirements_file() {
    let temp_dir = create_temp_dir();
    let ctx = create_test_context(&temp_dir);

    write_project(&temp_dir, "");
    fs::remove_file(temp_dir.path().join("requirements.txt")).unwrap();

    let err = check::execute(&ctx).unwrap_err();
    match err {
        SproutError::Io { source, .. } => {
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        },
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn test_check_rejects_missing_included_package() {
    let temp_dir = create_temp_dir();
    let ctx = create_test_context(&temp_dir);

    let manifest = r#"
[package]
name = "demo"
version = "0.1"

[packages]
include = ["ghost"]
"#;
    fs::write(temp_dir.path().join("sprout.toml"), manifest).unwrap();
    fs::write(temp_dir.path().join("requirements.txt"), "").unwrap();

    let err = check::execute(&ctx).unwrap_err();
    assert!(
        matches!(err, SproutError::ConfigValidation { ref field, .. } if field == "packages.include")
    );
}

#[test]
fn test_requirements_with_override_path() {
    let temp_dir = create_temp_dir();
    let ctx = create_test_context(&temp_dir);

    // No manifest needed when an explicit file is given
    fs::write(temp_dir.path().join("extra.txt"), "flask\n-e .\n").unwrap();

    requirements::execute(Some(Utf8PathBuf::from("extra.txt")), false, &ctx).unwrap();
    requirements::execute(Some(Utf8PathBuf::from("extra.txt")), true, &ctx).unwrap();
}

#[test]
fn test_requirements_uses_configured_file() {
    let temp_dir = create_temp_dir();
    let ctx = create_test_context(&temp_dir);

    write_project(&temp_dir, "numpy==1.21\n");

    requirements::execute(None, false, &ctx).unwrap();
}

#[test]
fn test_packages_lists_discovered() {
    let temp_dir = create_temp_dir();
    let ctx = create_test_context(&temp_dir);

    write_project(&temp_dir, "");

    packages::execute(false, &ctx).unwrap();
    packages::execute(true, &ctx).unwrap();
}

#[test]
fn test_metadata_renders() {
    let temp_dir = create_temp_dir();
    let ctx = create_test_context(&temp_dir);

    write_project(&temp_dir, "numpy==1.21\n-e .\n");

    metadata::execute(false, &ctx).unwrap();
    metadata::execute(true, &ctx).unwrap();
}

#[test]
fn test_show_version() {
    let temp_dir = create_temp_dir();
    let ctx = create_test_context(&temp_dir);

    show_version(&ctx).unwrap();
}

#[test]
fn test_sanitize_distribution_name() {
    assert_eq!(init::sanitize_distribution_name("my project"), "my-project");
    assert_eq!(init::sanitize_distribution_name(".hidden"), "hidden");
    assert_eq!(init::sanitize_distribution_name("Demo_2.0"), "Demo_2.0");
    assert_eq!(init::sanitize_distribution_name("***"), "my-project");
}

#[test]
fn test_module_name() {
    assert_eq!(init::module_name("my-project"), "my_project");
    assert_eq!(init::module_name("Demo_2.0"), "demo_2_0");
    assert_eq!(init::module_name("2048game"), "_2048game");
}

#[test]
fn test_to_json() {
    let entries = vec!["numpy==1.21".to_string()];
    let json = to_json(&entries).unwrap();
    assert!(json.contains("numpy==1.21"));
}
