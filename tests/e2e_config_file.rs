/// End-to-end tests for config file support
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const POM: &str = r#"<project>
  <groupId>org.example</groupId>
  <artifactId>single</artifactId>
  <version>1.0.0</version>
</project>
"#;

const TREE: &str = r#"{
  "groupId": "org.example", "artifactId": "single", "version": "1.0.0", "type": "jar",
  "children": [
    {"groupId": "junit", "artifactId": "junit", "version": "4.13.2", "type": "jar", "scope": "test"},
    {"groupId": "org.yaml", "artifactId": "snakeyaml", "version": "2.2", "type": "jar", "scope": "compile"}
  ]
}"#;

const LOOKUP: &str = r#"<license-lookup>
  <artifact>
    <groupId>junit</groupId>
    <artifactId>junit</artifactId>
    <license>Eclipse Public License 1.0</license>
  </artifact>
  <artifact>
    <groupId>org.yaml</groupId>
    <artifactId>snakeyaml</artifactId>
    <license>Apache License 2.0</license>
  </artifact>
</license-lookup>
"#;

/// Single-module project whose tree sits at the default location
fn single_project(config: Option<&str>) -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::write(root.join("pom.xml"), POM).unwrap();
    fs::create_dir_all(root.join("target")).unwrap();
    fs::write(root.join("target/dependency-tree.json"), TREE).unwrap();
    fs::write(root.join("licenses.xml"), LOOKUP).unwrap();
    fs::write(root.join("NOTICE.template"), "Single\n\n#GENERATED_NOTICES#\n").unwrap();
    if let Some(config) = config {
        fs::write(root.join("license-notice.config.yml"), config).unwrap();
    }
    dir
}

fn generate(root: &Path) -> assert_cmd::assert::Assert {
    cargo_bin_cmd!("license-notice")
        .args(["generate", "--stdout", "--no-pom-fallback", "-p"])
        .arg(root)
        .assert()
}

#[test]
fn test_config_auto_discovery() {
    let project = single_project(Some("license_lookup:\n  - licenses.xml\n"));

    generate(project.path())
        .success()
        .stderr(predicate::str::contains("Auto-discovered config file"))
        .stdout(predicate::str::contains(
            "  org.yaml:snakeyaml:2.2 under Apache License 2.0",
        ));
}

#[test]
fn test_no_config_and_no_lookup_is_unresolved() {
    let project = single_project(None);

    generate(project.path())
        .code(1)
        .stderr(predicate::str::contains("Auto-discovered config file").not())
        .stderr(predicate::str::contains("Failed to find licenses for 2 artifact(s)"));

    assert!(project.path().join("target/license-mappings.xml").exists());
}

#[test]
fn test_explicit_config_file() {
    let project = single_project(None);
    let config_dir = TempDir::new().unwrap();
    let config_path = config_dir.path().join("custom.yml");
    fs::write(
        &config_path,
        "license_lookup: [licenses.xml]\nnotice_message: \"{0}- {1}: {2}\"\nindent: 1\n",
    )
    .unwrap();

    cargo_bin_cmd!("license-notice")
        .args(["generate", "--stdout", "--no-pom-fallback", "-c"])
        .arg(&config_path)
        .arg("-p")
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(" - junit:junit:4.13.2: Eclipse Public License 1.0"));
}

#[test]
fn test_explicit_config_missing_file() {
    let project = single_project(None);

    cargo_bin_cmd!("license-notice")
        .args(["generate", "-c", "/nonexistent/license-notice.yml", "-p"])
        .arg(project.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn test_invalid_config_yaml() {
    let project = single_project(Some("license_lookup: [[[broken"));

    generate(project.path())
        .code(3)
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_invalid_config_encoding() {
    let project = single_project(Some("license_lookup: [licenses.xml]\nencoding: EBCDIC\n"));

    generate(project.path())
        .code(3)
        .stderr(predicate::str::contains("Unsupported character encoding"));
}

#[test]
fn test_unknown_config_field_warns() {
    let project = single_project(Some("license_lookup: [licenses.xml]\nlicenseLookup: []\n"));

    generate(project.path())
        .success()
        .stderr(predicate::str::contains(
            "Unknown config field 'licenseLookup' will be ignored",
        ));
}

#[test]
fn test_cli_overrides_config_scalars() {
    let project = single_project(Some(
        "license_lookup: [licenses.xml]\nindent: 6\nnotice_message: \"{0}{1} => {2}\"\n",
    ));

    generate(project.path())
        .success()
        .stdout(predicate::str::contains("      junit:junit:4.13.2 => Eclipse Public License 1.0"));

    cargo_bin_cmd!("license-notice")
        .args(["generate", "--stdout", "--no-pom-fallback", "--indent", "0", "-p"])
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\njunit:junit:4.13.2 => Eclipse Public License 1.0"));
}

#[test]
fn test_cli_lookup_appended_after_config() {
    let project = single_project(Some("license_lookup: [licenses.xml]\n"));
    fs::write(
        project.path().join("overrides.yml"),
        "artifact:\n  - groupId: junit\n    artifactId: junit\n    license: EPL-1.0\n",
    )
    .unwrap();

    generate(project.path())
        .success()
        .stdout(predicate::str::contains("junit:junit:4.13.2 under Eclipse Public License 1.0"));

    cargo_bin_cmd!("license-notice")
        .args(["generate", "--stdout", "--no-pom-fallback", "-l", "overrides.yml", "-p"])
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("junit:junit:4.13.2 under EPL-1.0"))
        .stdout(predicate::str::contains("org.yaml:snakeyaml:2.2 under Apache License 2.0"));
}

#[test]
fn test_config_output_location_and_check() {
    let project = single_project(Some(
        "license_lookup: [licenses.xml]\noutput_dir: legal\nfile_name: NOTICE.txt\n",
    ));

    cargo_bin_cmd!("license-notice")
        .args(["generate", "--no-pom-fallback", "-p"])
        .arg(project.path())
        .assert()
        .success();

    let written = fs::read_to_string(project.path().join("legal/NOTICE.txt")).unwrap();
    assert!(written.starts_with("Single\n\n"));

    cargo_bin_cmd!("license-notice")
        .args(["check", "--no-pom-fallback", "-p"])
        .arg(project.path())
        .assert()
        .success();
}
