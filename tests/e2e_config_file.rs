/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI
/// invocation, using `assert_cmd` and `tempfile` for isolated environments.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

const CONFIG_FILENAME: &str = "instance-compliance.config.yml";

fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

fn write_catalog(path: &Path, instance_id: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(
        path,
        format!(
            r#"[{{"instanceId": "{}", "platformName": "Amazon Linux 2"}}]"#,
            instance_id
        ),
    )
    .unwrap();
}

// ============================================================================
// Config File Auto-Discovery Tests
// ============================================================================

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovery_applies_catalog_path() {
        let dir = TempDir::new().unwrap();
        write_catalog(&dir.path().join("state/instances.json"), "i-from-config");
        write_config(
            &dir.path().join(CONFIG_FILENAME),
            "catalog_path: state/instances.json\n",
        );

        let output = cargo_bin_cmd!("instance-compliance")
            .current_dir(dir.path())
            .arg("list")
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("i-from-config"));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Auto-discovered config file"));
    }

    #[test]
    fn test_no_config_file_uses_default_catalog_path() {
        let dir = TempDir::new().unwrap();
        write_catalog(
            &dir.path().join(".instance-compliance/catalog.json"),
            "i-default",
        );

        let output = cargo_bin_cmd!("instance-compliance")
            .current_dir(dir.path())
            .arg("list")
            .output()
            .unwrap();

        assert!(output.status.success());
        assert!(String::from_utf8_lossy(&output.stdout).contains("i-default"));
        assert!(!String::from_utf8_lossy(&output.stderr).contains("Auto-discovered"));
    }

    #[test]
    fn test_unknown_fields_warn_but_run() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join(CONFIG_FILENAME),
            "region: us-east-1\nformat: json\n",
        );

        cargo_bin_cmd!("instance-compliance")
            .current_dir(dir.path())
            .arg("list")
            .assert()
            .success()
            .stderr(predicate::str::contains(
                "Unknown config field 'format' will be ignored",
            ));
    }
}

// ============================================================================
// Explicit --config and precedence Tests
// ============================================================================

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_config_path_loads_successfully() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("custom.yml");
        write_catalog(&dir.path().join("explicit.json"), "i-explicit");
        write_config(&config_path, "catalog_path: explicit.json\n");

        cargo_bin_cmd!("instance-compliance")
            .current_dir(dir.path())
            .args(["list", "--config", config_path.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("i-explicit"));
    }

    #[test]
    fn test_cli_catalog_overrides_config() {
        let dir = TempDir::new().unwrap();
        write_catalog(&dir.path().join("from-config.json"), "i-config");
        write_catalog(&dir.path().join("from-cli.json"), "i-cli");
        write_config(
            &dir.path().join(CONFIG_FILENAME),
            "catalog_path: from-config.json\n",
        );

        let output = cargo_bin_cmd!("instance-compliance")
            .current_dir(dir.path())
            .args(["list", "--catalog", "from-cli.json"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("i-cli"));
        assert!(!stdout.contains("i-config"));
    }

    #[test]
    fn test_scan_defaults_from_config() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join(CONFIG_FILENAME),
            r#"
catalog_path: empty.json
default_os: ssg-amzn2-ds.xml
default_benchmark: xccdf_org.ssgproject.content_profile_standard
"#,
        );

        // Selection comes from config; the empty catalog means nothing to invoke
        cargo_bin_cmd!("instance-compliance")
            .current_dir(dir.path())
            .args(["scan", "--all"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No EC2 Instances"));
    }

    #[test]
    fn test_partial_scan_defaults_still_validate() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join(CONFIG_FILENAME),
            "default_benchmark: xccdf_org.ssgproject.content_profile_standard\n",
        );

        cargo_bin_cmd!("instance-compliance")
            .current_dir(dir.path())
            .args(["scan", "i-1"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("OS is required"));
    }
}

// ============================================================================
// Config Error Tests
// ============================================================================

mod config_error_tests {
    use super::*;

    #[test]
    fn test_explicit_config_not_found_error() {
        let dir = TempDir::new().unwrap();

        cargo_bin_cmd!("instance-compliance")
            .current_dir(dir.path())
            .args(["list", "--config", "/nonexistent/config.yml"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to read config file"));
    }

    #[test]
    fn test_invalid_yaml_syntax_error() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join(CONFIG_FILENAME),
            "invalid: yaml: [[[broken",
        );

        cargo_bin_cmd!("instance-compliance")
            .current_dir(dir.path())
            .arg("list")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to parse config file"));
    }

    #[test]
    fn test_zero_concurrency_error() {
        let dir = TempDir::new().unwrap();
        write_config(&dir.path().join(CONFIG_FILENAME), "max_concurrency: 0\n");

        cargo_bin_cmd!("instance-compliance")
            .current_dir(dir.path())
            .arg("profiles")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("max_concurrency must be at least 1"));
    }

    #[test]
    fn test_invalid_log_level_error() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join(CONFIG_FILENAME),
            "log_level: \"app=verbose\"\n",
        );

        cargo_bin_cmd!("instance-compliance")
            .current_dir(dir.path())
            .env_remove("RUST_LOG")
            .arg("profiles")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Invalid log level"));
    }
}
