use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture that sets up a temporary objscope environment
struct TestFixture {
    _temp_dir: TempDir,
    data_dir: PathBuf,
    sample: PathBuf,
}

impl TestFixture {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".objscope");
        fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        let sample = temp_dir.path().join("sample.json");
        objscope_testing::write_sample(&sample).expect("Failed to write sample file");

        Self {
            _temp_dir: temp_dir,
            data_dir,
            sample,
        }
    }

    /// Run objscope with this fixture's data directory
    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("objscope").expect("Failed to find objscope binary");
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    fn write_config(&self, content: &str) {
        fs::write(self.data_dir.join("config.toml"), content).expect("Failed to write config");
    }
}

#[test]
fn test_no_command_shows_guidance() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("objscope show"));
}

#[test]
fn test_show_prints_tree_paths() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .arg("show")
        .arg(&fixture.sample)
        .arg("--name")
        .arg("data")
        .assert()
        .success()
        .stdout(predicate::str::contains("data[\"a\"]"))
        .stdout(predicate::str::contains("data[\"b\"][2]"));
}

#[test]
fn test_show_depth_limits_expansion() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .arg("show")
        .arg(&fixture.sample)
        .arg("--name")
        .arg("data")
        .arg("--depth")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("data[\"b\"]"))
        .stdout(predicate::str::contains("data[\"b\"][0]").not());
}

#[test]
fn test_show_hide_root_lists_children_at_top_level() {
    let fixture = TestFixture::new();
    let output = fixture
        .command()
        .arg("show")
        .arg(&fixture.sample)
        .arg("--name")
        .arg("data")
        .arg("--hide-root")
        .output()
        .expect("run objscope");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let first_data_line = stdout
        .lines()
        .nth(1)
        .expect("at least one row under the header");
    assert!(first_data_line.starts_with('a'), "got: {}", first_data_line);
}

#[test]
fn test_show_json_format_is_parseable() {
    let fixture = TestFixture::new();
    let output = fixture
        .command()
        .arg("show")
        .arg(&fixture.sample)
        .arg("--name")
        .arg("data")
        .arg("--format")
        .arg("json")
        .output()
        .expect("run objscope");

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is valid JSON");

    assert_eq!(json["root"]["name"], "data");
    assert_eq!(json["root"]["type"], "dict");
    let children = json["root"]["children"]
        .as_array()
        .expect("root has children");
    assert_eq!(children.len(), 2);
    assert_eq!(children[1]["path"], "data[\"b\"]");
    assert_eq!(children[1]["children"][0]["summary"], "1");
    assert_eq!(children[1]["children"][0]["kind"], "normal");
}

#[test]
fn test_show_missing_file_fails() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .arg("show")
        .arg("no-such-file.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_show_invalid_json_fails_with_context() {
    let fixture = TestFixture::new();
    let broken = fixture._temp_dir.path().join("broken.json");
    fs::write(&broken, "{not json").expect("write broken file");

    fixture
        .command()
        .arg("show")
        .arg(&broken)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn test_config_file_changes_defaults() {
    let fixture = TestFixture::new();
    fixture.write_config("max_summary_len = 12\n");

    let long_values = fixture._temp_dir.path().join("long.json");
    fs::write(&long_values, r#"{"text": "abcdefghijklmnopqrstuvwxyz"}"#)
        .expect("write long file");

    let output = fixture
        .command()
        .arg("show")
        .arg(&long_values)
        .arg("--format")
        .arg("json")
        .output()
        .expect("run objscope");

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is valid JSON");
    let summary = json["root"]["children"][0]["summary"]
        .as_str()
        .expect("summary string");
    assert_eq!(summary.chars().count(), 12);
    assert!(summary.ends_with("..."));
}
