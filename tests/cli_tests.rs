use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

const GREET: &str = r#"prefix-garbage {"action":"greet","result":"200"} suffix"#;

fn cmd() -> Command {
    Command::cargo_bin("json-triage").unwrap()
}

fn workspace(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("in")).unwrap();
    for (name, content) in files {
        fs::write(temp_dir.path().join("in").join(name), content).unwrap();
    }
    temp_dir
}

fn greet_args() -> [&'static str; 8] {
    [
        "--min-lines",
        "1",
        "--max-lines",
        "5",
        "--mandatory",
        "200,result",
        "--one-of",
        "greet",
    ]
}

#[test]
fn test_auto_mode_copies_valid_files() {
    let dir = workspace(&[("greet.txt", GREET), ("broken.txt", "{\"a\":1")]);

    cmd()
        .current_dir(dir.path())
        .args(greet_args())
        .args(["--mode", "auto"])
        .assert()
        .success()
        .stdout(contains("2 files to check."))
        .stdout(contains("File greet.txt copied to output directory!"))
        .stdout(contains("File broken.txt skipped!"));

    assert!(dir.path().join("out/greet.txt").is_file());
    assert!(!dir.path().join("out/broken.txt").exists());
}

#[test]
fn test_interactive_mode_reads_answers_from_stdin() {
    let dir = workspace(&[("a.txt", GREET), ("b.txt", GREET)]);

    cmd()
        .current_dir(dir.path())
        .args(greet_args())
        .write_stdin("n\nY\n")
        .assert()
        .success()
        .stdout(contains("Do you want to accept a.txt? (y/n)"))
        .stdout(contains("File a.txt copying declined!"))
        .stdout(contains("File b.txt copied to output directory!"));

    assert!(!dir.path().join("out/a.txt").exists());
    assert!(dir.path().join("out/b.txt").is_file());
}

#[test]
fn test_closed_stdin_declines() {
    let dir = workspace(&[("a.txt", GREET)]);

    cmd()
        .current_dir(dir.path())
        .args(greet_args())
        .write_stdin("")
        .assert()
        .success()
        .stdout(contains("File a.txt copying declined!"));

    assert!(!dir.path().join("out/a.txt").exists());
}

#[test]
fn test_empty_input_folder_is_not_an_error() {
    let dir = workspace(&[]);

    cmd()
        .current_dir(dir.path())
        .args(["--mode", "auto"])
        .assert()
        .success()
        .stdout(contains("No files to check in the input folder."));

    assert!(dir.path().join("out").is_dir());
}

#[test]
fn test_dry_run_leaves_output_untouched() {
    let dir = workspace(&[("greet.txt", GREET)]);

    cmd()
        .current_dir(dir.path())
        .args(greet_args())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(contains("DRY RUN MODE ENABLED"))
        .stdout(contains("File greet.txt would be copied (dry run)."));

    assert!(!dir.path().join("out").exists());
}

#[test]
fn test_fail_on_reject_sets_exit_code() {
    let dir = workspace(&[("broken.txt", "{\"a\":1")]);

    cmd()
        .current_dir(dir.path())
        .args(greet_args())
        .args(["--mode", "auto", "--fail-on-reject"])
        .assert()
        .code(2)
        .stdout(contains("NOK  JSON mapping"));
}

#[test]
fn test_inverted_bounds_are_a_config_error() {
    let dir = workspace(&[]);

    cmd()
        .current_dir(dir.path())
        .args(["--min-lines", "10", "--max-lines", "5"])
        .assert()
        .code(1)
        .stderr(contains("Invalid configuration"));
}

#[test]
fn test_rules_file_and_report() {
    let dir = workspace(&[("greet.txt", GREET)]);
    fs::write(
        dir.path().join("rules.toml"),
        "[lines]\nmin = 1\nmax = 5\n\n[rules]\nmandatory = [\"action\"]\nat_least_one_of = [\"GREET\"]\n\n[acceptance]\nmode = \"auto\"\n",
    )
    .unwrap();

    cmd()
        .current_dir(dir.path())
        .args(["--config", "rules.toml", "--report", "report.json"])
        .assert()
        .success();

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("report.json")).unwrap()).unwrap();
    assert_eq!(report["summary"]["copied"], 1);
    assert_eq!(report["files"][0]["outcome"]["status"], "copied");
}

#[test]
fn test_log_json_writes_json_lines_to_stderr() {
    let dir = workspace(&[("greet.txt", GREET)]);

    cmd()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .args(greet_args())
        .args(["--mode", "auto", "--log-json"])
        .assert()
        .success()
        .stderr(contains(r#""level":"INFO""#))
        .stderr(contains(r#""message":"Starting json-triage""#))
        .stdout(contains("Starting json-triage").not());
}
