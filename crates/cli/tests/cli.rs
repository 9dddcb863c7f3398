use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

/// Small, fast sweep parameters shared by the run tests.
const FAST: &[&str] = &[
    "--population-size",
    "20",
    "--generations",
    "500",
    "--genome-length",
    "1000",
    "--introduction-generation",
    "5",
    "--selection-coefficient",
    "0.5",
    "--seed",
    "7",
];

#[test]
fn test_init_creates_config() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("sweep.json");

    let mut cmd = Command::cargo_bin("hwsweep").unwrap();
    cmd.arg("init")
        .arg("--output")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sweep initialized successfully!"));

    assert!(path.exists());
}

#[test]
fn test_init_population_param() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("pop.json");

    let mut cmd = Command::cargo_bin("hwsweep").unwrap();
    cmd.arg("init")
        .arg("--output")
        .arg(&path)
        .arg("--population-size")
        .arg("10")
        .assert()
        .success()
        .stdout(predicate::str::contains("Population size: 10"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["execution"]["population_size"], 10);
}

#[test]
fn test_init_refuses_to_overwrite() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("sweep.json");
    std::fs::write(&path, "{}").unwrap();

    let mut cmd = Command::cargo_bin("hwsweep").unwrap();
    cmd.arg("init")
        .arg("--output")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    let mut cmd = Command::cargo_bin("hwsweep").unwrap();
    cmd.arg("init")
        .arg("--output")
        .arg(&path)
        .arg("--force")
        .assert()
        .success();
}

#[test]
fn test_init_rejects_invalid_parameters() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("bad.json");

    let mut cmd = Command::cargo_bin("hwsweep").unwrap();
    cmd.arg("init")
        .arg("--output")
        .arg(&path)
        .arg("--mutation-rate")
        .arg("2.0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));

    assert!(!path.exists());
}

#[test]
fn test_validate_accepts_initialized_config() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("sweep.json");

    Command::cargo_bin("hwsweep")
        .unwrap()
        .arg("init")
        .arg("-o")
        .arg(&path)
        .assert()
        .success();

    Command::cargo_bin("hwsweep")
        .unwrap()
        .arg("validate")
        .arg("-c")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_validate_rejects_bad_config() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("bad.json");
    std::fs::write(&path, r#"{ "execution": { "population_size": 0 } }"#).unwrap();

    Command::cargo_bin("hwsweep")
        .unwrap()
        .arg("validate")
        .arg("-c")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Parameters: FAILED"));
}

#[test]
fn test_validate_missing_file() {
    Command::cargo_bin("hwsweep")
        .unwrap()
        .arg("validate")
        .arg("-c")
        .arg("/nonexistent/sweep.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_run_prints_report_stream() {
    Command::cargo_bin("hwsweep")
        .unwrap()
        .arg("run")
        .args(FAST)
        .assert()
        .success()
        .stdout(predicate::str::contains("Generation 5: p = 0.025, q = 0.975"))
        .stdout(predicate::str::contains("Observed: AA = 0, Aa = 1, aa = 19"))
        .stdout(predicate::str::contains("FIXED").or(predicate::str::contains("LOST")));
}

#[test]
fn test_run_quiet_prints_only_verdict() {
    Command::cargo_bin("hwsweep")
        .unwrap()
        .arg("run")
        .arg("--quiet")
        .args(FAST)
        .assert()
        .success()
        .stdout(predicate::str::contains("Generation").not())
        .stdout(predicate::str::contains("FIXED").or(predicate::str::contains("LOST")));
}

#[test]
fn test_run_from_config_file_with_records() {
    let temp = tempdir().unwrap();
    let config = temp.path().join("sweep.json");
    let records = temp.path().join("records.json");

    Command::cargo_bin("hwsweep")
        .unwrap()
        .arg("init")
        .arg("-o")
        .arg(&config)
        .args(FAST)
        .assert()
        .success();

    Command::cargo_bin("hwsweep")
        .unwrap()
        .arg("run")
        .arg("-c")
        .arg(&config)
        .arg("--records")
        .arg(&records)
        .assert()
        .success()
        .stdout(predicate::str::contains("records written"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&records).unwrap()).unwrap();
    let entries = json.as_array().unwrap();
    assert!(!entries.is_empty());
    assert_eq!(entries[0]["generation"], 5);
    assert_eq!(entries[0]["observed"]["heterozygous"], 1);
}

#[test]
fn test_run_same_seed_same_output() {
    let run = || {
        Command::cargo_bin("hwsweep")
            .unwrap()
            .arg("run")
            .args(FAST)
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}
