use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

const CONFIG: &str = "seed: 42\nwindow: 3\nversion: \"v1\"\n";
const PRICES: &str = "timestamp,open,close,volume\n\
                      1,9,10,100\n\
                      2,11,20,100\n\
                      3,19,30,100\n\
                      4,31,25,100\n\
                      5,24,40,100\n";

struct Run {
    dir: TempDir,
}

impl Run {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn write(&self, name: &str, body: &str) -> &Self {
        std::fs::write(self.path(name), body).unwrap();
        self
    }

    fn exec(&self) -> Output {
        Command::new(env!("CARGO_BIN_EXE_signal-pipeline"))
            .arg("--input")
            .arg(self.path("prices.csv"))
            .arg("--config")
            .arg(self.path("config.yaml"))
            .arg("--output")
            .arg(self.path("metrics.json"))
            .arg("--log-file")
            .arg(self.path("run.log"))
            .output()
            .unwrap()
    }

    fn metrics(&self) -> Value {
        read_json(&self.path("metrics.json"))
    }

    fn log(&self) -> String {
        std::fs::read_to_string(self.path("run.log")).unwrap()
    }
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn successful_run_writes_metrics_and_echoes_them() {
    let run = Run::new();
    run.write("config.yaml", CONFIG).write("prices.csv", PRICES);

    let out = run.exec();
    assert_eq!(out.status.code(), Some(0));

    let metrics = run.metrics();
    assert_eq!(metrics["version"], "v1");
    assert_eq!(metrics["rows_processed"], 5);
    assert_eq!(metrics["metric"], "signal_rate");
    assert_eq!(metrics["value"], 0.4);
    assert_eq!(metrics["seed"], 42);
    assert_eq!(metrics["status"], "success");
    assert!(metrics["latency_ms"].is_u64());

    let echoed: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(echoed, metrics);

    let log = run.log();
    for line in [
        "Job started",
        "Config loaded",
        "Data loaded",
        "Rolling mean calculated",
        "Signals generated",
        "Metrics written",
        "Job completed successfully",
    ] {
        assert!(log.contains(line), "log is missing {line:?}:\n{log}");
    }
    assert!(!log.contains("ERROR"));
}

#[test]
fn missing_close_column_fails_with_error_record() {
    let run = Run::new();
    run.write("config.yaml", CONFIG)
        .write("prices.csv", "timestamp,price\n1,10\n2,20\n");

    let out = run.exec();
    assert_eq!(out.status.code(), Some(1));

    let metrics = run.metrics();
    assert_eq!(metrics["status"], "error");
    assert_eq!(metrics["version"], "v1");
    assert_eq!(
        metrics["error_message"],
        "Required column 'close' not found in input data"
    );

    let log = run.log();
    assert!(log.contains("ERROR"));
    assert!(log.contains("Key error: Required column 'close' not found"));
}

#[test]
fn header_only_input_fails() {
    let run = Run::new();
    run.write("config.yaml", CONFIG)
        .write("prices.csv", "timestamp,close\n");

    let out = run.exec();
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(run.metrics()["error_message"], "Input CSV file is empty");
    assert!(run.log().contains("Validation error: Input CSV file is empty"));
}

#[test]
fn missing_config_reports_fallback_version() {
    let run = Run::new();
    run.write("prices.csv", PRICES);

    let out = run.exec();
    assert_eq!(out.status.code(), Some(1));

    let metrics = run.metrics();
    assert_eq!(metrics["version"], "v1");
    assert_eq!(metrics["status"], "error");
    assert!(
        metrics["error_message"]
            .as_str()
            .unwrap()
            .starts_with("Configuration file not found")
    );
    assert!(run.log().contains("File error"));
}

#[test]
fn configured_version_survives_later_failures() {
    let run = Run::new();
    run.write("config.yaml", "seed: 7\nwindow: 2\nversion: v3\n");

    let out = run.exec();
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(run.metrics()["version"], "v3");
}

#[test]
fn non_positive_window_is_rejected() {
    let run = Run::new();
    run.write("config.yaml", "seed: 7\nwindow: 0\nversion: v1\n")
        .write("prices.csv", PRICES);

    let out = run.exec();
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(run.metrics()["status"], "error");
    assert!(run.log().contains("Validation error"));
}

#[test]
fn identical_inputs_give_identical_reports() {
    let run = Run::new();
    run.write("config.yaml", CONFIG).write("prices.csv", PRICES);

    let mut reports = Vec::new();
    for _ in 0..2 {
        assert!(run.exec().status.success());
        let mut metrics = run.metrics();
        metrics.as_object_mut().unwrap().remove("latency_ms");
        reports.push(metrics);
    }
    assert_eq!(reports[0], reports[1]);
}

#[test]
fn log_file_is_truncated_between_runs() {
    let run = Run::new();
    run.write("config.yaml", CONFIG)
        .write("prices.csv", PRICES)
        .write("run.log", "leftover from a previous run\n");

    assert!(run.exec().status.success());
    assert!(!run.log().contains("leftover"));
}

#[test]
fn failure_names_the_last_completed_stage_on_stderr() {
    let run = Run::new();
    run.write("config.yaml", CONFIG)
        .write("prices.csv", "timestamp,close\n1,10\n2,nan\n");

    let out = run.exec();
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());

    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("Run failed after stage ConfigLoaded"), "{stderr}");
    assert!(stderr.contains(r#"Invalid close value "nan" on data row 2"#));
    assert!(run.log().contains("stage=ConfigLoaded"));
}

#[test]
fn flat_prices_with_fractional_closes_never_signal() {
    let run = Run::new();
    run.write("config.yaml", CONFIG)
        .write("prices.csv", "timestamp,close\n1,0.7\n2,0.7\n3,0.7\n4,0.7\n5,0.7\n6,0.7\n");

    assert!(run.exec().status.success());
    assert_eq!(run.metrics()["value"], 0.0);
}
