//! Integration tests for top-level CLI behavior.
//!
//! Scripts are small `sh` programs written to a scratch directory; each one
//! appends its name to a shared log so launch order can be checked.

use std::path::{Path, PathBuf};
use std::process::Command;

fn run_all(args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_run-all");
    Command::new(bin).args(args).output().expect("failed to run run-all binary")
}

struct Scratch {
    dir: tempfile::TempDir,
}

impl Scratch {
    fn new() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    fn log_path(&self) -> PathBuf {
        self.dir.path().join("launches.log")
    }

    /// Writes `<name>` as a script that logs its name then exits with `code`.
    fn script(&self, name: &str, code: i32) -> String {
        let path = self.dir.path().join(name);
        let body = format!("echo {name} >> '{}'\nexit {code}\n", self.log_path().display());
        std::fs::write(&path, body).unwrap();
        path.display().to_string()
    }

    /// Writes `<name>` as a script that logs `<stem>-start`, sleeps, then logs `<stem>-end`.
    fn slow_script(&self, name: &str, stem: &str) -> String {
        let path = self.dir.path().join(name);
        let log = self.log_path().display().to_string();
        let body = format!("echo {stem}-start >> '{log}'\nsleep 1\necho {stem}-end >> '{log}'\n");
        std::fs::write(&path, body).unwrap();
        path.display().to_string()
    }

    fn pipeline(&self, file: &str, contents: &str) -> String {
        let path = self.dir.path().join(file);
        std::fs::write(&path, contents).unwrap();
        path.display().to_string()
    }

    fn launches(&self) -> Vec<String> {
        std::fs::read_to_string(self.log_path())
            .unwrap_or_default()
            .lines()
            .map(String::from)
            .collect()
    }
}

fn yaml_pipeline(tasks: &[String]) -> String {
    let mut yaml = String::from("interpreter: sh\ntasks:\n");
    for task in tasks {
        yaml.push_str(&format!("  - '{task}'\n"));
    }
    yaml
}

#[cfg(unix)]
#[test]
fn all_tasks_succeed_in_order() {
    let scratch = Scratch::new();
    let tasks = vec![scratch.script("a.sh", 0), scratch.script("b.sh", 0), scratch.script("c.sh", 0)];
    let pipeline = scratch.pipeline("p.yaml", &yaml_pipeline(&tasks));

    let output = run_all(&["--pipeline", &pipeline]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert_eq!(scratch.launches(), ["a.sh", "b.sh", "c.sh"]);
    let a = stdout.find(&format!("{} ran successfully.", tasks[0])).unwrap();
    let b = stdout.find(&format!("{} ran successfully.", tasks[1])).unwrap();
    let c = stdout.find(&format!("{} ran successfully.", tasks[2])).unwrap();
    let done = stdout.find("All tasks completed successfully!").unwrap();
    assert!(a < b && b < c && c < done);
}

#[cfg(unix)]
#[test]
fn next_task_starts_only_after_previous_exits() {
    let scratch = Scratch::new();
    let tasks = vec![scratch.slow_script("a.sh", "a"), scratch.script("b.sh", 0)];
    let pipeline = scratch.pipeline("p.yaml", &yaml_pipeline(&tasks));

    let output = run_all(&["--pipeline", &pipeline]);

    assert!(output.status.success());
    assert_eq!(scratch.launches(), ["a-start", "a-end", "b.sh"]);
}

#[cfg(unix)]
#[test]
fn failing_task_stops_the_run() {
    let scratch = Scratch::new();
    let tasks = vec![scratch.script("a.sh", 0), scratch.script("b.sh", 1), scratch.script("c.sh", 0)];
    let pipeline = scratch.pipeline("p.yaml", &yaml_pipeline(&tasks));

    let output = run_all(&["run", "--pipeline", &pipeline]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert_eq!(scratch.launches(), ["a.sh", "b.sh"]);
    assert!(stdout.contains(&format!("{} ran successfully.", tasks[0])));
    assert!(stdout.contains(&format!("Error occurred while running {}. Stopping execution.", tasks[1])));
    assert!(!stdout.contains("c.sh"));
    assert!(!stdout.contains("All tasks completed successfully!"));
    assert!(stderr.contains("b.sh"));
}

#[cfg(unix)]
#[test]
fn missing_script_is_a_failure() {
    let scratch = Scratch::new();
    let missing = scratch.dir.path().join("missing.sh").display().to_string();
    let tasks = vec![missing, scratch.script("after.sh", 0)];
    let pipeline = scratch.pipeline("p.yaml", &yaml_pipeline(&tasks));

    let output = run_all(&["--pipeline", &pipeline]);

    assert!(!output.status.success());
    assert!(scratch.launches().is_empty());
}

#[test]
fn missing_interpreter_is_a_failure() {
    let scratch = Scratch::new();
    let pipeline =
        scratch.pipeline("p.yaml", "interpreter: run-all-no-such-interpreter\ntasks:\n  - a.py\n  - b.py\n");

    let output = run_all(&["--pipeline", &pipeline]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(!output.status.success());
    assert!(stdout.contains("Error occurred while running a.py. Stopping execution."));
    assert!(!stdout.contains("b.py"));
}

#[test]
fn empty_pipeline_succeeds() {
    let scratch = Scratch::new();
    let pipeline = scratch.pipeline("p.json", r#"{"interpreter": "sh", "tasks": []}"#);

    let output = run_all(&["--pipeline", &pipeline]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert_eq!(stdout, "All tasks completed successfully!\n");
}

#[cfg(unix)]
#[test]
fn interpreter_flag_overrides_pipeline() {
    let scratch = Scratch::new();
    let task = scratch.script("a.sh", 0);
    let pipeline =
        scratch.pipeline("p.yaml", &format!("interpreter: run-all-no-such-interpreter\ntasks:\n  - '{task}'\n"));

    let output = run_all(&["--pipeline", &pipeline, "--interpreter", "sh"]);

    assert!(output.status.success());
    assert_eq!(scratch.launches(), ["a.sh"]);
}

#[test]
fn list_prints_builtin_pipeline() {
    let output = run_all(&["list"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Interpreter: python3"));
    assert!(stdout.contains("1. scripts/analyze_openings.py"));
    assert!(stdout.contains("4. scripts/visualize.py"));
}

#[cfg(unix)]
#[test]
fn list_does_not_launch_tasks() {
    let scratch = Scratch::new();
    let tasks = vec![scratch.script("a.sh", 0)];
    let pipeline = scratch.pipeline("p.yaml", &yaml_pipeline(&tasks));

    let output = run_all(&["list", "--pipeline", &pipeline]);

    assert!(output.status.success());
    assert!(scratch.launches().is_empty());
}

#[test]
fn invalid_pipeline_file_exits_with_error() {
    let scratch = Scratch::new();
    let pipeline = scratch.pipeline("p.yaml", "tasks:\n  - ''\n");

    let output = run_all(&["--pipeline", &pipeline]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("empty path"));
    assert!(output.stdout.is_empty());
}

#[test]
fn shipped_pipelines_load() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("pipelines");
    for name in ["analysis.yaml", "full.yaml"] {
        let output = run_all(&["list", "--pipeline", root.join(name).to_str().unwrap()]);
        assert!(output.status.success(), "{name} failed to load");
    }
}

#[test]
fn help_shows_usage() {
    let output = run_all(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--pipeline"));
    assert!(stdout.contains("list"));
}

#[test]
fn version_prints_to_stdout() {
    let output = run_all(&["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
    assert!(output.stderr.is_empty());
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_all(&["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}
