use std::process::{Command, Output};

fn leibniz(args: &[&str]) -> Output {
  Command::new(env!("CARGO_BIN_EXE_leibniz"))
    .args(args)
    .output()
    .unwrap_or_else(|e| panic!("Failed to run leibniz {:?}: {}", args, e))
}

fn stdout_of(args: &[&str]) -> String {
  let output = leibniz(args);
  assert!(
    output.status.success(),
    "leibniz {:?} failed: {}",
    args,
    String::from_utf8_lossy(&output.stderr)
  );
  String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn prints_expansion() {
  assert_eq!(stdout_of(&["0"]), "d[0]\n");
  assert_eq!(
    stdout_of(&["2"]),
    "d[2]+2*m[0].d[1]+m[0].m[0].d[0]+m[1].d[0]\n"
  );
  assert_eq!(stdout_of(&["--style", "compact", "1"]), "d[1]+m[0]\n");
}

#[test]
fn wraps_long_output() {
  let out = stdout_of(&["6"]);
  assert!(out.lines().count() > 1);
  assert!(out.lines().all(|l| l.len() <= 100 + 20));
  let unwrapped = stdout_of(&["--wrap", "0", "6"]);
  assert_eq!(unwrapped.lines().count(), 1);
  assert_eq!(out.replace('\n', ""), unwrapped.replace('\n', ""));
}

#[test]
fn check_reports_agreement() {
  let out = stdout_of(&["--check", "5"]);
  assert!(out.contains("32 terms"));
  assert!(out.contains("Difference: 0"));
  assert!(!out.contains("MISMATCH"));
}

#[test]
fn benchmarks_a_range() {
  let out = stdout_of(&["--from", "2", "4"]);
  for n in 2..=4 {
    assert!(out.contains(&format!("Elapsed time to compute {} iteratively", n)));
  }
}

#[test]
fn writes_output_file() {
  let path = std::env::temp_dir()
    .join(format!("leibniz_cli_test_{}.txt", std::process::id()));
  let out = stdout_of(&["--output", path.to_str().unwrap(), "1"]);
  assert!(out.is_empty());
  let written = std::fs::read_to_string(&path).unwrap();
  let _ = std::fs::remove_file(&path);
  assert_eq!(written, "d[1]+m[0].d[0]\n");
}

#[test]
fn rejects_bad_degree() {
  assert!(!leibniz(&[]).status.success());
  assert!(!leibniz(&["abc"]).status.success());
  assert!(!leibniz(&["-3"]).status.success());
}

#[test]
fn writes_check_report_to_output_file() {
  let path = std::env::temp_dir()
    .join(format!("leibniz_cli_check_{}.txt", std::process::id()));
  let out = stdout_of(&["--check", "--output", path.to_str().unwrap(), "3"]);
  assert!(out.is_empty());
  let written = std::fs::read_to_string(&path).unwrap();
  let _ = std::fs::remove_file(&path);
  assert!(written.contains("8 terms"));
  assert!(written.contains("Difference: 0"));
}

#[test]
fn rejects_range_starting_past_degree() {
  let output = leibniz(&["--from", "5", "2"]);
  assert!(!output.status.success());
  assert!(String::from_utf8_lossy(&output.stderr).contains("--from 5 exceeds degree 2"));
  assert!(output.stdout.is_empty());
}
