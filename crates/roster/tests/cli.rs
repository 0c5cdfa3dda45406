use assert_cmd::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;
use serial_test::serial;
use std::process::Command;

fn roster_cmd(data_dir: &assert_fs::TempDir) -> Command {
  let mut cmd = Command::cargo_bin("roster").expect("binary exists");
  cmd.env("CAMPUS_DATA_DIR", data_dir.path());
  cmd
}

#[test]
#[serial]
fn test_import_then_list() {
  let temp = assert_fs::TempDir::new().unwrap();

  let students_txt = temp.path().join("student.txt");
  let professors_txt = temp.path().join("professor.txt");
  std::fs::write(&students_txt, "Student 1:\nName: Jane Doe\nAttendance: 92%\n").unwrap();
  std::fs::write(&professors_txt, "Professor 1:\nName: Dr. Asha Rao\nSubject: Physics\n").unwrap();

  roster_cmd(&temp)
    .args([
      "import",
      "--students",
      students_txt.to_str().unwrap(),
      "--professors",
      professors_txt.to_str().unwrap(),
    ])
    .assert()
    .success()
    .stdout(contains("Converted 1 student and 1 professor records"));

  roster_cmd(&temp)
    .args(["list"])
    .assert()
    .success()
    .stdout(contains("Jane Doe").and(contains("Dr. Asha Rao (Physics)")));

  temp.close().unwrap();
}

#[test]
#[serial]
fn test_list_empty_stores() {
  let temp = assert_fs::TempDir::new().unwrap();

  roster_cmd(&temp)
    .args(["list"])
    .assert()
    .success()
    .stdout(contains("Students (0):").and(contains("Professors (0):")));

  temp.close().unwrap();
}
