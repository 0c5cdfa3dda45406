use anyhow::Result;
use roster::{import, ProfessorRecord, RosterStore, StoreError, StudentRecord};
use serde_json::Value;
use serial_test::serial;
use std::env;
use tempfile::TempDir;

mod store_tests {
  use super::*;

  fn temp_store(dir: &TempDir) -> RosterStore<StudentRecord> {
    RosterStore::open(dir.path().join("students.json"))
  }

  #[test]
  fn test_open_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = temp_store(&dir);
    assert!(store.is_empty());
  }

  #[test]
  fn test_open_invalid_json_is_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("students.json");
    std::fs::write(&path, "not json at all").unwrap();

    let store: RosterStore<StudentRecord> = RosterStore::open(&path);
    assert!(store.is_empty());
  }

  #[test]
  fn test_add_persists_to_disk() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let store = temp_store(&dir);

    store.add(StudentRecord::named("Jane Doe"))?;
    assert_eq!(store.len(), 1);

    // A fresh store over the same file sees the record
    let reopened = temp_store(&dir);
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.all()[0].name, "Jane Doe");
    Ok(())
  }

  #[test]
  fn test_update_replaces_record() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let store = temp_store(&dir);
    store.add(StudentRecord::named("Jane Doe"))?;
    store.add(StudentRecord::named("John Smith"))?;

    store.update(1, StudentRecord::named("John A. Smith"))?;
    assert_eq!(store.all()[1].name, "John A. Smith");
    assert_eq!(store.all()[0].name, "Jane Doe");
    Ok(())
  }

  #[test]
  fn test_remove_returns_removed_record() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let store = temp_store(&dir);
    store.add(StudentRecord::named("Jane Doe"))?;

    let removed = store.remove(0)?;
    assert_eq!(removed.name, "Jane Doe");
    assert!(store.is_empty());
    Ok(())
  }

  #[test]
  fn test_out_of_range_index_is_not_found() {
    let dir = TempDir::new().unwrap();
    let store = temp_store(&dir);

    let result = store.update(5, StudentRecord::named("Nobody"));
    assert!(matches!(result, Err(StoreError::NotFound(5))));

    let result = store.remove(0);
    assert!(matches!(result, Err(StoreError::NotFound(0))));
  }

  #[test]
  fn test_extra_fields_round_trip() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("students.json");
    std::fs::write(
      &path,
      r#"[{"name": "Jane Doe", "attendance": "92%", "marks": {"Physics": 88}}]"#,
    )?;

    let store: RosterStore<StudentRecord> = RosterStore::open(&path);
    // Force a rewrite, then re-read
    store.add(StudentRecord::named("John Smith"))?;

    let reopened: RosterStore<StudentRecord> = RosterStore::open(&path);
    let jane = &reopened.all()[0];
    assert_eq!(jane.extra["attendance"], Value::String("92%".to_string()));
    assert_eq!(jane.extra["marks"]["Physics"], Value::from(88));
    Ok(())
  }

  #[test]
  #[serial]
  fn test_data_root_env_override() -> Result<()> {
    let dir = TempDir::new().unwrap();
    env::set_var("CAMPUS_DATA_DIR", dir.path());
    let root = roster::data_root()?;
    assert_eq!(root, dir.path());
    env::remove_var("CAMPUS_DATA_DIR");
    Ok(())
  }
}

mod import_tests {
  use super::*;

  const STUDENTS_TXT: &str = "\
Student 1:
Name: Jane Doe
Roll Number: 42
Attendance: 92%
Marks:
  - Mathematics: 94
  - Physics: 88
Remarks: Strong in algebra
 keeps improving steadily

Student 2:
Name: John Smith
Performance Summary: Needs attention in labs
";

  const PROFESSORS_TXT: &str = "\
Professor 1:
Name: Dr. Asha Rao
Subject: Physics
Email: asha@example.edu

Professor 2:
Name: Dr. Lee
Subject: Mathematics
";

  #[test]
  fn test_parse_students_fields_and_marks() {
    let students = import::parse_students(STUDENTS_TXT);
    assert_eq!(students.len(), 2);

    let jane = &students[0];
    assert_eq!(jane.name, "Jane Doe");
    // roll_number is standardized to roll_no
    assert_eq!(jane.extra["roll_no"], Value::String("42".to_string()));
    assert_eq!(jane.extra["attendance"], Value::String("92%".to_string()));
    assert_eq!(jane.extra["marks"]["Mathematics"], Value::from(94));
    assert_eq!(jane.extra["marks"]["Physics"], Value::from(88));
    // Continuation line is folded into the remark
    assert_eq!(
      jane.extra["remarks"],
      Value::String("Strong in algebra keeps improving steadily".to_string())
    );
  }

  #[test]
  fn test_parse_students_performance_summary_becomes_remarks() {
    let students = import::parse_students(STUDENTS_TXT);
    let john = &students[1];
    assert_eq!(john.name, "John Smith");
    assert_eq!(john.extra["remarks"], Value::String("Needs attention in labs".to_string()));
    assert!(!john.extra.contains_key("performance_summary"));
  }

  #[test]
  fn test_parse_professors() {
    let professors = import::parse_professors(PROFESSORS_TXT);
    assert_eq!(professors.len(), 2);
    assert_eq!(professors[0].name, "Dr. Asha Rao");
    assert_eq!(professors[0].subject, "Physics");
    assert_eq!(professors[0].email.as_deref(), Some("asha@example.edu"));
    assert_eq!(professors[1].name, "Dr. Lee");
    assert!(professors[1].email.is_none());
  }

  #[test]
  fn test_run_writes_loadable_stores() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let students_txt = dir.path().join("student.txt");
    let professors_txt = dir.path().join("professor.txt");
    std::fs::write(&students_txt, STUDENTS_TXT)?;
    std::fs::write(&professors_txt, PROFESSORS_TXT)?;

    let out = dir.path().join("data");
    let (student_count, professor_count) = import::run(&students_txt, &professors_txt, &out)?;
    assert_eq!(student_count, 2);
    assert_eq!(professor_count, 2);

    let students: RosterStore<StudentRecord> = RosterStore::open(out.join("students.json"));
    assert_eq!(students.len(), 2);
    let professors: RosterStore<ProfessorRecord> = RosterStore::open(out.join("professors.json"));
    assert_eq!(professors.all()[0].subject, "Physics");
    Ok(())
  }
}
