use std::fs;
use std::path::Path;

use dropdown::paths::rotate_logs_in;

fn log_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".log"))
        .collect();
    names.sort();
    names
}

// ============================================================================
// Log Rotation Tests
// ============================================================================

#[test]
fn test_latest_log_archived() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("latest.log"), "previous run").unwrap();

    rotate_logs_in(dir.path(), 25);

    let names = log_names(dir.path());
    assert_eq!(names.len(), 1);
    assert_ne!(names[0], "latest.log");
    let archived = fs::read_to_string(dir.path().join(&names[0])).unwrap();
    assert_eq!(archived, "previous run");
}

#[test]
fn test_oldest_archives_pruned() {
    let dir = tempfile::tempdir().unwrap();
    for day in 1..=30 {
        fs::write(dir.path().join(format!("200001{day:02}_000000.000.log")), "").unwrap();
    }
    fs::write(dir.path().join("latest.log"), "").unwrap();

    rotate_logs_in(dir.path(), 25);

    let names = log_names(dir.path());
    assert_eq!(names.len(), 25);
    assert!(!names.contains(&"20000101_000000.000.log".to_string()));
    assert!(!names.contains(&"20000106_000000.000.log".to_string()));
    assert!(names.contains(&"20000107_000000.000.log".to_string()));
    assert!(!names.contains(&"latest.log".to_string()));
}

#[test]
fn test_other_files_untouched() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("notes.txt"), "keep").unwrap();
    fs::write(dir.path().join("a.log"), "").unwrap();

    rotate_logs_in(dir.path(), 0);

    assert!(dir.path().join("notes.txt").exists());
    assert!(log_names(dir.path()).is_empty());
}

#[test]
fn test_missing_directory_is_harmless() {
    let dir = tempfile::tempdir().unwrap();
    rotate_logs_in(&dir.path().join("absent"), 25);
}
