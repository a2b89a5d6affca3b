use medimate::error::MedimateError;
use medimate::reports::ReportStore;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_save_then_list_puts_new_report_first() {
    let temp_dir = TempDir::new().unwrap();
    let store = ReportStore::new(temp_dir.path());

    // An older report already on disk
    fs::write(
        temp_dir.path().join("summary_2000-01-01_00-00-00.txt"),
        "Report generated: 2000-01-01_00-00-00\n\nold",
    )
    .unwrap();

    let filename = store.save("fresh report body").unwrap();
    let listed = store.list().unwrap();

    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0], filename);
    assert_eq!(listed[1], "summary_2000-01-01_00-00-00.txt");
}

#[test]
fn test_save_then_read_returns_header_blank_line_and_body() {
    let temp_dir = TempDir::new().unwrap();
    let store = ReportStore::new(temp_dir.path());

    let filename = store.save("Symptoms Mentioned:\n- cough").unwrap();
    let content = store.read(&filename).unwrap();

    // The timestamp in the header matches the one embedded in the filename
    let timestamp = filename
        .strip_prefix("summary_")
        .and_then(|rest| rest.strip_suffix(".txt"))
        .unwrap();
    assert_eq!(
        content,
        format!(
            "Report generated: {}\n\nSymptoms Mentioned:\n- cough",
            timestamp
        )
    );
}

#[test]
fn test_filename_embeds_second_resolution_timestamp() {
    let temp_dir = TempDir::new().unwrap();
    let store = ReportStore::new(temp_dir.path());

    let filename = store.save("body").unwrap();
    assert!(filename.starts_with("summary_"));
    assert!(filename.ends_with(".txt"));
    // summary_YYYY-MM-DD_HH-MM-SS.txt
    assert_eq!(filename.len(), "summary_".len() + 19 + ".txt".len());
}

#[test]
fn test_read_missing_report_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let store = ReportStore::new(temp_dir.path());

    let err = store.read("summary_2099-01-01_00-00-00.txt").unwrap_err();
    assert!(matches!(err, MedimateError::NotFound(_)));

    let err = store
        .read_bytes("summary_2099-01-01_00-00-00.txt")
        .unwrap_err();
    assert!(matches!(err, MedimateError::NotFound(_)));
}

#[test]
fn test_traversal_names_are_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let store = ReportStore::new(temp_dir.path());

    for name in ["../secret.txt", "..", "a/b.txt", "a\\b.txt", "/etc/passwd", ""] {
        let err = store.read(name).unwrap_err();
        assert!(
            matches!(err, MedimateError::ClientInput(_)),
            "expected ClientInput for {:?}",
            name
        );
    }
}

#[test]
fn test_list_is_empty_when_directory_missing() {
    let temp_dir = TempDir::new().unwrap();
    let store = ReportStore::new(temp_dir.path().join("never-created"));

    assert!(store.list().unwrap().is_empty());
}
