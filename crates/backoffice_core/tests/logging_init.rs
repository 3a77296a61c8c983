use backoffice_core::{init_logging, logging_status, LoggingError};

#[test]
fn init_logging_is_idempotent_and_rejects_conflicts() {
    let dir = tempfile::tempdir().unwrap();
    let other = tempfile::tempdir().unwrap();
    let dir_str = dir.path().to_str().unwrap().to_string();
    let other_str = other.path().to_str().unwrap().to_string();

    init_logging("info", &dir_str).unwrap();
    init_logging(" INFO ", &dir_str).unwrap();

    let level_err = init_logging("debug", &dir_str).unwrap_err();
    assert!(matches!(level_err, LoggingError::Conflict { .. }));
    let dir_err = init_logging("info", &other_str).unwrap_err();
    assert!(dir_err.to_string().contains("refusing to switch"));

    let (level, active_dir) = logging_status().unwrap();
    assert_eq!(level, "info");
    assert_eq!(active_dir, dir.path());
}
