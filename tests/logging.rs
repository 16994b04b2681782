//! File logger installation.

use selector_kit::{KitError, facade, init_logger};

#[test]
fn test_logger_records_rejected_parts() {
    let path = std::env::temp_dir().join(format!("selector-kit-{}.log", std::process::id()));
    let _ = std::fs::remove_file(&path);

    init_logger(&path).unwrap();

    let err = facade::class("x").unwrap().element("div").unwrap_err();
    log::logger().flush();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("[DEBUG]"));
    assert!(contents.contains(&err.to_string()));

    // Only one logger per process.
    assert!(matches!(
        init_logger(&path),
        Err(KitError::LoggerAlreadySet(_))
    ));

    let _ = std::fs::remove_file(&path);
}
