use runtime::{LoggingConfig, RuntimeError, init_tracing};
use tempfile::TempDir;

// Installs the global subscriber, so this binary holds a single test.
#[test]
fn file_logging_installs_once() {
    let dir = TempDir::new().unwrap();
    let config = LoggingConfig {
        filter: "debug".to_string(),
        ansi: false,
        directory: Some(dir.path().join("logs")),
        ..LoggingConfig::default()
    };

    let guard = init_tracing(&config).unwrap();
    assert!(guard.is_some());
    tracing::info!(target: "runtime::logging", "hello");
    assert!(dir.path().join("logs").is_dir());

    assert!(matches!(
        init_tracing(&LoggingConfig::default()),
        Err(RuntimeError::Subscriber(_))
    ));
}
