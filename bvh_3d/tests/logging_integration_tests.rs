//! Integration tests for the bvh_3d logging system
//!
//! These tests swap the process-wide logger, so every test is `#[serial]`
//! and restores the default logger and severity before returning.
//!
//! Run with: cargo test --test logging_integration_tests

use bvh_3d::bvh3d::{Aabb, Bvh, BvhConfig, Diagnostics, Error, MAX_NODES};
use bvh_3d::bvh3d::log::{Logger, LogEntry, LogSeverity};
use bvh_3d::glam::Vec3;
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        let mut entries = self.entries.lock().unwrap();
        entries.push(LogEntry {
            severity: entry.severity,
            timestamp: entry.timestamp,
            source: entry.source.clone(),
            message: entry.message.clone(),
            file: entry.file,
            line: entry.line,
        });
    }
}

fn restore_defaults() {
    Diagnostics::reset_logger();
    Diagnostics::set_min_severity(LogSeverity::Info);
}

fn unit_box(x: f32) -> Aabb {
    Aabb::from_center_extents(Vec3::new(x, 0.0, 0.0), Vec3::splat(0.5))
}

// ============================================================================
// DIAGNOSTICS REGISTRY
// ============================================================================

#[test]
#[serial]
fn test_integration_custom_logger() {
    let (test_logger, entries) = TestLogger::new();
    Diagnostics::set_logger(test_logger);

    Diagnostics::log(LogSeverity::Info, "test::module", "Test info message".to_string());
    Diagnostics::log(LogSeverity::Warn, "test::module", "Test warning message".to_string());

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 2);
        assert_eq!(captured[0].severity, LogSeverity::Info);
        assert_eq!(captured[0].source, "test::module");
        assert_eq!(captured[0].message, "Test info message");
        assert_eq!(captured[1].severity, LogSeverity::Warn);
        assert_eq!(captured[1].file, None);
    }

    restore_defaults();
}

#[test]
#[serial]
fn test_integration_min_severity_filters() {
    let (test_logger, entries) = TestLogger::new();
    Diagnostics::set_logger(test_logger);
    Diagnostics::set_min_severity(LogSeverity::Warn);

    Diagnostics::log(LogSeverity::Trace, "test", "dropped".to_string());
    Diagnostics::log(LogSeverity::Info, "test", "dropped".to_string());
    Diagnostics::log(LogSeverity::Warn, "test", "kept".to_string());
    Diagnostics::log(LogSeverity::Error, "test", "kept".to_string());

    assert_eq!(Diagnostics::min_severity(), LogSeverity::Warn);
    assert!(!Diagnostics::is_enabled(LogSeverity::Info));
    assert!(Diagnostics::is_enabled(LogSeverity::Error));
    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 2);
        assert!(captured.iter().all(|e| e.message == "kept"));
    }

    restore_defaults();
}

#[test]
#[serial]
fn test_integration_error_logging_with_location() {
    let (test_logger, entries) = TestLogger::new();
    Diagnostics::set_logger(test_logger);

    Diagnostics::log_detailed(
        LogSeverity::Error,
        "test::error",
        "Critical error occurred".to_string(),
        "test_file.rs",
        42,
    );

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].file, Some("test_file.rs"));
        assert_eq!(captured[0].line, Some(42));
    }

    restore_defaults();
}

#[test]
#[serial]
fn test_integration_logger_reset() {
    let (test_logger, entries) = TestLogger::new();
    Diagnostics::set_logger(test_logger);

    Diagnostics::log(LogSeverity::Info, "test", "Message 1".to_string());
    Diagnostics::reset_logger();
    // Goes to the default logger, not captured
    Diagnostics::log(LogSeverity::Info, "test", "Message 2".to_string());

    assert_eq!(entries.lock().unwrap().len(), 1);
    restore_defaults();
}

// ============================================================================
// BVH LOGGING
// ============================================================================

#[test]
#[serial]
fn test_integration_bvh_trace_logs() {
    let (test_logger, entries) = TestLogger::new();
    Diagnostics::set_logger(test_logger);
    Diagnostics::set_min_severity(LogSeverity::Trace);

    let mut bvh = Bvh::new();
    bvh.insert(unit_box(0.0), 0u32).unwrap();
    bvh.insert(unit_box(3.0), 1u32).unwrap();
    assert_eq!(bvh.remove(&unit_box(3.0), &1), 1);
    bvh.clear();

    {
        let captured = entries.lock().unwrap();
        let messages: Vec<&str> = captured.iter().map(|e| e.message.as_str()).collect();
        assert!(captured.iter().all(|e| e.source == "bvh3d::Bvh"));
        assert!(messages.iter().any(|m| m.starts_with("insert: leaf 0 is the new root")));
        assert!(messages.iter().any(|m| m.starts_with("insert: leaf") && m.contains("under branch")));
        assert!(messages.iter().any(|m| m.starts_with("remove: leaf")));
        assert!(messages.iter().any(|m| m.starts_with("clear: freed 1 nodes")));
    }

    restore_defaults();
}

#[test]
#[serial]
fn test_integration_bvh_quiet_at_default_severity() {
    let (test_logger, entries) = TestLogger::new();
    Diagnostics::set_logger(test_logger);

    let mut bvh = Bvh::new();
    for i in 0..32 {
        bvh.insert(unit_box(i as f32 * 2.0), i).unwrap();
    }
    bvh.clear();

    assert!(entries.lock().unwrap().is_empty());
    restore_defaults();
}

#[test]
#[serial]
fn test_integration_invalid_config_logs_error() {
    let (test_logger, entries) = TestLogger::new();
    Diagnostics::set_logger(test_logger);

    let config = BvhConfig { initial_capacity: MAX_NODES + 1, ..BvhConfig::default() };
    let result: Result<Bvh<Aabb, u32>, Error> = Bvh::with_config(config);
    assert!(matches!(result, Err(Error::InvalidConfig(_))));

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].severity, LogSeverity::Error);
        assert!(captured[0].message.starts_with("Invalid config"));
        assert!(captured[0].file.is_some());
        assert!(captured[0].line.is_some());
    }

    restore_defaults();
}
