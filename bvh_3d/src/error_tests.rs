//! Unit tests for error.rs
//!
//! Tests all Error variants and their implementations (Display, Debug, Clone, std::error::Error).

use crate::error::{Error, Result};

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_out_of_memory_display() {
    let err = Error::OutOfMemory;
    assert_eq!(format!("{}", err), "Out of memory");
}

#[test]
fn test_corrupt_tree_display() {
    let err = Error::CorruptTree("node 3 has a stale parent link".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Corrupt tree"));
    assert!(display.contains("node 3 has a stale parent link"));
}

#[test]
fn test_invalid_config_display() {
    let err = Error::InvalidConfig("initial_capacity too large".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Invalid config"));
    assert!(display.contains("initial_capacity too large"));
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::OutOfMemory;
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug() {
    assert!(format!("{:?}", Error::OutOfMemory).contains("OutOfMemory"));
    assert!(format!("{:?}", Error::CorruptTree("x".to_string())).contains("CorruptTree"));
    assert!(format!("{:?}", Error::InvalidConfig("x".to_string())).contains("InvalidConfig"));
}

#[test]
fn test_error_clone_and_eq() {
    let err1 = Error::CorruptTree("bounds".to_string());
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, Error::OutOfMemory);
}

// ============================================================================
// RESULT ALIAS
// ============================================================================

#[test]
fn test_result_propagation() {
    fn fails() -> Result<u32> {
        Err(Error::OutOfMemory)
    }

    fn propagates() -> Result<u32> {
        let value = fails()?;
        Ok(value + 1)
    }

    assert_eq!(propagates(), Err(Error::OutOfMemory));
}

#[test]
fn test_bvh_err_macro_returns_error() {
    let err = crate::bvh_err!("bvh3d::test", Error::InvalidConfig("bad".to_string()));
    assert_eq!(err, Error::InvalidConfig("bad".to_string()));
}
