//! Error types for the BVH
//!
//! Removing something that is not in the tree is reported as a zero
//! count, not as an error.

use std::fmt;

/// Result type for bvh_3d operations
pub type Result<T> = std::result::Result<T, Error>;

/// bvh_3d errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The node arena could not grow (insert left the tree untouched)
    OutOfMemory,

    /// A tree invariant does not hold (reported by `Bvh::validate`)
    CorruptTree(String),

    /// A configuration value was rejected
    InvalidConfig(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfMemory => write!(f, "Out of memory"),
            Error::CorruptTree(msg) => write!(f, "Corrupt tree: {}", msg),
            Error::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Build an `Error`, log it at ERROR severity, and evaluate to it.
///
/// ```ignore
/// return Err(bvh_err!("bvh3d::Bvh", Error::OutOfMemory));
/// ```
#[macro_export]
macro_rules! bvh_err {
    ($source:expr, $error:expr) => {{
        let error: $crate::bvh3d::Error = $error;
        $crate::bvh_error!($source, "{}", error);
        error
    }};
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
