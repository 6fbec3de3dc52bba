//! Error types for the mock-feed crate.
//!
//! This module defines semantic error enums for catalog construction and
//! random sampling, following the project's error handling conventions with
//! `thiserror`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when building or loading a fixture catalog.
///
/// These errors cover file I/O, JSON parsing, and the non-empty-pool
/// precondition every sampling pool must satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A sampling pool was supplied without any entries.
    #[error("fixture pool '{pool}' must not be empty")]
    EmptyPool {
        /// Name of the offending pool.
        pool: &'static str,
    },

    /// The catalog JSON is malformed or missing required fields.
    #[error("invalid catalog JSON: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
    },

    /// The catalog file could not be read.
    #[error("failed to read catalog file at '{}': {message}", path.display())]
    Io {
        /// Path to the catalog file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },
}

/// Errors that can occur during random sampling.
///
/// Both variants are precondition violations. They never occur when
/// generating from a validated [`FixtureCatalog`](crate::FixtureCatalog),
/// whose constructors reject empty pools up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SampleError {
    /// A uniform pick was requested over an empty pool.
    #[error("cannot pick from an empty pool")]
    EmptyPool,

    /// An integer range was requested with `max <= min`.
    #[error("invalid sampling range: min {min} must be below max {max}")]
    InvalidRange {
        /// Inclusive lower bound that was supplied.
        min: u64,
        /// Exclusive upper bound that was supplied.
        max: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_error_empty_pool_formats_correctly() {
        let err = CatalogError::EmptyPool { pool: "names" };
        assert_eq!(err.to_string(), "fixture pool 'names' must not be empty");
    }

    #[test]
    fn catalog_error_parse_formats_correctly() {
        let err = CatalogError::Parse {
            message: "unexpected token".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid catalog JSON: unexpected token");
    }

    #[test]
    fn catalog_error_io_formats_correctly() {
        let err = CatalogError::Io {
            path: PathBuf::from("/tmp/catalog.json"),
            message: "file not found".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read catalog file at '/tmp/catalog.json': file not found"
        );
    }

    #[test]
    fn sample_error_empty_pool_formats_correctly() {
        let err = SampleError::EmptyPool;
        assert_eq!(err.to_string(), "cannot pick from an empty pool");
    }

    #[test]
    fn sample_error_invalid_range_formats_correctly() {
        let err = SampleError::InvalidRange { min: 20, max: 1 };
        assert_eq!(
            err.to_string(),
            "invalid sampling range: min 20 must be below max 1"
        );
    }
}
