//! Error types for loading rating data and validating product catalogs
//!
//! Rating itself never fails: an ineligible request simply produces an empty
//! quote list. Errors only arise at the edges, when reading table overrides,
//! catalog snapshots or client batches from disk.

use std::path::PathBuf;
use thiserror::Error;

/// Failure while reading rating tables, catalogs or client files
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{file}, row {row}: {message}")]
    Field {
        file: String,
        row: usize,
        message: String,
    },

    #[error("{0} contains no rows")]
    EmptyTable(String),

    #[error("catalog failed validation: {0}")]
    Invalid(#[from] CatalogError),
}

/// Static data-integrity problem in a product catalog
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("product {id}: min age {min} exceeds max age {max}")]
    InvertedAgeBounds { id: String, min: u32, max: u32 },

    #[error("product {id}: min coverage {min} exceeds max coverage {max}")]
    InvertedCoverageBounds { id: String, min: u64, max: u64 },

    #[error("product {id}: {field} must be positive, got {value}")]
    NonPositive {
        id: String,
        field: &'static str,
        value: f64,
    },

    #[error("product {id}: term {term} has no term-length factor")]
    UnratedTerm { id: String, term: u32 },

    #[error("product {id}: no available terms")]
    NoTerms { id: String },

    #[error("product {id}: health-class set is empty")]
    NoHealthClasses { id: String },

    #[error("duplicate product id {0}")]
    DuplicateId(String),
}
