//! Premium Quoting - deterministic life insurance quote engine
//!
//! This library provides:
//! - Term, Final Expense and SIUL/IUL rating pipelines over immutable catalogs
//! - Age-factor interpolation and extrapolation, term-length and coverage-band factors
//! - Worst-of-all-signals health classification from medications and conditions
//! - Catalog validation, CSV table overrides and JSON catalog snapshots
//! - Lead snapshots of a chosen quote and its alternatives

pub mod catalog;
pub mod client;
pub mod error;
pub mod lead;
pub mod quoting;
pub mod rating;
pub mod underwriting;

// Re-export commonly used types
pub use catalog::{Catalog, FexProduct, ProductFamily, SiulProduct, TermProduct};
pub use client::{ClientProfile, QuoteRequest, Sex};
pub use error::{CatalogError, LoadError};
pub use lead::{CarrierQuote, QuoteSnapshot};
pub use quoting::{round2, QuoteEngine, QuoteLine};
pub use rating::{AgeFactorTable, RatingTables};
pub use underwriting::{classify_health, HealthClass, UnderwritingTier};
