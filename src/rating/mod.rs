//! Rating factor tables: age, term length and coverage band

mod factors;
pub mod loader;

pub use factors::{coverage_band_factor, AgeFactorTable, TermLengthFactors, EXTRAPOLATION_GROWTH};
pub use loader::LoadedTables;

use crate::error::LoadError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Container for every factor table the rating pipelines read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingTables {
    /// Term life age factors, anchored at 35
    pub term_age: AgeFactorTable,
    /// Final expense age factors, anchored at 65
    pub fex_age: AgeFactorTable,
    /// SIUL/IUL age factors, anchored at 45
    pub siul_age: AgeFactorTable,
    /// Term length factors, anchored at 20 years
    pub term_length: TermLengthFactors,
}

impl RatingTables {
    /// Built-in tables matching the published rate sheets
    pub fn default_pricing() -> Self {
        Self {
            term_age: AgeFactorTable::term_default(),
            fex_age: AgeFactorTable::fex_default(),
            siul_age: AgeFactorTable::siul_default(),
            term_length: TermLengthFactors::default(),
        }
    }

    /// Load tables from CSV files in the default location (data/rating/)
    pub fn from_csv() -> Result<Self, LoadError> {
        Self::from_csv_path(Path::new(loader::DEFAULT_TABLES_PATH))
    }

    /// Load tables from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self, LoadError> {
        let loaded = LoadedTables::load_from(path)?;

        Ok(Self {
            term_age: AgeFactorTable::from_loaded(&loaded.term_age_factors),
            fex_age: AgeFactorTable::from_loaded(&loaded.fex_age_factors),
            siul_age: AgeFactorTable::from_loaded(&loaded.siul_age_factors),
            term_length: TermLengthFactors::from_loaded(&loaded.term_length_factors),
        })
    }
}

impl Default for RatingTables {
    fn default() -> Self {
        Self::default_pricing()
    }
}
