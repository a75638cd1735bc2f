//! CSV-based rating table loader
//!
//! Loads factor table overrides from CSV files in data/rating/

use crate::error::LoadError;
use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

/// Default path to rating tables directory
pub const DEFAULT_TABLES_PATH: &str = "data/rating";

pub const TERM_AGE_FILE: &str = "term_age_factors.csv";
pub const FEX_AGE_FILE: &str = "fex_age_factors.csv";
pub const SIUL_AGE_FILE: &str = "siul_age_factors.csv";
pub const TERM_LENGTH_FILE: &str = "term_length_factors.csv";

/// Load a two-column `key,factor` table, rejecting non-positive factors
fn load_keyed_factors(path: &Path, file_name: &str) -> Result<BTreeMap<u32, f64>, LoadError> {
    let full_path = path.join(file_name);
    let file = File::open(&full_path).map_err(|source| LoadError::Io {
        path: full_path.clone(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let mut factors = BTreeMap::new();

    for (idx, result) in reader.records().enumerate() {
        let record = result.map_err(|source| LoadError::Csv {
            path: full_path.clone(),
            source,
        })?;
        let row = idx + 2;
        let field_error = |message: String| LoadError::Field {
            file: file_name.to_string(),
            row,
            message,
        };

        let key: u32 = record
            .get(0)
            .unwrap_or_default()
            .trim()
            .parse()
            .map_err(|e| field_error(format!("bad key: {}", e)))?;
        let factor: f64 = record
            .get(1)
            .unwrap_or_default()
            .trim()
            .parse()
            .map_err(|e| field_error(format!("bad factor: {}", e)))?;

        if !(factor.is_finite() && factor > 0.0) {
            return Err(field_error(format!("factor must be positive, got {}", factor)));
        }

        factors.insert(key, factor);
    }

    if factors.is_empty() {
        return Err(LoadError::EmptyTable(file_name.to_string()));
    }

    Ok(factors)
}

/// Load an age factor table (columns: age, factor)
pub fn load_age_factors(path: &Path, file_name: &str) -> Result<BTreeMap<u32, f64>, LoadError> {
    load_keyed_factors(path, file_name)
}

/// Load term-length factors (columns: term_years, factor)
pub fn load_term_length_factors(path: &Path) -> Result<BTreeMap<u32, f64>, LoadError> {
    load_keyed_factors(path, TERM_LENGTH_FILE)
}

/// All rating tables read from a directory
pub struct LoadedTables {
    pub term_age_factors: BTreeMap<u32, f64>,
    pub fex_age_factors: BTreeMap<u32, f64>,
    pub siul_age_factors: BTreeMap<u32, f64>,
    pub term_length_factors: BTreeMap<u32, f64>,
}

impl LoadedTables {
    /// Load all tables from the default path
    pub fn load_default() -> Result<Self, LoadError> {
        Self::load_from(Path::new(DEFAULT_TABLES_PATH))
    }

    /// Load all tables from a specific path
    pub fn load_from(path: &Path) -> Result<Self, LoadError> {
        let loaded = Self {
            term_age_factors: load_age_factors(path, TERM_AGE_FILE)?,
            fex_age_factors: load_age_factors(path, FEX_AGE_FILE)?,
            siul_age_factors: load_age_factors(path, SIUL_AGE_FILE)?,
            term_length_factors: load_term_length_factors(path)?,
        };
        log::info!("loaded rating tables from {}", path.display());
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::AgeFactorTable;

    #[test]
    fn test_load_default_tables() {
        let result = LoadedTables::load_default();
        assert!(result.is_ok(), "Failed to load tables: {:?}", result.err());

        let tables = result.unwrap();

        assert_eq!(tables.term_age_factors.get(&35), Some(&1.00));
        assert_eq!(tables.fex_age_factors.get(&65), Some(&1.00));
        assert_eq!(tables.siul_age_factors.get(&45), Some(&1.00));
        assert_eq!(tables.term_length_factors.get(&20), Some(&1.00));
    }

    #[test]
    fn test_csv_tables_match_built_in() {
        let tables = LoadedTables::load_default().expect("tables should load");

        let from_csv = AgeFactorTable::from_loaded(&tables.term_age_factors);
        assert_eq!(from_csv, AgeFactorTable::term_default());

        let from_csv = AgeFactorTable::from_loaded(&tables.fex_age_factors);
        assert_eq!(from_csv, AgeFactorTable::fex_default());

        let from_csv = AgeFactorTable::from_loaded(&tables.siul_age_factors);
        assert_eq!(from_csv, AgeFactorTable::siul_default());
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let result = load_term_length_factors(Path::new("data/does-not-exist"));
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }
}
