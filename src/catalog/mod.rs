//! Product catalogs for the three quoting families
//!
//! Each family keeps its own product shape. Term carries four explicit
//! sex/smoker coefficients, final expense and SIUL carry two independent
//! multipliers each, so they are deliberately not unified behind one trait.

pub mod final_expense;
pub mod siul;
pub mod term;

pub use final_expense::{standard_fex_products, BenefitType, FexProduct, FEX_ANNUAL_FACTOR};
pub use siul::{standard_siul_products, IndexStrategy, SiulProduct, SiulType};
pub use term::{
    standard_term_products, AccidentalDeathRider, HealthClassSet, TermProduct, STANDARD_TERMS,
};

use crate::error::{CatalogError, LoadError};
use crate::rating::TermLengthFactors;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Product family a quote request is rated against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductFamily {
    Term,
    FinalExpense,
    Siul,
}

impl ProductFamily {
    pub const ALL: [ProductFamily; 3] = [
        ProductFamily::Term,
        ProductFamily::FinalExpense,
        ProductFamily::Siul,
    ];

    /// Quote type code stored on a lead
    pub fn lead_code(&self) -> &'static str {
        match self {
            ProductFamily::Term => "term",
            ProductFamily::FinalExpense => "fex",
            ProductFamily::Siul => "iul",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProductFamily::Term => "Term Life",
            ProductFamily::FinalExpense => "Final Expense",
            ProductFamily::Siul => "SIUL / IUL",
        }
    }
}

impl std::fmt::Display for ProductFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Immutable snapshot of every product the engine can quote
///
/// A catalog is built once and shared read-only. Replacing products means
/// building a new `Catalog`, never mutating one in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub term: Vec<TermProduct>,
    #[serde(default)]
    pub final_expense: Vec<FexProduct>,
    #[serde(default)]
    pub siul: Vec<SiulProduct>,
}

impl Catalog {
    /// Built-in catalog shipped with the crate
    pub fn standard() -> Self {
        Self {
            term: standard_term_products(),
            final_expense: standard_fex_products(),
            siul: standard_siul_products(),
        }
    }

    /// Load a catalog snapshot from a JSON file and validate it
    pub fn from_json_path(path: &Path, term_length: &TermLengthFactors) -> Result<Self, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_json_reader(BufReader::new(file), term_length).map_err(|e| match e {
            LoadError::Json { source, .. } => LoadError::Json {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        log::info!(
            "Loaded catalog from {:?}: {} term, {} final expense, {} SIUL products",
            path,
            catalog.term.len(),
            catalog.final_expense.len(),
            catalog.siul.len()
        );

        Ok(catalog)
    }

    /// Parse and validate a catalog from any reader
    pub fn from_json_reader<R: Read>(reader: R, term_length: &TermLengthFactors) -> Result<Self, LoadError> {
        let catalog: Catalog = serde_json::from_reader(reader).map_err(|source| LoadError::Json {
            path: Default::default(),
            source,
        })?;
        catalog.validate(term_length)?;
        Ok(catalog)
    }

    pub fn len(&self, family: ProductFamily) -> usize {
        match family {
            ProductFamily::Term => self.term.len(),
            ProductFamily::FinalExpense => self.final_expense.len(),
            ProductFamily::Siul => self.siul.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.term.is_empty() && self.final_expense.is_empty() && self.siul.is_empty()
    }

    /// Check static data integrity; stops at the first problem found
    pub fn validate(&self, term_length: &TermLengthFactors) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        let ids = self
            .term
            .iter()
            .map(|p| &p.id)
            .chain(self.final_expense.iter().map(|p| &p.id))
            .chain(self.siul.iter().map(|p| &p.id));
        for id in ids {
            if !seen.insert(id.as_str()) {
                return Err(CatalogError::DuplicateId(id.clone()));
            }
        }

        for p in &self.term {
            check_bounds(&p.id, (p.min_age, p.max_age), (p.min_coverage, p.max_coverage))?;
            check_positive(&p.id, "anchor_rate_per_k", p.anchor_rate_per_k)?;
            check_positive(&p.id, "annual_factor", p.annual_factor)?;
            check_positive(&p.id, "smoker_mult", p.smoker_mult)?;
            check_positive(&p.id, "female_mult", p.female_mult)?;
            check_positive(&p.id, "female_smoker_mult", p.female_smoker_mult)?;
            if let Some(rider) = &p.accidental_death {
                check_positive(&p.id, "rider anchor_rate_per_k", rider.anchor_rate_per_k)?;
                check_positive(&p.id, "rider annual_factor", rider.annual_factor)?;
            }
            if p.available_terms.is_empty() {
                return Err(CatalogError::NoTerms { id: p.id.clone() });
            }
            if let Some(&term) = p
                .available_terms
                .iter()
                .find(|&&t| term_length.factor(t).is_none())
            {
                return Err(CatalogError::UnratedTerm {
                    id: p.id.clone(),
                    term,
                });
            }
            if p.health_classes.is_empty() {
                return Err(CatalogError::NoHealthClasses { id: p.id.clone() });
            }
        }

        for p in &self.final_expense {
            check_bounds(&p.id, (p.min_age, p.max_age), (p.min_coverage, p.max_coverage))?;
            check_positive(&p.id, "anchor_rate_f", p.anchor_rate_f)?;
            check_positive(&p.id, "male_mult", p.male_mult)?;
            check_positive(&p.id, "smoker_mult", p.smoker_mult)?;
        }

        for p in &self.siul {
            check_bounds(
                &p.id,
                (p.min_age, p.max_age),
                (p.min_death_benefit, p.max_death_benefit),
            )?;
            check_positive(&p.id, "anchor_prem_per_k", p.anchor_prem_per_k)?;
            check_positive(&p.id, "female_mult", p.female_mult)?;
            check_positive(&p.id, "smoker_mult", p.smoker_mult)?;
        }

        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn check_bounds(id: &str, (min_age, max_age): (u32, u32), (min_cov, max_cov): (u64, u64)) -> Result<(), CatalogError> {
    if min_age > max_age {
        return Err(CatalogError::InvertedAgeBounds {
            id: id.to_string(),
            min: min_age,
            max: max_age,
        });
    }
    if min_cov > max_cov {
        return Err(CatalogError::InvertedCoverageBounds {
            id: id.to_string(),
            min: min_cov,
            max: max_cov,
        });
    }
    Ok(())
}

fn check_positive(id: &str, field: &'static str, value: f64) -> Result<(), CatalogError> {
    // NaN fails this comparison too
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(CatalogError::NonPositive {
            id: id.to_string(),
            field,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_is_valid() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.len(ProductFamily::Term), 20);
        assert_eq!(catalog.len(ProductFamily::FinalExpense), 13);
        assert_eq!(catalog.len(ProductFamily::Siul), 8);
        assert_eq!(catalog.validate(&TermLengthFactors::default()), Ok(()));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let mut catalog = Catalog::standard();
        catalog.final_expense[0].min_age = 90;
        assert!(matches!(
            catalog.validate(&TermLengthFactors::default()),
            Err(CatalogError::InvertedAgeBounds { min: 90, max: 85, .. })
        ));
    }

    #[test]
    fn test_missing_multiplier_rejected() {
        let mut catalog = Catalog::standard();
        catalog.term[3].annual_factor = 0.0;
        assert!(matches!(
            catalog.validate(&TermLengthFactors::default()),
            Err(CatalogError::NonPositive { field: "annual_factor", .. })
        ));
    }

    #[test]
    fn test_unrated_term_rejected() {
        let mut catalog = Catalog::standard();
        catalog.term[0].available_terms.push(35);
        let err = catalog.validate(&TermLengthFactors::default()).unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnratedTerm {
                id: catalog.term[0].id.clone(),
                term: 35
            }
        );
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut catalog = Catalog::standard();
        let first = catalog.siul[0].clone();
        catalog.siul.push(first);
        assert_eq!(
            catalog.validate(&TermLengthFactors::default()),
            Err(CatalogError::DuplicateId("pacific-life-siul".to_string()))
        );
    }

    #[test]
    fn test_json_snapshot_round_trip() {
        let catalog = Catalog::standard();
        let json = serde_json::to_string(&catalog).unwrap();
        let loaded = Catalog::from_json_reader(json.as_bytes(), &TermLengthFactors::default()).unwrap();

        for family in ProductFamily::ALL {
            assert_eq!(loaded.len(family), catalog.len(family));
        }
        for (a, b) in loaded.term.iter().zip(&catalog.term) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.health_classes, b.health_classes);
            assert_eq!(a.available_terms, b.available_terms);
            assert!((a.anchor_rate_per_k - b.anchor_rate_per_k).abs() < 1e-12);
        }
    }

    #[test]
    fn test_json_missing_families_default_empty() {
        let loaded = Catalog::from_json_reader("{}".as_bytes(), &TermLengthFactors::default()).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_lead_codes() {
        assert_eq!(ProductFamily::Term.lead_code(), "term");
        assert_eq!(ProductFamily::FinalExpense.lead_code(), "fex");
        assert_eq!(ProductFamily::Siul.lead_code(), "iul");
    }
}
