//! Client profile and quote request structures

use serde::{Deserialize, Serialize};

use crate::catalog::ProductFamily;
use crate::underwriting::{classify_health, HealthClass};

/// Term length used when a Term request does not name one
pub const DEFAULT_TERM_YEARS: u32 = 20;

/// Sex of the proposed insured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

/// Inputs to a single rating call
///
/// The health class is derived from the client's medications and conditions
/// before rating; only the Term family uses it for eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Issue age in whole years
    pub age: u32,

    pub sex: Sex,

    pub smoker: bool,

    /// Face amount (death benefit) in whole dollars
    pub coverage: u64,

    /// Term length in years (Term only, defaults to 20)
    #[serde(default)]
    pub term: Option<u32>,

    /// Product-facing underwriting class
    pub health_class: HealthClass,
}

impl QuoteRequest {
    pub fn new(age: u32, sex: Sex, smoker: bool, coverage: u64, health_class: HealthClass) -> Self {
        Self {
            age,
            sex,
            smoker,
            coverage,
            term: None,
            health_class,
        }
    }

    /// Set the requested term length
    pub fn with_term(mut self, term: u32) -> Self {
        self.term = Some(term);
        self
    }

    /// Requested term length, falling back to 20 years
    pub fn term_years(&self) -> u32 {
        self.term.unwrap_or(DEFAULT_TERM_YEARS)
    }

    /// Coverage expressed in thousands of dollars (the unit anchor rates are quoted in)
    pub fn coverage_units(&self) -> f64 {
        self.coverage as f64 / 1000.0
    }
}

/// A prospect as captured on a lead: demographics plus the medication and
/// condition selections used for health classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    /// Identifier carried through batch runs
    pub client_id: u32,

    /// Product line being quoted
    pub product_family: ProductFamily,

    pub age: u32,

    pub sex: Sex,

    pub smoker: bool,

    /// Desired face amount in whole dollars
    pub coverage: u64,

    /// Term length in years (ignored outside Term)
    #[serde(default)]
    pub term: Option<u32>,

    /// Selected medication names
    #[serde(default)]
    pub medications: Vec<String>,

    /// Selected health condition names
    #[serde(default)]
    pub conditions: Vec<String>,
}

impl ClientProfile {
    pub fn new(
        client_id: u32,
        product_family: ProductFamily,
        age: u32,
        sex: Sex,
        smoker: bool,
        coverage: u64,
    ) -> Self {
        Self {
            client_id,
            product_family,
            age,
            sex,
            smoker,
            coverage,
            term: None,
            medications: Vec::new(),
            conditions: Vec::new(),
        }
    }

    /// Worst-of-all-signals health class from medications and conditions
    pub fn health_class(&self) -> HealthClass {
        classify_health(&self.medications, &self.conditions)
    }

    /// Build the rating request, deriving the health class
    pub fn to_request(&self) -> QuoteRequest {
        QuoteRequest {
            age: self.age,
            sex: self.sex,
            smoker: self.smoker,
            coverage: self.coverage,
            term: self.term,
            health_class: self.health_class(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_term() {
        let request = QuoteRequest::new(35, Sex::Male, false, 100_000, HealthClass::PreferredPlus);
        assert_eq!(request.term_years(), 20);
        assert_eq!(request.with_term(30).term_years(), 30);
    }

    #[test]
    fn test_coverage_units() {
        let request = QuoteRequest::new(35, Sex::Male, false, 250_000, HealthClass::Standard);
        assert_eq!(request.coverage_units(), 250.0);
    }

    #[test]
    fn test_profile_without_selections_is_best_class() {
        let profile = ClientProfile::new(1, ProductFamily::Term, 40, Sex::Female, false, 500_000);
        let request = profile.to_request();

        assert_eq!(request.health_class, HealthClass::PreferredPlus);
        assert_eq!(request.coverage, 500_000);
        assert_eq!(request.sex, Sex::Female);
    }

    #[test]
    fn test_profile_condition_drives_class() {
        let mut profile = ClientProfile::new(2, ProductFamily::Term, 50, Sex::Male, false, 250_000);
        profile.medications = vec!["Lisinopril".to_string()];
        profile.conditions = vec!["Congestive Heart Failure".to_string()];

        assert_eq!(profile.health_class(), HealthClass::Table2);
    }
}
