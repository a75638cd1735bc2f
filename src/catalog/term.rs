//! Term life products
//!
//! All rates anchored to: Male, age 35, Non-Smoker, $100K, 20-year term, at
//! the product's best sold class.

use crate::client::Sex;
use crate::underwriting::HealthClass;
use serde::{Deserialize, Serialize};

/// Term lengths every built-in product offers
pub const STANDARD_TERMS: [u32; 5] = [10, 15, 20, 25, 30];

/// Health classes a product is sold under
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HealthClassSet {
    /// Non-medical / simplified issue: health class is ignored
    All,
    /// Sold only to the listed classes
    Only(Vec<HealthClass>),
}

impl HealthClassSet {
    pub fn admits(&self, class: HealthClass) -> bool {
        match self {
            HealthClassSet::All => true,
            HealthClassSet::Only(classes) => classes.contains(&class),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, HealthClassSet::Only(classes) if classes.is_empty())
    }
}

/// Accidental death rider priced with its own anchor rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccidentalDeathRider {
    /// $/K/month at the product anchor
    pub anchor_rate_per_k: f64,
    /// annual = monthly x annual_factor
    pub annual_factor: f64,
}

/// A term life product in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermProduct {
    pub id: String,
    pub product_name: String,
    pub carrier: String,

    /// $/K/month at the anchor profile
    pub anchor_rate_per_k: f64,

    /// annual = monthly x annual_factor (carrier modal factor, not derivable)
    pub annual_factor: f64,

    pub health_classes: HealthClassSet,
    pub available_terms: Vec<u32>,

    pub min_age: u32,
    pub max_age: u32,
    pub min_coverage: u64,
    pub max_coverage: u64,

    /// Male smoker multiplier
    pub smoker_mult: f64,
    /// Female non-smoker multiplier (applied to the male non-smoker rate)
    pub female_mult: f64,
    /// Female smoker multiplier
    pub female_smoker_mult: f64,

    /// Return of premium multiplier, when ROP can be selected
    #[serde(default)]
    pub rop_premium_mult: Option<f64>,

    #[serde(default)]
    pub accidental_death: Option<AccidentalDeathRider>,

    #[serde(default)]
    pub has_eapp: bool,

    /// Rider names shown on the quote card
    #[serde(default)]
    pub features: Vec<String>,

    #[serde(default)]
    pub note: Option<String>,

    /// Payment Protector monthly income (pre-calculated at the anchor)
    #[serde(default)]
    pub payment_protector_income: Option<f64>,

    /// Renewal of an expiring policy rather than new issue
    #[serde(default)]
    pub is_continuation: bool,

    /// Wellness program available
    #[serde(default)]
    pub has_vitality: bool,
}

impl TermProduct {
    fn new(
        id: &str,
        product_name: &str,
        carrier: &str,
        anchor_rate_per_k: f64,
        annual_factor: f64,
        health_classes: HealthClassSet,
    ) -> Self {
        Self {
            id: id.to_string(),
            product_name: product_name.to_string(),
            carrier: carrier.to_string(),
            anchor_rate_per_k,
            annual_factor,
            health_classes,
            available_terms: STANDARD_TERMS.to_vec(),
            min_age: 18,
            max_age: 70,
            min_coverage: 25_000,
            max_coverage: 10_000_000,
            smoker_mult: 2.55,
            female_mult: 0.80,
            female_smoker_mult: 2.05,
            rop_premium_mult: None,
            accidental_death: None,
            has_eapp: false,
            features: Vec::new(),
            note: None,
            payment_protector_income: None,
            is_continuation: false,
            has_vitality: false,
        }
    }

    fn ages(mut self, min: u32, max: u32) -> Self {
        self.min_age = min;
        self.max_age = max;
        self
    }

    fn coverage(mut self, min: u64, max: u64) -> Self {
        self.min_coverage = min;
        self.max_coverage = max;
        self
    }

    fn multipliers(mut self, smoker: f64, female: f64, female_smoker: f64) -> Self {
        self.smoker_mult = smoker;
        self.female_mult = female;
        self.female_smoker_mult = female_smoker;
        self
    }

    fn rider(mut self, anchor_rate_per_k: f64, annual_factor: f64) -> Self {
        self.accidental_death = Some(AccidentalDeathRider {
            anchor_rate_per_k,
            annual_factor,
        });
        self
    }

    fn eapp(mut self) -> Self {
        self.has_eapp = true;
        self
    }

    fn features(mut self, features: &[&str]) -> Self {
        self.features = features.iter().map(|f| f.to_string()).collect();
        self
    }

    fn note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }

    fn payment_protector(mut self, income: f64) -> Self {
        self.payment_protector_income = Some(income);
        self.note = Some(format!("Calculated monthly income is ${:.2}", income));
        self
    }

    fn continuation(mut self) -> Self {
        self.is_continuation = true;
        self
    }

    fn vitality(mut self) -> Self {
        self.has_vitality = true;
        self
    }

    pub fn admits_age(&self, age: u32) -> bool {
        age >= self.min_age && age <= self.max_age
    }

    pub fn admits_coverage(&self, coverage: u64) -> bool {
        coverage >= self.min_coverage && coverage <= self.max_coverage
    }

    pub fn offers_term(&self, term_years: u32) -> bool {
        self.available_terms.contains(&term_years)
    }

    /// One of four explicit coefficients; male non-smoker is the 1.00 baseline
    pub fn sex_smoker_multiplier(&self, sex: Sex, smoker: bool) -> f64 {
        match (sex, smoker) {
            (Sex::Male, false) => 1.00,
            (Sex::Female, false) => self.female_mult,
            (Sex::Male, true) => self.smoker_mult,
            (Sex::Female, true) => self.female_smoker_mult,
        }
    }

    /// Rider anchor rate, when a priced rider is attached
    pub fn rider_rate(&self) -> Option<&AccidentalDeathRider> {
        self.accidental_death
            .as_ref()
            .filter(|rider| rider.anchor_rate_per_k > 0.0)
    }
}

/// Built-in term catalog, in display order
pub fn standard_term_products() -> Vec<TermProduct> {
    use HealthClass::{Preferred, PreferredPlus, Select, Standard, StandardPlus, Table2, Table4};

    let pp_to_std = || HealthClassSet::Only(vec![PreferredPlus, Preferred, StandardPlus, Standard]);
    let std_only = || HealthClassSet::Only(vec![StandardPlus, Standard]);
    let rated = || {
        HealthClassSet::Only(vec![PreferredPlus, Preferred, StandardPlus, Standard, Table2, Table4])
    };
    const NEAREST_AGE: &str =
        "Rates calculated by nearest age. Please confirm the age you entered is the prospect's nearest age.";
    const LIVING_BENEFITS: [&str; 3] = ["Terminal Illness", "Critical Illness", "Chronic Illness"];

    vec![
        // Banner Life / William Penn
        TermProduct::new("elite-20", "20-Year Elite", "Banner Life", 0.1373, 11.36, HealthClassSet::Only(vec![PreferredPlus]))
            .ages(20, 75)
            .coverage(100_000, 10_000_000)
            .multipliers(2.80, 0.77, 2.20),
        TermProduct::new("preferred-20", "20-Year Preferred", "Prudential", 0.3045, 11.36, HealthClassSet::Only(vec![PreferredPlus, Preferred]))
            .ages(18, 75)
            .coverage(100_000, 10_000_000)
            .multipliers(2.60, 0.79, 2.10),
        TermProduct::new("payment-protector-20", "Payment Protector 20-Year", "North American Company", 0.3543, 10.52, pp_to_std())
            .coverage(50_000, 5_000_000)
            .eapp()
            .payment_protector(579.96),
        TermProduct::new("standard-20", "20-Year Standard", "Protective Life", 0.3758, 11.36, std_only())
            .coverage(100_000, 10_000_000),
        TermProduct::new("survivor-protector-standard-20", "Survivor Protector Standard 20-Year", "North American Company", 0.4240, 10.64, std_only())
            .coverage(50_000, 5_000_000)
            .eapp()
            .payment_protector(575.49),
        TermProduct::new("pp-continuation-20", "Payment Protector Continuation 20-Year", "North American Company", 0.4361, 10.53, pp_to_std())
            .coverage(50_000, 5_000_000)
            .eapp()
            .payment_protector(579.96)
            .continuation(),
        // No medical exam
        TermProduct::new("your-term-nonmed-20", "Your Term 20-Year Non-Med", "SBLI", 0.4428, 11.43, HealthClassSet::All)
            .ages(18, 65)
            .coverage(100_000, 500_000)
            .multipliers(2.40, 0.82, 2.00)
            .rider(0.0691, 11.43)
            .features(&["Family Health Benefit", "Terminal Illness", "Critical Illness", "Chronic Illness"])
            .note(NEAREST_AGE),
        TermProduct::new("strong-foundation-20", "Strong Foundation 20-Year", "Transamerica", 0.4611, 11.43, pp_to_std())
            .coverage(25_000, 2_000_000)
            .multipliers(2.55, 0.79, 2.05)
            .rider(0.0691, 11.43)
            .features(&LIVING_BENEFITS)
            .note(NEAREST_AGE),
        TermProduct::new("hms-term-100-20", "HMS 20-Year Term 100", "HealthMarkets", 0.4665, 10.53, pp_to_std())
            .ages(18, 75)
            .coverage(25_000, 5_000_000)
            .multipliers(2.60, 0.80, 2.10)
            .eapp()
            .features(&LIVING_BENEFITS),
        TermProduct::new("term-life-express-20", "Term Life Express 20-Year", "Sagicor Life", 0.4788, 11.24, pp_to_std())
            .ages(18, 65)
            .coverage(50_000, 400_000)
            .rider(0.0890, 11.24)
            .eapp()
            .features(&LIVING_BENEFITS),
        TermProduct::new("hms-term-125-20", "HMS 20-Year Term 125", "HealthMarkets", 0.5225, 10.53, rated())
            .ages(18, 75)
            .coverage(25_000, 5_000_000)
            .multipliers(2.60, 0.80, 2.10)
            .eapp()
            .features(&LIVING_BENEFITS),
        // JH charges the full 12 months annually
        TermProduct::new("jh-vitality-standard-20", "Simple Term with Vitality (2023) Standard 20-Year", "John Hancock", 0.5316, 12.00, std_only())
            .ages(18, 60)
            .coverage(250_000, 65_000_000)
            .multipliers(2.50, 0.79, 2.00)
            .eapp()
            .features(&["Vitality Program", "Terminal Illness"])
            .vitality(),
        TermProduct::new("term-made-simple-standard-20", "Term Made Simple Standard 20-Year", "Transamerica", 0.5508, 11.11, std_only())
            .ages(18, 65)
            .coverage(25_000, 2_000_000)
            .multipliers(2.55, 0.79, 2.05)
            .rider(0.0864, 11.11)
            .eapp()
            .features(&["Terminal Illness", "Accelerated Benefit - Confined Care", "Chronic Illness"]),
        TermProduct::new("continuation-10-20", "Continuation 10 20-Year", "Protective Life", 0.5729, 10.52, rated())
            .multipliers(2.60, 0.80, 2.10)
            .eapp()
            .continuation(),
        TermProduct::new("easy-term-20", "Easy Term 20-Year", "Pacific Life", 0.5941, 10.64, pp_to_std())
            .ages(18, 65)
            .coverage(25_000, 5_000_000)
            .rider(0.0902, 10.64)
            .features(&["Terminal Illness", "Accelerated Benefit - Confined Care", "Chronic Illness"])
            .note(NEAREST_AGE),
        TermProduct::new("express-1-20", "20-Year Express 1", "Assurity", 0.6090, 11.36, pp_to_std())
            .ages(18, 65)
            .coverage(25_000, 500_000)
            .multipliers(2.50, 0.81, 2.05),
        TermProduct::new("continuation-25-20", "Continuation 25 20-Year", "Protective Life", 0.7372, 10.53, rated())
            .multipliers(2.60, 0.80, 2.10)
            .eapp()
            .continuation(),
        // Simplified issue
        TermProduct::new("simple-term-20", "Simple Term 20-Year", "Mutual of Omaha", 0.7743, 11.50, HealthClassSet::All)
            .coverage(25_000, 300_000)
            .multipliers(2.40, 0.82, 2.00)
            .rider(0.1305, 11.50)
            .eapp()
            .features(&["Terminal Illness"]),
        // Substandard / rated
        TermProduct::new("jh-vitality-select-20", "Simple Term with Vitality (2023) Select 20-Year", "John Hancock", 0.9139, 12.00, HealthClassSet::Only(vec![Select]))
            .ages(18, 60)
            .coverage(250_000, 65_000_000)
            .multipliers(2.50, 0.79, 2.00)
            .eapp()
            .vitality(),
        TermProduct::new("home-certainty-standard-20", "Home Certainty Standard 20-Year", "Foresters Financial", 0.4682, 11.36, std_only())
            .ages(18, 65)
            .coverage(50_000, 750_000)
            .rider(0.0845, 11.36)
            .eapp(),
    ]
}
