//! Final expense products
//!
//! Anchor: Female, age 65, Non-Smoker, per $1,000, level benefit, standard class.
//! These are simplified or guaranteed issue, so health class never gates them.

use crate::client::Sex;
use serde::{Deserialize, Serialize};

/// Fixed modal factor for the whole family: annual = monthly x 11
pub const FEX_ANNUAL_FACTOR: f64 = 11.0;

/// Death benefit pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BenefitType {
    Level,
    Graded,
    Modified,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FexProduct {
    pub id: String,
    pub product_name: String,
    pub carrier: String,
    pub benefit_type: BenefitType,

    /// $/K/month at F65 non-smoker standard
    pub anchor_rate_f: f64,

    pub male_mult: f64,
    pub smoker_mult: f64,

    pub min_age: u32,
    pub max_age: u32,
    pub min_coverage: u64,
    pub max_coverage: u64,

    #[serde(default)]
    pub features: Vec<String>,

    #[serde(default)]
    pub has_eapp: bool,

    /// How the benefit grades in early policy years
    #[serde(default)]
    pub graded_note: Option<String>,
}

impl FexProduct {
    pub fn admits_age(&self, age: u32) -> bool {
        age >= self.min_age && age <= self.max_age
    }

    pub fn admits_coverage(&self, coverage: u64) -> bool {
        coverage >= self.min_coverage && coverage <= self.max_coverage
    }

    /// Female is the anchor sex
    pub fn sex_multiplier(&self, sex: Sex) -> f64 {
        match sex {
            Sex::Female => 1.0,
            Sex::Male => self.male_mult,
        }
    }

    pub fn smoker_multiplier(&self, smoker: bool) -> f64 {
        if smoker {
            self.smoker_mult
        } else {
            1.0
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn fex(
    id: &str,
    product_name: &str,
    carrier: &str,
    benefit_type: BenefitType,
    anchor_rate_f: f64,
    (male_mult, smoker_mult): (f64, f64),
    (min_age, max_age): (u32, u32),
    (min_coverage, max_coverage): (u64, u64),
    features: &[&str],
    has_eapp: bool,
) -> FexProduct {
    FexProduct {
        id: id.to_string(),
        product_name: product_name.to_string(),
        carrier: carrier.to_string(),
        benefit_type,
        anchor_rate_f,
        male_mult,
        smoker_mult,
        min_age,
        max_age,
        min_coverage,
        max_coverage,
        features: features.iter().map(|f| f.to_string()).collect(),
        has_eapp,
        graded_note: None,
    }
}

fn graded(mut product: FexProduct, note: &str) -> FexProduct {
    product.graded_note = Some(note.to_string());
    product
}

/// Built-in final expense catalog, in display order
pub fn standard_fex_products() -> Vec<FexProduct> {
    use BenefitType::{Graded, Level};

    vec![
        fex("moo-living-promise-level", "Living Promise Level", "Mutual of Omaha", Level, 4.25,
            (1.45, 1.35), (45, 85), (2_000, 40_000),
            &["Terminal Illness Benefit", "Accidental Death Benefit"], true),
        graded(
            fex("moo-living-promise-graded", "Living Promise Graded", "Mutual of Omaha", Graded, 3.60,
                (1.45, 1.30), (45, 80), (2_000, 25_000),
                &["Terminal Illness Benefit"], true),
            "Graded death benefit: 110% of premiums paid in years 1-2, full benefit year 3+",
        ),
        fex("transamerica-immediate-solution-level", "Immediate Solution Level", "Transamerica", Level, 3.95,
            (1.48, 1.40), (45, 85), (1_000, 50_000),
            &["Terminal Illness", "Chronic Illness"], true),
        graded(
            fex("transamerica-immediate-solution-graded", "Immediate Solution Graded", "Transamerica", Graded, 3.35,
                (1.48, 1.35), (45, 85), (1_000, 50_000),
                &["Terminal Illness"], true),
            "Graded: 30% year 1, 70% year 2, 100% year 3+",
        ),
        fex("foresters-planright-level", "PlanRight Level", "Foresters Financial", Level, 4.10,
            (1.50, 1.38), (50, 85), (2_000, 35_000),
            &["Common Carrier AD&D", "Orphan Benefit", "Emergency Fund"], false),
        graded(
            fex("foresters-planright-graded", "PlanRight Graded", "Foresters Financial", Graded, 3.50,
                (1.50, 1.35), (50, 80), (2_000, 25_000),
                &["Emergency Fund"], false),
            "Graded benefit for the first 2 policy years",
        ),
        fex("americo-eagle-level", "Eagle Series Level Benefit", "Americo Financial", Level, 4.35,
            (1.42, 1.35), (50, 85), (2_000, 30_000),
            &["Terminal Illness", "Nursing Home Benefit"], false),
        fex("aetna-final-expense-level", "Final Expense Level", "Aetna / CVS Health", Level, 4.20,
            (1.47, 1.38), (45, 89), (2_000, 50_000),
            &["Terminal Illness Accelerated Benefit"], true),
        fex("kskj-life-fe-level", "Senior Final Expense Level", "KSKJ Life", Level, 3.80,
            (1.44, 1.30), (50, 80), (5_000, 25_000),
            &["Accidental Death Benefit"], false),
        fex("american-amicable-level", "Senior Life Express Level", "American Amicable", Level, 4.50,
            (1.46, 1.40), (50, 85), (2_500, 35_000),
            &["Terminal Illness", "Critical Illness"], false),
        fex("prosperity-senior-fe-level", "Senior Final Expense Level", "Prosperity Life Group", Level, 4.00,
            (1.48, 1.35), (45, 85), (2_000, 35_000),
            &["Terminal Illness"], false),
        fex("global-atlantic-fe-level", "Final Expense Level", "Global Atlantic", Level, 4.15,
            (1.45, 1.37), (45, 85), (2_000, 40_000),
            &["Terminal Illness Accelerated Benefit"], true),
        fex("national-life-fe-level", "Simple Whole Life Level", "National Life Group", Level, 4.80,
            (1.43, 1.38), (50, 80), (5_000, 50_000),
            &["Chronic Illness Accelerated Benefit", "Terminal Illness"], true),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_contents() {
        let products = standard_fex_products();
        assert_eq!(products.len(), 13);

        let lp = &products[0];
        assert_eq!(lp.product_name, "Living Promise Level");
        assert_eq!(lp.anchor_rate_f, 4.25);
        assert_eq!(lp.male_mult, 1.45);
        assert_eq!(lp.smoker_mult, 1.35);
        assert!(lp.graded_note.is_none());

        let graded: Vec<_> = products
            .iter()
            .filter(|p| p.benefit_type == BenefitType::Graded)
            .collect();
        assert_eq!(graded.len(), 3);
        assert!(graded.iter().all(|p| p.graded_note.is_some()));
    }

    #[test]
    fn test_multipliers_compose_independently() {
        let lp = &standard_fex_products()[0];
        assert_eq!(lp.sex_multiplier(Sex::Female), 1.0);
        assert_eq!(lp.sex_multiplier(Sex::Male), 1.45);
        assert_eq!(lp.smoker_multiplier(false), 1.0);
        assert_eq!(lp.smoker_multiplier(true), 1.35);
    }
}
