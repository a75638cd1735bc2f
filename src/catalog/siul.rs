//! Simplified and indexed universal life products
//!
//! Anchor: Male, age 45, Non-Smoker, $250,000 death benefit, Standard class.
//! Rates are target monthly premiums per $1,000 of death benefit.

use crate::client::Sex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SiulType {
    Siul,
    Iul,
    Ul,
}

impl SiulType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SiulType::Siul => "SIUL",
            SiulType::Iul => "IUL",
            SiulType::Ul => "UL",
        }
    }
}

/// Index-crediting method offered inside a policy. Informational only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexStrategy {
    pub name: String,
    pub index_type: String,
    /// Percent
    pub floor: f64,
    /// Percent; `None` means uncapped
    pub cap: Option<f64>,
    /// Percent
    pub participation_rate: f64,
}

impl IndexStrategy {
    fn new(name: &str, index_type: &str, floor: f64, cap: Option<f64>, participation_rate: f64) -> Self {
        IndexStrategy {
            name: name.to_string(),
            index_type: index_type.to_string(),
            floor,
            cap,
            participation_rate,
        }
    }

    /// e.g. "0% floor / 10.5% cap / 100% par"
    pub fn summary(&self) -> String {
        let cap = match self.cap {
            Some(cap) => format!("{}% cap", cap),
            None => "uncapped".to_string(),
        };
        format!("{}% floor / {} / {}% par", self.floor, cap, self.participation_rate)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiulProduct {
    pub id: String,
    pub product_name: String,
    pub carrier: String,
    pub product_type: SiulType,

    /// Target $/K/month at M45 non-smoker standard
    pub anchor_prem_per_k: f64,

    pub female_mult: f64,
    pub smoker_mult: f64,

    #[serde(default)]
    pub strategies: Vec<IndexStrategy>,

    pub min_age: u32,
    pub max_age: u32,
    pub min_death_benefit: u64,
    pub max_death_benefit: u64,

    #[serde(default)]
    pub features: Vec<String>,

    #[serde(default)]
    pub has_eapp: bool,

    #[serde(default)]
    pub note: Option<String>,
}

impl SiulProduct {
    pub fn admits_age(&self, age: u32) -> bool {
        age >= self.min_age && age <= self.max_age
    }

    pub fn admits_death_benefit(&self, amount: u64) -> bool {
        amount >= self.min_death_benefit && amount <= self.max_death_benefit
    }

    /// Male is the anchor sex
    pub fn sex_multiplier(&self, sex: Sex) -> f64 {
        match sex {
            Sex::Male => 1.0,
            Sex::Female => self.female_mult,
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

struct SiulEntry<'a> {
    id: &'a str,
    product_name: &'a str,
    carrier: &'a str,
    product_type: SiulType,
    anchor_prem_per_k: f64,
    female_mult: f64,
    smoker_mult: f64,
    max_age: u32,
    death_benefit: (u64, u64),
    features: &'a [&'a str],
    has_eapp: bool,
}

impl SiulEntry<'_> {
    fn build(self, strategies: Vec<IndexStrategy>) -> SiulProduct {
        SiulProduct {
            id: self.id.to_string(),
            product_name: self.product_name.to_string(),
            carrier: self.carrier.to_string(),
            product_type: self.product_type,
            anchor_prem_per_k: self.anchor_prem_per_k,
            female_mult: self.female_mult,
            smoker_mult: self.smoker_mult,
            strategies,
            min_age: 18,
            max_age: self.max_age,
            min_death_benefit: self.death_benefit.0,
            max_death_benefit: self.death_benefit.1,
            features: self.features.iter().map(|f| f.to_string()).collect(),
            has_eapp: self.has_eapp,
            note: None,
        }
    }
}

fn with_note(mut product: SiulProduct, note: &str) -> SiulProduct {
    product.note = Some(note.to_string());
    product
}

/// Built-in SIUL/IUL catalog, in display order
pub fn standard_siul_products() -> Vec<SiulProduct> {
    use SiulType::{Iul, Siul, Ul};
    let s = IndexStrategy::new;

    vec![
        SiulEntry {
            id: "pacific-life-siul",
            product_name: "Pacific Discovery SIUL",
            carrier: "Pacific Life",
            product_type: Siul,
            anchor_prem_per_k: 1.85,
            female_mult: 0.80,
            smoker_mult: 2.20,
            max_age: 75,
            death_benefit: (100_000, 10_000_000),
            features: &["Chronic Illness Accelerated Benefit", "Terminal Illness", "Overloan Protection"],
            has_eapp: true,
        }
        .build(vec![
            s("S&P 500 Annual Point-to-Point", "S&P 500", 0.0, Some(10.5), 100.0),
            s("S&P 500 Performance Trigger", "S&P 500", 0.0, None, 100.0),
            s("Fixed Account", "Fixed", 3.0, None, 100.0),
        ]),
        SiulEntry {
            id: "north-american-iuleader",
            product_name: "IULeader Series",
            carrier: "North American Company",
            product_type: Iul,
            anchor_prem_per_k: 1.95,
            female_mult: 0.79,
            smoker_mult: 2.25,
            max_age: 80,
            death_benefit: (100_000, 50_000_000),
            features: &["Accelerated Benefit Rider", "Terminal Illness", "Critical Illness", "Chronic Illness"],
            has_eapp: true,
        }
        .build(vec![
            s("S&P 500 1-Year Point-to-Point", "S&P 500", 0.0, Some(11.0), 100.0),
            s("Multi-Index Strategy", "Blended", 0.0, None, 130.0),
            s("Fixed Account", "Fixed", 2.75, None, 100.0),
        ]),
        SiulEntry {
            id: "protective-indexed-choice-ul",
            product_name: "Indexed Choice UL",
            carrier: "Protective Life",
            product_type: Iul,
            anchor_prem_per_k: 2.10,
            female_mult: 0.80,
            smoker_mult: 2.15,
            max_age: 75,
            death_benefit: (50_000, 5_000_000),
            features: &["Terminal Illness", "Chronic Illness Rider"],
            has_eapp: true,
        }
        .build(vec![
            s("S&P 500 Index Account", "S&P 500", 0.0, Some(10.0), 100.0),
            s("Fixed Account", "Fixed", 2.50, None, 100.0),
        ]),
        SiulEntry {
            id: "transamerica-siul",
            product_name: "TransNavigator IUL",
            carrier: "Transamerica",
            product_type: Iul,
            anchor_prem_per_k: 2.25,
            female_mult: 0.80,
            smoker_mult: 2.20,
            max_age: 75,
            death_benefit: (50_000, 5_000_000),
            features: &["Chronic Illness Accelerated Benefit", "Terminal Illness"],
            has_eapp: true,
        }
        .build(vec![
            s("S&P 500 Capped Strategy", "S&P 500", 0.0, Some(9.5), 100.0),
            s("Multi-Index Capped Strategy", "Blended", 0.0, Some(11.0), 100.0),
            s("Fixed Account", "Fixed", 2.50, None, 100.0),
        ]),
        SiulEntry {
            id: "nationwide-iula",
            product_name: "IUL Accumulator II",
            carrier: "Nationwide",
            product_type: Iul,
            anchor_prem_per_k: 2.40,
            female_mult: 0.79,
            smoker_mult: 2.25,
            max_age: 75,
            death_benefit: (100_000, 10_000_000),
            features: &["Chronic Illness Rider", "Terminal Illness", "Return of Premium Rider"],
            has_eapp: true,
        }
        .build(vec![
            s("S&P 500 Index Annual", "S&P 500", 0.0, Some(12.0), 100.0),
            s("High Participation Strategy", "S&P 500", 0.0, None, 125.0),
            s("Fixed Account", "Fixed", 3.0, None, 100.0),
        ]),
        with_note(
            SiulEntry {
                id: "foresters-advantage-ul",
                product_name: "Advantage Plus SIUL",
                carrier: "Foresters Financial",
                product_type: Siul,
                anchor_prem_per_k: 2.20,
                female_mult: 0.80,
                smoker_mult: 2.10,
                max_age: 70,
                death_benefit: (50_000, 2_500_000),
                features: &["Chronic Illness Rider", "Terminal Illness"],
                has_eapp: false,
            }
            .build(vec![
                s("S&P 500 Annual Strategy", "S&P 500", 0.0, Some(10.0), 100.0),
                s("Fixed Account", "Fixed", 2.50, None, 100.0),
            ]),
            "No medical exam up to $500,000",
        ),
        SiulEntry {
            id: "symetra-siul",
            product_name: "SIUL Accumulator",
            carrier: "Symetra Life",
            product_type: Siul,
            anchor_prem_per_k: 2.15,
            female_mult: 0.80,
            smoker_mult: 2.20,
            max_age: 75,
            death_benefit: (50_000, 5_000_000),
            features: &["Accelerated Underwriting up to $3M", "Terminal Illness", "Chronic Illness"],
            has_eapp: true,
        }
        .build(vec![
            s("S&P 500 Annual Cap", "S&P 500", 0.0, Some(11.5), 100.0),
            s("Fixed Account", "Fixed", 2.75, None, 100.0),
        ]),
        with_note(
            SiulEntry {
                id: "securian-premier-provider-ul",
                product_name: "Premier Provider UL",
                carrier: "Securian / Minnesota Life",
                product_type: Ul,
                anchor_prem_per_k: 2.55,
                female_mult: 0.79,
                smoker_mult: 2.15,
                max_age: 85,
                death_benefit: (50_000, 10_000_000),
                features: &["Terminal Illness", "Chronic Illness Rider", "Guaranteed Death Benefit"],
                has_eapp: true,
            }
            .build(vec![s("Fixed UL Account", "Fixed", 3.0, None, 100.0)]),
            "Guaranteed interest rate with flexible premiums",
        ),
    ]
}
