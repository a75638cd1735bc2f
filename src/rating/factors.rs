//! Multiplicative rating factors: age, term length and coverage band
//!
//! Every factor is a ratio to the family's anchor profile, so the anchor age
//! and the 20-year term both carry a factor of exactly 1.00.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-year growth applied beyond the oldest age in a table
pub const EXTRAPOLATION_GROWTH: f64 = 1.08;

/// Sparse age -> factor table with linear interpolation between keys
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeFactorTable {
    factors: BTreeMap<u32, f64>,
}

impl AgeFactorTable {
    /// Create from loaded CSV data
    pub fn from_loaded(factors: &BTreeMap<u32, f64>) -> Self {
        Self {
            factors: factors.clone(),
        }
    }

    pub fn from_pairs(pairs: &[(u32, f64)]) -> Self {
        Self {
            factors: pairs.iter().copied().collect(),
        }
    }

    /// Term life age factors (relative to age 35 = 1.00)
    pub fn term_default() -> Self {
        Self::from_pairs(&[
            (18, 0.30), (19, 0.32), (20, 0.35), (21, 0.37), (22, 0.39),
            (23, 0.42), (24, 0.45), (25, 0.48), (26, 0.52), (27, 0.56),
            (28, 0.60), (29, 0.64), (30, 0.68), (31, 0.74), (32, 0.80),
            (33, 0.87), (34, 0.93), (35, 1.00), (36, 1.08), (37, 1.17),
            (38, 1.27), (39, 1.39), (40, 1.52), (41, 1.66), (42, 1.82),
            (43, 1.99), (44, 2.13), (45, 2.28), (46, 2.50), (47, 2.74),
            (48, 3.00), (49, 3.20), (50, 3.42), (51, 3.74), (52, 4.08),
            (53, 4.44), (54, 4.80), (55, 5.18), (56, 5.73), (57, 6.32),
            (58, 6.98), (59, 7.45), (60, 7.95), (61, 8.79), (62, 9.72),
            (63, 10.74), (64, 11.57), (65, 12.40), (66, 13.76), (67, 15.24),
            (68, 16.90), (69, 18.36), (70, 19.80), (71, 22.10), (72, 24.64),
            (73, 27.48), (74, 30.62), (75, 32.00), (76, 35.20), (77, 38.72),
            (78, 42.59), (79, 46.85), (80, 51.54),
        ])
    }

    /// Final expense age factors (relative to age 65 = 1.00)
    ///
    /// Ages 60-64 sit above the anchor; this mirrors carrier rate sheets where
    /// the 65+ band is repriced, and is kept as published.
    pub fn fex_default() -> Self {
        Self::from_pairs(&[
            (45, 0.38), (46, 0.41), (47, 0.44), (48, 0.48), (49, 0.52),
            (50, 0.56), (51, 0.61), (52, 0.66), (53, 0.71), (54, 0.77),
            (55, 0.83), (56, 0.89), (57, 0.94), (58, 0.97), (59, 0.99),
            (60, 1.02), (61, 1.06), (62, 1.12), (63, 1.18), (64, 1.25),
            (65, 1.00), (66, 1.09), (67, 1.19), (68, 1.30), (69, 1.42),
            (70, 1.55), (71, 1.69), (72, 1.85), (73, 2.02), (74, 2.20),
            (75, 2.40), (76, 2.62), (77, 2.86), (78, 3.12), (79, 3.40),
            (80, 3.71), (81, 4.05), (82, 4.41), (83, 4.80), (84, 5.23),
            (85, 5.70),
        ])
    }

    /// SIUL/IUL age factors in five-year steps (relative to age 45 = 1.00)
    pub fn siul_default() -> Self {
        Self::from_pairs(&[
            (18, 0.28), (20, 0.32), (25, 0.42), (30, 0.56), (35, 0.72),
            (40, 0.88), (45, 1.00), (50, 1.30), (55, 1.72), (60, 2.35),
            (65, 3.20), (70, 4.50), (75, 6.10), (80, 8.50),
        ])
    }

    /// Factor for an exact integer age
    ///
    /// - Exact key: the table value, untouched.
    /// - Between keys: linear interpolation on the bracketing pair.
    /// - Above the oldest key: that key's factor compounded at 8% per year.
    /// - Below the youngest key: clamped to the youngest key's factor.
    pub fn factor(&self, age: u32) -> f64 {
        if let Some(&exact) = self.factors.get(&age) {
            return exact;
        }

        let below = self.factors.range(..age).next_back();
        let above = self.factors.range(age..).next();

        match (below, above) {
            (Some((&lo, &f_lo)), Some((&hi, &f_hi))) => {
                let r = (age - lo) as f64 / (hi - lo) as f64;
                f_lo + r * (f_hi - f_lo)
            }
            (Some((&max_age, &f_max)), None) => {
                let years = i32::try_from(age - max_age).unwrap_or(i32::MAX);
                f_max * EXTRAPOLATION_GROWTH.powi(years)
            }
            (None, Some((_, &f_min))) => f_min,
            (None, None) => 1.0,
        }
    }

    pub fn min_age(&self) -> Option<u32> {
        self.factors.keys().next().copied()
    }

    pub fn max_age(&self) -> Option<u32> {
        self.factors.keys().next_back().copied()
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Iterate (age, factor) pairs in ascending age order
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.factors.iter().map(|(&age, &factor)| (age, factor))
    }
}

/// Term length -> factor (relative to 20-year = 1.00), exact match only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermLengthFactors {
    factors: BTreeMap<u32, f64>,
}

impl TermLengthFactors {
    /// Create from loaded CSV data
    pub fn from_loaded(factors: &BTreeMap<u32, f64>) -> Self {
        Self {
            factors: factors.clone(),
        }
    }

    /// Factor for a term length, `None` when the term is not offered
    pub fn factor(&self, term_years: u32) -> Option<f64> {
        self.factors.get(&term_years).copied()
    }

    /// Term lengths with a published factor
    pub fn terms(&self) -> impl Iterator<Item = u32> + '_ {
        self.factors.keys().copied()
    }
}

impl Default for TermLengthFactors {
    fn default() -> Self {
        Self {
            factors: BTreeMap::from([
                (10, 0.65),
                (15, 0.82),
                (20, 1.00),
                (25, 1.19),
                (30, 1.37),
            ]),
        }
    }
}

/// Step discount for larger face amounts (relative to $100K = 1.00)
///
/// Each band includes its upper literal value.
pub fn coverage_band_factor(coverage: u64) -> f64 {
    match coverage {
        0..=100_000 => 1.00,
        100_001..=249_999 => 0.97,
        250_000..=499_999 => 0.94,
        500_000..=749_999 => 0.91,
        750_000..=999_999 => 0.89,
        _ => 0.86,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exact_keys_returned_verbatim() {
        let table = AgeFactorTable::term_default();
        for (age, factor) in table.iter() {
            assert_eq!(table.factor(age), factor, "drift at age {}", age);
        }
        assert_eq!(table.factor(35), 1.00);
    }

    #[test]
    fn test_interpolation_between_keys() {
        let table = AgeFactorTable::siul_default();

        // 47 is 2/5 of the way from 45 (1.00) to 50 (1.30)
        assert_relative_eq!(table.factor(47), 1.00 + 0.4 * 0.30, epsilon = 1e-12);

        for age in 18..80 {
            let lo = table.iter().filter(|(a, _)| *a <= age).last().unwrap();
            let hi = table.iter().find(|(a, _)| *a >= age).unwrap();
            let f = table.factor(age);
            assert!(f >= lo.1.min(hi.1) && f <= lo.1.max(hi.1), "age {} out of bracket", age);
        }
    }

    #[test]
    fn test_extrapolation_past_max() {
        let table = AgeFactorTable::term_default();
        assert_relative_eq!(table.factor(81), 51.54 * 1.08, epsilon = 1e-9);
        assert_relative_eq!(table.factor(85), 51.54 * 1.08_f64.powi(5), epsilon = 1e-9);
    }

    #[test]
    fn test_extrapolation_saturates_for_huge_ages() {
        let table = AgeFactorTable::term_default();
        assert!(table.factor(3_000_000_000) >= 51.54);
        assert!(table.factor(u32::MAX) >= 51.54);
        assert!(table.factor(u32::MAX) >= table.factor(200));
    }

    #[test]
    fn test_below_min_is_clamped() {
        let table = AgeFactorTable::fex_default();
        assert_eq!(table.factor(30), 0.38);
        assert_eq!(table.min_age(), Some(45));
        assert_eq!(table.max_age(), Some(85));
    }

    #[test]
    fn test_empty_table_is_neutral() {
        let table = AgeFactorTable::from_pairs(&[]);
        assert!(table.is_empty());
        assert_eq!(table.factor(40), 1.0);
    }

    #[test]
    fn test_term_length_factors() {
        let terms = TermLengthFactors::default();
        assert_eq!(terms.factor(20), Some(1.00));
        assert_eq!(terms.factor(10), Some(0.65));
        assert_eq!(terms.factor(30), Some(1.37));
        assert_eq!(terms.factor(12), None);
        assert_eq!(terms.terms().collect::<Vec<_>>(), vec![10, 15, 20, 25, 30]);
    }

    #[test]
    fn test_coverage_band_boundaries() {
        assert_eq!(coverage_band_factor(50_000), 1.00);
        assert_eq!(coverage_band_factor(100_000), 1.00);
        assert_eq!(coverage_band_factor(100_001), 0.97);
        assert_eq!(coverage_band_factor(249_999), 0.97);
        assert_eq!(coverage_band_factor(250_000), 0.94);
        assert_eq!(coverage_band_factor(499_999), 0.94);
        assert_eq!(coverage_band_factor(500_000), 0.91);
        assert_eq!(coverage_band_factor(749_999), 0.91);
        assert_eq!(coverage_band_factor(750_000), 0.89);
        assert_eq!(coverage_band_factor(999_999), 0.89);
        assert_eq!(coverage_band_factor(1_000_000), 0.86);
    }
}
