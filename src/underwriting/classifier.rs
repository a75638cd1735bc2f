//! Health classification from medication and condition selections
//!
//! The derived class is the worst tier across every signal: each reported
//! condition, plus a single tier summarising the medication list. Names that
//! are not in the reference tables contribute nothing.

use super::reference::{find_condition, find_medication};
use super::{HealthClass, UnderwritingTier};

/// Summarise a medication list into one tier
///
/// Worst individual impact wins. Absent a standard or substandard drug, more
/// than three prescriptions caps the client at standard-plus, one or two
/// keeps them at preferred. The count includes names not found in the table.
pub fn classify_medications<S: AsRef<str>>(medications: &[S]) -> UnderwritingTier {
    if medications.is_empty() {
        return UnderwritingTier::PreferredPlus;
    }

    let impacts: Vec<UnderwritingTier> = medications
        .iter()
        .filter_map(|name| {
            let found = find_medication(name.as_ref());
            if found.is_none() {
                log::debug!("ignoring unknown medication {:?}", name.as_ref());
            }
            found.map(|m| m.impact)
        })
        .collect();

    if impacts.contains(&UnderwritingTier::Substandard) {
        UnderwritingTier::Substandard
    } else if impacts.contains(&UnderwritingTier::Standard) {
        UnderwritingTier::Standard
    } else if impacts.contains(&UnderwritingTier::StandardPlus) || medications.len() > 3 {
        UnderwritingTier::StandardPlus
    } else if medications.len() <= 2 {
        UnderwritingTier::Preferred
    } else {
        UnderwritingTier::StandardPlus
    }
}

/// Worst tier across all condition impacts and the medication summary
pub fn classify_health_tier<M, C>(medications: &[M], conditions: &[C]) -> UnderwritingTier
where
    M: AsRef<str>,
    C: AsRef<str>,
{
    let from_meds = classify_medications(medications);

    conditions
        .iter()
        .filter_map(|name| {
            let found = find_condition(name.as_ref());
            if found.is_none() {
                log::debug!("ignoring unknown condition {:?}", name.as_ref());
            }
            found.map(|c| c.impact)
        })
        .chain(std::iter::once(from_meds))
        .fold(UnderwritingTier::PreferredPlus, Ord::max)
}

/// Derive the product-facing health class for a client
pub fn classify_health<M, C>(medications: &[M], conditions: &[C]) -> HealthClass
where
    M: AsRef<str>,
    C: AsRef<str>,
{
    classify_health_tier(medications, conditions).to_health_class()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    #[test]
    fn test_no_medications_is_best_tier() {
        assert_eq!(classify_medications(&NONE), UnderwritingTier::PreferredPlus);
        assert_eq!(classify_health(&NONE, &NONE), HealthClass::PreferredPlus);
    }

    #[test]
    fn test_substandard_medication_dominates() {
        let meds = ["Lisinopril", "Warfarin", "Vitamin D"];
        assert_eq!(classify_medications(&meds), UnderwritingTier::Substandard);
    }

    #[test]
    fn test_standard_medication() {
        assert_eq!(classify_medications(&["Metformin"]), UnderwritingTier::Standard);
    }

    #[test]
    fn test_medication_count_heuristics() {
        // One or two preferred drugs stay preferred
        assert_eq!(classify_medications(&["Lisinopril"]), UnderwritingTier::Preferred);
        assert_eq!(
            classify_medications(&["Lisinopril", "Atorvastatin"]),
            UnderwritingTier::Preferred
        );
        // A single preferred-plus drug still leaves the best tier
        assert_eq!(classify_medications(&["Loratadine"]), UnderwritingTier::Preferred);
        // Exactly three falls through to standard-plus
        assert_eq!(
            classify_medications(&["Lisinopril", "Atorvastatin", "Omeprazole"]),
            UnderwritingTier::StandardPlus
        );
        // More than three
        assert_eq!(
            classify_medications(&["Lisinopril", "Atorvastatin", "Omeprazole", "Vitamin D"]),
            UnderwritingTier::StandardPlus
        );
        assert_eq!(classify_medications(&["Sertraline"]), UnderwritingTier::StandardPlus);
    }

    #[test]
    fn test_unknown_names_ignored() {
        assert_eq!(classify_medications(&["Not A Drug"]), UnderwritingTier::Preferred);
        assert_eq!(
            classify_health_tier(&NONE, &["Not A Condition"]),
            UnderwritingTier::PreferredPlus
        );
    }

    #[test]
    fn test_condition_worse_than_medications_wins() {
        let tier = classify_health_tier(&["Lisinopril"], &["Congestive Heart Failure"]);
        assert_eq!(tier, UnderwritingTier::Substandard);
        assert_eq!(
            classify_health(&["Lisinopril"], &["Congestive Heart Failure"]),
            HealthClass::Table2
        );
    }

    #[test]
    fn test_medications_worse_than_conditions_win() {
        let tier = classify_health_tier(&["Metformin"], &["GERD"]);
        assert_eq!(tier, UnderwritingTier::Standard);
    }

    #[test]
    fn test_conditions_only() {
        let tier = classify_health_tier(&NONE, &["Asthma (Mild)", "Gout"]);
        assert_eq!(tier, UnderwritingTier::StandardPlus);
    }
}
