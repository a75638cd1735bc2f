//! Medication and health-condition reference tables
//!
//! Each entry carries the underwriting tier it implies on its own. Names are
//! matched exactly, as they appear on the intake form.

use super::UnderwritingTier;
use serde::Serialize;
use std::collections::BTreeSet;

/// A prescription the client may report
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Medication {
    pub name: &'static str,
    pub category: &'static str,
    pub impact: UnderwritingTier,
    /// Shown in the quick-pick list
    pub common: bool,
}

/// A diagnosed condition the client may report
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HealthCondition {
    pub name: &'static str,
    pub impact: UnderwritingTier,
}

const fn med(
    name: &'static str,
    category: &'static str,
    impact: UnderwritingTier,
    common: bool,
) -> Medication {
    Medication {
        name,
        category,
        impact,
        common,
    }
}

const fn cond(name: &'static str, impact: UnderwritingTier) -> HealthCondition {
    HealthCondition { name, impact }
}

use UnderwritingTier::{Preferred, PreferredPlus, Standard, StandardPlus, Substandard};

pub static MEDICATIONS: &[Medication] = &[
    // Allergy / supplements
    med("Loratadine", "Allergy", PreferredPlus, true),
    med("Cetirizine", "Allergy", PreferredPlus, true),
    med("Fluticasone Nasal", "Allergy", PreferredPlus, false),
    med("Vitamin D", "Supplements", PreferredPlus, true),
    med("Multivitamin", "Supplements", PreferredPlus, false),
    // Cardiovascular
    med("Lisinopril", "Cardiovascular", Preferred, true),
    med("Losartan", "Cardiovascular", Preferred, true),
    med("Valsartan", "Cardiovascular", Preferred, false),
    med("Amlodipine", "Cardiovascular", Preferred, true),
    med("Hydrochlorothiazide", "Cardiovascular", Preferred, true),
    med("Metoprolol", "Cardiovascular", StandardPlus, true),
    med("Carvedilol", "Cardiovascular", Standard, false),
    med("Furosemide", "Cardiovascular", Substandard, false),
    med("Digoxin", "Cardiovascular", Substandard, false),
    med("Nitroglycerin", "Cardiovascular", Substandard, false),
    // Cholesterol
    med("Atorvastatin", "Cholesterol", Preferred, true),
    med("Rosuvastatin", "Cholesterol", Preferred, true),
    med("Simvastatin", "Cholesterol", Preferred, false),
    // Blood thinners
    med("Clopidogrel", "Blood Thinners", Substandard, false),
    med("Warfarin", "Blood Thinners", Substandard, false),
    med("Apixaban", "Blood Thinners", Substandard, false),
    // Diabetes
    med("Metformin", "Diabetes", Standard, true),
    med("Glipizide", "Diabetes", Standard, false),
    med("Insulin Glargine", "Diabetes", Substandard, false),
    med("Insulin Lispro", "Diabetes", Substandard, false),
    // Thyroid / hormones
    med("Levothyroxine", "Thyroid", Preferred, true),
    med("Estradiol", "Hormones", Preferred, false),
    // Gastrointestinal
    med("Omeprazole", "Gastrointestinal", Preferred, true),
    med("Pantoprazole", "Gastrointestinal", Preferred, false),
    // Respiratory
    med("Montelukast", "Respiratory", Preferred, false),
    med("Albuterol", "Respiratory", StandardPlus, true),
    med("Tiotropium", "Respiratory", Substandard, false),
    // Mental health
    med("Sertraline", "Mental Health", StandardPlus, true),
    med("Escitalopram", "Mental Health", StandardPlus, true),
    med("Bupropion", "Mental Health", StandardPlus, false),
    med("Trazodone", "Mental Health", StandardPlus, false),
    med("Alprazolam", "Mental Health", Standard, false),
    med("Quetiapine", "Mental Health", Substandard, false),
    med("Aripiprazole", "Mental Health", Substandard, false),
    med("Lithium", "Mental Health", Substandard, false),
    // Pain / neurology
    med("Sumatriptan", "Neurology", Preferred, false),
    med("Gabapentin", "Pain", StandardPlus, true),
    med("Oxycodone", "Pain", Substandard, false),
    med("Methadone", "Pain", Substandard, false),
    med("Buprenorphine", "Pain", Substandard, false),
    med("Donepezil", "Neurology", Substandard, false),
    // Urology
    med("Tamsulosin", "Urology", Preferred, false),
    med("Finasteride", "Urology", PreferredPlus, false),
    med("Sildenafil", "Urology", Preferred, false),
    // Autoimmune / inflammation
    med("Allopurinol", "Autoimmune", StandardPlus, false),
    med("Prednisone", "Autoimmune", Standard, false),
    med("Methotrexate", "Autoimmune", Standard, false),
    med("Adalimumab", "Autoimmune", Standard, false),
    // Oncology
    med("Tamoxifen", "Oncology", Substandard, false),
];

pub static HEALTH_CONDITIONS: &[HealthCondition] = &[
    cond("High Blood Pressure (Controlled)", Preferred),
    cond("High Cholesterol (Controlled)", Preferred),
    cond("Hypothyroidism", Preferred),
    cond("GERD", Preferred),
    cond("Asthma (Mild)", Preferred),
    cond("Anxiety", StandardPlus),
    cond("Depression (Controlled)", StandardPlus),
    cond("Sleep Apnea (Treated)", StandardPlus),
    cond("Gout", StandardPlus),
    cond("Epilepsy (Controlled)", StandardPlus),
    cond("Type 2 Diabetes (Controlled)", Standard),
    cond("Obesity (BMI 35-40)", Standard),
    cond("Atrial Fibrillation", Standard),
    cond("Rheumatoid Arthritis", Standard),
    cond("Crohn's Disease", Standard),
    cond("Cancer (In Remission 5+ Years)", Standard),
    cond("Type 2 Diabetes (Insulin)", Substandard),
    cond("Type 1 Diabetes", Substandard),
    cond("COPD", Substandard),
    cond("Emphysema", Substandard),
    cond("Heart Attack (History)", Substandard),
    cond("Stroke (History)", Substandard),
    cond("Congestive Heart Failure", Substandard),
    cond("Cancer (Active or Recent)", Substandard),
    cond("Kidney Disease", Substandard),
    cond("Hepatitis C", Substandard),
    cond("Bipolar Disorder", Substandard),
    cond("Alcohol Abuse (History)", Substandard),
    cond("Multiple Sclerosis", Substandard),
    cond("Parkinson's Disease", Substandard),
];

/// Look up a medication by exact name
pub fn find_medication(name: &str) -> Option<&'static Medication> {
    MEDICATIONS.iter().find(|m| m.name == name)
}

/// Look up a health condition by exact name
pub fn find_condition(name: &str) -> Option<&'static HealthCondition> {
    HEALTH_CONDITIONS.iter().find(|c| c.name == name)
}

/// Sorted, de-duplicated medication categories
pub fn medication_categories() -> Vec<&'static str> {
    MEDICATIONS
        .iter()
        .map(|m| m.category)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Case-insensitive substring search over name or category, optionally
/// restricted to one category
pub fn search_medications(query: &str, category: Option<&str>) -> Vec<&'static Medication> {
    let needle = query.trim().to_lowercase();

    MEDICATIONS
        .iter()
        .filter(|m| {
            needle.is_empty()
                || m.name.to_lowercase().contains(&needle)
                || m.category.to_lowercase().contains(&needle)
        })
        .filter(|m| category.map_or(true, |c| m.category == c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        let meds: BTreeSet<_> = MEDICATIONS.iter().map(|m| m.name).collect();
        assert_eq!(meds.len(), MEDICATIONS.len());

        let conds: BTreeSet<_> = HEALTH_CONDITIONS.iter().map(|c| c.name).collect();
        assert_eq!(conds.len(), HEALTH_CONDITIONS.len());
    }

    #[test]
    fn test_exact_lookup() {
        assert_eq!(find_medication("Lisinopril").map(|m| m.impact), Some(Preferred));
        assert_eq!(find_medication("lisinopril"), None);
        assert_eq!(
            find_condition("Congestive Heart Failure").map(|c| c.impact),
            Some(Substandard)
        );
    }

    #[test]
    fn test_search_by_name_and_category() {
        let statins = search_medications("STATIN", None);
        assert!(statins.iter().any(|m| m.name == "Atorvastatin"));
        assert!(statins.iter().all(|m| m.name.to_lowercase().contains("statin")));

        let diabetes = search_medications("", Some("Diabetes"));
        assert_eq!(diabetes.len(), 4);

        let cardio = search_medications("cardio", None);
        assert!(cardio.iter().all(|m| m.category == "Cardiovascular"));
    }

    #[test]
    fn test_categories_sorted_unique() {
        let categories = medication_categories();
        let mut sorted = categories.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(categories, sorted);
        assert!(categories.contains(&"Mental Health"));
    }
}
