//! Underwriting: health classes, reference tables and classification

mod class;
mod classifier;
pub mod reference;

pub use class::{HealthClass, UnderwritingTier};
pub use classifier::{classify_health, classify_health_tier, classify_medications};
pub use reference::{
    find_condition, find_medication, medication_categories, search_medications, HealthCondition,
    Medication, HEALTH_CONDITIONS, MEDICATIONS,
};
