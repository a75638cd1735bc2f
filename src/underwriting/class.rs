//! Underwriting tiers and product-facing health classes

use serde::{Deserialize, Serialize};

/// Internal five-bucket risk scale used while classifying
///
/// Variants are declared best to worst, so `Ord` gives "worse is greater".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnderwritingTier {
    PreferredPlus,
    Preferred,
    StandardPlus,
    Standard,
    Substandard,
}

impl UnderwritingTier {
    /// Map to the label products are sold under
    pub fn to_health_class(self) -> HealthClass {
        match self {
            UnderwritingTier::PreferredPlus => HealthClass::PreferredPlus,
            UnderwritingTier::Preferred => HealthClass::Preferred,
            UnderwritingTier::StandardPlus => HealthClass::StandardPlus,
            UnderwritingTier::Standard => HealthClass::Standard,
            UnderwritingTier::Substandard => HealthClass::Table2,
        }
    }

    /// Short badge shown next to a medication or condition
    pub fn badge(&self) -> &'static str {
        match self {
            UnderwritingTier::PreferredPlus => "PP+",
            UnderwritingTier::Preferred => "P",
            UnderwritingTier::StandardPlus => "SP",
            UnderwritingTier::Standard => "S",
            UnderwritingTier::Substandard => "Sub",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnderwritingTier::PreferredPlus => "preferred-plus",
            UnderwritingTier::Preferred => "preferred",
            UnderwritingTier::StandardPlus => "standard-plus",
            UnderwritingTier::Standard => "standard",
            UnderwritingTier::Substandard => "substandard",
        }
    }
}

/// Health class label a product is sold under, best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HealthClass {
    #[serde(rename = "Preferred Plus")]
    PreferredPlus,
    #[serde(rename = "Preferred")]
    Preferred,
    #[serde(rename = "Standard Plus")]
    StandardPlus,
    #[serde(rename = "Standard")]
    Standard,
    #[serde(rename = "Table 2")]
    Table2,
    #[serde(rename = "Table 4")]
    Table4,
    #[serde(rename = "Select")]
    Select,
}

impl HealthClass {
    pub const ALL: [HealthClass; 7] = [
        HealthClass::PreferredPlus,
        HealthClass::Preferred,
        HealthClass::StandardPlus,
        HealthClass::Standard,
        HealthClass::Table2,
        HealthClass::Table4,
        HealthClass::Select,
    ];

    /// Catalog label, e.g. "Preferred Plus"
    pub fn label(&self) -> &'static str {
        match self {
            HealthClass::PreferredPlus => "Preferred Plus",
            HealthClass::Preferred => "Preferred",
            HealthClass::StandardPlus => "Standard Plus",
            HealthClass::Standard => "Standard",
            HealthClass::Table2 => "Table 2",
            HealthClass::Table4 => "Table 4",
            HealthClass::Select => "Select",
        }
    }

    /// Label for quote cards; rated classes are called out
    pub fn display_label(&self) -> &'static str {
        match self {
            HealthClass::Table2 => "Table 2 (Rated)",
            HealthClass::Table4 => "Table 4 (Rated)",
            HealthClass::Select => "Select (Substandard)",
            other => other.label(),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            HealthClass::PreferredPlus => "Excellent health, no medications, ideal build and family history",
            HealthClass::Preferred => "Very good health, minor well-controlled conditions",
            HealthClass::StandardPlus => "Good health with a few controlled conditions or medications",
            HealthClass::Standard => "Average health, managed chronic conditions",
            HealthClass::Table2 => "Rated: elevated risk, roughly 150% of standard mortality",
            HealthClass::Table4 => "Rated: significant risk, roughly 200% of standard mortality",
            HealthClass::Select => "Substandard class for rated or impaired risks",
        }
    }

    /// Parse a catalog label (case-insensitive)
    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = label.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|class| class.label().eq_ignore_ascii_case(wanted))
    }
}

impl std::fmt::Display for HealthClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ordering_worst_is_greatest() {
        assert!(UnderwritingTier::PreferredPlus < UnderwritingTier::Preferred);
        assert!(UnderwritingTier::Preferred < UnderwritingTier::StandardPlus);
        assert!(UnderwritingTier::StandardPlus < UnderwritingTier::Standard);
        assert!(UnderwritingTier::Standard < UnderwritingTier::Substandard);
    }

    #[test]
    fn test_tier_to_class_mapping() {
        assert_eq!(UnderwritingTier::PreferredPlus.to_health_class(), HealthClass::PreferredPlus);
        assert_eq!(UnderwritingTier::Standard.to_health_class(), HealthClass::Standard);
        assert_eq!(UnderwritingTier::Substandard.to_health_class(), HealthClass::Table2);
    }

    #[test]
    fn test_labels_round_trip() {
        for class in HealthClass::ALL {
            assert_eq!(HealthClass::from_label(class.label()), Some(class));
        }
        assert_eq!(HealthClass::from_label("preferred plus"), Some(HealthClass::PreferredPlus));
        assert_eq!(HealthClass::from_label("Elite"), None);
        assert_eq!(HealthClass::Select.display_label(), "Select (Substandard)");
    }

    #[test]
    fn test_serde_uses_catalog_labels() {
        let json = serde_json::to_string(&HealthClass::PreferredPlus).unwrap();
        assert_eq!(json, "\"Preferred Plus\"");

        let tier: UnderwritingTier = serde_json::from_str("\"standard-plus\"").unwrap();
        assert_eq!(tier, UnderwritingTier::StandardPlus);
    }
}
