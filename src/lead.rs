//! Freezing a chosen quote onto a lead record
//!
//! A snapshot copies the numbers at save time, so later catalog or table
//! changes never alter what the client was shown.

use crate::catalog::ProductFamily;
use crate::client::{ClientProfile, Sex};
use crate::quoting::{QuoteEngine, QuoteLine};
use crate::underwriting::{HealthClass, UnderwritingTier};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const BEST_RATE_REASON: &str = "Best rate for this profile";

/// One alternative shown on the lead's compare view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarrierQuote {
    pub carrier: String,
    pub product_name: String,
    pub monthly: f64,
    pub annual: f64,
    pub recommended: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Selected quote plus every alternative, as persisted on a lead
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteSnapshot {
    /// "term", "fex" or "iul"
    pub quote_type: String,
    pub selected_carrier: String,
    pub product_name: String,
    pub monthly_premium: f64,
    pub annual_premium: f64,
    pub coverage: u64,
    /// Term length in years, 0 outside Term
    pub term: u32,
    pub health_class: HealthClass,
    pub age: u32,
    pub sex: Sex,
    pub smoker: bool,
    pub medications: Vec<String>,
    pub conditions: Vec<String>,
    /// Two-letter state the quote was run for, when the agent recorded one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub saved_at: DateTime<Utc>,
    pub carrier_quotes: Vec<CarrierQuote>,
}

impl QuoteSnapshot {
    /// Snapshot `lines` for `client` with `selected_id` as the chosen product
    ///
    /// Returns `None` when the selected product is not among the lines.
    pub fn capture(
        client: &ClientProfile,
        lines: &[QuoteLine],
        selected_id: &str,
        saved_at: DateTime<Utc>,
    ) -> Option<Self> {
        let selected = lines.iter().find(|l| l.product_id == selected_id)?;
        let request = client.to_request();

        let term = match client.product_family {
            ProductFamily::Term => request.term_years(),
            _ => 0,
        };

        let carrier_quotes = lines
            .iter()
            .map(|l| CarrierQuote {
                carrier: l.carrier.clone(),
                product_name: l.product_name.clone(),
                monthly: l.monthly,
                annual: l.annual,
                recommended: l.product_id == selected_id,
                reason: None,
            })
            .collect();

        Some(Self {
            quote_type: client.product_family.lead_code().to_string(),
            selected_carrier: selected.carrier.clone(),
            product_name: selected.product_name.clone(),
            monthly_premium: selected.monthly,
            annual_premium: selected.annual,
            coverage: client.coverage,
            term,
            health_class: request.health_class,
            age: client.age,
            sex: client.sex,
            smoker: client.smoker,
            medications: client.medications.clone(),
            conditions: client.conditions.clone(),
            state: None,
            saved_at,
            carrier_quotes,
        })
    }

    /// Rate `client` and snapshot the result, stamped with the current time
    pub fn quote_and_capture(engine: &QuoteEngine, client: &ClientProfile, selected_id: &str) -> Option<Self> {
        let lines = engine.rate(client.product_family, &client.to_request());
        Self::capture(client, &lines, selected_id, Utc::now())
    }

    /// Record the state the client is quoted in
    pub fn with_state(mut self, state: &str) -> Self {
        self.state = Some(state.trim().to_ascii_uppercase());
        self
    }

    pub fn recommended(&self) -> Option<&CarrierQuote> {
        self.carrier_quotes.iter().find(|q| q.recommended)
    }
}

/// Inputs of the older lead-list premium calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PremiumCalculation {
    pub age: u32,
    #[serde(default)]
    pub smoker: bool,
    pub health_class: UnderwritingTier,
    pub coverage: u64,
    pub term: u32,
    #[serde(default)]
    pub medications: Vec<String>,
    #[serde(default)]
    pub health_conditions: Vec<String>,
}

/// Term quotes for a male client, cheapest flagged as recommended
pub fn calculate_carrier_quotes(engine: &QuoteEngine, calc: &PremiumCalculation) -> Vec<CarrierQuote> {
    let request = crate::client::QuoteRequest::new(
        calc.age,
        Sex::Male,
        calc.smoker,
        calc.coverage,
        calc.health_class.to_health_class(),
    )
    .with_term(calc.term);

    engine
        .quote_term(&request)
        .iter()
        .enumerate()
        .map(|(idx, q)| CarrierQuote {
            carrier: q.product.carrier.clone(),
            product_name: q.product.product_name.clone(),
            monthly: q.monthly,
            annual: q.annual,
            recommended: idx == 0,
            reason: (idx == 0).then(|| BEST_RATE_REASON.to_string()),
        })
        .collect()
}

/// Cheapest monthly term premium, or 0 when nothing is eligible
pub fn calculate_premium(engine: &QuoteEngine, calc: &PremiumCalculation) -> f64 {
    calculate_carrier_quotes(engine, calc)
        .first()
        .map_or(0.0, |q| q.monthly)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn saved_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 15, 9, 26).unwrap()
    }

    #[test]
    fn test_capture_siul_uses_twelve_payments() {
        let engine = QuoteEngine::standard();
        let client = ClientProfile::new(7, ProductFamily::Siul, 45, Sex::Male, false, 250_000);
        let lines = engine.rate(ProductFamily::Siul, &client.to_request());

        let snapshot = QuoteSnapshot::capture(&client, &lines, "symetra-siul", saved_at()).unwrap();
        assert_eq!(snapshot.quote_type, "iul");
        assert_eq!(snapshot.term, 0);
        assert_eq!(snapshot.selected_carrier, "Symetra Life");
        assert_eq!(snapshot.annual_premium, 12.0 * snapshot.monthly_premium);
        assert_eq!(snapshot.carrier_quotes.len(), lines.len());
        assert_eq!(snapshot.carrier_quotes.iter().filter(|q| q.recommended).count(), 1);
        assert_eq!(snapshot.recommended().unwrap().product_name, "SIUL Accumulator");
    }

    #[test]
    fn test_capture_term_records_default_length() {
        let engine = QuoteEngine::standard();
        let client = ClientProfile::new(1, ProductFamily::Term, 35, Sex::Male, false, 100_000);
        let lines = engine.rate(ProductFamily::Term, &client.to_request());

        let snapshot = QuoteSnapshot::capture(&client, &lines, "elite-20", saved_at()).unwrap();
        assert_eq!(snapshot.quote_type, "term");
        assert_eq!(snapshot.term, 20);
        assert_eq!(snapshot.health_class, HealthClass::PreferredPlus);
        assert_eq!(snapshot.monthly_premium, 13.73);
        assert_eq!(snapshot.annual_premium, 155.97);
    }

    #[test]
    fn test_capture_unknown_product() {
        let engine = QuoteEngine::standard();
        let client = ClientProfile::new(2, ProductFamily::FinalExpense, 65, Sex::Female, false, 10_000);
        assert!(QuoteSnapshot::quote_and_capture(&engine, &client, "no-such-product").is_none());

        let snapshot = QuoteSnapshot::quote_and_capture(&engine, &client, "moo-living-promise-level").unwrap();
        assert_eq!(snapshot.quote_type, "fex");
        assert_eq!(snapshot.monthly_premium, 42.50);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let engine = QuoteEngine::standard();
        let client = ClientProfile::new(3, ProductFamily::FinalExpense, 65, Sex::Female, false, 10_000);
        let lines = engine.rate(ProductFamily::FinalExpense, &client.to_request());
        let snapshot = QuoteSnapshot::capture(&client, &lines, "moo-living-promise-level", saved_at()).unwrap();

        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["quote_type"], "fex");
        assert_eq!(value["health_class"], "Preferred Plus");
        assert_eq!(value["sex"], "female");
        assert_eq!(value["saved_at"], "2026-03-14T15:09:26Z");
        assert!(value["carrier_quotes"][0].get("reason").is_none());

        let back: QuoteSnapshot = serde_json::from_value(value).unwrap();
        assert_eq!(back.saved_at, snapshot.saved_at);
        assert_eq!(back.carrier_quotes.len(), snapshot.carrier_quotes.len());
    }

    #[test]
    fn test_state_is_optional_on_snapshot() {
        let engine = QuoteEngine::standard();
        let client = ClientProfile::new(4, ProductFamily::Term, 35, Sex::Male, false, 100_000);
        let lines = engine.rate(ProductFamily::Term, &client.to_request());
        let snapshot = QuoteSnapshot::capture(&client, &lines, "elite-20", saved_at()).unwrap();

        assert_eq!(snapshot.state, None);
        let value = serde_json::to_value(&snapshot).unwrap();
        assert!(value.get("state").is_none());

        let snapshot = snapshot.with_state(" tx");
        assert_eq!(snapshot.state.as_deref(), Some("TX"));
        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["state"], "TX");

        let back: QuoteSnapshot = serde_json::from_value(value).unwrap();
        assert_eq!(back.state.as_deref(), Some("TX"));
    }

    #[test]
    fn test_legacy_carrier_quotes() {
        let engine = QuoteEngine::standard();
        let calc = PremiumCalculation {
            age: 35,
            smoker: false,
            health_class: UnderwritingTier::PreferredPlus,
            coverage: 100_000,
            term: 20,
            medications: Vec::new(),
            health_conditions: Vec::new(),
        };

        let quotes = calculate_carrier_quotes(&engine, &calc);
        assert!(!quotes.is_empty());
        assert!(quotes[0].recommended);
        assert_eq!(quotes[0].reason.as_deref(), Some(BEST_RATE_REASON));
        assert!(quotes[1..].iter().all(|q| !q.recommended && q.reason.is_none()));
        assert_eq!(calculate_premium(&engine, &calc), quotes[0].monthly);
    }

    #[test]
    fn test_legacy_premium_zero_when_ineligible() {
        let engine = QuoteEngine::standard();
        let calc = PremiumCalculation {
            age: 95,
            smoker: true,
            health_class: UnderwritingTier::Substandard,
            coverage: 100_000,
            term: 30,
            medications: Vec::new(),
            health_conditions: Vec::new(),
        };
        assert_eq!(calculate_premium(&engine, &calc), 0.0);
    }
}
