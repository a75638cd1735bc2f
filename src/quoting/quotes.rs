//! Priced quote results, one shape per product family

use crate::catalog::{FexProduct, ProductFamily, SiulProduct, TermProduct};
use serde::Serialize;

/// Round a currency amount to cents, half away from zero
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A priced term product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermQuote<'a> {
    pub product: &'a TermProduct,
    pub monthly: f64,
    pub annual: f64,
    /// Accidental death rider add-on, when the product prices one
    pub ad_monthly: Option<f64>,
    pub ad_annual: Option<f64>,
}

/// A priced final expense product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FexQuote<'a> {
    pub product: &'a FexProduct,
    pub monthly: f64,
    pub annual: f64,
}

/// A priced SIUL/IUL product; only a monthly target premium is rated
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiulQuote<'a> {
    pub product: &'a SiulProduct,
    pub monthly_target: f64,
}

impl SiulQuote<'_> {
    /// Display-only annual figure, twelve target payments
    pub fn annual_equivalent(&self) -> f64 {
        round2(self.monthly_target * 12.0)
    }
}

/// Family-independent result row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteLine {
    pub family: ProductFamily,
    pub product_id: String,
    pub carrier: String,
    pub product_name: String,
    pub monthly: f64,
    pub annual: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rider_monthly: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rider_annual: Option<f64>,
}

impl From<&TermQuote<'_>> for QuoteLine {
    fn from(q: &TermQuote<'_>) -> Self {
        QuoteLine {
            family: ProductFamily::Term,
            product_id: q.product.id.clone(),
            carrier: q.product.carrier.clone(),
            product_name: q.product.product_name.clone(),
            monthly: q.monthly,
            annual: q.annual,
            rider_monthly: q.ad_monthly,
            rider_annual: q.ad_annual,
        }
    }
}

impl From<&FexQuote<'_>> for QuoteLine {
    fn from(q: &FexQuote<'_>) -> Self {
        QuoteLine {
            family: ProductFamily::FinalExpense,
            product_id: q.product.id.clone(),
            carrier: q.product.carrier.clone(),
            product_name: q.product.product_name.clone(),
            monthly: q.monthly,
            annual: q.annual,
            rider_monthly: None,
            rider_annual: None,
        }
    }
}

impl From<&SiulQuote<'_>> for QuoteLine {
    fn from(q: &SiulQuote<'_>) -> Self {
        QuoteLine {
            family: ProductFamily::Siul,
            product_id: q.product.id.clone(),
            carrier: q.product.carrier.clone(),
            product_name: q.product.product_name.clone(),
            monthly: q.monthly_target,
            annual: q.annual_equivalent(),
            rider_monthly: None,
            rider_annual: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::standard_siul_products;

    #[test]
    fn test_round2() {
        assert_eq!(round2(13.729999999999999), 13.73);
        assert_eq!(round2(155.9728), 155.97);
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(42.5), 42.5);
    }

    #[test]
    fn test_siul_annual_equivalent() {
        let products = standard_siul_products();
        let quote = SiulQuote {
            product: &products[0],
            monthly_target: 462.5,
        };
        assert_eq!(quote.annual_equivalent(), 5550.0);

        let line = QuoteLine::from(&quote);
        assert_eq!(line.family, ProductFamily::Siul);
        assert_eq!(line.annual, 5550.0);
        assert!(line.rider_monthly.is_none());
    }
}
