//! Rating pipelines for term, final expense and SIUL/IUL products

use super::quotes::{round2, FexQuote, QuoteLine, SiulQuote, TermQuote};
use crate::catalog::{Catalog, ProductFamily, FEX_ANNUAL_FACTOR};
use crate::client::{ClientProfile, QuoteRequest};
use crate::error::{CatalogError, LoadError};
use crate::rating::{coverage_band_factor, RatingTables};
use rayon::prelude::*;
use std::cmp::Ordering;
use std::path::Path;
use std::sync::Arc;

/// Quotes for one client in a batch run
#[derive(Debug, Clone)]
pub struct BatchQuote {
    pub client_id: u32,
    pub family: ProductFamily,
    pub lines: Vec<QuoteLine>,
}

impl BatchQuote {
    /// Cheapest eligible product, if any
    pub fn best(&self) -> Option<&QuoteLine> {
        self.lines.first()
    }
}

/// Pre-loaded rating engine
///
/// Holds shared, immutable snapshots of the catalog and factor tables, so an
/// engine is cheap to clone and safe to use from many threads at once. Every
/// rating call is a pure function of the request and these snapshots.
///
/// # Example
/// ```ignore
/// let engine = QuoteEngine::standard();
/// let request = QuoteRequest::new(35, Sex::Male, false, 100_000, HealthClass::PreferredPlus);
/// for quote in engine.quote_term(&request) {
///     println!("{}: {:.2}", quote.product.product_name, quote.monthly);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct QuoteEngine {
    catalog: Arc<Catalog>,
    tables: Arc<RatingTables>,
}

impl QuoteEngine {
    pub fn new(catalog: Catalog, tables: RatingTables) -> Self {
        Self {
            catalog: Arc::new(catalog),
            tables: Arc::new(tables),
        }
    }

    /// Built-in catalog and default pricing tables
    pub fn standard() -> Self {
        Self::new(Catalog::standard(), RatingTables::default_pricing())
    }

    /// Load factor tables from a CSV directory, keeping the built-in catalog
    pub fn from_csv_path(path: &Path) -> Result<Self, LoadError> {
        let tables = RatingTables::from_csv_path(path)?;
        let catalog = Catalog::standard();
        catalog.validate(&tables.term_length)?;
        Ok(Self::new(catalog, tables))
    }

    /// New engine sharing these tables but rating against another catalog
    ///
    /// Engines already handed out keep the snapshot they were built with.
    pub fn with_catalog(&self, catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            tables: Arc::clone(&self.tables),
        }
    }

    /// New engine sharing this catalog but using other factor tables
    ///
    /// Fails when a term the catalog offers has no factor in the new tables.
    pub fn with_tables(&self, tables: RatingTables) -> Result<Self, CatalogError> {
        self.catalog.validate(&tables.term_length)?;
        Ok(Self {
            catalog: Arc::clone(&self.catalog),
            tables: Arc::new(tables),
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn tables(&self) -> &RatingTables {
        &self.tables
    }

    /// Every eligible term product, cheapest first
    ///
    /// A product is eligible when age, coverage and term length are all in
    /// range and it is sold to the request's health class (or to all classes).
    pub fn quote_term(&self, request: &QuoteRequest) -> Vec<TermQuote<'_>> {
        let term = request.term_years();
        let term_factor = match self.tables.term_length.factor(term) {
            Some(f) => f,
            None => {
                log::warn!("No term-length factor for {} years; no term products eligible", term);
                return Vec::new();
            }
        };

        let units = request.coverage_units();
        let age_factor = self.tables.term_age.factor(request.age);
        let band_factor = coverage_band_factor(request.coverage);

        let mut quotes: Vec<TermQuote<'_>> = self
            .catalog
            .term
            .iter()
            .filter(|p| {
                p.admits_age(request.age)
                    && p.admits_coverage(request.coverage)
                    && p.offers_term(term)
                    && p.health_classes.admits(request.health_class)
            })
            .map(|product| {
                let sex_smoker = product.sex_smoker_multiplier(request.sex, request.smoker);
                let price = |anchor: f64| {
                    round2(anchor * units * age_factor * term_factor * band_factor * sex_smoker)
                };

                let monthly = price(product.anchor_rate_per_k);
                let annual = round2(monthly * product.annual_factor);

                let (ad_monthly, ad_annual) = match product.rider_rate() {
                    Some(rider) => {
                        let m = price(rider.anchor_rate_per_k);
                        (Some(m), Some(round2(m * rider.annual_factor)))
                    }
                    None => (None, None),
                };

                TermQuote {
                    product,
                    monthly,
                    annual,
                    ad_monthly,
                    ad_annual,
                }
            })
            .collect();

        sort_cheapest_first(&mut quotes, |q| q.monthly);
        log::debug!(
            "Term: {} of {} products eligible (age {}, coverage {}, term {}, class {})",
            quotes.len(),
            self.catalog.term.len(),
            request.age,
            request.coverage,
            term,
            request.health_class
        );
        quotes
    }

    /// Every eligible final expense product, cheapest first
    ///
    /// Health class is not an eligibility gate for this family.
    pub fn quote_final_expense(&self, request: &QuoteRequest) -> Vec<FexQuote<'_>> {
        let units = request.coverage_units();
        let age_factor = self.tables.fex_age.factor(request.age);

        let mut quotes: Vec<FexQuote<'_>> = self
            .catalog
            .final_expense
            .iter()
            .filter(|p| p.admits_age(request.age) && p.admits_coverage(request.coverage))
            .map(|product| {
                let monthly = round2(
                    product.anchor_rate_f
                        * units
                        * age_factor
                        * product.sex_multiplier(request.sex)
                        * product.smoker_multiplier(request.smoker),
                );
                FexQuote {
                    product,
                    monthly,
                    annual: round2(monthly * FEX_ANNUAL_FACTOR),
                }
            })
            .collect();

        sort_cheapest_first(&mut quotes, |q| q.monthly);
        log::debug!(
            "Final expense: {} of {} products eligible (age {}, coverage {})",
            quotes.len(),
            self.catalog.final_expense.len(),
            request.age,
            request.coverage
        );
        quotes
    }

    /// Every eligible SIUL/IUL product, cheapest target premium first
    pub fn quote_siul(&self, request: &QuoteRequest) -> Vec<SiulQuote<'_>> {
        let units = request.coverage_units();
        let age_factor = self.tables.siul_age.factor(request.age);

        let mut quotes: Vec<SiulQuote<'_>> = self
            .catalog
            .siul
            .iter()
            .filter(|p| p.admits_age(request.age) && p.admits_death_benefit(request.coverage))
            .map(|product| SiulQuote {
                product,
                monthly_target: round2(
                    product.anchor_prem_per_k
                        * units
                        * age_factor
                        * product.sex_multiplier(request.sex)
                        * product.smoker_multiplier(request.smoker),
                ),
            })
            .collect();

        sort_cheapest_first(&mut quotes, |q| q.monthly_target);
        log::debug!(
            "SIUL: {} of {} products eligible (age {}, death benefit {})",
            quotes.len(),
            self.catalog.siul.len(),
            request.age,
            request.coverage
        );
        quotes
    }

    /// Rate any family into uniform result lines, cheapest first
    pub fn rate(&self, family: ProductFamily, request: &QuoteRequest) -> Vec<QuoteLine> {
        match family {
            ProductFamily::Term => self.quote_term(request).iter().map(QuoteLine::from).collect(),
            ProductFamily::FinalExpense => self
                .quote_final_expense(request)
                .iter()
                .map(QuoteLine::from)
                .collect(),
            ProductFamily::Siul => self.quote_siul(request).iter().map(QuoteLine::from).collect(),
        }
    }

    /// Rate a client profile, deriving its health class first
    pub fn quote_client(&self, client: &ClientProfile) -> BatchQuote {
        let request = client.to_request();
        BatchQuote {
            client_id: client.client_id,
            family: client.product_family,
            lines: self.rate(client.product_family, &request),
        }
    }

    /// Rate many clients in parallel; output order follows input order
    pub fn quote_batch(&self, clients: &[ClientProfile]) -> Vec<BatchQuote> {
        clients.par_iter().map(|c| self.quote_client(c)).collect()
    }
}

impl Default for QuoteEngine {
    fn default() -> Self {
        Self::standard()
    }
}

/// Stable ascending sort, so ties keep catalog order
fn sort_cheapest_first<T>(quotes: &mut [T], key: impl Fn(&T) -> f64) {
    quotes.sort_by(|a, b| key(a).partial_cmp(&key(b)).unwrap_or(Ordering::Equal));
}
