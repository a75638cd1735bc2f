//! Quote engine: eligibility, pricing and ordering for each product family

mod engine;
mod quotes;

pub use engine::{BatchQuote, QuoteEngine};
pub use quotes::{round2, FexQuote, QuoteLine, SiulQuote, TermQuote};
