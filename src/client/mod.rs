//! Client profiles, rating requests and batch loading

mod data;
pub mod loader;

pub use data::{ClientProfile, QuoteRequest, Sex, DEFAULT_TERM_YEARS};
pub use loader::{load_clients, load_clients_from_reader, load_default_clients};
