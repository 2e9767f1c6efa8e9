pub mod client;
pub mod error;
pub mod query;

pub use client::{decode_records, fetch_exchange_records};
pub use error::LoadError;
pub use query::RatesQuery;
