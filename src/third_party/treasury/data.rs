use serde::Deserialize;

/// Response envelope of the rates-of-exchange endpoint. `meta` and `links`
/// are present on the wire but unused.
#[derive(Debug, Deserialize)]
pub struct ApiRatesResponse {
    pub data: Vec<RateRow>,
}

/// One row exactly as the feed sends it; every field is a string.
#[derive(Debug, Clone, Deserialize)]
pub struct RateRow {
    pub country_currency_desc: String,
    pub exchange_rate: String,
    pub record_date: String,
}
