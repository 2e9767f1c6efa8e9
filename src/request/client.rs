use crate::config::FETCH_TIMEOUT_SECS;
use crate::data::ExchangeRecord;
use crate::request::{LoadError, RatesQuery};
use crate::third_party::treasury::data::ApiRatesResponse;
use log::{info, warn};
use std::time::Duration;

use reqwest::Client;

pub fn http_client(timeout: Duration) -> Result<Client, LoadError> {
    Ok(Client::builder().timeout(timeout).build()?)
}

pub async fn fetch_exchange_records(query: &RatesQuery) -> Result<Vec<ExchangeRecord>, LoadError> {
    let client = http_client(Duration::from_secs(FETCH_TIMEOUT_SECS))?;
    fetch_records_from(&client, &query.url()).await
}

async fn fetch_records_from(client: &Client, url: &str) -> Result<Vec<ExchangeRecord>, LoadError> {
    info!("Fetching exchange rates from {}", url);

    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status(status));
    }

    let body = response.text().await?;
    let records = decode_records(&body)?;
    info!("Loaded {} exchange records", records.len());
    Ok(records)
}

/// Decodes the response envelope. Rows with a malformed rate or date are
/// dropped and logged; only a body that is not the envelope is an error.
pub fn decode_records(body: &str) -> Result<Vec<ExchangeRecord>, serde_json::Error> {
    let parse_json: ApiRatesResponse = serde_json::from_str(body)?;

    let records = parse_json
        .data
        .into_iter()
        .filter_map(|row| {
            match ExchangeRecord::parse(
                &row.country_currency_desc,
                &row.exchange_rate,
                &row.record_date,
            ) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!("Skipping {} record: {}", row.country_currency_desc, e);
                    None
                }
            }
        })
        .collect();

    Ok(records)
}
