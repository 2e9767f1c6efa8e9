use chrono::NaiveDate;
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("exchange rate {0:?} is not a finite decimal")]
    InvalidRate(String),
    #[error("record date {0:?} is not YYYY-MM-DD")]
    InvalidDate(String),
}

/// One currency's rate on one date.
#[derive(Clone, Debug, PartialEq)]
pub struct ExchangeRecord {
    pub currency: String,
    /// Rate as received, shown verbatim in the detail table.
    pub rate_text: String,
    pub rate: f64,
    pub date: NaiveDate,
}

impl ExchangeRecord {
    pub fn parse(currency: &str, rate_text: &str, date_text: &str) -> Result<Self, RecordError> {
        let rate = rate_text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|r| r.is_finite())
            .ok_or_else(|| RecordError::InvalidRate(rate_text.to_string()))?;
        let date = NaiveDate::parse_from_str(date_text.trim(), DATE_FORMAT)
            .map_err(|_| RecordError::InvalidDate(date_text.to_string()))?;

        Ok(Self {
            currency: currency.to_string(),
            rate_text: rate_text.to_string(),
            rate,
            date,
        })
    }

    pub fn point(&self) -> SeriesPoint {
        SeriesPoint {
            date: self.date,
            rate: self.rate,
        }
    }
}

/// A (date, rate) pair fed to the line chart and the sparklines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub rate: f64,
}
