use crate::config::{PAGE_SIZE, START_DATE};
use crate::third_party::treasury::api_path::{
    FIELD_CURRENCY, FIELD_RECORD_DATE, RATES_FIELDS, RATES_OF_EXCHANGE_API,
};

/// Query against the rates-of-exchange endpoint.
///
/// The dashboard only ever issues [`RatesQuery::dashboard`]. The currency
/// filter and latest-only mode are query forms the feed also accepts; no
/// runtime path sends them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RatesQuery {
    pub start_date: String,
    pub currency: Option<String>,
    pub newest_first: bool,
    pub page_size: u32,
}

impl RatesQuery {
    /// Everything since [`START_DATE`], newest first, one full page.
    pub fn dashboard() -> Self {
        Self {
            start_date: START_DATE.to_string(),
            currency: None,
            newest_first: true,
            page_size: PAGE_SIZE,
        }
    }

    /// Restricts the query to one `country_currency_desc`.
    pub fn for_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Just the most recent record.
    pub fn latest_only(mut self) -> Self {
        self.newest_first = true;
        self.page_size = 1;
        self
    }

    pub fn url(&self) -> String {
        let mut filters = vec![format!("{FIELD_RECORD_DATE}:gte:{}", self.start_date)];
        if let Some(currency) = &self.currency {
            filters.push(format!("{FIELD_CURRENCY}:eq:{currency}"));
        }

        let mut url = format!(
            "{RATES_OF_EXCHANGE_API}?fields={RATES_FIELDS}&filter={}",
            filters.join(",")
        );
        if self.newest_first {
            url.push_str(&format!("&sort=-{FIELD_RECORD_DATE}"));
        }
        url.push_str(&format!("&page[size]={}", self.page_size));
        url
    }
}
