use const_format::concatcp;

// Root
pub const TREASURY_API_URL: &str = "https://api.fiscaldata.treasury.gov/services/api/fiscal_service";

// Paths
pub const RATES_OF_EXCHANGE_PATH: &str = "/v1/accounting/od/rates_of_exchange";

// Endpoints
pub const RATES_OF_EXCHANGE_API: &str = concatcp!(TREASURY_API_URL, RATES_OF_EXCHANGE_PATH);

// Query pieces
pub const RATES_FIELDS: &str = "country_currency_desc,exchange_rate,record_date";
pub const FIELD_RECORD_DATE: &str = "record_date";
pub const FIELD_CURRENCY: &str = "country_currency_desc";
