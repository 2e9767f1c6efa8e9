use thiserror::Error;

/// Why a load of the exchange-rate feed produced no dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request to the rates feed failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("rates feed answered with HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("rates feed returned an unexpected body: {0}")]
    Decode(#[from] serde_json::Error),
}
