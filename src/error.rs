use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Errors produced while building a portfolio.
///
/// Only `InvalidAddress` and `LedgerQuery` abort a request. Everything else
/// is scoped to a single token and is recovered by the tracker.
#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    #[error("invalid wallet address: {0}")]
    InvalidAddress(String),

    #[error("ledger query failed: {0:#}")]
    LedgerQuery(anyhow::Error),

    #[error("invalid token account data: expected at least {expected} bytes, got {actual}")]
    InvalidAccountData { expected: usize, actual: usize },

    #[error("price not found for token: {0}")]
    PriceNotFound(String),

    #[error("quote source credential not configured for {0}")]
    QuoteCredentialMissing(String),

    #[error("quote request failed: {0}")]
    QuoteTransport(String),

    #[error("quote response could not be decoded: {0}")]
    QuoteDecode(String),
}

impl PortfolioError {
    /// Whether this error must fail the whole portfolio request.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::InvalidAddress(_) | Self::LedgerQuery(_))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidAddress(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for PortfolioError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::QuoteDecode(e.to_string())
        } else {
            Self::QuoteTransport(e.to_string())
        }
    }
}

impl IntoResponse for PortfolioError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
