use reqwest::Error as ReqwestError;
use serde_json::Error as SerdeJsonError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ErrorKind {
    #[error("request failed: {0}")]
    Http(#[from] ReqwestError),

    #[error("unexpected response body: {0}")]
    Decode(#[from] SerdeJsonError),

    #[error("property \"{segment}\" does not exist for coin {coin}")]
    MissingProperty { segment: String, coin: String },

    #[error("property \"{path}\" of coin {coin} is not a number")]
    NotNumeric { path: String, coin: String },

    #[error("property \"{path}\" of coin {coin} is not a string")]
    NotAString { path: String, coin: String },

    #[error("no price found for coin {coin} in currency {currency}")]
    PriceNotFound { coin: String, currency: String },

    #[error("price history for coin {coin} in currency {currency} is empty")]
    EmptyPriceHistory { coin: String, currency: String },
}

/// Error returned by every facade operation: the operation's own message with
/// the underlying cause attached.
#[derive(Error, Debug)]
#[error("{context}: {source}")]
pub struct ApiError {
    context: String,
    #[source]
    source: ErrorKind,
}

impl ApiError {
    pub fn new(context: impl Into<String>, source: ErrorKind) -> Self {
        Self {
            context: context.into(),
            source,
        }
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.source
    }
}

pub trait Context<T> {
    fn context<F, S>(self, f: F) -> Result<T, ApiError>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: Into<ErrorKind>,
{
    fn context<F, S>(self, f: F) -> Result<T, ApiError>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|err| {
            let err = ApiError::new(f(), err.into());
            tracing::warn!("{}", err);
            err
        })
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("COINGECKO_BASE_URL must not be empty")]
    EmptyBaseUrl,

    #[error("COINGECKO_BASE_URL is not valid unicode")]
    InvalidBaseUrl,
}
