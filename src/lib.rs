pub mod config;
pub mod error;
pub mod models;
pub mod utils;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ApiError, ConfigError, ErrorKind};
pub use utils::coingecko::CoinGecko;
