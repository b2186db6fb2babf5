use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
pub mod market_chart;
pub mod trending;

#[derive(Serialize, Deserialize, Debug)]
pub struct PingResponse {
    pub gecko_says: String,
}

/// One row of `/coins/markets`. Only the fields the facade projects are kept.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CoinMarket {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub market_cap: Option<f64>,
    pub current_price: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CoinSummary {
    pub name: String,
    pub symbol: String,
    pub market_cap: Option<f64>,
    pub current_price: Option<f64>,
}

impl From<CoinMarket> for CoinSummary {
    fn from(market: CoinMarket) -> Self {
        Self {
            name: market.name,
            symbol: market.symbol,
            market_cap: market.market_cap,
            current_price: market.current_price,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CoinListEntry {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CategoryListEntry {
    pub category_id: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CoinLogo {
    pub coin: String,
    pub logo_url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfitResult {
    pub coin: String,
    pub buy_price: f64,
    pub sell_price: f64,
    pub quantity: f64,
    pub profit_or_loss: f64,
}
