use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Serialize, Deserialize, Debug)]
pub struct TrendingCoin {
    pub item: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TrendingResponse {
    pub coins: Vec<TrendingCoin>,
}
