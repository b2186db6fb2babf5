pub mod coingecko;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::error::ErrorKind;
use crate::models::market_chart::{Extremum, PricePoint};
use crate::models::ProfitResult;

pub fn calculate_transaction_amount(amount: f64, price: f64) -> f64 {
    amount * price
}

/// Walks `path` (dot separated) through `data`.
///
/// A segment is missing when the key is absent or its value is `null`. Falsy
/// values such as `0`, `false` or `""` resolve normally. When the current value
/// is an array, a numeric segment indexes into it.
pub fn resolve_nested_path<'a>(
    data: &'a Value,
    path: &str,
    coin: &str,
) -> Result<&'a Value, ErrorKind> {
    let mut value = data;

    for segment in path.split('.') {
        let next = match value {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        };

        value = match next {
            Some(Value::Null) | None => {
                return Err(ErrorKind::MissingProperty {
                    segment: segment.to_string(),
                    coin: coin.to_string(),
                })
            }
            Some(next) => next,
        };
    }

    Ok(value)
}

/// Keeps only the requested fields present in `item`. An empty selector keeps
/// the item as is.
pub fn project_fields(item: Map<String, Value>, fields: &[&str]) -> Map<String, Value> {
    if fields.is_empty() {
        return item;
    }

    item.into_iter()
        .filter(|(key, _)| fields.contains(&key.as_str()))
        .collect()
}

/// Highest or lowest price of the series, with the timestamp it was observed at.
/// Non-finite prices are skipped; ties keep the first sample.
pub fn price_extremum(prices: &[PricePoint], kind: Extremum) -> Option<PricePoint> {
    prices
        .iter()
        .copied()
        .filter(|(_, price)| price.is_finite())
        .fold(None, |best: Option<PricePoint>, point| match best {
            None => Some(point),
            Some(current) => {
                let better = match kind {
                    Extremum::High => point.1 > current.1,
                    Extremum::Low => point.1 < current.1,
                };
                if better {
                    Some(point)
                } else {
                    Some(current)
                }
            }
        })
}

pub fn timestamp_from_millis(millis: f64) -> Option<DateTime<Utc>> {
    if !millis.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis(millis as i64)
}

pub fn calculate_crypto_profit(
    coin: &str,
    buy_price: f64,
    sell_price: f64,
    quantity: f64,
) -> ProfitResult {
    let buy_total = calculate_transaction_amount(quantity, buy_price);
    let sell_total = calculate_transaction_amount(quantity, sell_price);

    ProfitResult {
        coin: coin.to_string(),
        buy_price,
        sell_price,
        quantity,
        profit_or_loss: sell_total - buy_total,
    }
}
