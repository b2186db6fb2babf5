
#[cfg(test)]
mod tests {
    use crate::config::{Config, DEFAULT_BASE_URL};
    use crate::error::{ConfigError, ErrorKind};
    use crate::models::market_chart::{Extremum, PriceExtremum};
    use crate::models::{CoinMarket, CoinSummary};
    use crate::utils::{
        calculate_crypto_profit, calculate_transaction_amount, price_extremum, project_fields,
        resolve_nested_path, timestamp_from_millis,
    };
    use serde_json::{json, Map, Value};

    fn coin_record() -> Value {
        json!({
            "id": "bitcoin",
            "name": "Bitcoin",
            "hashing_algorithm": "",
            "market_data": {
                "current_price": { "usd": 67000.5, "eur": 0 },
                "total_supply": null
            },
            "categories": ["Cryptocurrency", "Layer 1 (L1)"]
        })
    }

    fn item(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture is not an object"),
        }
    }

    #[test]
    fn test_resolve_nested_path() {
        let data = coin_record();
        assert_eq!(
            resolve_nested_path(&data, "market_data.current_price.usd", "bitcoin").unwrap(),
            &json!(67000.5)
        );
        assert_eq!(
            resolve_nested_path(&data, "name", "bitcoin").unwrap(),
            &json!("Bitcoin")
        );
        assert_eq!(
            resolve_nested_path(&data, "categories.1", "bitcoin").unwrap(),
            &json!("Layer 1 (L1)")
        );
    }

    #[test]
    fn test_resolve_nested_path_keeps_falsy_values() {
        let data = coin_record();
        assert_eq!(
            resolve_nested_path(&data, "market_data.current_price.eur", "bitcoin").unwrap(),
            &json!(0)
        );
        assert_eq!(
            resolve_nested_path(&data, "hashing_algorithm", "bitcoin").unwrap(),
            &json!("")
        );
    }

    #[test]
    fn test_resolve_nested_path_missing_segment() {
        let data = coin_record();
        match resolve_nested_path(&data, "market_data.ath.usd", "bitcoin") {
            Err(ErrorKind::MissingProperty { segment, coin }) => {
                assert_eq!(segment, "ath");
                assert_eq!(coin, "bitcoin");
            }
            other => panic!("unexpected result: {:?}", other),
        }

        let err = resolve_nested_path(&data, "market_data.total_supply", "bitcoin").unwrap_err();
        assert_eq!(
            err.to_string(),
            "property \"total_supply\" does not exist for coin bitcoin"
        );

        assert!(resolve_nested_path(&data, "name.first", "bitcoin").is_err());
        assert!(resolve_nested_path(&data, "categories.7", "bitcoin").is_err());
        assert!(resolve_nested_path(&data, "", "bitcoin").is_err());
    }

    #[test]
    fn test_project_fields() {
        let source = item(json!({ "id": "pepe", "name": "Pepe", "score": 0, "thumb": "" }));

        assert_eq!(project_fields(source.clone(), &[]), source);

        let projected = project_fields(source, &["name", "score", "large"]);
        assert_eq!(Value::Object(projected), json!({ "name": "Pepe", "score": 0 }));
    }

    #[test]
    fn test_price_extremum() {
        let prices = [(0.0, 10.0), (1.0, 50.0), (2.0, 5.0)];
        assert_eq!(price_extremum(&prices, Extremum::High), Some((1.0, 50.0)));
        assert_eq!(price_extremum(&prices, Extremum::Low), Some((2.0, 5.0)));
    }

    #[test]
    fn test_price_extremum_ignores_timestamp_order() {
        let prices = [(9.0, 7.0), (3.0, 7.0), (5.0, 2.0), (1.0, f64::NAN)];
        assert_eq!(price_extremum(&prices, Extremum::High), Some((9.0, 7.0)));
        assert_eq!(price_extremum(&prices, Extremum::Low), Some((5.0, 2.0)));
    }

    #[test]
    fn test_price_extremum_empty_series() {
        assert_eq!(price_extremum(&[], Extremum::High), None);
        assert_eq!(price_extremum(&[], Extremum::Low), None);
        assert_eq!(price_extremum(&[(0.0, f64::NAN)], Extremum::High), None);
    }

    #[test]
    fn test_price_extremum_serializes_price_under_kind() {
        let high = PriceExtremum {
            coin: "bitcoin".to_string(),
            currency: "usd".to_string(),
            kind: Extremum::High,
            price: 50.0,
            observed_at: None,
        };
        assert_eq!(
            serde_json::to_value(&high).unwrap(),
            json!({
                "coin": "bitcoin",
                "currency": "usd",
                "allTimeHigh": 50.0,
                "observedAt": null
            })
        );
    }

    #[test]
    fn test_timestamp_from_millis() {
        let at = timestamp_from_millis(1367107200000.0).unwrap();
        assert_eq!(at.to_rfc3339(), "2013-04-28T00:00:00+00:00");
        assert!(timestamp_from_millis(f64::INFINITY).is_none());
    }

    #[test]
    fn test_calculate_transaction_amount() {
        assert_eq!(calculate_transaction_amount(2.0, 3.0), 6.0);
        assert_eq!(calculate_transaction_amount(0.0, 3.0), 0.0);
        assert_eq!(calculate_transaction_amount(-2.0, 3.0), -6.0);
    }

    #[test]
    fn test_calculate_crypto_profit() {
        let result = calculate_crypto_profit("bitcoin", 100.0, 150.0, 2.0);
        assert_eq!(result.coin, "bitcoin");
        assert_eq!(result.buy_price, 100.0);
        assert_eq!(result.sell_price, 150.0);
        assert_eq!(result.quantity, 2.0);
        assert_eq!(result.profit_or_loss, 100.0);

        let loss = calculate_crypto_profit("ethereum", 150.0, 100.0, 3.0);
        assert_eq!(loss.profit_or_loss, -150.0);

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "coin": "bitcoin",
                "buyPrice": 100.0,
                "sellPrice": 150.0,
                "quantity": 2.0,
                "profitOrLoss": 100.0
            })
        );
    }

    #[test]
    fn test_coin_summary_projection() {
        let market: CoinMarket = serde_json::from_value(json!({
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "current_price": 67000.5,
            "market_cap": 1320000000000.0,
            "total_volume": 1.0
        }))
        .unwrap();

        let summary = CoinSummary::from(market);
        assert_eq!(
            serde_json::to_value(&summary).unwrap(),
            json!({
                "name": "Bitcoin",
                "symbol": "btc",
                "marketCap": 1320000000000.0,
                "currentPrice": 67000.5
            })
        );
    }

    #[test]
    fn test_config_base_url() {
        assert_eq!(Config::with_base_url(None).unwrap().base_url, DEFAULT_BASE_URL);
        assert_eq!(
            Config::with_base_url(Some(" http://localhost:8080/api/v3/ ")).unwrap().base_url,
            "http://localhost:8080/api/v3/"
        );
        assert!(matches!(
            Config::with_base_url(Some("  ")),
            Err(ConfigError::EmptyBaseUrl)
        ));
        assert_eq!(Config::default().base_url, DEFAULT_BASE_URL);
    }
}
