use crate::config::Config;
use crate::error::{ApiError, Context, ErrorKind};
use crate::models::market_chart::{Extremum, MarketChartResponse, PriceExtremum};
use crate::models::trending::TrendingResponse;
use crate::models::{
    CategoryListEntry, CoinListEntry, CoinLogo, CoinMarket, CoinSummary, PingResponse,
    ProfitResult,
};
use crate::utils::{
    calculate_crypto_profit, calculate_transaction_amount, price_extremum, project_fields,
    resolve_nested_path, timestamp_from_millis,
};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client, Error as ReqwestError,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// Upper bound of the market chart range; together with `from=0` it covers the
/// whole history of a coin.
const HISTORY_END_TIMESTAMP: &str = "9999999999";

pub const DEFAULT_TOP_LIMIT: u32 = 10;

/// Stateless facade over the CoinGecko v3 API. Cloning is cheap and clones
/// share the connection pool.
#[derive(Clone, Debug)]
pub struct CoinGecko {
    client: Client,
    base_url: String,
}

impl CoinGecko {
    pub fn init(config: &Config) -> Result<Self, ReqwestError> {
        Self::new(&config.base_url)
    }

    pub fn new(base_url: &str) -> Result<Self, ReqwestError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T, Q>(&self, path: &str, query: &Q) -> Result<T, ErrorKind>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;
        let body = response.bytes().await?;

        Ok(serde_json::from_slice(&body)?)
    }

    async fn fetch_coin(&self, coin: &str) -> Result<Value, ErrorKind> {
        self.get_json(&format!("/coins/{}", coin), &[] as &[(&str, &str)])
            .await
    }

    /// Fetches `/coins/{coin}` and resolves the dot separated `property` in it,
    /// e.g. `market_data.current_price.usd`.
    pub async fn get_crypto_info(&self, coin: &str, property: &str) -> Result<Value, ApiError> {
        let context = || format!("failed to get property \"{}\" of {}", property, coin);

        let data = self.fetch_coin(coin).await.context(context)?;
        resolve_nested_path(&data, property, coin)
            .cloned()
            .context(context)
    }

    /// Top `limit` coins by market capitalization, in the order upstream ranks them.
    /// `None` asks for [`DEFAULT_TOP_LIMIT`] coins.
    pub async fn list_top_cryptos(
        &self,
        limit: Option<u32>,
    ) -> Result<Vec<CoinSummary>, ApiError> {
        let limit = limit.unwrap_or(DEFAULT_TOP_LIMIT);
        let query = [
            ("vs_currency", "usd".to_string()),
            ("order", "market_cap_desc".to_string()),
            ("per_page", limit.to_string()),
            ("page", "1".to_string()),
            ("sparkline", "false".to_string()),
        ];

        let markets: Vec<CoinMarket> = self
            .get_json("/coins/markets", &query)
            .await
            .context(|| format!("failed to list the top {} cryptocurrencies", limit))?;

        Ok(markets.into_iter().map(CoinSummary::from).collect())
    }

    /// `quantity` times the numeric field at `path` of the coin record. The path
    /// is lowercased first, so `Market_Data.Current_Price.USD` works.
    pub async fn calculate_value(
        &self,
        coin: &str,
        quantity: f64,
        path: &str,
    ) -> Result<f64, ApiError> {
        let context = || format!("failed to calculate the value of {} {} in {}", quantity, coin, path);
        let path = path.to_lowercase();

        let data = self.fetch_coin(coin).await.context(context)?;
        let value = resolve_nested_path(&data, &path, coin).context(context)?;
        let price = value
            .as_f64()
            .ok_or_else(|| ErrorKind::NotNumeric {
                path: path.clone(),
                coin: coin.to_string(),
            })
            .context(context)?;

        Ok(calculate_transaction_amount(quantity, price))
    }

    /// Trending coins. With an empty `fields` the upstream items are returned as
    /// they are, otherwise each item keeps only the requested fields it has.
    pub async fn get_trending_coins(
        &self,
        fields: &[&str],
    ) -> Result<Vec<Map<String, Value>>, ApiError> {
        let trending: TrendingResponse = self
            .get_json("/search/trending", &[] as &[(&str, &str)])
            .await
            .context(|| "failed to get trending cryptocurrencies")?;

        Ok(trending
            .coins
            .into_iter()
            .map(|coin| project_fields(coin.item, fields))
            .collect())
    }

    pub async fn get_api_ping(&self) -> Result<String, ApiError> {
        let ping: PingResponse = self
            .get_json("/ping", &[] as &[(&str, &str)])
            .await
            .context(|| "failed to get the API status")?;

        Ok(ping.gecko_says)
    }

    pub async fn get_crypto_price(&self, coin: &str, currency: &str) -> Result<f64, ApiError> {
        let context = || format!("failed to get the price of {} in {}", coin, currency);
        let currency = currency.to_lowercase();

        let prices: Value = self
            .get_json(
                "/simple/price",
                &[("ids", coin), ("vs_currencies", currency.as_str())],
            )
            .await
            .context(context)?;

        prices
            .get(coin)
            .and_then(|entry| entry.get(&currency))
            .and_then(Value::as_f64)
            .ok_or_else(|| ErrorKind::PriceNotFound {
                coin: coin.to_string(),
                currency: currency.clone(),
            })
            .context(context)
    }

    pub async fn get_coin_list(&self) -> Result<Vec<CoinListEntry>, ApiError> {
        self.get_json("/coins/list", &[] as &[(&str, &str)])
            .await
            .context(|| "failed to get the list of cryptocurrencies")
    }

    pub async fn get_coin_categories_list(&self) -> Result<Vec<CategoryListEntry>, ApiError> {
        self.get_json("/coins/categories/list", &[] as &[(&str, &str)])
            .await
            .context(|| "failed to get the list of cryptocurrency categories")
    }

    /// Local arithmetic only; kept on the facade so callers find every
    /// operation in one place.
    pub fn calculate_crypto_profit(
        &self,
        coin: &str,
        buy_price: f64,
        sell_price: f64,
        quantity: f64,
    ) -> ProfitResult {
        calculate_crypto_profit(coin, buy_price, sell_price, quantity)
    }

    pub async fn get_crypto_logo(&self, coin: &str) -> Result<CoinLogo, ApiError> {
        let context = || format!("failed to get the logo of {}", coin);

        let data = self.fetch_coin(coin).await.context(context)?;
        let logo_url = resolve_nested_path(&data, "image.large", coin)
            .and_then(|url| {
                url.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| ErrorKind::NotAString {
                        path: "image.large".to_string(),
                        coin: coin.to_string(),
                    })
            })
            .context(context)?;

        Ok(CoinLogo {
            coin: coin.to_string(),
            logo_url,
        })
    }

    pub async fn get_crypto_all_time_high(
        &self,
        coin: &str,
        currency: &str,
    ) -> Result<PriceExtremum, ApiError> {
        self.get_price_extremum(coin, currency, Extremum::High)
            .await
    }

    pub async fn get_crypto_all_time_low(
        &self,
        coin: &str,
        currency: &str,
    ) -> Result<PriceExtremum, ApiError> {
        self.get_price_extremum(coin, currency, Extremum::Low).await
    }

    pub async fn get_price_extremum(
        &self,
        coin: &str,
        currency: &str,
        kind: Extremum,
    ) -> Result<PriceExtremum, ApiError> {
        let context = || {
            let label = match kind {
                Extremum::High => "all-time high",
                Extremum::Low => "all-time low",
            };
            format!("failed to get the {} price of {} in {}", label, coin, currency)
        };

        let chart: MarketChartResponse = self
            .get_json(
                &format!("/coins/{}/market_chart/range", coin),
                &[
                    ("vs_currency", currency),
                    ("from", "0"),
                    ("to", HISTORY_END_TIMESTAMP),
                ],
            )
            .await
            .context(context)?;

        let (timestamp, price) = price_extremum(&chart.prices, kind)
            .ok_or_else(|| ErrorKind::EmptyPriceHistory {
                coin: coin.to_string(),
                currency: currency.to_string(),
            })
            .context(context)?;

        Ok(PriceExtremum {
            coin: coin.to_string(),
            currency: currency.to_string(),
            kind,
            price,
            observed_at: timestamp_from_millis(timestamp),
        })
    }
}
