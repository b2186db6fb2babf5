use chrono::{DateTime, Utc};
use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};

/// `[timestamp_ms, price]` as returned by the market chart endpoints.
pub type PricePoint = (f64, f64);

#[derive(Serialize, Deserialize, Debug)]
pub struct MarketChartResponse {
    pub prices: Vec<PricePoint>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Extremum {
    High,
    Low,
}

impl Extremum {
    pub fn field_name(self) -> &'static str {
        match self {
            Extremum::High => "allTimeHigh",
            Extremum::Low => "allTimeLow",
        }
    }
}

/// Serialized as `{coin, currency, allTimeHigh | allTimeLow, observedAt}`,
/// the price keyed by `kind`.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceExtremum {
    pub coin: String,
    pub currency: String,
    pub kind: Extremum,
    pub price: f64,
    pub observed_at: Option<DateTime<Utc>>,
}

impl Serialize for PriceExtremum {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("coin", &self.coin)?;
        map.serialize_entry("currency", &self.currency)?;
        map.serialize_entry(self.kind.field_name(), &self.price)?;
        map.serialize_entry("observedAt", &self.observed_at)?;
        map.end()
    }
}
