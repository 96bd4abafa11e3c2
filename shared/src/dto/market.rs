use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::deserialize_decimal;

/// A listed cryptocurrency as returned by `/api/crypto-list/` and
/// `/api/crypto-detail/{symbol}/`.
///
/// `symbol` is the canonical lookup key and is never rewritten; display code
/// uses [`Asset::display_symbol`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Asset {
    pub symbol: String,
    pub name: String,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub price_usd: f64,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub percent_change_24h: f64,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub market_cap: f64,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub volume_24h: f64,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub circulating_supply: f64,
    pub last_updated: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Asset {
    /// Upper-cased copy of the symbol for display.
    pub fn display_symbol(&self) -> String {
        self.symbol.to_uppercase()
    }

    /// The description, if the server sent a non-blank one.
    pub fn description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

/// Response of the `/api/update-data/` refresh trigger.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateDataResponse {
    #[serde(default)]
    pub updated_cryptos: Vec<String>,
}
