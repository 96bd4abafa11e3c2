use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::deserialize_decimal;

/// Body of `POST /api/crypto-conversion/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversionRequest {
    pub from_currency: String,
    pub to_currency: String,
    pub amount: f64,
}

/// Server-computed conversion. `converted_amount ≈ amount × conversion_rate`
/// is the server's invariant; the client only displays it.
///
/// Servers may echo only the computed figures; the echoed request fields then
/// default to empty and callers fall back to what they sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversionResult {
    #[serde(default)]
    pub from_currency: String,
    #[serde(default)]
    pub to_currency: String,
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub amount: f64,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub converted_amount: f64,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub conversion_rate: f64,
}

/// One past conversion from `/api/conversion-history/`, kept in server order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversionHistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub from_currency: String,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub amount: f64,
    pub to_currency: String,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub converted_amount: f64,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub conversion_rate: f64,
}
