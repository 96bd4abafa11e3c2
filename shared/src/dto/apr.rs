use serde::{Deserialize, Serialize};

use crate::utils::deserialize_decimal;

/// Body of `POST /api/apr-calculator/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AprRequest {
    pub crypto_symbol: String,
    pub principal: f64,
    pub rate: f64,
    pub time_years: f64,
}

/// Simple-interest projection computed by the server.
/// `total_amount_in_crypto = principal_in_crypto + interest_earned_in_crypto`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AprResult {
    #[serde(default)]
    pub crypto_symbol: String,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub principal_in_crypto: f64,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub principal_in_usd: f64,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub annual_rate_percent: f64,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub time_years: f64,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub interest_earned_in_crypto: f64,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub total_amount_in_crypto: f64,
}
