//! # Shared Utility Functions
//!
//! Deserialization helpers for the API's numeric columns.
//!
//! The backend serializes decimal columns as strings (`"0.00001234"`) and
//! float/integer columns as JSON numbers. [`deserialize_decimal`] accepts both
//! so DTOs can expose a single `f64` field.
//!
//! ```rust
//! use serde::Deserialize;
//! use shared::utils::deserialize_decimal;
//!
//! #[derive(Deserialize)]
//! struct Quote {
//!     #[serde(deserialize_with = "deserialize_decimal")]
//!     price: f64,
//! }
//!
//! let from_text: Quote = serde_json::from_str(r#"{"price": "12.50"}"#).unwrap();
//! let from_number: Quote = serde_json::from_str(r#"{"price": 12.5}"#).unwrap();
//! assert_eq!(from_text.price, from_number.price);
//! ```

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Deserialize a decimal that may arrive as a JSON number or a decimal string.
///
/// Non-finite values are rejected so formatting code never sees `NaN`.
pub fn deserialize_decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(number) => number,
        NumberOrText::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("invalid decimal string: {:?}", text)))?,
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(D::Error::custom("decimal must be finite"))
    }
}
