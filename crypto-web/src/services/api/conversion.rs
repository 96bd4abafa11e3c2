//! # Conversion Endpoints

use shared::dto::conversion::{ConversionHistoryEntry, ConversionRequest, ConversionResult};

use super::client::ApiClient;
use crate::error::ApiError;
use crate::utils::constants::{CONVERSION_HISTORY_PATH, CONVERSION_PATH};

/// Convert an amount between two assets. The server also records the
/// conversion in the user's history.
pub async fn convert(
    client: &ApiClient,
    request: &ConversionRequest,
) -> Result<ConversionResult, ApiError> {
    log::debug!(
        "Converting {} {} to {}",
        request.amount,
        request.from_currency,
        request.to_currency
    );
    client.post_json(CONVERSION_PATH, request).await
}

/// Past conversions of the signed-in user, in server order.
pub async fn fetch_conversion_history(
    client: &ApiClient,
) -> Result<Vec<ConversionHistoryEntry>, ApiError> {
    client.get_json(CONVERSION_HISTORY_PATH).await
}
