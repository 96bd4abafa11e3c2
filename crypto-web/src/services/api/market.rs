//! # Market Data Endpoints
//!
//! Asset listing, detail and the server-side refresh trigger.

use shared::dto::market::{Asset, UpdateDataResponse};

use super::client::ApiClient;
use crate::error::ApiError;
use crate::utils::constants::{CRYPTO_DETAIL_PATH, CRYPTO_LIST_PATH, UPDATE_DATA_PATH};
use crate::utils::url::encode_segment;

/// Get every listed asset, in server order.
pub async fn fetch_crypto_list(client: &ApiClient) -> Result<Vec<Asset>, ApiError> {
    let assets: Vec<Asset> = client.get_json(CRYPTO_LIST_PATH).await?;
    log::debug!("Fetched {} assets", assets.len());
    Ok(assets)
}

/// Get one asset by its canonical symbol.
pub async fn fetch_crypto_detail(client: &ApiClient, symbol: &str) -> Result<Asset, ApiError> {
    let path = format!("{}{}/", CRYPTO_DETAIL_PATH, encode_segment(symbol));
    client.get_json(&path).await
}

/// Ask the server to pull fresh market data.
pub async fn update_market_data(client: &ApiClient) -> Result<UpdateDataResponse, ApiError> {
    let response: UpdateDataResponse = client.get_json(UPDATE_DATA_PATH).await?;
    log::info!("Updated cryptocurrencies: {:?}", response.updated_cryptos);
    Ok(response)
}
