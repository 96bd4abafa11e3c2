//! # APR Endpoint

use shared::dto::apr::{AprRequest, AprResult};

use super::client::ApiClient;
use crate::error::ApiError;
use crate::utils::constants::APR_CALCULATOR_PATH;

/// Project simple interest on a crypto principal.
pub async fn calculate_apr(client: &ApiClient, request: &AprRequest) -> Result<AprResult, ApiError> {
    client.post_json(APR_CALCULATOR_PATH, request).await
}
