//! Activity log (read only).

use super::client::ApiClient;
use super::error::ApiError;
use super::types::Movement;

const COLLECTION: &str = "/movements/";

/// # Errors
///
/// Propagates the classified request failure.
pub async fn list(api: &ApiClient, token: &str) -> Result<Vec<Movement>, ApiError> {
    api.get(COLLECTION, Some(token))
        .await
        .inspect_err(|e| log::warn!("list movements failed: {e}"))
}
