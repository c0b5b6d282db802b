//! Space API operations

use crate::config::api;
use crate::error::Result;
use crate::retool::traits::ApiListResponse;
use crate::retool::RetoolClient;

use super::models::Space;

impl RetoolClient {
    /// Get all spaces
    pub async fn get_spaces(&self) -> Result<Vec<Space>> {
        let path = format!("/{}", api::SPACES);
        self.fetch_all_pages::<Space, ApiListResponse<Space>>(&path, "spaces")
            .await
    }
}
