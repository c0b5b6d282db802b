//! Source control API operations

use crate::config::api;
use crate::error::Result;
use crate::retool::RetoolClient;

use super::models::{SourceControlConfig, SourceControlConfigWire, SourceControlSettings};

impl RetoolClient {
    /// Get the source control configuration, `None` when it is not set up
    pub async fn get_source_control_config(&self) -> Result<Option<SourceControlConfig>> {
        let path = format!("/{}", api::SOURCE_CONTROL_CONFIG);
        let wire: Option<SourceControlConfigWire> = self
            .fetch_object(&path, "source control configuration")
            .await?;
        wire.map(SourceControlConfig::try_from).transpose()
    }

    /// Get the source control settings, `None` when they are not available
    pub async fn get_source_control_settings(&self) -> Result<Option<SourceControlSettings>> {
        let path = format!("/{}", api::SOURCE_CONTROL_SETTINGS);
        self.fetch_object(&path, "source control settings").await
    }
}
