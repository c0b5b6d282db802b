//! Group data models

use serde::{Deserialize, Serialize};

use crate::config::terraform::BUILT_IN_GROUPS;

fn no_access() -> String {
    "none".to_string()
}

/// Group data from Retool API
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: u64,
    pub name: String,
    #[serde(default = "no_access")]
    pub universal_app_access: String,
    #[serde(default = "no_access")]
    pub universal_resource_access: String,
    #[serde(default = "no_access")]
    pub universal_workflow_access: String,
    #[serde(default = "no_access")]
    pub universal_query_library_access: String,
    #[serde(default)]
    pub user_list_access: bool,
    #[serde(default)]
    pub audit_log_access: bool,
    #[serde(default)]
    pub unpublished_release_access: bool,
    #[serde(default)]
    pub usage_analytics_access: bool,
    #[serde(default)]
    pub account_details_access: bool,
    #[serde(default)]
    pub landing_page_app_id: Option<String>,
}

impl Group {
    /// Built-in groups exist in every organization and are not managed
    pub fn is_built_in(&self) -> bool {
        BUILT_IN_GROUPS.contains(&self.name.as_str())
    }
}
