//! Folder data models

use serde::{Deserialize, Serialize};

use crate::retool::de::{opt_string_or_number, string_or_number};

/// Folder data from Retool API
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    pub folder_type: String,
    #[serde(default)]
    pub is_system_folder: bool,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub parent_folder_id: Option<String>,
}

impl Folder {
    /// Whether the folder sits at the top of its folder type's tree
    pub fn is_parentless(&self) -> bool {
        self.parent_folder_id.is_none()
    }
}
