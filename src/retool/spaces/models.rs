//! Space data models

use serde::{Deserialize, Serialize};

use crate::retool::de::string_or_number;

/// Space data from Retool API
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Space {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    pub domain: String,
}
