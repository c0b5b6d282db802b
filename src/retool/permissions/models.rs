//! Permission data models

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::retool::de::string_or_number;

/// Object types a group can hold permissions on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionObjectType {
    App,
    Folder,
    Resource,
    ResourceConfiguration,
}

impl PermissionObjectType {
    /// Every object type, in the order they are queried
    pub const ALL: [PermissionObjectType; 4] = [
        PermissionObjectType::App,
        PermissionObjectType::Folder,
        PermissionObjectType::Resource,
        PermissionObjectType::ResourceConfiguration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionObjectType::App => "app",
            PermissionObjectType::Folder => "folder",
            PermissionObjectType::Resource => "resource",
            PermissionObjectType::ResourceConfiguration => "resource_configuration",
        }
    }
}

impl fmt::Display for PermissionObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subject of a permissions query
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PermissionSubject {
    #[serde(rename = "type")]
    pub subject_type: &'static str,
    pub id: u64,
}

impl PermissionSubject {
    pub fn group(id: u64) -> Self {
        Self {
            subject_type: "group",
            id,
        }
    }
}

/// Body of `POST /permissions/listObjects`
#[derive(Serialize, Debug, Clone)]
pub struct ListObjectsRequest {
    pub subject: PermissionSubject,
    pub object_type: &'static str,
}

/// One object a group has access to
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PermissionEntry {
    #[serde(rename = "type")]
    pub object_type: String,
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub access_level: String,
}

impl PermissionEntry {
    pub fn is_folder(&self) -> bool {
        self.object_type == PermissionObjectType::Folder.as_str()
    }
}
