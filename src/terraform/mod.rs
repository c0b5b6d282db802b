//! Terraform configuration generation
//!
//! Discovery turns the organization's remote state into an ordered list of
//! [`ImportableResource`] records; emission renders that list into an import
//! block file and a resource configuration file.

mod commands;
pub mod emit;
pub mod hcl;
pub mod ident;
pub mod import;
pub mod mapping;
pub mod references;

pub use commands::run_terraform_command;
pub use emit::{render_config, render_imports};
pub use import::{import_retool_config, ImportSnapshot};
pub use references::{References, RootFolders};

use std::fmt;

use crate::retool::{
    Folder, Group, PermissionEntry, SourceControlConfig, SourceControlSettings, Space, SsoConfig,
};

/// Kind of a generated resource, in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResourceKind {
    Folder,
    Group,
    Permissions,
    Space,
    SourceControl,
    SourceControlSettings,
    Sso,
}

impl ResourceKind {
    /// Terraform resource type name
    pub fn terraform_type(&self) -> &'static str {
        match self {
            ResourceKind::Folder => "retool_folder",
            ResourceKind::Group => "retool_group",
            ResourceKind::Permissions => "retool_permissions",
            ResourceKind::Space => "retool_space",
            ResourceKind::SourceControl => "retool_source_control",
            ResourceKind::SourceControlSettings => "retool_source_control_settings",
            ResourceKind::Sso => "retool_sso",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.terraform_type())
    }
}

/// Permission entries of one group, captured at discovery time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupPermissions {
    pub group_id: u64,
    pub entries: Vec<PermissionEntry>,
}

/// Remote data carried by a resource record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourcePayload {
    Folder(Folder),
    Group(Group),
    Permissions(GroupPermissions),
    Space(Space),
    SourceControl(SourceControlConfig),
    SourceControlSettings(SourceControlSettings),
    Sso(SsoConfig),
}

/// One resource to import and configure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportableResource {
    /// Remote identifier, or a fixed synthetic id for singletons
    pub id: String,
    /// Generated Terraform resource name
    pub terraform_id: String,
    pub payload: ResourcePayload,
}

impl ImportableResource {
    pub fn kind(&self) -> ResourceKind {
        match self.payload {
            ResourcePayload::Folder(_) => ResourceKind::Folder,
            ResourcePayload::Group(_) => ResourceKind::Group,
            ResourcePayload::Permissions(_) => ResourceKind::Permissions,
            ResourcePayload::Space(_) => ResourceKind::Space,
            ResourcePayload::SourceControl(_) => ResourceKind::SourceControl,
            ResourcePayload::SourceControlSettings(_) => ResourceKind::SourceControlSettings,
            ResourcePayload::Sso(_) => ResourceKind::Sso,
        }
    }

    /// Resource address, e.g. `retool_group.data_science`
    pub fn address(&self) -> String {
        format!("{}.{}", self.kind().terraform_type(), self.terraform_id)
    }
}
