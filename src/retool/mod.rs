//! Retool API client module
//!
//! This module provides functionality to interact with the Retool public API.

mod client;
mod connection;
pub(crate) mod de;
pub mod folders;
pub mod groups;
pub mod permissions;
pub mod source_control;
pub mod spaces;
pub mod sso;
pub mod traits;

pub use client::RetoolClient;
pub use connection::{normalize_host, ConnectionSettings};
pub use folders::Folder;
pub use groups::Group;
pub use permissions::{PermissionEntry, PermissionObjectType};
pub use source_control::{
    GitHubAuth, SourceControlConfig, SourceControlProvider, SourceControlSettings,
};
pub use spaces::Space;
pub use sso::{SsoConfig, SsoKind};
pub use traits::{ApiListResponse, ApiObjectResponse, PaginatedResponse};
