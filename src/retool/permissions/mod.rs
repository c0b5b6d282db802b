//! Permissions module - list the objects a group has access to

mod api;
mod models;

pub use models::{ListObjectsRequest, PermissionEntry, PermissionObjectType, PermissionSubject};
