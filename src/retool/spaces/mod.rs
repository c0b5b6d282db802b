//! Spaces module - list spaces of the organization

mod api;
mod models;

pub use models::Space;
