//! Groups module - list permission groups

mod api;
mod models;

pub use models::Group;
