//! Folders module - list folders of every folder type

mod api;
mod models;

pub use models::Folder;
