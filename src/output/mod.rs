//! Output formatting module
//!
//! Handles tabular listing of discovered resources

mod table;

pub use self::table::{output_resources, ResourceRow};
