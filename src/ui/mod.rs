//! UI utilities for terminal output
//!
//! This module provides user interface components like progress spinners
//! and confirmation prompts.

mod confirm;
mod spinner;

pub use confirm::{confirm_overwrite, existing_files};
pub use spinner::{clear_spinner, create_spinner, finish_spinner};
