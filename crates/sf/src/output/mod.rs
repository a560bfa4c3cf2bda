//! Output formatting utilities for the sf CLI.
//!
//! This module provides functions for formatting results as tables or JSON.
//! It is organized into submodules:
//!
//! - [`exprs`] - Filter expression output (check, terms)
//! - [`posts`] - Post output (scan)
//! - [`helpers`] - Common formatting utilities (truncation, whitespace)

mod exprs;
pub mod helpers;
mod posts;

// Re-export all public functions from submodules

// Expressions
pub use exprs::{format_check_json, format_check_table, format_terms_json, format_terms_table};

// Posts
pub use posts::{format_posts_json, format_posts_table};
