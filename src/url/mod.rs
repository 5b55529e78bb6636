//! URL handling module for Page-Trail
//!
//! This module validates seed URLs at the input boundary and resolves
//! anchor `href` values into absolute URLs.

mod resolve;
mod seed;

// Re-export main functions
pub use resolve::{resolve_against_seed, resolve_link};
pub use seed::validate_seed_url;
