//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `ContentRow` / `ContentTag`: the rows a crawl produces
//! - `CrawlState`: the pagination loop's working state
//! - `StopReason`: why the loop ended

mod crawl_state;
mod row;

// Re-export main types
pub use crawl_state::{CrawlState, StopReason};
pub use row::{ContentRow, ContentTag};
