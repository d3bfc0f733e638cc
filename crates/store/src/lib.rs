//! Trendboard Record Store
//!
//! Read-only, in-memory storage for trending-video observations.
//!
//! # Overview
//!
//! - **Record Store**: loads the dataset once from a [`RecordSource`]
//! - **Deduplication**: [`first_seen`] / [`last_seen`] per-video projections
//! - **Windows**: [`select_day`] / [`select_range`] over the [`DateDomain`]
//!
//! # Usage
//!
//! ```ignore
//! use trendboard_store::{JsonFileSource, RecordStore, last_seen, select_range};
//!
//! let store = RecordStore::load(&JsonFileSource::new("data/final.jsonl"))?;
//! let week = select_range(&store.table(), store.date_domain(), 0, 6)?;
//! let latest = last_seen(&week);
//! ```

pub mod dedup;
pub mod domain;
pub mod error;
pub mod model;
pub mod source;
pub mod store;
pub mod table;
pub mod test_utils;
pub mod window;

#[cfg(test)]
mod window_test;

pub use dedup::{first_seen, last_seen};
pub use domain::DateDomain;
pub use error::{Result, StoreError};
pub use model::{NO_TAGS, VideoRecord};
pub use source::{JsonFileSource, JsonLayout, MemorySource, RecordSource};
pub use store::RecordStore;
pub use table::Table;
pub use window::{Window, select_day, select_range};
