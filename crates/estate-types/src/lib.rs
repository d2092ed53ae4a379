//! # Estate Types
//!
//! Core types, models, and the feed loader for the Estate listings frontend.
//!
//! - **`error`** - Typed errors for listing API reads
//! - **`models`** - Domain models (Listing, ListingQuery, FeedSection)
//! - **`feed`** - The `ListingSource` seam and the home feed loader
//!
//! ## Architecture Role
//!
//! `estate-types` sits at the bottom of the dependency graph and performs no
//! I/O of its own, so it builds for both native targets and `wasm32`:
//!
//! ```text
//!                 estate-types (this crate)
//!                        │
//!           ┌────────────┴────────────┐
//!           ▼                         ▼
//!     estate-client             estate-leptos
//!   (reqwest, native)      (browser fetch, WASM)
//! ```

pub mod error;
pub mod feed;
pub mod models;

pub use error::{FeedError, Result};
pub use feed::{FeedLoader, FeedReport, FetchStrategy, ListingSource, SliceStatus, SliceUpdate};
pub use models::{FeedSection, Listing, ListingQuery, ListingType};
