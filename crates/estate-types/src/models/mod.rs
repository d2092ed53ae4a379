//! Core domain models for the listings feed.

mod listing;
mod query;
mod section;

pub use listing::{Listing, ListingType};
pub use query::{ListingQuery, LISTINGS_ENDPOINT};
pub use section::{FeedSection, FEED_LIMIT};
