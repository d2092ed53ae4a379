#![doc = include_str!("../README.md")]

mod client;
mod error;
mod types;

pub use client::EstateClient;
pub use error::ClientError;
pub use estate_types::{FeedError, FeedReport, FetchStrategy, Listing, ListingQuery, ListingType};
pub use types::*;
