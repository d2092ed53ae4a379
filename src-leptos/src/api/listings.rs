//! Listing search calls

use super::api_get;
use async_trait::async_trait;
use estate_types::{FeedError, Listing, ListingQuery, ListingSource};

pub async fn get_listings(query: &ListingQuery) -> Result<Vec<Listing>, FeedError> {
    api_get(&query.endpoint()).await
}

/// Feed source backed by the browser `fetch` API.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserListingSource;

#[async_trait(?Send)]
impl ListingSource for BrowserListingSource {
    async fn fetch_listings(&self, query: &ListingQuery) -> Result<Vec<Listing>, FeedError> {
        get_listings(query).await
    }
}
