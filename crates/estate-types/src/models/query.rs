//! Query parameters for the listing search endpoint.

use super::ListingType;
use serde::{Deserialize, Serialize};

/// Listing search endpoint, relative to the API base (`/api`).
pub const LISTINGS_ENDPOINT: &str = "/listing/get";

/// Filters understood by `GET /api/listing/get`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ListingQuery {
    pub offer: Option<bool>,
    pub listing_type: Option<ListingType>,
    pub limit: Option<u32>,
}

impl ListingQuery {
    /// Promoted offers of any type.
    pub fn offers() -> Self {
        Self { offer: Some(true), ..Default::default() }
    }

    pub fn of_type(listing_type: ListingType) -> Self {
        Self { listing_type: Some(listing_type), ..Default::default() }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Render as a URL query string, parameters in `offer`, `type`, `limit` order.
    pub fn to_query_string(&self) -> String {
        let mut params = Vec::with_capacity(3);
        if let Some(offer) = self.offer {
            params.push(format!("offer={}", offer));
        }
        if let Some(listing_type) = self.listing_type {
            params.push(format!("type={}", listing_type.as_str()));
        }
        if let Some(limit) = self.limit {
            params.push(format!("limit={}", limit));
        }
        params.join("&")
    }

    /// Endpoint path with the query string attached.
    pub fn endpoint(&self) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            LISTINGS_ENDPOINT.to_string()
        } else {
            format!("{}?{}", LISTINGS_ENDPOINT, query)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offer_query() {
        let query = ListingQuery::offers().with_limit(4);
        assert_eq!(query.to_query_string(), "offer=true&limit=4");
        assert_eq!(query.endpoint(), "/listing/get?offer=true&limit=4");
    }

    #[test]
    fn test_type_queries() {
        assert_eq!(
            ListingQuery::of_type(ListingType::Rent).with_limit(4).to_query_string(),
            "type=rent&limit=4"
        );
        assert_eq!(
            ListingQuery::of_type(ListingType::Sale).with_limit(4).to_query_string(),
            "type=sale&limit=4"
        );
    }

    #[test]
    fn test_empty_query() {
        assert_eq!(ListingQuery::default().endpoint(), LISTINGS_ENDPOINT);
    }
}
