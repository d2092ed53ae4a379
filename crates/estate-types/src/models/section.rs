//! The three result sections of the home feed.

use super::{ListingQuery, ListingType};
use serde::{Deserialize, Serialize};

/// Number of listings fetched per section.
pub const FEED_LIMIT: u32 = 4;

/// A category of listings shown on the home page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FeedSection {
    Offers,
    Rentals,
    Sales,
}

impl FeedSection {
    /// All sections in display (and sequential fetch) order.
    pub const ALL: [FeedSection; 3] = [FeedSection::Offers, FeedSection::Rentals, FeedSection::Sales];

    /// Position in [`FeedSection::ALL`].
    pub fn index(&self) -> usize {
        match self {
            FeedSection::Offers => 0,
            FeedSection::Rentals => 1,
            FeedSection::Sales => 2,
        }
    }

    /// Query that fills this section.
    pub fn query(&self, limit: u32) -> ListingQuery {
        let query = match self {
            FeedSection::Offers => ListingQuery::offers(),
            FeedSection::Rentals => ListingQuery::of_type(ListingType::Rent),
            FeedSection::Sales => ListingQuery::of_type(ListingType::Sale),
        };
        query.with_limit(limit)
    }

    /// Search page link behind the section's "see more" entry.
    pub fn search_href(&self) -> &'static str {
        match self {
            FeedSection::Offers => "/search?offer=true",
            FeedSection::Rentals => "/search?type=rent",
            FeedSection::Sales => "/search?type=sale",
        }
    }
}

impl std::fmt::Display for FeedSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FeedSection::Offers => "offers",
            FeedSection::Rentals => "rentals",
            FeedSection::Sales => "sales",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_queries() {
        let rendered: Vec<String> =
            FeedSection::ALL.iter().map(|s| s.query(FEED_LIMIT).to_query_string()).collect();
        assert_eq!(rendered, vec!["offer=true&limit=4", "type=rent&limit=4", "type=sale&limit=4"]);
    }

    #[test]
    fn test_index_matches_order() {
        for (i, section) in FeedSection::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
        }
    }
}
