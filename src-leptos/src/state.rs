//! Home feed view state

use estate_types::{FeedSection, Listing, SliceUpdate};
use leptos::prelude::*;

/// The three listing slices shown on the home page.
///
/// Each slice starts empty and is replaced wholesale when its read resolves.
#[derive(Clone, Copy)]
pub struct FeedState {
    pub offers: RwSignal<Vec<Listing>>,
    pub rentals: RwSignal<Vec<Listing>>,
    pub sales: RwSignal<Vec<Listing>>,
}

impl FeedState {
    pub fn new() -> Self {
        Self {
            offers: RwSignal::new(vec![]),
            rentals: RwSignal::new(vec![]),
            sales: RwSignal::new(vec![]),
        }
    }

    pub fn slice(&self, section: FeedSection) -> RwSignal<Vec<Listing>> {
        match section {
            FeedSection::Offers => self.offers,
            FeedSection::Rentals => self.rentals,
            FeedSection::Sales => self.sales,
        }
    }

    /// Apply a loader update. Failures are logged only; results arriving
    /// after the page was unmounted are dropped.
    pub fn apply(&self, section: FeedSection, update: SliceUpdate) {
        match update {
            SliceUpdate::Fetching => log::debug!("Fetching {} listings", section),
            SliceUpdate::Fetched(listings) => {
                if self.slice(section).try_set(listings).is_some() {
                    log::debug!("Dropped {} listings: feed no longer mounted", section);
                }
            },
            SliceUpdate::Failed(err) => log::error!("Failed to load {} listings: {}", section, err),
        }
    }

    /// A section renders only while its slice is non-empty. Tracks that
    /// slice alone.
    pub fn is_visible(&self, section: FeedSection) -> bool {
        self.slice(section).with(|listings| !listings.is_empty())
    }
}

impl Default for FeedState {
    fn default() -> Self {
        Self::new()
    }
}
