use estate_types::{FeedReport, FeedSection, Listing};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// The three home feed slices after a load, plus how each one ended.
#[derive(Debug, Clone, Default)]
pub struct FeedSnapshot {
    pub offers: Vec<Listing>,
    pub rentals: Vec<Listing>,
    pub sales: Vec<Listing>,
    pub report: FeedReport,
}

impl FeedSnapshot {
    pub fn section(&self, section: FeedSection) -> &[Listing] {
        match section {
            FeedSection::Offers => &self.offers,
            FeedSection::Rentals => &self.rentals,
            FeedSection::Sales => &self.sales,
        }
    }

    pub(crate) fn section_mut(&mut self, section: FeedSection) -> &mut Vec<Listing> {
        match section {
            FeedSection::Offers => &mut self.offers,
            FeedSection::Rentals => &mut self.rentals,
            FeedSection::Sales => &mut self.sales,
        }
    }
}
