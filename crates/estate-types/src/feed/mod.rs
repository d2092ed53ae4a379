//! Home feed loading.
//!
//! The feed is three read-only queries (offers, rentals, sales). Each result
//! replaces its own slice of view state wholesale; nothing is shared between
//! slices. How the reads are scheduled is a [`FetchStrategy`]:
//!
//! - `Sequential` runs offers, then rentals, then sales, and stops at the
//!   first failure so later sections are never requested.
//! - `Concurrent` starts all three at once and applies each result as soon
//!   as it lands. One failure only affects its own slice.
//!
//! The loader does no I/O itself. Callers plug in a [`ListingSource`]
//! (browser `fetch`, `reqwest`, or a scripted source in tests) and an apply
//! callback that writes into their view state.

use crate::error::{FeedError, Result};
use crate::models::{FeedSection, Listing, ListingQuery, FEED_LIMIT};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Anything that can answer a listing query.
///
/// Futures are not required to be `Send`: the browser source holds JS values
/// across await points.
#[async_trait(?Send)]
pub trait ListingSource {
    async fn fetch_listings(&self, query: &ListingQuery) -> Result<Vec<Listing>>;
}

/// Scheduling of the three feed reads.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FetchStrategy {
    /// offers → rentals → sales, each started only after the previous succeeded
    #[default]
    Sequential,
    /// all three in flight at once
    Concurrent,
}

/// Lifecycle of one slice: `NotFetched → Fetching → Fetched | Failed`.
#[derive(Debug, Clone, PartialEq)]
pub enum SliceStatus {
    NotFetched,
    Fetching,
    Fetched { count: usize },
    Failed(FeedError),
}

impl SliceStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Change delivered to the caller's view state for one section.
#[derive(Debug, Clone, PartialEq)]
pub enum SliceUpdate {
    Fetching,
    Fetched(Vec<Listing>),
    Failed(FeedError),
}

/// Final status of every section after a load.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedReport {
    statuses: [SliceStatus; 3],
}

impl Default for FeedReport {
    fn default() -> Self {
        Self {
            statuses: [SliceStatus::NotFetched, SliceStatus::NotFetched, SliceStatus::NotFetched],
        }
    }
}

impl FeedReport {
    pub fn status(&self, section: FeedSection) -> &SliceStatus {
        &self.statuses[section.index()]
    }

    /// Whether a request was issued for the section.
    pub fn attempted(&self, section: FeedSection) -> bool {
        self.status(section) != &SliceStatus::NotFetched
    }

    pub fn failures(&self) -> impl Iterator<Item = (FeedSection, &FeedError)> + '_ {
        FeedSection::ALL.into_iter().filter_map(move |section| match self.status(section) {
            SliceStatus::Failed(err) => Some((section, err)),
            _ => None,
        })
    }

    fn record(&mut self, section: FeedSection, status: SliceStatus) {
        self.statuses[section.index()] = status;
    }
}

/// Loads the three home feed sections from a [`ListingSource`].
pub struct FeedLoader<'a, S: ListingSource + ?Sized> {
    source: &'a S,
    limit: u32,
    strategy: FetchStrategy,
}

impl<'a, S: ListingSource + ?Sized> FeedLoader<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source, limit: FEED_LIMIT, strategy: FetchStrategy::default() }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_strategy(mut self, strategy: FetchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn strategy(&self) -> FetchStrategy {
        self.strategy
    }

    /// Run every read, handing each slice change to `apply` as it happens.
    pub async fn run<F>(&self, apply: F) -> FeedReport
    where
        F: Fn(FeedSection, SliceUpdate),
    {
        let mut report = FeedReport::default();

        match self.strategy {
            FetchStrategy::Sequential => {
                for section in FeedSection::ALL {
                    let status = self.load_section(section, &apply).await;
                    let failed = status.is_failed();
                    report.record(section, status);
                    if failed {
                        break;
                    }
                }
            },
            FetchStrategy::Concurrent => {
                let (offers, rentals, sales) = futures::join!(
                    self.load_section(FeedSection::Offers, &apply),
                    self.load_section(FeedSection::Rentals, &apply),
                    self.load_section(FeedSection::Sales, &apply),
                );
                report.record(FeedSection::Offers, offers);
                report.record(FeedSection::Rentals, rentals);
                report.record(FeedSection::Sales, sales);
            },
        }

        report
    }

    async fn load_section<F>(&self, section: FeedSection, apply: &F) -> SliceStatus
    where
        F: Fn(FeedSection, SliceUpdate),
    {
        apply(section, SliceUpdate::Fetching);
        match self.source.fetch_listings(&section.query(self.limit)).await {
            Ok(listings) => {
                let count = listings.len();
                apply(section, SliceUpdate::Fetched(listings));
                SliceStatus::Fetched { count }
            },
            Err(err) => {
                apply(section, SliceUpdate::Failed(err.clone()));
                SliceStatus::Failed(err)
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::ListingType;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::collections::HashMap;

    fn listing(id: &str, image: &str) -> Listing {
        Listing::new(id, vec![image.to_string()])
    }

    /// Answers from a fixed table and records every query it sees.
    #[derive(Default)]
    struct ScriptedSource {
        responses: HashMap<FeedSection, Result<Vec<Listing>>>,
        calls: RefCell<Vec<ListingQuery>>,
    }

    impl ScriptedSource {
        fn respond(mut self, section: FeedSection, response: Result<Vec<Listing>>) -> Self {
            self.responses.insert(section, response);
            self
        }

        fn requested(&self) -> Vec<String> {
            self.calls.borrow().iter().map(|q| q.to_query_string()).collect()
        }
    }

    #[async_trait(?Send)]
    impl ListingSource for ScriptedSource {
        async fn fetch_listings(&self, query: &ListingQuery) -> Result<Vec<Listing>> {
            self.calls.borrow_mut().push(*query);
            let section = match (query.offer, query.listing_type) {
                (Some(true), _) => FeedSection::Offers,
                (_, Some(ListingType::Rent)) => FeedSection::Rentals,
                _ => FeedSection::Sales,
            };
            self.responses.get(&section).cloned().unwrap_or_else(|| Ok(Vec::new()))
        }
    }

    /// Collects the resulting slices the way a view would.
    #[derive(Default)]
    struct Slices {
        listings: RefCell<HashMap<FeedSection, Vec<Listing>>>,
        log: RefCell<Vec<(FeedSection, &'static str)>>,
    }

    impl Slices {
        fn apply(&self, section: FeedSection, update: SliceUpdate) {
            let tag = match update {
                SliceUpdate::Fetching => "fetching",
                SliceUpdate::Fetched(listings) => {
                    self.listings.borrow_mut().insert(section, listings);
                    "fetched"
                },
                SliceUpdate::Failed(_) => "failed",
            };
            self.log.borrow_mut().push((section, tag));
        }

        fn ids(&self, section: FeedSection) -> Vec<String> {
            self.listings
                .borrow()
                .get(&section)
                .map(|l| l.iter().map(|x| x.id.clone()).collect())
                .unwrap_or_default()
        }
    }

    fn run(source: &ScriptedSource, strategy: FetchStrategy, slices: &Slices) -> FeedReport {
        let loader = FeedLoader::new(source).with_strategy(strategy);
        block_on(loader.run(|section, update| slices.apply(section, update)))
    }

    #[test]
    fn test_sequential_requests_in_order() {
        let source = ScriptedSource::default()
            .respond(FeedSection::Offers, Ok(vec![listing("a", "x.jpg")]))
            .respond(FeedSection::Rentals, Ok(vec![listing("r", "r.jpg")]))
            .respond(FeedSection::Sales, Ok(vec![listing("b", "y.jpg")]));
        let slices = Slices::default();

        let report = run(&source, FetchStrategy::Sequential, &slices);

        assert_eq!(
            source.requested(),
            vec!["offer=true&limit=4", "type=rent&limit=4", "type=sale&limit=4"]
        );
        assert_eq!(report.status(FeedSection::Sales), &SliceStatus::Fetched { count: 1 });
        assert_eq!(report.failures().count(), 0);
    }

    #[test]
    fn test_sequential_offers_failure_skips_the_rest() {
        let source = ScriptedSource::default()
            .respond(FeedSection::Offers, Err(FeedError::network("offline")));
        let slices = Slices::default();

        let report = run(&source, FetchStrategy::Sequential, &slices);

        assert_eq!(source.requested(), vec!["offer=true&limit=4"]);
        assert!(report.status(FeedSection::Offers).is_failed());
        assert!(!report.attempted(FeedSection::Rentals));
        assert!(!report.attempted(FeedSection::Sales));
        assert!(slices.listings.borrow().is_empty());
    }

    #[test]
    fn test_sequential_rentals_failure_keeps_offers() {
        let source = ScriptedSource::default()
            .respond(FeedSection::Offers, Ok(vec![listing("a", "x.jpg"), listing("c", "z.jpg")]))
            .respond(FeedSection::Rentals, Err(FeedError::Http { status: 500 }));
        let slices = Slices::default();

        let report = run(&source, FetchStrategy::Sequential, &slices);

        assert_eq!(slices.ids(FeedSection::Offers), vec!["a", "c"]);
        assert_eq!(source.requested().len(), 2);
        assert!(!report.attempted(FeedSection::Sales));
        let failures: Vec<_> = report.failures().map(|(s, _)| s).collect();
        assert_eq!(failures, vec![FeedSection::Rentals]);
    }

    #[test]
    fn test_concurrent_failure_is_isolated() {
        let source = ScriptedSource::default()
            .respond(FeedSection::Offers, Ok(vec![listing("a", "x.jpg")]))
            .respond(FeedSection::Rentals, Err(FeedError::decode("expected array")))
            .respond(FeedSection::Sales, Ok(vec![listing("b", "y.jpg")]));
        let slices = Slices::default();

        let report = run(&source, FetchStrategy::Concurrent, &slices);

        assert_eq!(source.requested().len(), 3);
        assert_eq!(slices.ids(FeedSection::Offers), vec!["a"]);
        assert_eq!(slices.ids(FeedSection::Sales), vec!["b"]);
        assert!(report.status(FeedSection::Rentals).is_failed());
    }

    #[test]
    fn test_results_keep_response_order() {
        let offers: Vec<Listing> =
            ["d", "a", "c", "b"].iter().map(|id| listing(id, "x.jpg")).collect();
        let source = ScriptedSource::default().respond(FeedSection::Offers, Ok(offers.clone()));
        let slices = Slices::default();

        run(&source, FetchStrategy::Concurrent, &slices);

        assert_eq!(slices.listings.borrow()[&FeedSection::Offers], offers);
    }

    #[test]
    fn test_empty_sections_are_fetched_not_failed() {
        let source = ScriptedSource::default();
        let slices = Slices::default();

        let report = run(&source, FetchStrategy::Sequential, &slices);

        for section in FeedSection::ALL {
            assert_eq!(report.status(section), &SliceStatus::Fetched { count: 0 });
        }
    }

    #[test]
    fn test_default_strategy_chains_reads() {
        let source = ScriptedSource::default()
            .respond(FeedSection::Offers, Err(FeedError::network("offline")));

        let loader = FeedLoader::new(&source);
        assert_eq!(loader.strategy(), FetchStrategy::Sequential);
        let report = block_on(loader.run(|_, _| {}));

        assert_eq!(source.requested(), vec!["offer=true&limit=4"]);
        assert!(!report.attempted(FeedSection::Rentals));
        assert!(!report.attempted(FeedSection::Sales));
    }

    #[test]
    fn test_custom_limit() {
        let source = ScriptedSource::default();
        let loader = FeedLoader::new(&source).with_limit(8);
        block_on(loader.run(|_, _| {}));
        assert!(source.requested().iter().all(|q| q.ends_with("limit=8")));
    }

    /// Offers only resolve once sales has been requested.
    struct GatedSource {
        gate: RefCell<Option<oneshot::Receiver<()>>>,
        opener: RefCell<Option<oneshot::Sender<()>>>,
    }

    #[async_trait(?Send)]
    impl ListingSource for GatedSource {
        async fn fetch_listings(&self, query: &ListingQuery) -> Result<Vec<Listing>> {
            if query.offer == Some(true) {
                let gate = self.gate.borrow_mut().take();
                if let Some(gate) = gate {
                    gate.await.map_err(|e| FeedError::network(e.to_string()))?;
                }
                return Ok(vec![listing("a", "x.jpg")]);
            }
            if query.listing_type == Some(ListingType::Sale) {
                if let Some(opener) = self.opener.borrow_mut().take() {
                    let _ = opener.send(());
                }
            }
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_concurrent_reads_do_not_wait_on_each_other() {
        let (tx, rx) = oneshot::channel();
        let source = GatedSource { gate: RefCell::new(Some(rx)), opener: RefCell::new(Some(tx)) };
        let slices = Slices::default();

        let loader = FeedLoader::new(&source).with_strategy(FetchStrategy::Concurrent);
        let report = block_on(loader.run(|section, update| slices.apply(section, update)));

        assert_eq!(report.status(FeedSection::Offers), &SliceStatus::Fetched { count: 1 });
        let fetched: Vec<FeedSection> = slices
            .log
            .borrow()
            .iter()
            .filter(|(_, tag)| *tag == "fetched")
            .map(|(section, _)| *section)
            .collect();
        assert_eq!(fetched.last(), Some(&FeedSection::Offers));
    }
}
