use crate::error::ClientError;
use crate::types::*;
use async_trait::async_trait;
use estate_types::{
    FeedError, FeedLoader, FetchStrategy, Listing, ListingQuery, ListingSource, SliceUpdate,
};
use reqwest::Client;
use std::cell::RefCell;
use std::time::Duration;

pub struct EstateClient {
    client: Client,
    config: ClientConfig,
}

impl EstateClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    /// Build a client from `ESTATE_API_URL` / `ESTATE_API_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(config_from(|key| std::env::var(key).ok())?)
    }

    /// One read against `GET /api/listing/get`. No retry.
    pub async fn get_listings(&self, query: &ListingQuery) -> Result<Vec<Listing>, FeedError> {
        let url = format!("{}/api{}", self.config.base_url.trim_end_matches('/'), query.endpoint());
        tracing::debug!("GET {}", url);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FeedError::network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FeedError::Http { status: status.as_u16() });
        }

        let body = resp.text().await.map_err(|e| FeedError::network(e.to_string()))?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Load the home feed. Failed sections are logged and left empty.
    ///
    /// The returned future is not `Send`; drive it on a current-thread
    /// runtime or a `LocalSet`.
    pub async fn load_feed(&self, strategy: FetchStrategy) -> FeedSnapshot {
        let snapshot = RefCell::new(FeedSnapshot::default());

        let report = FeedLoader::new(self)
            .with_strategy(strategy)
            .run(|section, update| match update {
                SliceUpdate::Fetching => tracing::debug!("Fetching {} listings", section),
                SliceUpdate::Fetched(listings) => {
                    tracing::debug!("Loaded {} {} listings", listings.len(), section);
                    *snapshot.borrow_mut().section_mut(section) = listings;
                },
                SliceUpdate::Failed(err) => {
                    tracing::warn!("Failed to load {} listings: {}", section, err);
                },
            })
            .await;

        let mut snapshot = snapshot.into_inner();
        snapshot.report = report;
        snapshot
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait(?Send)]
impl ListingSource for EstateClient {
    async fn fetch_listings(&self, query: &ListingQuery) -> Result<Vec<Listing>, FeedError> {
        self.get_listings(query).await
    }
}

fn config_from(lookup: impl Fn(&str) -> Option<String>) -> Result<ClientConfig, ClientError> {
    let mut config = ClientConfig::default();
    if let Some(url) = lookup("ESTATE_API_URL").filter(|u| !u.trim().is_empty()) {
        config.base_url = url.trim().to_string();
    }
    if let Some(raw) = lookup("ESTATE_API_TIMEOUT_SECS") {
        config.timeout_secs = raw.trim().parse().map_err(|_| {
            ClientError::InvalidConfig(format!("ESTATE_API_TIMEOUT_SECS must be seconds, got {:?}", raw))
        })?;
    }
    Ok(config)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = config_from(env(&[])).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_config_overrides() {
        let config = config_from(env(&[
            ("ESTATE_API_URL", "https://estate.example.com/"),
            ("ESTATE_API_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://estate.example.com/");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_config_rejects_bad_timeout() {
        let err = config_from(env(&[("ESTATE_API_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(matches!(err, ClientError::InvalidConfig(_)));
    }
}
