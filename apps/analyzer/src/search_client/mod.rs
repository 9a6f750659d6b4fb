/// Search Client — Brave web search for an organization's decarbonization goals.
///
/// Failures never reach the caller: transport errors, non-200 statuses and
/// undecodable bodies are logged and turned into an empty result list.
/// Every call ends with a fixed pacing sleep, even on the error path.
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, error};

use crate::models::search::SearchResult;
use crate::pacing::{Sleeper, RATE_LIMIT_BACKOFF, SEARCH_DELAY};

const BRAVE_SEARCH_URL: &str = "https://api.search.brave.com/res/v1/web/search";
pub const RESULT_COUNT: u32 = 5;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Default, Deserialize)]
struct BraveResponse {
    #[serde(default)]
    web: BraveWeb,
}

#[derive(Debug, Default, Deserialize)]
struct BraveWeb {
    #[serde(default)]
    results: Vec<SearchResult>,
}

/// Anything that can turn an organization name into search hits.
#[async_trait]
pub trait WebSearch: Send + Sync {
    async fn search(&self, org_name: &str) -> Vec<SearchResult>;
}

pub fn build_query(org_name: &str) -> String {
    format!("{org_name} decarbonization goals net zero carbon neutral target date")
}

#[derive(Clone)]
pub struct SearchClient {
    client: Client,
    api_key: String,
    endpoint: String,
    sleeper: Arc<dyn Sleeper>,
}

impl SearchClient {
    pub fn new(api_key: String, sleeper: Arc<dyn Sleeper>) -> Result<Self, SearchError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()?,
            api_key,
            endpoint: BRAVE_SEARCH_URL.to_string(),
            sleeper,
        })
    }

    /// Points the client at a different search endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    async fn send(&self, query: &str) -> Result<reqwest::Response, reqwest::Error> {
        let count = RESULT_COUNT.to_string();
        self.client
            .get(&self.endpoint)
            .header("Accept", "application/json")
            .header("X-Subscription-Token", &self.api_key)
            .query(&[("q", query), ("count", count.as_str())])
            .send()
            .await
    }

    /// One request, plus a single retry after a fixed backoff if the first is rate limited.
    async fn fetch(&self, org_name: &str) -> Result<Vec<SearchResult>, SearchError> {
        let query = build_query(org_name);
        debug!("Searching for organization: {org_name}");
        debug!("Query: {query} (count={RESULT_COUNT})");

        let mut response = self.send(&query).await?;
        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            error!(
                "Rate limit hit for {org_name}. Waiting {}s before retrying...",
                RATE_LIMIT_BACKOFF.as_secs()
            );
            self.sleeper.sleep(RATE_LIMIT_BACKOFF).await;
            response = self.send(&query).await?;
        }

        let status = response.status();
        debug!("Brave API response status for {org_name}: {status}");

        let body = response.text().await?;
        if status != StatusCode::OK {
            return Err(SearchError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: BraveResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Raw response text: {body}");
            SearchError::Parse(e)
        })?;
        debug!("Search results for {org_name}: {:?}", parsed.web.results);

        Ok(parsed.web.results)
    }
}

#[async_trait]
impl WebSearch for SearchClient {
    async fn search(&self, org_name: &str) -> Vec<SearchResult> {
        let results = match self.fetch(org_name).await {
            Ok(results) => results,
            Err(e) => {
                error!("Search failed for {org_name}: {e}");
                Vec::new()
            }
        };

        self.sleeper.sleep(SEARCH_DELAY).await;
        results
    }
}
