use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error};

use crate::errors::ResolverError;

const USER_AGENT: &str = "TermLink/0.1 (term resolution batch pipeline)";

/// Title-search collaborator: free-text query in, ordered candidate
/// titles out. The order is whatever the service returned; it is not
/// guaranteed to be by relevance, so callers must scan the full list.
#[async_trait]
pub trait TitleSearch: Send + Sync {
    async fn search_titles(&self, query: &str) -> Result<Vec<String>, ResolverError>;
}

/// Client for the Wikipedia Action API's `list=search` endpoint
#[derive(Clone)]
pub struct WikipediaClient {
    base_url: String,
    client: Client,
}

impl WikipediaClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        Self {
            base_url,
            client: Client::builder()
                .user_agent(USER_AGENT)
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    query: Option<SearchBody>,
}

#[derive(Debug, Deserialize)]
struct SearchBody {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
}

#[async_trait]
impl TitleSearch for WikipediaClient {
    async fn search_titles(&self, query: &str) -> Result<Vec<String>, ResolverError> {
        let url = format!("{}/w/api.php", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", query),
                ("format", "json"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            error!("❌ Wikipedia search error {} for '{}'", status, query);
            return Err(ResolverError::SearchFailed(format!(
                "{} for '{}'",
                status, query
            )));
        }

        let envelope: SearchEnvelope = response.json().await?;
        let titles: Vec<String> = envelope
            .query
            .map(|body| body.search.into_iter().map(|hit| hit.title).collect())
            .unwrap_or_default();

        debug!("🔎 {} candidate titles for '{}'", titles.len(), query);
        Ok(titles)
    }
}
