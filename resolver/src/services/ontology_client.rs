use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error};

use termlink_models::resolution::OntologyRecord;

use crate::errors::ResolverError;
use crate::services::matching::normalize_term;

const USER_AGENT: &str = "TermLink/0.1 (term resolution batch pipeline)";
const RESOURCE_PREFIX: &str = "http://dbpedia.org/resource/";
const TRIPLE_LIMIT: usize = 50;

/// Knowledge-base collaborator: resolved title in, property graph out.
#[async_trait]
pub trait OntologyStore: Send + Sync {
    async fn fetch_ontology(&self, title: &str) -> Result<OntologyRecord, ResolverError>;
}

/// Client for the DBpedia SPARQL endpoint
#[derive(Clone)]
pub struct DbpediaClient {
    base_url: String,
    client: Client,
}

impl DbpediaClient {
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
struct SparqlEnvelope {
    #[serde(default)]
    results: SparqlResults,
}

#[derive(Debug, Default, Deserialize)]
struct SparqlResults {
    #[serde(default)]
    bindings: Vec<SparqlBinding>,
}

#[derive(Debug, Deserialize)]
struct SparqlBinding {
    property: SparqlTerm,
    value: SparqlTerm,
}

#[derive(Debug, Deserialize)]
struct SparqlTerm {
    value: String,
}

#[async_trait]
impl OntologyStore for DbpediaClient {
    async fn fetch_ontology(&self, title: &str) -> Result<OntologyRecord, ResolverError> {
        let resource = normalize_term(title);
        let sparql_query = format!(
            "SELECT ?property ?value WHERE {{ <{}{}> ?property ?value }} LIMIT {}",
            RESOURCE_PREFIX, resource, TRIPLE_LIMIT
        );

        let url = format!("{}/sparql", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("query", sparql_query.as_str()),
                ("format", "application/sparql-results+json"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            error!("❌ SPARQL endpoint error {} for '{}'", status, title);
            return Err(ResolverError::OntologyUnavailable {
                title: title.to_string(),
                status: status.to_string(),
            });
        }

        let envelope: SparqlEnvelope = response.json().await?;

        let mut record = OntologyRecord::new();
        for binding in envelope.results.bindings {
            record.insert(binding.property.value, binding.value.value);
        }

        debug!(
            "📚 {} triples across {} properties for '{}'",
            record.triple_count(),
            record.property_count(),
            title
        );
        Ok(record)
    }
}
