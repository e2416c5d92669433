use std::env;
use std::time::Duration;

/// Process-wide configuration for a batch run.
///
/// Endpoints and paths are injected into the clients at construction time
/// so tests can point them at local doubles.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub wikipedia_api_url: String,
    pub dbpedia_sparql_url: String,
    pub request_timeout: Duration,
    pub terms_file: String,
    pub results_file: String,
    pub similar_terms_file: String,
    pub not_found_file: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            wikipedia_api_url: env::var("WIKIPEDIA_API_URL")
                .unwrap_or_else(|_| "https://en.wikipedia.org".to_string()),
            dbpedia_sparql_url: env::var("DBPEDIA_SPARQL_URL")
                .unwrap_or_else(|_| "https://dbpedia.org".to_string()),
            request_timeout: Duration::from_secs(
                env::var("REQUEST_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(30),
            ),
            terms_file: env::var("TERMS_FILE").unwrap_or_else(|_| "terms.txt".to_string()),
            results_file: env::var("RESULTS_FILE")
                .unwrap_or_else(|_| "ontology_results.json".to_string()),
            similar_terms_file: env::var("SIMILAR_TERMS_FILE")
                .unwrap_or_else(|_| "similar_terms.txt".to_string()),
            not_found_file: env::var("NOT_FOUND_FILE")
                .unwrap_or_else(|_| "not_found_terms.txt".to_string()),
        }
    }
}
