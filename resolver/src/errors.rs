use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolverError {
    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("Search failed: {0}")]
    SearchFailed(String),

    #[error("Ontology unavailable for '{title}': {status}")]
    OntologyUnavailable { title: String, status: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<reqwest::Error> for ResolverError {
    fn from(err: reqwest::Error) -> Self {
        ResolverError::HttpError(err.to_string())
    }
}

impl From<std::io::Error> for ResolverError {
    fn from(err: std::io::Error) -> Self {
        ResolverError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for ResolverError {
    fn from(err: serde_json::Error) -> Self {
        ResolverError::SerializationError(err.to_string())
    }
}
