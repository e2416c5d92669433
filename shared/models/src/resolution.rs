use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A candidate title returned by the search service, paired with its
/// similarity score against the queried term (0-100).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Candidate {
    pub title: String,
    pub score: f64,
}

/// Classification of a single input term after title search
/// This is what flows from resolver → pipeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ResolutionOutcome {
    /// A returned title is identical to the term after normalization
    Exact { title: String },
    /// Best candidate met the similarity threshold but is not identical
    Similar { title: String, score: f64 },
    /// No returned title qualified
    NotFound,
}

impl ResolutionOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionOutcome::Exact { .. } => "exact",
            ResolutionOutcome::Similar { .. } => "similar",
            ResolutionOutcome::NotFound => "not_found",
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, ResolutionOutcome::Exact { .. })
    }
}

/// Property graph describing a resolved entity in the knowledge base.
///
/// Keys are RDF property URIs; values are everything the store returned
/// for that property, in first-seen order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OntologyRecord {
    #[serde(flatten)]
    pub properties: IndexMap<String, Vec<String>>,
}

impl OntologyRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value under a property URI, grouping repeated properties
    pub fn insert(&mut self, property: String, value: String) {
        self.properties.entry(property).or_default().push(value);
    }

    /// Number of distinct properties
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// Number of property/value pairs across all properties
    pub fn triple_count(&self) -> usize {
        self.properties.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// End-of-run counters reported to the operator
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub exact: usize,
    pub similar: usize,
    pub not_found: usize,
}

impl RunSummary {
    /// Share of terms with an exact, enriched match, as a percentage.
    /// An empty run reports 0 rather than dividing by zero.
    pub fn percent_found(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.exact as f64 / self.total as f64 * 100.0
        }
    }
}
