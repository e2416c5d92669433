use std::sync::Arc;

use termlink_models::resolution::{Candidate, ResolutionOutcome};

use crate::errors::ResolverError;
use crate::services::matching::{similarity, terms_are_identical, SIMILARITY_THRESHOLD};
use crate::services::wikipedia_client::TitleSearch;

/// Resolves a free-text term to a title via the search collaborator,
/// then classifies the outcome as exact, similar, or not found.
pub struct TermResolver {
    search: Arc<dyn TitleSearch>,
}

impl TermResolver {
    pub fn new(search: Arc<dyn TitleSearch>) -> Self {
        Self { search }
    }

    pub async fn resolve(&self, term: &str) -> Result<ResolutionOutcome, ResolverError> {
        let titles = self.search.search_titles(term).await?;
        Ok(Self::classify(term, &titles))
    }

    /// Classify a term against an ordered candidate list.
    ///
    /// The first title identical to the term after normalization wins
    /// immediately; otherwise the single highest-scoring candidate is
    /// tracked with strict `>`, so the earliest candidate wins ties.
    pub fn classify(term: &str, titles: &[String]) -> ResolutionOutcome {
        let mut best: Option<Candidate> = None;

        for title in titles {
            if terms_are_identical(term, title) {
                return ResolutionOutcome::Exact {
                    title: title.clone(),
                };
            }

            let score = similarity(term, title);
            if best.as_ref().map_or(true, |b| score > b.score) {
                best = Some(Candidate {
                    title: title.clone(),
                    score,
                });
            }
        }

        match best {
            Some(candidate) if candidate.score >= SIMILARITY_THRESHOLD => {
                ResolutionOutcome::Similar {
                    title: candidate.title,
                    score: candidate.score,
                }
            }
            _ => ResolutionOutcome::NotFound,
        }
    }
}
