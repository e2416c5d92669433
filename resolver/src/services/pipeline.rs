use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{info, warn};

use termlink_models::resolution::{OntologyRecord, ResolutionOutcome, RunSummary};

use crate::services::ontology_client::OntologyStore;
use crate::services::term_resolver::TermResolver;

/// Per-run accumulator for the three output categories.
///
/// `record` is the single mutation point enforcing the classification
/// contract, so it can be unit tested without any network calls.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Ontology data keyed by original term, in input order
    pub results: IndexMap<String, OntologyRecord>,
    /// Formatted "<term> -> <title> (similarity: <score>%)" lines
    pub similar_terms: Vec<String>,
    /// Terms with no acceptable match
    pub not_found_terms: Vec<String>,
    found_count: usize,
    total_terms: usize,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        term: &str,
        outcome: ResolutionOutcome,
        ontology: Option<OntologyRecord>,
    ) {
        self.total_terms += 1;

        match outcome {
            ResolutionOutcome::Exact { title } => match ontology {
                Some(record) => {
                    self.results.insert(term.to_string(), record);
                    self.found_count += 1;
                }
                None => {
                    // Exact title but no ontology: route to not-found
                    // instead of dropping the term from every artifact.
                    warn!("⚠️ No ontology for exact match '{}' -> '{}'", term, title);
                    self.not_found_terms.push(term.to_string());
                }
            },
            ResolutionOutcome::Similar { title, score } => {
                self.similar_terms.push(format!(
                    "{} -> {} (similarity: {:.2}%)",
                    term, title, score
                ));
            }
            ResolutionOutcome::NotFound => {
                self.not_found_terms.push(term.to_string());
            }
        }
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            total: self.total_terms,
            exact: self.found_count,
            similar: self.similar_terms.len(),
            not_found: self.not_found_terms.len(),
        }
    }
}

/// Sequential batch loop: one term at a time, in input order, with up
/// to two awaited round-trips per term. Per-term failures never abort
/// the run.
pub struct BatchPipeline {
    resolver: TermResolver,
    ontology: Arc<dyn OntologyStore>,
}

impl BatchPipeline {
    pub fn new(resolver: TermResolver, ontology: Arc<dyn OntologyStore>) -> Self {
        Self { resolver, ontology }
    }

    pub async fn run(&self, terms: &[String]) -> RunReport {
        let mut report = RunReport::new();

        for term in terms {
            info!("🔍 Searching for term: {}", term);

            let outcome = match self.resolver.resolve(term).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    warn!("⚠️ Search failed for '{}': {}", term, e);
                    report.record(term, ResolutionOutcome::NotFound, None);
                    continue;
                }
            };

            let ontology = match &outcome {
                ResolutionOutcome::Exact { title } => {
                    match self.ontology.fetch_ontology(title).await {
                        Ok(record) => {
                            info!(
                                "✅ Ontology loaded for {} ({} properties)",
                                term,
                                record.property_count()
                            );
                            Some(record)
                        }
                        Err(e) => {
                            warn!("⚠️ Error loading ontology for {}: {}", term, e);
                            None
                        }
                    }
                }
                _ => None,
            };

            report.record(term, outcome, ontology);
        }

        report
    }
}
