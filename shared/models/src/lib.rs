pub mod resolution;

pub use resolution::{Candidate, OntologyRecord, ResolutionOutcome, RunSummary};
