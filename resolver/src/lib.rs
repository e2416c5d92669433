pub mod errors;
pub mod services;

pub use errors::ResolverError;
pub use services::pipeline::{BatchPipeline, RunReport};
pub use services::term_resolver::TermResolver;
