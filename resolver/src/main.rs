use std::process;
use std::sync::Arc;

use anyhow::Result;
use tracing::{error, info};

use termlink_config::AppConfig;
use termlink_resolver::services::artifacts::{load_terms, write_artifacts};
use termlink_resolver::services::matching::SIMILARITY_THRESHOLD;
use termlink_resolver::services::ontology_client::DbpediaClient;
use termlink_resolver::services::pipeline::BatchPipeline;
use termlink_resolver::services::term_resolver::TermResolver;
use termlink_resolver::services::wikipedia_client::WikipediaClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = AppConfig::from_env();

    info!("🚀 [TermLink Resolver] Starting batch run");
    info!("📡 Wikipedia API: {}", config.wikipedia_api_url);
    info!("🔗 DBpedia SPARQL: {}", config.dbpedia_sparql_url);

    let terms = match load_terms(&config.terms_file) {
        Ok(terms) => terms,
        Err(e) => {
            error!("❌ {}", e);
            process::exit(1);
        }
    };
    info!("📄 Loaded {} terms from {}", terms.len(), config.terms_file);

    let wikipedia = Arc::new(WikipediaClient::new(
        config.wikipedia_api_url.clone(),
        config.request_timeout,
    ));
    let dbpedia = Arc::new(DbpediaClient::new(
        config.dbpedia_sparql_url.clone(),
        config.request_timeout,
    ));
    let pipeline = BatchPipeline::new(TermResolver::new(wikipedia), dbpedia);

    let report = pipeline.run(&terms).await;

    write_artifacts(&report, &config)?;

    let summary = report.summary();
    info!("--- Search Statistics ---");
    info!("📊 Total terms: {}", summary.total);
    info!("✅ Found terms (exact match): {}", summary.exact);
    info!("🔁 Similar terms ({}%+): {}", SIMILARITY_THRESHOLD, summary.similar);
    info!("❓ Not found terms: {}", summary.not_found);
    info!("📈 Percentage found: {:.2}%", summary.percent_found());

    Ok(())
}
