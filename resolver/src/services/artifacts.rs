//! Input list loading and the three output artifacts.

use std::fs;

use tracing::info;

use termlink_config::AppConfig;

use crate::errors::ResolverError;
use crate::services::pipeline::RunReport;

/// Read the line-delimited term list. Lines are trimmed; blank lines
/// are skipped. A missing or unreadable file is fatal to the run.
pub fn load_terms(path: &str) -> Result<Vec<String>, ResolverError> {
    let raw = fs::read_to_string(path).map_err(|e| {
        ResolverError::IoError(format!("failed to read terms file '{}': {}", path, e))
    })?;

    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Write the results mapping, the similar-terms list, and the
/// not-found list. The two line-delimited lists are only written when
/// non-empty.
pub fn write_artifacts(report: &RunReport, config: &AppConfig) -> Result<(), ResolverError> {
    let json = serde_json::to_string_pretty(&report.results)?;
    fs::write(&config.results_file, json)?;
    info!("💾 Results saved to {}", config.results_file);

    if !report.similar_terms.is_empty() {
        fs::write(&config.similar_terms_file, report.similar_terms.join("\n"))?;
        info!(
            "💾 {} similar terms saved to {}",
            report.similar_terms.len(),
            config.similar_terms_file
        );
    }

    if !report.not_found_terms.is_empty() {
        fs::write(&config.not_found_file, report.not_found_terms.join("\n"))?;
        info!(
            "💾 {} not-found terms saved to {}",
            report.not_found_terms.len(),
            config.not_found_file
        );
    }

    Ok(())
}
