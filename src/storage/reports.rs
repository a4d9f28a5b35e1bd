//! Arbitrage report storage

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::{ScannerError, ScannerResult};
use crate::types::ArbitrageReport;

/// Write the report document for the persistence collaborator to pick
/// up. One file per scan cycle, named by the cycle's timestamp.
pub fn save_report(report: &ArbitrageReport, output_dir: &Path) -> ScannerResult<PathBuf> {
    let filename = format!(
        "arbitrage_{}.json",
        report.scraped_at.format("%Y-%m-%d_%H%M%S")
    );
    let path = output_dir.join(filename);

    let json = serde_json::to_string_pretty(report).map_err(|e| ScannerError::Storage {
        context: "serializing report".to_string(),
        source: e.into(),
    })?;

    fs::write(&path, json).map_err(|e| ScannerError::Storage {
        context: format!("writing {}", path.display()),
        source: e.into(),
    })?;

    info!(
        opportunities = report.opportunities.len(),
        path = %path.display(),
        "Saved arbitrage report"
    );

    Ok(path)
}
