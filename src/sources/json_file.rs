//! JSON file listing source

use std::path::PathBuf;

use crate::errors::{ScannerError, ScannerResult};
use crate::types::{Platform, RawEvent};

/// Reads one platform's raw events from the extraction collaborator's
/// JSON drop file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    pub platform: Platform,
    pub path: PathBuf,
}

impl JsonFileSource {
    pub fn new(platform: Platform, input_dir: &str) -> Self {
        let file = match platform {
            Platform::VividSeats => "vividseats.json",
            Platform::StubHub => "stubhub.json",
        };
        Self {
            platform,
            path: PathBuf::from(input_dir).join(file),
        }
    }

    pub fn at_path(platform: Platform, path: impl Into<PathBuf>) -> Self {
        Self {
            platform,
            path: path.into(),
        }
    }

    /// Read and deserialize the drop file. Field-level junk inside a
    /// listing is not an error (the normalizer absorbs it); only
    /// unreadable or structurally invalid JSON fails here.
    pub async fn fetch_events(&self) -> ScannerResult<Vec<RawEvent>> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| ScannerError::Source {
                platform: self.platform,
                message: format!("cannot read {}", self.path.display()),
                source: Some(e.into()),
            })?;

        serde_json::from_slice(&bytes).map_err(|e| ScannerError::Source {
            platform: self.platform,
            message: "malformed listing JSON".to_string(),
            source: Some(e.into()),
        })
    }
}
