//! Concurrent per-platform collection with partial-failure tolerance

use std::collections::HashMap;

use tokio::task::JoinSet;
use tracing::{info, warn};

use crate::types::{Platform, RawEvent};

use super::JsonFileSource;

/// Fetch every platform's raw events, one task per platform. A platform
/// that fails degrades to an empty event list; one broken source never
/// aborts the scan cycle.
pub async fn gather_platform_events(
    sources: Vec<JsonFileSource>,
) -> HashMap<Platform, Vec<RawEvent>> {
    let mut results: HashMap<Platform, Vec<RawEvent>> =
        sources.iter().map(|s| (s.platform, Vec::new())).collect();

    let mut set = JoinSet::new();
    for source in sources {
        set.spawn(async move {
            let platform = source.platform;
            (platform, source.fetch_events().await)
        });
    }

    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((platform, Ok(events))) => {
                info!("📥 {}: {} raw event(s)", platform, events.len());
                results.insert(platform, events);
            }
            Ok((platform, Err(e))) => {
                warn!("⚠️  {} extraction failed, continuing with empty set: {}", platform, e);
            }
            Err(e) => {
                warn!("⚠️  Extraction task panicked: {}", e);
            }
        }
    }

    results
}
