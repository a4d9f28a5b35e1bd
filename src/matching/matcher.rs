//! Cross-platform event pairing
//!
//! First-match policy: each source event takes the first candidate with
//! an equal comparison key, in candidate order. Candidate order is the
//! extraction order, which is stable, so matching is deterministic.

use tracing::debug;

use crate::types::Event;

use super::comparison_key;

/// Two events, one per platform, judged to refer to the same
/// performance.
#[derive(Debug, Clone)]
pub struct MatchedPair {
    pub source: Event,
    pub candidate: Event,
}

/// Result of one matching pass: confirmed pairs plus the leftovers from
/// both sides, retained for the single-source estimate path.
#[derive(Debug, Default)]
pub struct MatchOutcome {
    pub pairs: Vec<MatchedPair>,
    pub unmatched_source: Vec<Event>,
    pub unmatched_candidates: Vec<Event>,
}

/// Pair events across platforms by comparison key. Each candidate is
/// consumed at most once. Events with no listings carry nothing to
/// price and are excluded entirely; events whose key is empty cannot
/// match (two untitled events are not "the same").
pub fn match_events(source_events: Vec<Event>, candidate_events: Vec<Event>) -> MatchOutcome {
    let mut candidates: Vec<Option<Event>> = candidate_events
        .into_iter()
        .filter(|e| !e.listings.is_empty())
        .map(Some)
        .collect();

    let mut outcome = MatchOutcome::default();

    for event in source_events.into_iter().filter(|e| !e.listings.is_empty()) {
        let key = comparison_key(&event.title);
        if key.is_empty() {
            outcome.unmatched_source.push(event);
            continue;
        }

        let hit = candidates.iter().position(|slot| {
            slot.as_ref()
                .is_some_and(|c| comparison_key(&c.title) == key)
        });

        match hit.and_then(|idx| candidates[idx].take()) {
            Some(candidate) => {
                debug!(
                    key = %key,
                    "Matched '{}' ({}) to '{}' ({})",
                    event.title, event.platform, candidate.title, candidate.platform
                );
                outcome.pairs.push(MatchedPair {
                    source: event,
                    candidate,
                });
            }
            None => outcome.unmatched_source.push(event),
        }
    }

    outcome.unmatched_candidates = candidates.into_iter().flatten().collect();
    outcome
}
