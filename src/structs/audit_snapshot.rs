use serde_json::Value;
use crate::structs::detailed_timings::DetailedTimings;
use crate::structs::score_set::ScoreSet;

/// Outcome of the fast audit: normalized metrics plus the untouched provider
/// payload for issue extraction.
#[derive(Debug, Clone)]
pub struct AuditSnapshot {
    pub scores: ScoreSet,
    pub timings: DetailedTimings,
    pub raw: Value,
}

impl AuditSnapshot {
    /// `loadingExperience` as supplied, `None` when absent or null.
    pub fn loading_experience(&self) -> Option<Value> {
        self.raw
            .get("loadingExperience")
            .filter(|value| !value.is_null())
            .cloned()
    }
}
