use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::structs::detailed_timings::DetailedTimings;
use crate::structs::score_set::ScoreSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub url: String,
    pub metrics: ScoreSet,
    pub detailed_metrics: DetailedTimings,
    pub suggestions: Vec<String>,
    pub issues: Vec<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loading_experience: Option<Value>,
}

impl AnalysisResult {
    /// Same audit, new suggestion and issue lists. Shares nothing with `self`.
    pub fn with_findings(&self, suggestions: Vec<String>, issues: Vec<String>) -> Self {
        Self {
            suggestions,
            issues,
            ..self.clone()
        }
    }
}
