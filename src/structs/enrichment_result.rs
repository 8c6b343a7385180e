use serde::{Deserialize, Serialize};

/// Natural-language findings for one audit, from the AI provider or the
/// rule-based fallback.
///
/// Only `suggestions` is required when decoding a provider reply.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentResult {
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub priority_issues: Vec<String>,
    #[serde(default)]
    pub opportunities: Vec<String>,
    #[serde(default)]
    pub technical_recommendations: Vec<String>,
    #[serde(default)]
    pub business_impact: String,
    #[serde(default)]
    pub overall_assessment: String,
}
