use std::sync::Arc;
use crate::enums::ai_provider_error::AiProviderError;
use crate::helpers::prompt_generator::generate_enrichment_prompt;
use crate::prompts::enrichment_prompt::ENRICHMENT_SYSTEM_PROMPT;
use crate::services::ai_providers::deepseek::DeepSeekProvider;
use crate::services::fallback_analysis;
use crate::structs::config::ai_config::AiConfig;
use crate::structs::detailed_timings::DetailedTimings;
use crate::structs::enrichment_result::EnrichmentResult;
use crate::structs::score_set::ScoreSet;
use crate::traits::ai_provider::AiProvider;

/// Produces enrichment for an audit. Never fails: any provider problem, or
/// no provider at all, yields the rule-based analysis.
#[derive(Clone)]
pub struct EnrichmentClient {
    provider: Option<Arc<dyn AiProvider>>,
}

impl EnrichmentClient {
    pub fn new(provider: Option<Arc<dyn AiProvider>>) -> Self {
        Self { provider }
    }

    pub fn unconfigured() -> Self {
        Self { provider: None }
    }

    /// DeepSeek-backed client when a key is available.
    pub fn from_config(config: &AiConfig, api_key: Option<String>) -> Self {
        let provider = api_key.and_then(|key| match DeepSeekProvider::new(key, config) {
            Ok(provider) => Some(Arc::new(provider) as Arc<dyn AiProvider>),
            Err(e) => {
                log::warn!("⚠️ Could not set up AI provider, rule-based analysis only: {}", e);
                None
            }
        });

        Self { provider }
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    pub async fn enrich(&self, url: &str, scores: &ScoreSet, timings: &DetailedTimings) -> EnrichmentResult {
        match self.try_enrich(url, scores, timings).await {
            Ok(result) => {
                log::info!("🤖 AI analysis completed for {}", url);
                result
            }
            Err(AiProviderError::NotConfigured) => {
                log::info!("No AI provider configured, using rule-based analysis");
                fallback_analysis::generate(scores)
            }
            Err(e) => {
                log::warn!("⚠️ AI analysis failed, falling back to rule-based analysis: {}", e);
                fallback_analysis::generate(scores)
            }
        }
    }

    async fn try_enrich(
        &self,
        url: &str,
        scores: &ScoreSet,
        timings: &DetailedTimings,
    ) -> Result<EnrichmentResult, AiProviderError> {
        let provider = self.provider.as_ref().ok_or(AiProviderError::NotConfigured)?;
        let prompt = generate_enrichment_prompt(url, scores, timings);

        let content = provider
            .chat(ENRICHMENT_SYSTEM_PROMPT.to_string(), vec![prompt])
            .await?;

        parse_enrichment(&content)
    }
}

/// Decodes the model's JSON reply. `suggestions` must be present and be a
/// list; the other fields default to empty.
pub fn parse_enrichment(content: &str) -> Result<EnrichmentResult, AiProviderError> {
    serde_json::from_str(content.trim())
        .map_err(|e| AiProviderError::SerializationError(format!("Invalid AI response structure: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use crate::services::fallback_analysis::LOW_PERFORMANCE_IMPACT;

    struct ScriptedProvider {
        reply: Result<String, AiProviderError>,
        calls: AtomicUsize,
    }

    impl ScriptedProvider {
        fn new(reply: Result<String, AiProviderError>) -> Arc<Self> {
            Arc::new(Self { reply, calls: AtomicUsize::new(0) })
        }
    }

    #[async_trait]
    impl AiProvider for ScriptedProvider {
        async fn chat(&self, system_prompt: String, user_prompts: Vec<String>) -> Result<String, AiProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            assert_eq!(system_prompt, ENRICHMENT_SYSTEM_PROMPT);
            assert_eq!(user_prompts.len(), 1);
            self.reply.clone()
        }
    }

    fn low_scores() -> ScoreSet {
        ScoreSet { performance: 45, accessibility: 90, best_practices: 90, seo: 85 }
    }

    fn timings() -> DetailedTimings {
        DetailedTimings {
            first_contentful_paint: "1.0 s".to_string(),
            speed_index: "N/A".to_string(),
            largest_contentful_paint: "N/A".to_string(),
            total_blocking_time: "N/A".to_string(),
            time_to_interactive: "N/A".to_string(),
            cumulative_layout_shift: "N/A".to_string(),
        }
    }

    fn client(provider: &Arc<ScriptedProvider>) -> EnrichmentClient {
        EnrichmentClient::new(Some(Arc::clone(provider) as Arc<dyn AiProvider>))
    }

    #[test]
    fn parses_full_reply() {
        let parsed = parse_enrichment(
            r#"{"suggestions":["a"],"priorityIssues":["b"],"opportunities":["c"],
                "technicalRecommendations":["d"],"businessImpact":"e","overallAssessment":"f"}"#,
        )
        .unwrap();
        assert_eq!(parsed.suggestions, vec!["a"]);
        assert_eq!(parsed.priority_issues, vec!["b"]);
        assert_eq!(parsed.technical_recommendations, vec!["d"]);
        assert_eq!(parsed.overall_assessment, "f");
    }

    #[test]
    fn missing_optional_lists_default_to_empty() {
        let parsed = parse_enrichment(r#"{"suggestions":["a","b"]}"#).unwrap();
        assert_eq!(parsed.suggestions.len(), 2);
        assert!(parsed.opportunities.is_empty());
        assert_eq!(parsed.business_impact, "");
    }

    #[test]
    fn rejects_bad_shapes() {
        assert!(parse_enrichment("not json").is_err());
        assert!(parse_enrichment(r#"{"priorityIssues":["x"]}"#).is_err());
        assert!(parse_enrichment(r#"{"suggestions":"x"}"#).is_err());
    }

    #[tokio::test]
    async fn unconfigured_client_uses_fallback() {
        let result = EnrichmentClient::unconfigured()
            .enrich("https://exempel.se", &low_scores(), &timings())
            .await;
        assert_eq!(result, fallback_analysis::generate(&low_scores()));
        assert_eq!(result.business_impact, LOW_PERFORMANCE_IMPACT);
    }

    #[tokio::test]
    async fn provider_reply_is_used() {
        let provider = ScriptedProvider::new(Ok(r#"{"suggestions":["AI-förslag"]}"#.to_string()));
        let result = client(&provider).enrich("https://exempel.se", &low_scores(), &timings()).await;
        assert_eq!(result.suggestions, vec!["AI-förslag"]);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn provider_error_falls_back() {
        let provider = ScriptedProvider::new(Err(AiProviderError::ApiError("HTTP 500".to_string())));
        let result = client(&provider).enrich("https://exempel.se", &low_scores(), &timings()).await;
        assert_eq!(result, fallback_analysis::generate(&low_scores()));
    }

    #[tokio::test]
    async fn malformed_reply_falls_back() {
        let provider = ScriptedProvider::new(Ok(r#"{"suggestions":null}"#.to_string()));
        let result = client(&provider).enrich("https://exempel.se", &low_scores(), &timings()).await;
        assert_eq!(result, fallback_analysis::generate(&low_scores()));
    }

    #[test]
    fn from_config_without_key_is_unconfigured() {
        assert!(!EnrichmentClient::from_config(&AiConfig::default(), None).is_configured());
        assert!(EnrichmentClient::from_config(&AiConfig::default(), Some("k".to_string())).is_configured());
    }
}
