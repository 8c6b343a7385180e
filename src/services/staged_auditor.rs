use std::future::Future;
use std::sync::Arc;
use chrono::Utc;
use uuid::Uuid;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::{MAX_COMBINED_ISSUES, MAX_COMBINED_SUGGESTIONS, MAX_INTERIM_ISSUES};
use crate::errors::{SeolyzerError, SeolyzerResult};
use crate::services::enrichment_client::EnrichmentClient;
use crate::services::metrics_extractor::{build_snapshot, extract_basic_issues, extract_issues};
use crate::services::pagespeed::PageSpeedProvider;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::audit_snapshot::AuditSnapshot;
use crate::structs::config::config::Config;
use crate::structs::enrichment_result::EnrichmentResult;
use crate::traits::audit_provider::AuditProvider;

/// Shown while the AI analysis is still running. Fixed text, not derived
/// from the audit.
pub const INTERIM_SUGGESTIONS: [&str; 4] = [
    "Optimera bilder för snabbare laddning",
    "Använd moderna bildformat som WebP",
    "Implementera lazy loading för bilder",
    "Komprimera CSS och JavaScript",
];

/// Runs the fast audit, reports an interim result, then enriches it.
///
/// Holds no state between runs; every call is an independent audit.
#[derive(Clone)]
pub struct StagedAuditor {
    audit: Arc<dyn AuditProvider>,
    enrichment: EnrichmentClient,
}

impl StagedAuditor {
    pub fn new(audit: Arc<dyn AuditProvider>, enrichment: EnrichmentClient) -> Self {
        Self { audit, enrichment }
    }

    pub fn from_config(config: &Config) -> SeolyzerResult<Self> {
        let audit = PageSpeedProvider::new(&config.audit, ConfigManager::audit_api_key(config))
            .map_err(|e| SeolyzerError::config_error(&e.to_string(), Some("audit")))?;
        let enrichment = EnrichmentClient::from_config(&config.ai, ConfigManager::ai_api_key(config));

        Ok(Self::new(Arc::new(audit), enrichment))
    }

    /// Staged audit. `on_interim` is called exactly once, after the fast
    /// audit succeeded and before enrichment starts. A fast-audit failure
    /// returns an error without calling it.
    pub async fn run<F>(&self, url: &str, on_interim: F) -> SeolyzerResult<AnalysisResult>
    where
        F: FnOnce(AnalysisResult) + Send,
    {
        let run_id = Uuid::new_v4();
        log::info!("[{}] 🔍 Starting staged audit for: {}", run_id, url);

        let snapshot = self.fast_audit(url, run_id).await?;
        let interim = build_interim(url, &snapshot);

        log::info!("[{}] PageSpeed stage complete, showing interim results", run_id);
        on_interim(interim.clone());

        let (suggestions, issues) = self.enriched_findings(url, &snapshot).await;
        log::info!("[{}] ✅ Staged audit complete", run_id);

        Ok(interim.with_findings(suggestions, issues))
    }

    /// Like [`run`](Self::run), abandoned with [`SeolyzerError::Cancelled`]
    /// if `cancel` completes first.
    pub async fn run_until<F, C>(&self, url: &str, on_interim: F, cancel: C) -> SeolyzerResult<AnalysisResult>
    where
        F: FnOnce(AnalysisResult) + Send,
        C: Future<Output = ()> + Send,
    {
        tokio::select! {
            biased;
            () = cancel => {
                log::warn!("Audit of {} cancelled", url);
                Err(SeolyzerError::Cancelled)
            }
            result = self.run(url, on_interim) => result,
        }
    }

    /// Single-shot audit without an interim report.
    pub async fn full_audit(&self, url: &str) -> SeolyzerResult<AnalysisResult> {
        let run_id = Uuid::new_v4();
        log::info!("[{}] 🔍 Starting full audit for: {}", run_id, url);

        let snapshot = self.fast_audit(url, run_id).await?;
        let (suggestions, issues) = self.enriched_findings(url, &snapshot).await;
        log::info!("[{}] ✅ Full audit complete", run_id);

        Ok(build_result(url, &snapshot, suggestions, issues))
    }

    async fn fast_audit(&self, url: &str, run_id: Uuid) -> SeolyzerResult<AuditSnapshot> {
        let raw = self.audit.run_audit(url).await.map_err(|e| {
            log::error!("[{}] ❌ PageSpeed audit failed: {}", run_id, e);
            SeolyzerError::audit_error(url, e.to_string())
        })?;

        Ok(build_snapshot(raw))
    }

    async fn enriched_findings(&self, url: &str, snapshot: &AuditSnapshot) -> (Vec<String>, Vec<String>) {
        let enrichment = self.enrichment.enrich(url, &snapshot.scores, &snapshot.timings).await;
        let extracted = extract_issues(&snapshot.scores, &snapshot.raw);
        merge_findings(enrichment, extracted)
    }
}

fn build_result(url: &str, snapshot: &AuditSnapshot, suggestions: Vec<String>, issues: Vec<String>) -> AnalysisResult {
    AnalysisResult {
        url: url.to_string(),
        metrics: snapshot.scores,
        detailed_metrics: snapshot.timings.clone(),
        suggestions,
        issues,
        timestamp: Utc::now(),
        loading_experience: snapshot.loading_experience(),
    }
}

fn build_interim(url: &str, snapshot: &AuditSnapshot) -> AnalysisResult {
    let mut issues = extract_basic_issues(&snapshot.raw);
    issues.truncate(MAX_INTERIM_ISSUES);

    let suggestions = INTERIM_SUGGESTIONS.iter().map(|s| (*s).to_string()).collect();
    build_result(url, snapshot, suggestions, issues)
}

/// Suggestions: AI suggestions, opportunities and technical recommendations,
/// at most eight. Issues: AI priority issues then extracted issues, at most
/// six.
pub fn merge_findings(enrichment: EnrichmentResult, extracted_issues: Vec<String>) -> (Vec<String>, Vec<String>) {
    let suggestions = enrichment
        .suggestions
        .into_iter()
        .chain(enrichment.opportunities)
        .chain(enrichment.technical_recommendations)
        .take(MAX_COMBINED_SUGGESTIONS)
        .collect();

    let issues = enrichment
        .priority_issues
        .into_iter()
        .chain(extracted_issues)
        .take(MAX_COMBINED_ISSUES)
        .collect();

    (suggestions, issues)
}
