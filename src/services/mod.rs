pub mod ai_providers;
pub mod enrichment_client;
pub mod fallback_analysis;
pub mod lead_client;
pub mod metrics_extractor;
pub mod pagespeed;
pub mod staged_auditor;
