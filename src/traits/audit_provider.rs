use async_trait::async_trait;
use serde_json::Value;
use crate::enums::audit_provider_error::AuditProviderError;

/// Source of raw Lighthouse-style audit payloads.
#[async_trait]
pub trait AuditProvider: Send + Sync {
    async fn run_audit(&self, url: &str) -> Result<Value, AuditProviderError>;
}
