pub mod ai_provider;
pub mod audit_provider;
