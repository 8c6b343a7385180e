pub mod ai_config;
pub mod audit_config;
#[allow(clippy::module_inception)]
pub mod config;
pub mod leads_config;
