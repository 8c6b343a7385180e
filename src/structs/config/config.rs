use serde::{Deserialize, Serialize};
use crate::structs::config::ai_config::AiConfig;
use crate::structs::config::audit_config::AuditConfig;
use crate::structs::config::leads_config::LeadsConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub audit: AuditConfig,

    #[serde(default)]
    pub ai: AiConfig,

    #[serde(default)]
    pub leads: LeadsConfig,
}
