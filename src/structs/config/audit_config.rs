use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AuditConfig {
    #[serde(default = "ConfigHelper::default_audit_endpoint")]
    pub endpoint: String,

    #[serde(default = "ConfigHelper::default_strategy")]
    pub strategy: String,

    #[serde(default = "ConfigHelper::default_categories")]
    pub categories: Vec<String>,

    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "ConfigHelper::default_audit_key_env")]
    pub api_key_env: Option<String>,

    #[serde(default = "ConfigHelper::default_audit_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            endpoint: ConfigHelper::default_audit_endpoint(),
            strategy: ConfigHelper::default_strategy(),
            categories: ConfigHelper::default_categories(),
            api_key: None,
            api_key_env: ConfigHelper::default_audit_key_env(),
            timeout_secs: ConfigHelper::default_audit_timeout_secs(),
        }
    }
}
