use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LeadsConfig {
    #[serde(default = "ConfigHelper::default_leads_endpoint")]
    pub endpoint: String,

    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "ConfigHelper::default_leads_key_env")]
    pub api_key_env: Option<String>,

    #[serde(default = "ConfigHelper::default_lead_source")]
    pub default_source: String,

    #[serde(default = "ConfigHelper::default_leads_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for LeadsConfig {
    fn default() -> Self {
        Self {
            endpoint: ConfigHelper::default_leads_endpoint(),
            api_key: None,
            api_key_env: ConfigHelper::default_leads_key_env(),
            default_source: ConfigHelper::default_lead_source(),
            timeout_secs: ConfigHelper::default_leads_timeout_secs(),
        }
    }
}
