use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AiConfig {
    #[serde(default = "ConfigHelper::default_ai_endpoint")]
    pub endpoint: String,

    #[serde(default = "ConfigHelper::default_model")]
    pub model: String,

    #[serde(default = "ConfigHelper::default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "ConfigHelper::default_temperature")]
    pub temperature: f32,

    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "ConfigHelper::default_ai_key_env")]
    pub api_key_env: Option<String>,

    #[serde(default = "ConfigHelper::default_ai_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            endpoint: ConfigHelper::default_ai_endpoint(),
            model: ConfigHelper::default_model(),
            max_tokens: ConfigHelper::default_max_tokens(),
            temperature: ConfigHelper::default_temperature(),
            api_key: None,
            api_key_env: ConfigHelper::default_ai_key_env(),
            timeout_secs: ConfigHelper::default_ai_timeout_secs(),
        }
    }
}
