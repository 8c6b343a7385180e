use crate::config::constants::{
    AUDIT_CATEGORIES, DEEPSEEK_API_ENDPOINT, DEEPSEEK_API_KEY_ENV, DEFAULT_AI_TIMEOUT_SECS,
    DEFAULT_AUDIT_TIMEOUT_SECS, DEFAULT_LEADS_TIMEOUT_SECS, DEFAULT_LEAD_SOURCE,
    GOOGLE_API_KEY_ENV, LEADS_API_ENDPOINT, LEADS_API_KEY_ENV, PAGESPEED_API_ENDPOINT,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_audit_endpoint() -> String {
        PAGESPEED_API_ENDPOINT.to_string()
    }

    pub fn default_strategy() -> String {
        "desktop".to_string()
    }

    pub fn default_categories() -> Vec<String> {
        AUDIT_CATEGORIES.iter().map(|c| (*c).to_string()).collect()
    }

    pub fn default_audit_key_env() -> Option<String> {
        Some(GOOGLE_API_KEY_ENV.to_string())
    }

    pub const fn default_audit_timeout_secs() -> u64 {
        DEFAULT_AUDIT_TIMEOUT_SECS
    }

    pub fn default_ai_endpoint() -> String {
        DEEPSEEK_API_ENDPOINT.to_string()
    }

    pub fn default_model() -> String {
        "deepseek-chat".to_string()
    }

    pub const fn default_max_tokens() -> u32 {
        800
    }

    pub const fn default_temperature() -> f32 {
        0.3
    }

    pub fn default_ai_key_env() -> Option<String> {
        Some(DEEPSEEK_API_KEY_ENV.to_string())
    }

    pub const fn default_ai_timeout_secs() -> u64 {
        DEFAULT_AI_TIMEOUT_SECS
    }

    pub fn default_leads_endpoint() -> String {
        LEADS_API_ENDPOINT.to_string()
    }

    pub fn default_leads_key_env() -> Option<String> {
        Some(LEADS_API_KEY_ENV.to_string())
    }

    pub fn default_lead_source() -> String {
        DEFAULT_LEAD_SOURCE.to_string()
    }

    pub const fn default_leads_timeout_secs() -> u64 {
        DEFAULT_LEADS_TIMEOUT_SECS
    }
}
