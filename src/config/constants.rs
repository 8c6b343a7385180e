use std::time::Duration;

pub const PAGESPEED_API_ENDPOINT: &str = "https://www.googleapis.com/pagespeedonline/v5/runPagespeed";
pub const DEEPSEEK_API_ENDPOINT: &str = "https://api.deepseek.com/v1/chat/completions";
pub const LEADS_API_ENDPOINT: &str = "https://leads.effektivmedia.nu/api/leads";

pub const GOOGLE_API_KEY_ENV: &str = "GOOGLE_API_KEY";
pub const DEEPSEEK_API_KEY_ENV: &str = "DEEPSEEK_API_KEY";
pub const LEADS_API_KEY_ENV: &str = "LEADS_API_KEY";

pub const DEFAULT_AUDIT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_AI_TIMEOUT_SECS: u64 = 45;
pub const DEFAULT_LEADS_TIMEOUT_SECS: u64 = 15;

pub const DEFAULT_LEAD_SOURCE: &str = "SEO Analys";

pub const AUDIT_CATEGORIES: &[&str] = &["performance", "accessibility", "best-practices", "seo"];
pub const AUDIT_STRATEGIES: &[&str] = &["desktop", "mobile"];

pub const NOT_AVAILABLE: &str = "N/A";

pub const MAX_INTERIM_ISSUES: usize = 3;
pub const MAX_COMBINED_SUGGESTIONS: usize = 8;
pub const MAX_COMBINED_ISSUES: usize = 6;

pub const MAX_FALLBACK_SUGGESTIONS: usize = 4;
pub const MAX_FALLBACK_PRIORITY_ISSUES: usize = 3;
pub const MAX_FALLBACK_OPPORTUNITIES: usize = 3;
pub const MAX_FALLBACK_TECHNICAL_RECOMMENDATIONS: usize = 4;

pub const CONFIG_DIR_NAME: &str = "seolyzer";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const fn timeout_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
