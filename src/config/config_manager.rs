use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{AUDIT_STRATEGIES, CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{SeolyzerError, SeolyzerResult};
use crate::structs::config::config::Config;
use crate::structs::validation_result::ValidationResult;

const SAMPLE_CONFIG: &str = r#"# Seolyzer Configuration

# Fast audit (Google PageSpeed Insights v5)
[audit]
endpoint = "https://www.googleapis.com/pagespeedonline/v5/runPagespeed"
# "desktop" or "mobile"
strategy = "desktop"
categories = ["performance", "accessibility", "best-practices", "seo"]
# Either set the key here or name the environment variable holding it
api_key_env = "GOOGLE_API_KEY"
timeout_secs = 60

# AI enrichment (DeepSeek chat completions)
# Without a key the rule-based analysis is used instead.
[ai]
endpoint = "https://api.deepseek.com/v1/chat/completions"
model = "deepseek-chat"
max_tokens = 800
temperature = 0.3
api_key_env = "DEEPSEEK_API_KEY"
timeout_secs = 45

# Lead intake
[leads]
endpoint = "https://leads.effektivmedia.nu/api/leads"
api_key_env = "LEADS_API_KEY"
default_source = "SEO Analys"
timeout_secs = 15
"#;

pub struct ConfigManager;

impl ConfigManager {
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_default()
    }

    pub fn load() -> SeolyzerResult<Config> {
        Self::load_from(&Self::config_path())
    }

    /// Missing file is not an error; defaults apply.
    pub fn load_from(path: &Path) -> SeolyzerResult<Config> {
        if path.exists() {
            log::info!("📋 Loading config from: {}", path.display());
            let content = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            return Ok(config);
        }

        log::debug!("No config at {}, using defaults", path.display());
        Ok(Config::default())
    }

    pub fn create_sample_config() -> SeolyzerResult<PathBuf> {
        let path = Self::config_path();
        Self::create_sample_config_at(&path)?;
        Ok(path)
    }

    pub fn create_sample_config_at(path: &Path) -> SeolyzerResult<()> {
        if path.exists() {
            return Err(SeolyzerError::config_error(
                &format!("config already exists at {}", path.display()),
                None,
            ));
        }
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, SAMPLE_CONFIG)?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    /// Explicit value wins over the environment variable. Blank values count
    /// as unset.
    pub fn resolve_credential(explicit: Option<&str>, env_name: Option<&str>) -> Option<String> {
        let non_blank = |value: &str| {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };

        explicit.and_then(non_blank).or_else(|| {
            env_name
                .and_then(|name| std::env::var(name).ok())
                .and_then(|value| non_blank(&value))
        })
    }

    pub fn audit_api_key(config: &Config) -> Option<String> {
        Self::resolve_credential(config.audit.api_key.as_deref(), config.audit.api_key_env.as_deref())
    }

    pub fn ai_api_key(config: &Config) -> Option<String> {
        Self::resolve_credential(config.ai.api_key.as_deref(), config.ai.api_key_env.as_deref())
    }

    pub fn leads_api_key(config: &Config) -> Option<String> {
        Self::resolve_credential(config.leads.api_key.as_deref(), config.leads.api_key_env.as_deref())
    }

    pub fn validate_config(config: &Config) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        for (section, endpoint) in [
            ("audit", &config.audit.endpoint),
            ("ai", &config.ai.endpoint),
            ("leads", &config.leads.endpoint),
        ] {
            match url::Url::parse(endpoint) {
                Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
                Ok(parsed) => errors.push(format!(
                    "[{}] endpoint must use http or https, got '{}'",
                    section,
                    parsed.scheme()
                )),
                Err(e) => errors.push(format!("[{}] endpoint '{}' is not a valid URL: {}", section, endpoint, e)),
            }
        }

        for (section, timeout) in [
            ("audit", config.audit.timeout_secs),
            ("ai", config.ai.timeout_secs),
            ("leads", config.leads.timeout_secs),
        ] {
            if timeout == 0 {
                errors.push(format!("[{}] timeout_secs must be greater than zero", section));
            }
        }

        if !AUDIT_STRATEGIES.contains(&config.audit.strategy.as_str()) {
            errors.push(format!(
                "[audit] unknown strategy '{}', expected one of: {}",
                config.audit.strategy,
                AUDIT_STRATEGIES.join(", ")
            ));
        }

        if config.audit.categories.is_empty() {
            errors.push("[audit] at least one category is required".to_string());
        }

        if Self::audit_api_key(config).is_none() {
            warnings.push("[audit] no API key configured, PageSpeed requests are rate limited".to_string());
        }
        if Self::ai_api_key(config).is_none() {
            warnings.push("[ai] no API key configured, rule-based analysis will be used".to_string());
        }
        if Self::leads_api_key(config).is_none() {
            warnings.push("[leads] no API key configured, the intake endpoint may reject submissions".to_string());
        }

        ValidationResult::from_findings(errors, warnings)
    }
}
