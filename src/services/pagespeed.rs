use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use crate::config::constants::timeout_duration;
use crate::enums::audit_provider_error::AuditProviderError;
use crate::structs::config::audit_config::AuditConfig;
use crate::traits::audit_provider::AuditProvider;

/// Google PageSpeed Insights v5 client.
#[derive(Clone)]
pub struct PageSpeedProvider {
    endpoint: String,
    api_key: Option<String>,
    strategy: String,
    categories: Vec<String>,
    client: Client,
}

impl PageSpeedProvider {
    pub fn new(config: &AuditConfig, api_key: Option<String>) -> Result<Self, AuditProviderError> {
        let client = Client::builder()
            .timeout(timeout_duration(config.timeout_secs))
            .build()
            .map_err(|e| AuditProviderError::NetworkError(e.to_string()))?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            api_key,
            strategy: config.strategy.clone(),
            categories: config.categories.clone(),
            client,
        })
    }

    fn query_params<'a>(&'a self, url: &'a str) -> Vec<(&'static str, &'a str)> {
        let mut params = vec![("url", url)];
        if let Some(key) = &self.api_key {
            params.push(("key", key.as_str()));
        }
        params.extend(self.categories.iter().map(|c| ("category", c.as_str())));
        params.push(("strategy", self.strategy.as_str()));
        params
    }
}

#[async_trait]
impl AuditProvider for PageSpeedProvider {
    async fn run_audit(&self, url: &str) -> Result<Value, AuditProviderError> {
        log::info!("📡 Fetching PageSpeed data for: {}", url);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&self.query_params(url))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuditProviderError::HttpStatus(status.as_u16()));
        }

        let data: Value = response.json().await?;

        if data.get("lighthouseResult").map_or(true, Value::is_null) {
            return Err(AuditProviderError::MissingLighthouseResult);
        }

        log::debug!("PageSpeed analysis completed for {}", url);
        Ok(data)
    }
}
