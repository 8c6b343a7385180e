use reqwest::Client;
use crate::config::constants::timeout_duration;
use crate::errors::{SeolyzerError, SeolyzerResult};
use crate::structs::config::leads_config::LeadsConfig;
use crate::structs::lead_data::LeadData;

/// One-shot lead submission. No retry.
#[derive(Clone)]
pub struct LeadClient {
    endpoint: String,
    api_key: Option<String>,
    default_source: String,
    client: Client,
}

impl LeadClient {
    pub fn new(config: &LeadsConfig, api_key: Option<String>) -> SeolyzerResult<Self> {
        let client = Client::builder()
            .timeout(timeout_duration(config.timeout_secs))
            .build()
            .map_err(|e| SeolyzerError::config_error(&e.to_string(), Some("leads")))?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            api_key,
            default_source: config.default_source.clone(),
            client,
        })
    }

    pub async fn submit(&self, lead: &LeadData) -> SeolyzerResult<()> {
        let payload = lead.payload(&self.default_source);
        log::info!("📨 Submitting lead from source '{}'", payload.source);

        let mut request = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&payload);

        if let Some(key) = &self.api_key {
            request = request.header("x-api-key", key);
        }

        let response = request.send().await.map_err(|e| {
            log::error!("Error submitting lead: {}", e);
            SeolyzerError::lead_error(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            log::error!("Lead intake rejected submission: {}", status);
            return Err(SeolyzerError::lead_error(format!("{}", status)));
        }

        log::info!("✅ Lead submitted successfully");
        Ok(())
    }
}
