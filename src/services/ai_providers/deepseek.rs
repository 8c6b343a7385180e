use async_trait::async_trait;
use reqwest::Client;
use crate::config::constants::timeout_duration;
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::ai::deepseek::deepseek_message::DeepSeekMessage;
use crate::structs::ai::deepseek::deepseek_request::DeepSeekRequest;
use crate::structs::ai::deepseek::deepseek_response::DeepSeekResponse;
use crate::structs::ai::deepseek::deepseek_response_format::DeepSeekResponseFormat;
use crate::structs::config::ai_config::AiConfig;
use crate::traits::ai_provider::AiProvider;

#[derive(Clone)]
pub struct DeepSeekProvider {
    api_key: String,
    endpoint: String,
    client: Client,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl DeepSeekProvider {
    pub fn new(api_key: String, config: &AiConfig) -> Result<Self, AiProviderError> {
        let client = Client::builder()
            .timeout(timeout_duration(config.timeout_secs))
            .build()
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))?;

        Ok(Self {
            api_key,
            endpoint: config.endpoint.clone(),
            client,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    fn get_deepseek_messages(system_prompt: String, user_prompts: Vec<String>) -> Vec<DeepSeekMessage> {
        let mut messages = Vec::with_capacity(user_prompts.len() + 1);

        if !system_prompt.is_empty() {
            messages.push(DeepSeekMessage::system(system_prompt));
        }

        messages.extend(user_prompts.into_iter().map(DeepSeekMessage::user));
        messages
    }

    fn get_request(&self, system_prompt: String, user_prompts: Vec<String>) -> DeepSeekRequest {
        DeepSeekRequest {
            model: self.model.clone(),
            messages: Self::get_deepseek_messages(system_prompt, user_prompts),
            max_tokens: Some(self.max_tokens),
            temperature: Some(self.temperature),
            stream: false,
            response_format: Some(DeepSeekResponseFormat::json_object()),
        }
    }

    async fn make_request(&self, request_body: &DeepSeekRequest) -> Result<reqwest::Response, AiProviderError> {
        log::debug!("📦 Request model: {}", request_body.model);

        self.client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(request_body)
            .send()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))
    }
}

#[async_trait]
impl AiProvider for DeepSeekProvider {
    async fn chat(&self, system_prompt: String, user_prompts: Vec<String>) -> Result<String, AiProviderError> {
        let request_body = self.get_request(system_prompt, user_prompts);
        let response = self.make_request(&request_body).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(match status.as_u16() {
                401 => AiProviderError::AuthenticationError(error_text),
                429 => AiProviderError::ApiError(format!("Rate limit exceeded: {}", error_text)),
                _ => AiProviderError::ApiError(format!("HTTP {}: {}", status, error_text)),
            });
        }

        let envelope: DeepSeekResponse = response
            .json()
            .await
            .map_err(|e| AiProviderError::SerializationError(e.to_string()))?;

        envelope
            .first_content()
            .map(ToString::to_string)
            .ok_or_else(|| AiProviderError::SerializationError("Invalid response format from Deepseek API".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_asks_for_json_object() {
        let provider = DeepSeekProvider::new("key".to_string(), &AiConfig::default()).unwrap();
        let request = provider.get_request("system".to_string(), vec!["user".to_string()]);
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["model"], "deepseek-chat");
        assert_eq!(body["max_tokens"], 800);
        assert_eq!(body["stream"], false);
        assert_eq!(body["response_format"]["type"], "json_object");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "user");
    }

    #[test]
    fn empty_system_prompt_is_omitted() {
        let messages = DeepSeekProvider::get_deepseek_messages(String::new(), vec!["a".into(), "b".into()]);
        assert_eq!(messages, vec![DeepSeekMessage::user("a"), DeepSeekMessage::user("b")]);
    }
}
