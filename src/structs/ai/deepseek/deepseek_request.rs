use serde::{Deserialize, Serialize};
use crate::structs::ai::deepseek::deepseek_message::DeepSeekMessage;
use crate::structs::ai::deepseek::deepseek_response_format::DeepSeekResponseFormat;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeepSeekRequest {
    pub model: String,

    pub messages: Vec<DeepSeekMessage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    pub stream: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<DeepSeekResponseFormat>,
}
