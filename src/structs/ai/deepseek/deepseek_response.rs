use serde::{Deserialize, Serialize};
use crate::structs::ai::deepseek::deepseek_choice::DeepSeekChoice;

/// Non-streaming chat completion envelope. Only the fields we read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeepSeekResponse {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<DeepSeekChoice>,
}

impl DeepSeekResponse {
    pub fn first_content(&self) -> Option<&str> {
        self.choices.first().map(|choice| choice.message.content.as_str())
    }
}
