use serde::{Deserialize, Serialize};
use crate::structs::ai::deepseek::deepseek_message::DeepSeekMessage;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeepSeekChoice {
    #[serde(default)]
    pub index: u32,
    pub message: DeepSeekMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}
