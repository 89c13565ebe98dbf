use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::{ApiDefinition, Message};
use crate::generation::RequestedParams;
use crate::MESSAGES_PATH;

// Enum for all supported Anthropic APIs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnthropicApi {
    Messages,
}

impl ApiDefinition for AnthropicApi {
    fn endpoint(&self) -> &'static str {
        match self {
            AnthropicApi::Messages => MESSAGES_PATH,
        }
    }

    fn from_endpoint(endpoint: &str) -> Option<Self> {
        match endpoint {
            MESSAGES_PATH => Some(AnthropicApi::Messages),
            _ => None,
        }
    }

    fn all_variants() -> Vec<Self> {
        vec![AnthropicApi::Messages]
    }
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MessagesRequest {
    pub messages: Vec<Message>,
    pub model: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    // Accepted for SDK compatibility; token-level streaming is not offered.
    pub stream: Option<bool>,
    pub stop_sequences: Option<Vec<String>>,
}

impl MessagesRequest {
    /// Sampling overrides carried by this request, prior to defaulting
    /// and range validation.
    pub fn sampling(&self) -> RequestedParams {
        RequestedParams {
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            top_p: self.top_p,
            stop: self.stop_sequences.clone(),
        }
    }
}

impl TryFrom<&[u8]> for MessagesRequest {
    type Error = serde_json::Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        serde_json::from_slice(bytes)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessagesRole {
    Assistant,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessagesStopReason {
    EndTurn,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[serde(tag = "type")]
pub enum MessagesContentBlock {
    Text { text: String },
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MessagesResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub obj_type: String,
    pub role: MessagesRole,
    pub model: String,
    pub content: Vec<MessagesContentBlock>,
    pub stop_reason: MessagesStopReason,
    // Always serialized, even when null.
    pub stop_sequence: Option<String>,
    pub usage: MessagesUsage,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessagesUsage {
    pub input_tokens: usize,
    pub output_tokens: usize,
}
