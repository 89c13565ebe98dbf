use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

use super::{ApiDefinition, Message};
use crate::generation::RequestedParams;
use crate::CHAT_COMPLETIONS_PATH;

// Enum for all supported OpenAI-style APIs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpenAIApi {
    ChatCompletions,
    // Future APIs can be added here:
    // Embeddings,
    // etc.
}

impl ApiDefinition for OpenAIApi {
    fn endpoint(&self) -> &'static str {
        match self {
            OpenAIApi::ChatCompletions => CHAT_COMPLETIONS_PATH,
        }
    }

    fn from_endpoint(endpoint: &str) -> Option<Self> {
        match endpoint {
            CHAT_COMPLETIONS_PATH => Some(OpenAIApi::ChatCompletions),
            _ => None,
        }
    }

    fn all_variants() -> Vec<Self> {
        vec![OpenAIApi::ChatCompletions]
    }
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChatCompletionsRequest {
    pub messages: Vec<Message>,
    pub model: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    // Accepted for SDK compatibility; token-level streaming is not offered.
    pub stream: Option<bool>,
    pub stop: Option<Vec<String>>,
}

impl ChatCompletionsRequest {
    /// Sampling overrides carried by this request, prior to defaulting
    /// and range validation.
    pub fn sampling(&self) -> RequestedParams {
        RequestedParams {
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            top_p: self.top_p,
            stop: self.stop.clone(),
        }
    }
}

impl TryFrom<&[u8]> for ChatCompletionsRequest {
    type Error = serde_json::Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        serde_json::from_slice(bytes)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChatCompletionsResponse {
    pub id: String,
    pub object: String,
    pub created: u64,
    pub model: String,
    pub system_fingerprint: String,
    pub choices: Vec<ChatChoice>,
    pub usage: ChatUsage,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChatChoice {
    pub index: u32,
    pub message: AssistantMessage,
    pub finish_reason: String,
    // Always serialized, even when null.
    pub logprobs: Option<Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AssistantMessage {
    pub role: String,
    pub content: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatUsage {
    pub prompt_tokens: usize,
    pub completion_tokens: usize,
    pub total_tokens: usize,
}

// Model listing shapes (OpenAI format), used by GET /v1/models and
// GET /v1/model/{id}.

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ModelList {
    pub object: String,
    pub data: Vec<ModelEntry>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ModelEntry {
    pub id: String,
    pub object: String,
    pub created: u64,
    pub owned_by: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ModelMetadata {
    pub id: String,
    pub object: String,
    pub created: u64,
    pub owned_by: String,
    pub permission: Vec<Value>,
    pub root: String,
    pub parent: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::Role;

    #[test]
    fn test_request_parses_with_only_messages() {
        let body = r#"{"messages":[{"role":"user","content":"hi"}]}"#;
        let request = ChatCompletionsRequest::try_from(body.as_bytes()).unwrap();
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, Role::User);
        assert!(request.max_tokens.is_none());
        assert!(request.stop.is_none());
    }

    #[test]
    fn test_request_missing_messages_is_rejected() {
        let body = r#"{"max_tokens":16}"#;
        assert!(ChatCompletionsRequest::try_from(body.as_bytes()).is_err());
    }

    #[test]
    fn test_request_sampling_extraction() {
        let body = r#"{"messages":[{"role":"user","content":"hi"}],"temperature":0.2,"stop":["x"]}"#;
        let request = ChatCompletionsRequest::try_from(body.as_bytes()).unwrap();
        let sampling = request.sampling();
        assert_eq!(sampling.temperature, Some(0.2));
        assert_eq!(sampling.stop, Some(vec!["x".to_string()]));
        assert!(sampling.max_tokens.is_none());
    }

    #[test]
    fn test_response_serializes_null_logprobs() {
        let response = ChatCompletionsResponse {
            id: "chatcmpl-abc123def456".to_string(),
            object: "chat.completion".to_string(),
            created: 1_700_000_000,
            model: "smollm2-135m-instruct".to_string(),
            system_fingerprint: "smolllm2_135m_gguf".to_string(),
            choices: vec![ChatChoice {
                index: 0,
                message: AssistantMessage {
                    role: "assistant".to_string(),
                    content: "hello".to_string(),
                },
                finish_reason: "stop".to_string(),
                logprobs: None,
            }],
            usage: ChatUsage {
                prompt_tokens: 3,
                completion_tokens: 1,
                total_tokens: 4,
            },
        };

        let json: Value = serde_json::to_value(&response).unwrap();
        assert_eq!(json["object"], "chat.completion");
        assert_eq!(json["choices"][0]["finish_reason"], "stop");
        assert!(json["choices"][0]["logprobs"].is_null());
        assert_eq!(json["usage"]["total_tokens"], 4);
    }
}
