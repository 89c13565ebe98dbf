//! Typed wire schemas for the two supported vendor APIs.
//!
//! Both request schemas carry an ordered list of role-tagged messages
//! with plain-string content, so one `Message` type backs both. The
//! response envelopes diverge (field names, id prefixes, usage shape)
//! and stay vendor-specific.

pub mod anthropic;
pub mod openai;

pub use anthropic::{AnthropicApi, MessagesRequest, MessagesResponse};
pub use openai::{ChatCompletionsRequest, ChatCompletionsResponse, OpenAIApi};

use serde::{Deserialize, Serialize};

pub trait ApiDefinition {
    /// Returns the endpoint path for this API
    fn endpoint(&self) -> &'static str;

    /// Creates an API instance from an endpoint path
    fn from_endpoint(endpoint: &str) -> Option<Self>
    where
        Self: Sized;

    /// Returns all variants of this API enum
    fn all_variants() -> Vec<Self>
    where
        Self: Sized;
}

/// Message role as it appears in either request schema.
///
/// Deserialization is lenient by design: role literals are matched
/// case-insensitively and anything unrecognized becomes `Unknown`
/// rather than a validation failure. How an `Unknown` role renders is
/// decided per prompt format, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
    Function,
    Unknown,
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.to_lowercase().as_str() {
            "system" => Role::System,
            "user" => Role::User,
            "assistant" => Role::Assistant,
            "tool" => Role::Tool,
            "function" => Role::Function,
            _ => Role::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Message {
            role,
            content: content.into(),
        }
    }
}
