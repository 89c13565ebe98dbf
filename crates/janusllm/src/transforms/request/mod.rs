//! Request-side translation: vendor request -> canonical prompt.

pub mod from_anthropic;
pub mod from_openai;

use crate::apis::Message;

/// The single text form fed to the generation backend.
///
/// Building one is deterministic: the same message sequence rendered
/// with the same format always yields byte-identical text. Nothing
/// time- or request-dependent is injected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalPrompt(String);

impl CanonicalPrompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for CanonicalPrompt {
    fn from(text: String) -> Self {
        CanonicalPrompt(text)
    }
}

/// How a message sequence is framed for the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptFormat {
    /// `<|im_start|>{role} ... <|im_end|>` blocks (OpenAI surface).
    ChatMl,
    /// `Human:` / `Assistant:` turns with a hoisted system prefix
    /// (Anthropic surface).
    HumanAssistant,
}

impl PromptFormat {
    /// Renders an ordered message sequence into a canonical prompt.
    ///
    /// Total over any message sequence; rejecting empty requests is the
    /// gateway's job, not the builder's.
    pub fn render(&self, messages: &[Message]) -> CanonicalPrompt {
        match self {
            PromptFormat::ChatMl => from_openai::render_chatml(messages),
            PromptFormat::HumanAssistant => from_anthropic::render_human_assistant(messages),
        }
    }
}
