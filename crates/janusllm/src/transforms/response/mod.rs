//! Response-side translation: generation result -> vendor envelope.

pub mod to_anthropic;
pub mod to_openai;

pub use to_anthropic::to_messages_response;
pub use to_openai::to_chat_completions_response;
