//! janusllm: a library for serving one local text-generation backend
//! behind two incompatible wire protocols (OpenAI chat completions and
//! Anthropic messages).
//!
//! The crate is split the same way the request flows: `apis` holds the
//! typed wire schemas for each vendor, `transforms::request` turns a
//! vendor request into the single canonical prompt string fed to the
//! backend, `generation` resolves sampling parameters against process
//! defaults, and `transforms::response` wraps one generation result
//! into each vendor's response envelope.

pub mod apis;
pub mod generation;
pub mod transforms;

pub use apis::{Message, Role};
pub use generation::{GenerationDefaults, GenerationParams, GenerationResult, RequestedParams};
pub use transforms::request::CanonicalPrompt;

pub const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";
pub const MESSAGES_PATH: &str = "/v1/messages";
