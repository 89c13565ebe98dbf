//! smolgate: HTTP gateway serving a single local SmolLM2 instance
//! behind both the OpenAI chat-completions and Anthropic messages
//! surfaces. Protocol translation lives in the `janusllm` crate; this
//! crate owns routing, validation, error mapping, configuration, and
//! the generation backend.

pub mod config;
pub mod engine;
pub mod errors;
pub mod handlers;
pub mod utils;
