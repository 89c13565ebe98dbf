//! Translation between the two wire formats and the single backend.
//!
//! `request` turns a vendor request into the canonical prompt string
//! (the only text form the backend ever sees); `response` wraps one
//! generation result into each vendor's envelope. Shared helpers live
//! in `lib`.

pub mod lib;
pub mod request;
pub mod response;

pub use lib::{clean_completion, current_timestamp, synthetic_id, EMPTY_COMPLETION_FALLBACK};
pub use request::{CanonicalPrompt, PromptFormat};
pub use response::{to_chat_completions_response, to_messages_response};
