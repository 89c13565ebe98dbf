use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

/// ChatML frame delimiters, shared by prompt rendering and completion
/// cleanup.
pub const FRAME_OPEN: &str = "<|im_start|>";
pub const FRAME_CLOSE: &str = "<|im_end|>";

/// Substituted when post-processing leaves nothing to return.
pub const EMPTY_COMPLETION_FALLBACK: &str = "I couldn't generate a response.";

/// Helper to create a current unix timestamp
pub fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Synthesizes a response id: the given prefix followed by 12 hex chars.
pub fn synthetic_id(prefix: &str) -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("{}{}", prefix, &hex[..12])
}

/// Post-processes raw completion text before it is wrapped in either
/// envelope.
///
/// The backend's priming frame is never part of the completion, so any
/// frame-open marker in the text is a renewed turn the model started on
/// its own; the completion is truncated there, and likewise at the
/// first end-of-turn marker. If nothing survives trimming, a canonical
/// fallback message is returned instead of empty content.
pub fn clean_completion(raw: &str) -> String {
    let mut text = raw;
    if let Some(idx) = text.find(FRAME_OPEN) {
        text = &text[..idx];
    }
    if let Some(idx) = text.find(FRAME_CLOSE) {
        text = &text[..idx];
    }

    let trimmed = text.trim();
    if trimmed.is_empty() {
        log::warn!("completion was empty after cleanup, substituting fallback text");
        EMPTY_COMPLETION_FALLBACK.to_string()
    } else {
        trimmed.to_string()
    }
}
