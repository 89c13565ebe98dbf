use std::fs;
use std::sync::Mutex;

use janusllm::generation::{GenerationParams, GenerationResult};

use super::{EngineError, TextGenerator};
use crate::config::ServerConfig;

/// Demonstration backend: no model weights, canned completions.
///
/// Stands in for the llama.cpp binding so the API surface can be
/// exercised end to end on hosts that cannot load the model. It echoes
/// the latest user turn extracted from the prompt, honors stop
/// sequences and the token budget, and approximates token counts by
/// whitespace splitting.
pub struct DemoEngine {
    context_size: u32,
    model_size_mb: f64,
    // Real inference contexts are single-threaded; serialize here too
    // so the demo has the same blocking behavior under load.
    inference: Mutex<()>,
}

impl DemoEngine {
    pub fn new(config: &ServerConfig) -> Self {
        let model_size_mb = fs::metadata(&config.model_path)
            .map(|meta| (meta.len() as f64 / (1024.0 * 1024.0) * 100.0).round() / 100.0)
            .unwrap_or(0.0);

        DemoEngine {
            context_size: config.context_size,
            model_size_mb,
            inference: Mutex::new(()),
        }
    }

    /// Latest user turn in either prompt framing, or "Hello" when the
    /// prompt carries none.
    fn latest_user_fragment(prompt: &str) -> &str {
        if let Some(start) = prompt.rfind("\n\nHuman: ") {
            let fragment = &prompt[start + "\n\nHuman: ".len()..];
            return match fragment.find("\n\n") {
                Some(end) => &fragment[..end],
                None => fragment,
            };
        }
        if let Some(start) = prompt.rfind("<|im_start|>user\n") {
            let fragment = &prompt[start + "<|im_start|>user\n".len()..];
            return match fragment.find("<|im_end|>") {
                Some(end) => &fragment[..end],
                None => fragment,
            };
        }
        "Hello"
    }
}

impl TextGenerator for DemoEngine {
    fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<GenerationResult, EngineError> {
        let _guard = self
            .inference
            .lock()
            .map_err(|_| EngineError::Inference("inference context poisoned".to_string()))?;

        let mut text = format!(
            "This is a demo response to: {}",
            Self::latest_user_fragment(prompt)
        );

        // A real backend stops emission at the first stop sequence; the
        // demo truncates after the fact.
        for stop in &params.stop {
            if let Some(idx) = text.find(stop.as_str()) {
                text.truncate(idx);
            }
        }

        if self.token_count(&text) > params.max_tokens as usize {
            let words: Vec<&str> = text
                .split_whitespace()
                .take(params.max_tokens as usize)
                .collect();
            text = words.join(" ");
        }

        let prompt_tokens = self.token_count(prompt);
        let completion_tokens = self.token_count(&text);

        Ok(GenerationResult {
            text,
            prompt_tokens,
            completion_tokens,
        })
    }

    fn token_count(&self, text: &str) -> usize {
        text.split_whitespace().count()
    }

    fn is_ready(&self) -> bool {
        true
    }

    fn context_size(&self) -> u32 {
        self.context_size
    }

    fn model_size_mb(&self) -> f64 {
        self.model_size_mb
    }
}
