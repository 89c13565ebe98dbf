//! The generation backend behind both protocol surfaces.
//!
//! The gateway treats the backend as an opaque capability: one
//! `generate` call per request, plus token counting for usage
//! accounting. Implementations are not assumed to be parallel-safe
//! internally; a single-threaded inference context is expected to
//! serialize concurrent generations behind its own lock, so concurrent
//! requests may block on each other rather than overlap.

pub mod demo;

pub use demo::DemoEngine;

use janusllm::generation::{GenerationParams, GenerationResult};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("model is not loaded yet")]
    NotReady,
    #[error("inference failed: {0}")]
    Inference(String),
}

pub trait TextGenerator: Send + Sync {
    /// Runs one synchronous generation for the given prompt. Blocking;
    /// callers dispatch it off the request-accept path.
    fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<GenerationResult, EngineError>;

    /// Token count for arbitrary text, used for usage accounting
    /// independently of generation.
    fn token_count(&self, text: &str) -> usize;

    /// Whether the model has finished loading.
    fn is_ready(&self) -> bool;

    fn context_size(&self) -> u32;

    fn model_size_mb(&self) -> f64;
}
