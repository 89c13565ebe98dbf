//! Sampling-parameter policy and the canonical generation result.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_TOKENS_MIN: u32 = 1;
pub const MAX_TOKENS_MAX: u32 = 2048;
pub const TEMPERATURE_MIN: f32 = 0.0;
pub const TEMPERATURE_MAX: f32 = 2.0;
pub const TOP_P_MIN: f32 = 0.0;
pub const TOP_P_MAX: f32 = 1.0;

/// Default stop sequences, applied when a request supplies none.
///
/// The set covers the framing tokens of both prompt formats so a model
/// echoing either format's delimiters is cut off regardless of which
/// endpoint the request came in on. It is deliberately protocol-agnostic
/// and must stay shared between the two surfaces.
pub const DEFAULT_STOP_SEQUENCES: [&str; 8] = [
    "<|im_end|>",
    "<|im_start|>",
    "\nHuman:",
    "\nAssistant:",
    "\nSystem:",
    "User:",
    "Assistant:",
    "System:",
];

/// Sampling overrides as they arrive on the wire: every field optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestedParams {
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    pub stop: Option<Vec<String>>,
}

/// Process-wide sampling defaults, owned by server configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationDefaults {
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
}

impl Default for GenerationDefaults {
    fn default() -> Self {
        GenerationDefaults {
            max_tokens: 512,
            temperature: 0.7,
            top_p: 0.9,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParamsError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },
}

/// Fully resolved sampling parameters handed to the generation backend.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub stop: Vec<String>,
}

impl GenerationParams {
    /// Resolves request overrides against process defaults.
    ///
    /// Each numeric field is defaulted independently when absent and
    /// range-checked when present; an out-of-range value is a request
    /// validation failure, never silently clamped. A caller-supplied
    /// stop list is used verbatim (even when empty); only a missing
    /// list falls back to [`DEFAULT_STOP_SEQUENCES`].
    pub fn resolve(
        requested: RequestedParams,
        defaults: &GenerationDefaults,
    ) -> Result<Self, ParamsError> {
        let max_tokens = match requested.max_tokens {
            Some(value) if !(MAX_TOKENS_MIN..=MAX_TOKENS_MAX).contains(&value) => {
                return Err(ParamsError::OutOfRange {
                    field: "max_tokens",
                    min: f64::from(MAX_TOKENS_MIN),
                    max: f64::from(MAX_TOKENS_MAX),
                    value: f64::from(value),
                });
            }
            Some(value) => value,
            None => defaults.max_tokens,
        };

        let temperature = match requested.temperature {
            Some(value) if !(TEMPERATURE_MIN..=TEMPERATURE_MAX).contains(&value) => {
                return Err(ParamsError::OutOfRange {
                    field: "temperature",
                    min: f64::from(TEMPERATURE_MIN),
                    max: f64::from(TEMPERATURE_MAX),
                    value: f64::from(value),
                });
            }
            Some(value) => value,
            None => defaults.temperature,
        };

        let top_p = match requested.top_p {
            Some(value) if !(TOP_P_MIN..=TOP_P_MAX).contains(&value) => {
                return Err(ParamsError::OutOfRange {
                    field: "top_p",
                    min: f64::from(TOP_P_MIN),
                    max: f64::from(TOP_P_MAX),
                    value: f64::from(value),
                });
            }
            Some(value) => value,
            None => defaults.top_p,
        };

        let stop = requested
            .stop
            .unwrap_or_else(|| DEFAULT_STOP_SEQUENCES.iter().map(ToString::to_string).collect());

        Ok(GenerationParams {
            max_tokens,
            temperature,
            top_p,
            stop,
        })
    }
}

/// What the backend produced for one prompt.
///
/// The total is always derived, never stored, so the two usage
/// accountings reported to callers cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub text: String,
    pub prompt_tokens: usize,
    pub completion_tokens: usize,
}

impl GenerationResult {
    pub fn total_tokens(&self) -> usize {
        self.prompt_tokens + self.completion_tokens
    }
}
