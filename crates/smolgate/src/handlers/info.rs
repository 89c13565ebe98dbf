use bytes::Bytes;
use http_body_util::combinators::BoxBody;
use hyper::Response;
use janusllm::{CHAT_COMPLETIONS_PATH, MESSAGES_PATH};
use serde_json::json;

use super::{json_response, models};
use crate::config::ServerConfig;
use crate::engine::TextGenerator;

/// GET /health: load-balancer probe. Reports "loading" until the engine
/// says the model is ready.
pub fn health(
    engine: &dyn TextGenerator,
    config: &ServerConfig,
) -> Response<BoxBody<Bytes, hyper::Error>> {
    let model_loaded = engine.is_ready();

    json_response(&json!({
        "status": if model_loaded { "healthy" } else { "loading" },
        "model_path": config.model_path,
        "model_size_mb": engine.model_size_mb(),
        "model_loaded": model_loaded,
        "context_size": engine.context_size(),
        "api_version": "v1",
    }))
}

/// GET /: static service descriptor.
pub fn service_descriptor(engine: &dyn TextGenerator) -> Response<BoxBody<Bytes, hyper::Error>> {
    json_response(&json!({
        "name": "SmolLM2-135M-Instruct API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "OpenAI and Anthropic compatible API for SmolLM2-135M-Instruct",
        "model": {
            "name": models::MODEL_ID,
            "size_mb": engine.model_size_mb(),
            "parameters": "135M",
            "quantization": "Q4_K_M",
        },
        "endpoints": {
            "openai_chat": CHAT_COMPLETIONS_PATH,
            "anthropic_messages": MESSAGES_PATH,
            "models": "/v1/models",
            "health": "/health",
        },
    }))
}
