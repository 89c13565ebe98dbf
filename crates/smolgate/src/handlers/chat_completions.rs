use std::sync::Arc;

use bytes::Bytes;
use http_body_util::combinators::BoxBody;
use hyper::Response;
use janusllm::apis::openai::ChatCompletionsRequest;
use janusllm::generation::GenerationParams;
use janusllm::transforms::request::CanonicalPrompt;
use janusllm::transforms::response::to_chat_completions_response;
use tracing::{debug, info};

use super::{generate_blocking, json_response};
use crate::config::ServerConfig;
use crate::engine::TextGenerator;
use crate::errors::GatewayError;

/// POST /v1/chat/completions (OpenAI surface).
pub async fn completions(
    body: &Bytes,
    engine: Arc<dyn TextGenerator>,
    config: &ServerConfig,
) -> Response<BoxBody<Bytes, hyper::Error>> {
    let request = match ChatCompletionsRequest::try_from(&body[..]) {
        Ok(request) => request,
        Err(err) => {
            info!(error = %err, "rejected unparseable chat completions request");
            return GatewayError::InvalidRequest(format!("failed to parse request: {err}"))
                .into_openai_response();
        }
    };

    if request.messages.is_empty() {
        return GatewayError::InvalidRequest("messages field is required".to_string())
            .into_openai_response();
    }

    let params = match GenerationParams::resolve(request.sampling(), &config.generation) {
        Ok(params) => params,
        Err(err) => return GatewayError::from(err).into_openai_response(),
    };

    let prompt = CanonicalPrompt::from(&request);
    debug!(
        messages = request.messages.len(),
        prompt_bytes = prompt.as_str().len(),
        "built chatml prompt"
    );

    match generate_blocking(engine, prompt, params).await {
        Ok(result) => {
            json_response(&to_chat_completions_response(&result, request.model.as_deref()))
        }
        Err(err) => err.into_openai_response(),
    }
}
