use std::sync::Arc;

use bytes::Bytes;
use http_body_util::combinators::BoxBody;
use hyper::Response;
use janusllm::apis::anthropic::MessagesRequest;
use janusllm::generation::GenerationParams;
use janusllm::transforms::request::CanonicalPrompt;
use janusllm::transforms::response::to_messages_response;
use tracing::{debug, info};

use super::{generate_blocking, json_response};
use crate::config::ServerConfig;
use crate::engine::TextGenerator;
use crate::errors::GatewayError;

/// POST /v1/messages (Anthropic surface).
pub async fn messages(
    body: &Bytes,
    engine: Arc<dyn TextGenerator>,
    config: &ServerConfig,
) -> Response<BoxBody<Bytes, hyper::Error>> {
    let request = match MessagesRequest::try_from(&body[..]) {
        Ok(request) => request,
        Err(err) => {
            info!(error = %err, "rejected unparseable messages request");
            return GatewayError::InvalidRequest(format!("failed to parse request: {err}"))
                .into_anthropic_response();
        }
    };

    if request.messages.is_empty() {
        return GatewayError::InvalidRequest("messages field is required".to_string())
            .into_anthropic_response();
    }

    let params = match GenerationParams::resolve(request.sampling(), &config.generation) {
        Ok(params) => params,
        Err(err) => return GatewayError::from(err).into_anthropic_response(),
    };

    let prompt = CanonicalPrompt::from(&request);
    debug!(
        messages = request.messages.len(),
        prompt_bytes = prompt.as_str().len(),
        "built human/assistant prompt"
    );

    match generate_blocking(engine, prompt, params).await {
        Ok(result) => json_response(&to_messages_response(&result, request.model.as_deref())),
        Err(err) => err.into_anthropic_response(),
    }
}
