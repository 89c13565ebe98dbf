pub mod chat_completions;
pub mod info;
pub mod messages;
pub mod models;


use std::sync::Arc;

use bytes::Bytes;
use http_body_util::{combinators::BoxBody, BodyExt, Empty, Full};
use hyper::body::Body;
use hyper::{Method, Request, Response, StatusCode};
use janusllm::generation::{GenerationParams, GenerationResult};
use janusllm::transforms::request::CanonicalPrompt;
use janusllm::{CHAT_COMPLETIONS_PATH, MESSAGES_PATH};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ServerConfig;
use crate::engine::TextGenerator;
use crate::errors::GatewayError;

pub(crate) fn full<T: Into<Bytes>>(chunk: T) -> BoxBody<Bytes, hyper::Error> {
    Full::new(chunk.into())
        .map_err(|never| match never {})
        .boxed()
}

pub(crate) fn empty() -> BoxBody<Bytes, hyper::Error> {
    Empty::<Bytes>::new()
        .map_err(|never| match never {})
        .boxed()
}

pub(crate) fn json_response<T: Serialize>(value: &T) -> Response<BoxBody<Bytes, hyper::Error>> {
    match serde_json::to_string(value) {
        Ok(json) => Response::builder()
            .status(StatusCode::OK)
            .header("Content-Type", "application/json")
            .body(full(json))
            .unwrap(),
        Err(err) => {
            warn!(error = %err, "failed to serialize response body");
            GatewayError::Internal.into_openai_response()
        }
    }
}

/// Routes one inbound request to its handler.
///
/// Generic over the request body so tests can drive it with in-memory
/// bodies; the binary instantiates it with `hyper::body::Incoming`.
pub async fn route<B>(
    req: Request<B>,
    engine: Arc<dyn TextGenerator>,
    config: Arc<ServerConfig>,
) -> Response<BoxBody<Bytes, hyper::Error>>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    let (parts, body) = req.into_parts();
    let path = parts.uri.path().to_string();

    match (&parts.method, path.as_str()) {
        (&Method::POST, CHAT_COMPLETIONS_PATH) => match read_body(body).await {
            Ok(bytes) => chat_completions::completions(&bytes, engine, &config).await,
            Err(err) => err.into_openai_response(),
        },
        (&Method::POST, MESSAGES_PATH) => match read_body(body).await {
            Ok(bytes) => messages::messages(&bytes, engine, &config).await,
            Err(err) => err.into_anthropic_response(),
        },
        (&Method::GET, "/v1/models") => models::list_models(),
        (&Method::GET, p) if p.starts_with("/v1/model/") => {
            models::get_model(&p["/v1/model/".len()..])
        }
        (&Method::GET, "/health") => info::health(engine.as_ref(), &config),
        (&Method::GET, "/") => info::service_descriptor(engine.as_ref()),
        _ => {
            debug!(method = %parts.method, path = %path, "no route found");
            let mut not_found = Response::new(empty());
            *not_found.status_mut() = StatusCode::NOT_FOUND;
            not_found
        }
    }
}

async fn read_body<B>(body: B) -> Result<Bytes, GatewayError>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    match body.collect().await {
        Ok(collected) => Ok(collected.to_bytes()),
        Err(err) => {
            warn!(error = %err, "failed to read request body");
            Err(GatewayError::InvalidRequest(
                "failed to read request body".to_string(),
            ))
        }
    }
}

/// The single generation invocation for a request.
///
/// Generation is one synchronous, non-interruptible unit of work, so it
/// is dispatched off the request-accept path. There are no retries: a
/// failed generation is reported, not resubmitted.
pub(crate) async fn generate_blocking(
    engine: Arc<dyn TextGenerator>,
    prompt: CanonicalPrompt,
    params: GenerationParams,
) -> Result<GenerationResult, GatewayError> {
    let handle = tokio::task::spawn_blocking(move || engine.generate(prompt.as_str(), &params));

    match handle.await {
        Ok(Ok(result)) => Ok(result),
        Ok(Err(err)) => {
            warn!(error = %err, "generation failed");
            Err(GatewayError::GenerationFailure)
        }
        Err(err) => {
            warn!(error = %err, "generation task failed to run");
            Err(GatewayError::Internal)
        }
    }
}
