use bytes::Bytes;
use http_body_util::{combinators::BoxBody, BodyExt, Full};
use hyper::{Error as HyperError, Response, StatusCode};
use janusllm::generation::ParamsError;
use serde_json::json;
use thiserror::Error;

/// Request-level failures, mapped onto each protocol's error body.
///
/// Client-side failures carry their message outward; server-side ones
/// surface a generic message only, with detail logged at the point the
/// error was raised.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("{0}")]
    InvalidParameter(String),

    #[error("text generation failed")]
    GenerationFailure,

    #[error("internal server error")]
    Internal,
}

impl From<ParamsError> for GatewayError {
    fn from(err: ParamsError) -> Self {
        GatewayError::InvalidParameter(err.to_string())
    }
}

impl GatewayError {
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::InvalidRequest(_) | GatewayError::InvalidParameter(_) => {
                StatusCode::BAD_REQUEST
            }
            GatewayError::GenerationFailure | GatewayError::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn openai_error_type(&self) -> &'static str {
        match self {
            GatewayError::InvalidRequest(_) | GatewayError::InvalidParameter(_) => {
                "invalid_request_error"
            }
            GatewayError::GenerationFailure | GatewayError::Internal => "server_error",
        }
    }

    fn anthropic_error_type(&self) -> &'static str {
        match self {
            GatewayError::InvalidRequest(_) | GatewayError::InvalidParameter(_) => {
                "invalid_request_error"
            }
            GatewayError::GenerationFailure | GatewayError::Internal => "api_error",
        }
    }

    /// Error body shaped for OpenAI-protocol callers (also used on the
    /// GET endpoints).
    pub fn into_openai_response(self) -> Response<BoxBody<Bytes, HyperError>> {
        let body = json!({
            "error": {
                "type": self.openai_error_type(),
                "message": self.to_string(),
            }
        });
        error_response(self.status(), body)
    }

    /// Error body shaped for Anthropic-protocol callers.
    pub fn into_anthropic_response(self) -> Response<BoxBody<Bytes, HyperError>> {
        let body = json!({
            "type": "error",
            "error": {
                "type": self.anthropic_error_type(),
                "message": self.to_string(),
            }
        });
        error_response(self.status(), body)
    }
}

fn error_response(
    status: StatusCode,
    body: serde_json::Value,
) -> Response<BoxBody<Bytes, HyperError>> {
    let boxed_body = Full::new(Bytes::from(body.to_string()))
        .map_err(|never| match never {})
        .boxed();

    Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(boxed_body)
        .unwrap_or_else(|_| {
            Response::new(
                Full::new(Bytes::from_static(b"Internal Error"))
                    .map_err(|never| match never {})
                    .boxed(),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_invalid_request_openai_shape() {
        let err = GatewayError::InvalidRequest("messages field is required".to_string());
        let response = err.into_openai_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

        assert_eq!(body["error"]["type"], "invalid_request_error");
        assert_eq!(body["error"]["message"], "messages field is required");
    }

    #[tokio::test]
    async fn test_invalid_parameter_anthropic_shape() {
        let err = GatewayError::InvalidParameter("temperature out of range".to_string());
        let response = err.into_anthropic_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

        assert_eq!(body["type"], "error");
        assert_eq!(body["error"]["type"], "invalid_request_error");
        assert_eq!(body["error"]["message"], "temperature out of range");
    }

    #[tokio::test]
    async fn test_server_errors_use_generic_message() {
        let response = GatewayError::GenerationFailure.into_openai_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

        assert_eq!(body["error"]["type"], "server_error");
        assert_eq!(body["error"]["message"], "text generation failed");

        let response = GatewayError::Internal.into_anthropic_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(body["error"]["type"], "api_error");
    }

    #[test]
    fn test_params_error_maps_to_invalid_parameter() {
        let err = ParamsError::OutOfRange {
            field: "temperature",
            min: 0.0,
            max: 2.0,
            value: 3.5,
        };
        let gateway_err = GatewayError::from(err);
        assert!(matches!(gateway_err, GatewayError::InvalidParameter(_)));
        assert_eq!(gateway_err.status(), StatusCode::BAD_REQUEST);
    }
}
