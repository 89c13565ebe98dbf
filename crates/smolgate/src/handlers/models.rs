use bytes::Bytes;
use http_body_util::combinators::BoxBody;
use hyper::Response;
use janusllm::apis::openai::{ModelEntry, ModelList, ModelMetadata};

use super::json_response;

pub const MODEL_ID: &str = "smollm2-135m-instruct";
pub const MODEL_OWNER: &str = "HuggingFaceTB";

/// GET /v1/models: static single-model listing, OpenAI format.
pub fn list_models() -> Response<BoxBody<Bytes, hyper::Error>> {
    json_response(&ModelList {
        object: "list".to_string(),
        data: vec![ModelEntry {
            id: MODEL_ID.to_string(),
            object: "model".to_string(),
            created: 0,
            owned_by: MODEL_OWNER.to_string(),
        }],
    })
}

/// GET /v1/model/{id}: echoes the requested id with static metadata.
/// Unknown ids are not rejected; there is only one model either way.
pub fn get_model(model_id: &str) -> Response<BoxBody<Bytes, hyper::Error>> {
    json_response(&ModelMetadata {
        id: model_id.to_string(),
        object: "model".to_string(),
        created: 0,
        owned_by: MODEL_OWNER.to_string(),
        permission: vec![],
        root: model_id.to_string(),
        parent: None,
    })
}
