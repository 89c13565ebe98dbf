use crate::apis::openai::{
    AssistantMessage, ChatChoice, ChatCompletionsResponse, ChatUsage,
};
use crate::generation::GenerationResult;
use crate::transforms::lib::{clean_completion, current_timestamp, synthetic_id};

pub const OPENAI_ID_PREFIX: &str = "chatcmpl-";
pub const SYSTEM_FINGERPRINT: &str = "smolllm2_135m_gguf";

/// Display-name table for the OpenAI surface.
///
/// There is a single backend, so the requested model never changes what
/// runs; it only selects a display name to echo back. This table is
/// independent of the Anthropic one and the two intentionally disagree
/// on spelling; they must not be merged.
fn display_name(requested_model: Option<&str>) -> &'static str {
    match requested_model.unwrap_or("default") {
        "smollm2-135m-instruct-gguf" => "smollm2-135m-instruct",
        "smolllm2-135m-instruct-gguf" => "smollm2-135m-instruct",
        _ => "smollm2-135m-instruct",
    }
}

/// Wraps one generation result in the OpenAI chat-completion envelope.
pub fn to_chat_completions_response(
    result: &GenerationResult,
    requested_model: Option<&str>,
) -> ChatCompletionsResponse {
    ChatCompletionsResponse {
        id: synthetic_id(OPENAI_ID_PREFIX),
        object: "chat.completion".to_string(),
        created: current_timestamp(),
        model: display_name(requested_model).to_string(),
        system_fingerprint: SYSTEM_FINGERPRINT.to_string(),
        choices: vec![ChatChoice {
            index: 0,
            message: AssistantMessage {
                role: "assistant".to_string(),
                content: clean_completion(&result.text),
            },
            finish_reason: "stop".to_string(),
            logprobs: None,
        }],
        usage: ChatUsage {
            prompt_tokens: result.prompt_tokens,
            completion_tokens: result.completion_tokens,
            total_tokens: result.total_tokens(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> GenerationResult {
        GenerationResult {
            text: "Paris is the capital of France.".to_string(),
            prompt_tokens: 12,
            completion_tokens: 7,
        }
    }

    #[test]
    fn test_envelope_fields() {
        let response = to_chat_completions_response(&sample_result(), None);

        assert!(response.id.starts_with(OPENAI_ID_PREFIX));
        assert_eq!(response.id.len(), OPENAI_ID_PREFIX.len() + 12);
        assert_eq!(response.object, "chat.completion");
        assert_eq!(response.model, "smollm2-135m-instruct");
        assert_eq!(response.system_fingerprint, SYSTEM_FINGERPRINT);
        assert!(response.created > 0);

        assert_eq!(response.choices.len(), 1);
        let choice = &response.choices[0];
        assert_eq!(choice.index, 0);
        assert_eq!(choice.message.role, "assistant");
        assert_eq!(choice.message.content, "Paris is the capital of France.");
        assert_eq!(choice.finish_reason, "stop");

        assert_eq!(response.usage.prompt_tokens, 12);
        assert_eq!(response.usage.completion_tokens, 7);
        assert_eq!(response.usage.total_tokens, 19);
    }

    #[test]
    fn test_requested_model_is_ignored_for_naming() {
        for requested in [None, Some("gpt-4"), Some("smollm2-135m-instruct-gguf")] {
            let response = to_chat_completions_response(&sample_result(), requested);
            assert_eq!(response.model, "smollm2-135m-instruct");
        }
    }

    #[test]
    fn test_completion_is_cleaned_before_wrapping() {
        let result = GenerationResult {
            text: "  4<|im_end|>\n<|im_start|>user\nmore".to_string(),
            prompt_tokens: 1,
            completion_tokens: 1,
        };
        let response = to_chat_completions_response(&result, None);
        assert_eq!(response.choices[0].message.content, "4");
    }
}
