use crate::apis::anthropic::{
    MessagesContentBlock, MessagesResponse, MessagesRole, MessagesStopReason, MessagesUsage,
};
use crate::generation::GenerationResult;
use crate::transforms::lib::{clean_completion, synthetic_id};

pub const ANTHROPIC_ID_PREFIX: &str = "msg_";

/// Display-name table for the Anthropic surface.
///
/// Note the triple-l spelling: this table has always disagreed with the
/// OpenAI one and callers test against the literal strings, so the two
/// tables stay separate and verbatim.
fn display_name(requested_model: Option<&str>) -> &'static str {
    match requested_model.unwrap_or("default") {
        "smollm2-135m-instruct-gguf" => "smolllm2-135m-instruct",
        "smolllm2-135m-instruct-gguf" => "smolllm2-135m-instruct",
        _ => "smolllm2-135m-instruct",
    }
}

/// Wraps one generation result in the Anthropic message envelope.
pub fn to_messages_response(
    result: &GenerationResult,
    requested_model: Option<&str>,
) -> MessagesResponse {
    MessagesResponse {
        id: synthetic_id(ANTHROPIC_ID_PREFIX),
        obj_type: "message".to_string(),
        role: MessagesRole::Assistant,
        model: display_name(requested_model).to_string(),
        content: vec![MessagesContentBlock::Text {
            text: clean_completion(&result.text),
        }],
        stop_reason: MessagesStopReason::EndTurn,
        stop_sequence: None,
        usage: MessagesUsage {
            input_tokens: result.prompt_tokens,
            output_tokens: result.completion_tokens,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transforms::response::to_openai::to_chat_completions_response;

    fn sample_result() -> GenerationResult {
        GenerationResult {
            text: "Paris is the capital of France.".to_string(),
            prompt_tokens: 12,
            completion_tokens: 7,
        }
    }

    #[test]
    fn test_envelope_fields() {
        let response = to_messages_response(&sample_result(), None);

        assert!(response.id.starts_with(ANTHROPIC_ID_PREFIX));
        assert_eq!(response.id.len(), ANTHROPIC_ID_PREFIX.len() + 12);
        assert_eq!(response.obj_type, "message");
        assert_eq!(response.role, MessagesRole::Assistant);
        assert_eq!(response.model, "smolllm2-135m-instruct");
        assert_eq!(response.stop_reason, MessagesStopReason::EndTurn);
        assert!(response.stop_sequence.is_none());

        assert_eq!(response.content.len(), 1);
        let MessagesContentBlock::Text { text } = &response.content[0];
        assert_eq!(text, "Paris is the capital of France.");

        assert_eq!(response.usage.input_tokens, 12);
        assert_eq!(response.usage.output_tokens, 7);
    }

    #[test]
    fn test_model_name_tables_diverge_across_protocols() {
        let result = sample_result();
        let openai = to_chat_completions_response(&result, Some("anything"));
        let anthropic = to_messages_response(&result, Some("anything"));

        assert_eq!(openai.model, "smollm2-135m-instruct");
        assert_eq!(anthropic.model, "smolllm2-135m-instruct");
        assert_ne!(openai.model, anthropic.model);
    }

    #[test]
    fn test_both_adapters_report_same_completion_count() {
        let result = sample_result();
        let openai = to_chat_completions_response(&result, None);
        let anthropic = to_messages_response(&result, None);

        assert_eq!(
            openai.usage.completion_tokens,
            anthropic.usage.output_tokens
        );
        assert_eq!(openai.usage.prompt_tokens, anthropic.usage.input_tokens);
    }

    #[test]
    fn test_empty_completion_falls_back() {
        let result = GenerationResult {
            text: "<|im_end|>".to_string(),
            prompt_tokens: 1,
            completion_tokens: 0,
        };
        let response = to_messages_response(&result, None);
        let MessagesContentBlock::Text { text } = &response.content[0];
        assert_eq!(text, crate::transforms::lib::EMPTY_COMPLETION_FALLBACK);
    }
}
