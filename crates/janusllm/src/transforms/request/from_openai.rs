use super::CanonicalPrompt;
use crate::apis::openai::ChatCompletionsRequest;
use crate::apis::{Message, Role};
use crate::transforms::lib::{FRAME_CLOSE, FRAME_OPEN};

/// Renders messages as ChatML frames, the instruction format the
/// backing model was tuned on.
///
/// Tool and function messages have no native frame in this format and
/// render as `assistant`; unrecognized roles render as `user` rather
/// than being rejected. A final open `assistant` frame primes the
/// model; blocks are newline-joined and the prompt ends with a single
/// trailing newline.
pub fn render_chatml(messages: &[Message]) -> CanonicalPrompt {
    let mut blocks: Vec<String> = Vec::with_capacity(messages.len() + 1);

    for message in messages {
        let frame_role = match message.role {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant | Role::Tool | Role::Function => "assistant",
            Role::Unknown => "user",
        };
        blocks.push(format!(
            "{FRAME_OPEN}{frame_role}\n{}{FRAME_CLOSE}",
            message.content
        ));
    }

    blocks.push(format!("{FRAME_OPEN}assistant"));

    CanonicalPrompt::from(blocks.join("\n") + "\n")
}

impl From<&ChatCompletionsRequest> for CanonicalPrompt {
    fn from(request: &ChatCompletionsRequest) -> Self {
        render_chatml(&request.messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_and_user_render_exactly() {
        let messages = vec![
            Message::new(Role::System, "S"),
            Message::new(Role::User, "U"),
        ];
        let prompt = render_chatml(&messages);
        assert_eq!(
            prompt.as_str(),
            "<|im_start|>system\nS<|im_end|>\n<|im_start|>user\nU<|im_end|>\n<|im_start|>assistant\n"
        );
    }

    #[test]
    fn test_tool_and_function_use_assistant_frame() {
        for role in [Role::Tool, Role::Function] {
            let prompt = render_chatml(&[Message::new(role, "result")]);
            assert!(prompt
                .as_str()
                .starts_with("<|im_start|>assistant\nresult<|im_end|>"));
        }
    }

    #[test]
    fn test_unknown_role_uses_user_frame() {
        // "moderator" deserializes to Role::Unknown.
        let message: Message =
            serde_json::from_str(r#"{"role":"moderator","content":"quiet"}"#).unwrap();
        let prompt = render_chatml(&[message]);
        assert!(prompt
            .as_str()
            .starts_with("<|im_start|>user\nquiet<|im_end|>"));
    }

    #[test]
    fn test_assistant_history_is_preserved_in_order() {
        let messages = vec![
            Message::new(Role::User, "one"),
            Message::new(Role::Assistant, "two"),
            Message::new(Role::User, "three"),
        ];
        let prompt = render_chatml(&messages);
        assert_eq!(
            prompt.as_str(),
            "<|im_start|>user\none<|im_end|>\n\
             <|im_start|>assistant\ntwo<|im_end|>\n\
             <|im_start|>user\nthree<|im_end|>\n\
             <|im_start|>assistant\n"
        );
    }

    #[test]
    fn test_single_role_sequence_is_accepted() {
        let messages = vec![
            Message::new(Role::Assistant, "a"),
            Message::new(Role::Assistant, "b"),
        ];
        let prompt = render_chatml(&messages);
        assert!(prompt.as_str().ends_with("<|im_start|>assistant\n"));
    }
}
