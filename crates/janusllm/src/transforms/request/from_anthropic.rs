use super::CanonicalPrompt;
use crate::apis::anthropic::MessagesRequest;
use crate::apis::{Message, Role};

/// Renders messages as `Human:` / `Assistant:` turns.
///
/// System content is hoisted to the very front as a bare prefix no
/// matter where it appears in the sequence; hoisting uses
/// front-insertion, so of several system messages the last one ends up
/// first. Roles other than system, user, and assistant are dropped
/// silently. The prompt always ends with `\n\nAssistant:` to cue
/// generation.
pub fn render_human_assistant(messages: &[Message]) -> CanonicalPrompt {
    let mut parts: Vec<String> = Vec::with_capacity(messages.len() + 1);

    for message in messages {
        match message.role {
            Role::User => parts.push(format!("\n\nHuman: {}", message.content)),
            Role::Assistant => parts.push(format!("\n\nAssistant: {}", message.content)),
            Role::System => parts.insert(0, message.content.clone()),
            Role::Tool | Role::Function | Role::Unknown => {}
        }
    }

    parts.push("\n\nAssistant:".to_string());

    CanonicalPrompt::from(parts.concat())
}

impl From<&MessagesRequest> for CanonicalPrompt {
    fn from(request: &MessagesRequest) -> Self {
        render_human_assistant(&request.messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_user_message_renders_exactly() {
        let prompt = render_human_assistant(&[Message::new(Role::User, "Hi")]);
        assert_eq!(prompt.as_str(), "\n\nHuman: Hi\n\nAssistant:");
    }

    #[test]
    fn test_trailing_system_message_is_hoisted() {
        let messages = vec![
            Message::new(Role::User, "Hi"),
            Message::new(Role::System, "Be brief."),
        ];
        let prompt = render_human_assistant(&messages);
        assert_eq!(prompt.as_str(), "Be brief.\n\nHuman: Hi\n\nAssistant:");
    }

    #[test]
    fn test_last_system_message_lands_first() {
        let messages = vec![
            Message::new(Role::System, "first"),
            Message::new(Role::User, "Hi"),
            Message::new(Role::System, "second"),
        ];
        let prompt = render_human_assistant(&messages);
        assert_eq!(
            prompt.as_str(),
            "secondfirst\n\nHuman: Hi\n\nAssistant:"
        );
    }

    #[test]
    fn test_other_roles_are_dropped_silently() {
        let messages = vec![
            Message::new(Role::Tool, "tool output"),
            Message::new(Role::Unknown, "who knows"),
            Message::new(Role::User, "Hi"),
        ];
        let prompt = render_human_assistant(&messages);
        assert_eq!(prompt.as_str(), "\n\nHuman: Hi\n\nAssistant:");
    }

    #[test]
    fn test_multi_turn_conversation() {
        let messages = vec![
            Message::new(Role::User, "2+2?"),
            Message::new(Role::Assistant, "4"),
            Message::new(Role::User, "3+3?"),
        ];
        let prompt = render_human_assistant(&messages);
        assert_eq!(
            prompt.as_str(),
            "\n\nHuman: 2+2?\n\nAssistant: 4\n\nHuman: 3+3?\n\nAssistant:"
        );
    }
}
