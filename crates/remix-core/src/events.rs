use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Message;

/// Events emitted by a conversation as its state changes.
///
/// Consumed by the presentation layer (terminal renderer, tests) through a
/// broadcast channel. Events are emitted after the state change they describe
/// has been applied, so a snapshot taken on receipt is already consistent.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AssistantEvent {
    /// A message was appended to the transcript.
    MessageAppended { message: Message },

    /// A user turn was accepted; the assistant is composing a reply.
    ResponsePending { turn_id: Uuid },

    /// The typewriter revealed more of an assistant message.
    RevealProgress {
        message_id: Uuid,
        visible_chars: usize,
        total_chars: usize,
    },

    /// An assistant message is fully shown and its links are visible.
    RevealCompleted { message_id: Uuid },

    /// Quick action buttons were hidden for the rest of the session.
    QuickActionsHidden,
}

impl AssistantEvent {
    /// Short name for structured logging.
    pub fn kind(&self) -> &'static str {
        match self {
            AssistantEvent::MessageAppended { .. } => "message_appended",
            AssistantEvent::ResponsePending { .. } => "response_pending",
            AssistantEvent::RevealProgress { .. } => "reveal_progress",
            AssistantEvent::RevealCompleted { .. } => "reveal_completed",
            AssistantEvent::QuickActionsHidden => "quick_actions_hidden",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind_names() {
        let msg = Message::user("hi");
        let id = msg.id;
        assert_eq!(
            AssistantEvent::MessageAppended { message: msg }.kind(),
            "message_appended"
        );
        assert_eq!(
            AssistantEvent::ResponsePending { turn_id: id }.kind(),
            "response_pending"
        );
        assert_eq!(
            AssistantEvent::RevealProgress {
                message_id: id,
                visible_chars: 1,
                total_chars: 2
            }
            .kind(),
            "reveal_progress"
        );
        assert_eq!(
            AssistantEvent::RevealCompleted { message_id: id }.kind(),
            "reveal_completed"
        );
        assert_eq!(AssistantEvent::QuickActionsHidden.kind(), "quick_actions_hidden");
    }

    #[test]
    fn test_event_serializes_with_variant_tag() {
        let event = AssistantEvent::RevealCompleted {
            message_id: Uuid::nil(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert!(json.get("RevealCompleted").is_some());
    }
}
