use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Enums
// =============================================================================

/// Author of a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Typed or selected by the visitor.
    User,
    /// Produced by the assistant.
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

// =============================================================================
// Value types
// =============================================================================

/// A follow-up reference shown under an answer.
///
/// `url` is an in-app navigation path (e.g. `/pricing`) handed to the router.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    pub text: String,
    pub url: String,
}

impl Link {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
        }
    }
}

/// One entry in a conversation transcript.
///
/// Messages are never mutated after they are appended, with one exception:
/// `reveal_complete` flips to `true` once the typewriter finishes showing an
/// assistant message. Links are only displayed when it is set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
    pub reveal_complete: bool,
}

impl Message {
    /// A visitor message. User messages are never typed out.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::User,
            content: content.into(),
            timestamp: Utc::now(),
            links: Vec::new(),
            reveal_complete: true,
        }
    }

    /// An assistant message, optionally still waiting for its reveal.
    pub fn assistant(content: impl Into<String>, links: Vec<Link>, revealed: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
            links,
            reveal_complete: revealed,
        }
    }

    /// Links that a presentation layer may show right now.
    pub fn visible_links(&self) -> &[Link] {
        if self.reveal_complete {
            &self.links
        } else {
            &[]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_display() {
        assert_eq!(Role::User.to_string(), "user");
        assert_eq!(Role::Assistant.to_string(), "assistant");
    }

    #[test]
    fn test_role_serde_snake_case() {
        let json = serde_json::to_string(&Role::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
        let role: Role = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(role, Role::User);
    }

    #[test]
    fn test_user_message_is_revealed() {
        let msg = Message::user("hello");
        assert_eq!(msg.role, Role::User);
        assert!(msg.reveal_complete);
        assert!(msg.links.is_empty());
    }

    #[test]
    fn test_visible_links_hidden_until_revealed() {
        let links = vec![Link::new("View Pricing", "/pricing")];
        let mut msg = Message::assistant("Plans start free.", links.clone(), false);
        assert!(msg.visible_links().is_empty());

        msg.reveal_complete = true;
        assert_eq!(msg.visible_links(), links.as_slice());
    }

    #[test]
    fn test_message_ids_unique() {
        let a = Message::user("a");
        let b = Message::user("a");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_message_json_omits_empty_links() {
        let msg = Message::user("hi");
        let json = serde_json::to_value(&msg).unwrap();
        assert!(json.get("links").is_none());
        assert_eq!(json["role"], "user");

        let back: Message = serde_json::from_value(json).unwrap();
        assert!(back.links.is_empty());
    }
}
