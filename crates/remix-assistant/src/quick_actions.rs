//! Quick action shortcuts shown before the first user message.
//!
//! Selecting one sends a canned request and gets a canned reply; the general
//! matcher is not consulted.

use remix_core::types::Link;
use serde::{Deserialize, Serialize};

use crate::matcher::Reply;

pub const CREATE_VIDEO_ANSWER: &str = "Let's make something great! Start from a template or \
a blank canvas, add your footage, images or script, and the AI editor will assemble a \
first cut for you. You can fine-tune scenes, text and music before exporting.";

pub const BROWSE_TEMPLATES_ANSWER: &str = "Our template library has over 500 professionally \
designed templates for every occasion: social media ads, explainer videos, product demos, \
intros and more. Each one is fully customizable, so you can make it your own in minutes.";

pub const EXPLORE_AI_TOOLS_ANSWER: &str = "VideoRemix comes with a full AI toolkit: \
script-to-video generation, automatic captions, AI voiceovers in over 40 languages, smart \
scene detection and background removal. Pick a tool to see it in action.";

pub const VIEW_PRICING_ANSWER: &str = "You can start on the Free plan at no cost. Pro unlocks \
HD and 4K exports without watermarks and the full template library, and Business adds team \
workspaces, brand kits and priority support. Annual billing saves 20%.";

pub const TALK_TO_SUPPORT_ANSWER: &str = "Our support team is available 24/7 by live chat and \
email. Tell us what you need and we'll get back to you quickly, or browse the Help Center \
for instant answers.";

pub const GENERIC_ACTION_ANSWER: &str =
    "I can help you with that! Follow the link below to get started.";

/// A predefined shortcut button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAction {
    /// Button label, also the key for the canned reply.
    pub text: String,
    /// In-app path the action relates to.
    pub target: String,
}

impl QuickAction {
    pub fn new(text: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            target: target.into(),
        }
    }

    /// What the visitor "says" when selecting this action.
    pub fn user_message(&self) -> String {
        format!("I want to {}", self.text.to_lowercase())
    }
}

/// The five actions offered by the widget, in display order.
pub fn default_quick_actions() -> Vec<QuickAction> {
    vec![
        QuickAction::new("Create a video", "/create"),
        QuickAction::new("Browse templates", "/templates"),
        QuickAction::new("Explore AI tools", "/features/ai-tools"),
        QuickAction::new("View pricing", "/pricing"),
        QuickAction::new("Talk to support", "/contact"),
    ]
}

/// Canned reply for `action`, keyed on its label.
///
/// Unknown labels get a generic acknowledgement linking to the action's own
/// target.
pub fn canned_reply(action: &QuickAction) -> Reply {
    match action.text.as_str() {
        "Create a video" => Reply::new(
            CREATE_VIDEO_ANSWER,
            vec![
                Link::new("Open the Editor", "/create"),
                Link::new("Browse Templates", "/templates"),
            ],
        ),
        "Browse templates" => Reply::new(
            BROWSE_TEMPLATES_ANSWER,
            vec![
                Link::new("Browse Templates", "/templates"),
                Link::new("Template Guide", "/help/templates"),
            ],
        ),
        "Explore AI tools" => Reply::new(
            EXPLORE_AI_TOOLS_ANSWER,
            vec![
                Link::new("AI Tools", "/features/ai-tools"),
                Link::new("Script to Video", "/features/script-to-video"),
            ],
        ),
        "View pricing" => Reply::new(
            VIEW_PRICING_ANSWER,
            vec![
                Link::new("View Pricing", "/pricing"),
                Link::new("Start Free Trial", "/signup"),
            ],
        ),
        "Talk to support" => Reply::new(
            TALK_TO_SUPPORT_ANSWER,
            vec![
                Link::new("Contact Support", "/contact"),
                Link::new("Help Center", "/help"),
            ],
        ),
        _ => Reply::new(
            GENERIC_ACTION_ANSWER,
            vec![Link::new(action.text.clone(), action.target.clone())],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_actions_order() {
        let labels: Vec<String> = default_quick_actions().into_iter().map(|a| a.text).collect();
        assert_eq!(
            labels,
            vec![
                "Create a video",
                "Browse templates",
                "Explore AI tools",
                "View pricing",
                "Talk to support"
            ]
        );
    }

    #[test]
    fn test_user_message_lowercases_label() {
        let action = QuickAction::new("Explore AI tools", "/features/ai-tools");
        assert_eq!(action.user_message(), "I want to explore ai tools");
    }

    #[test]
    fn test_every_default_action_has_specific_reply() {
        for action in default_quick_actions() {
            let reply = canned_reply(&action);
            assert_ne!(reply.answer, GENERIC_ACTION_ANSWER, "{}", action.text);
            assert!(!reply.links.is_empty());
        }
    }

    #[test]
    fn test_browse_templates_reply() {
        let reply = canned_reply(&QuickAction::new("Browse templates", "/templates"));
        assert_eq!(reply.answer, BROWSE_TEMPLATES_ANSWER);
        assert_eq!(reply.links[0], Link::new("Browse Templates", "/templates"));
    }

    #[test]
    fn test_reply_keyed_on_label_not_target() {
        let reply = canned_reply(&QuickAction::new("View pricing", "/somewhere-else"));
        assert_eq!(reply.answer, VIEW_PRICING_ANSWER);
    }

    #[test]
    fn test_unknown_action_links_to_own_target() {
        let action = QuickAction::new("Join a webinar", "/webinars");
        let reply = canned_reply(&action);
        assert_eq!(reply.answer, GENERIC_ACTION_ANSWER);
        assert_eq!(reply.links, vec![Link::new("Join a webinar", "/webinars")]);
    }

    #[test]
    fn test_label_match_is_case_sensitive() {
        let reply = canned_reply(&QuickAction::new("browse templates", "/templates"));
        assert_eq!(reply.answer, GENERIC_ACTION_ANSWER);
    }
}
