//! VideoRemix AI Assistant.
//!
//! Answers free-text visitor questions from a fixed FAQ catalog and drives
//! the turn-based chat widget: user message, simulated thinking delay,
//! assistant reply typed out character by character, follow-up links.

mod catalog;
pub mod engine;
pub mod error;
pub mod knowledge;
pub mod matcher;
pub mod pacing;
pub mod quick_actions;
pub mod reveal;

pub use engine::{ConversationEngine, SubmitOutcome};
pub use error::AssistantError;
pub use knowledge::{KnowledgeBase, KnowledgeEntry};
pub use matcher::{lookup, MatchOutcome, Matcher, Reply};
pub use pacing::{DelayProvider, InstantDelay, JitteredDelay};
pub use quick_actions::{canned_reply, default_quick_actions, QuickAction};
pub use reveal::Typewriter;
