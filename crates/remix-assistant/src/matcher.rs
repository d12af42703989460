//! Keyword matcher over the knowledge catalog.
//!
//! Two phases, both case-insensitive:
//!
//! 1. **Substring**: the first entry whose question contains the whole query
//!    wins immediately.
//! 2. **Scoring**: every query token longer than two characters adds
//!    [`QUESTION_MATCH_WEIGHT`] when some question token contains it and
//!    [`ANSWER_MATCH_WEIGHT`] when some answer token contains it. The highest
//!    score wins (first entry on ties). Scores at or below
//!    [`FALLBACK_SCORE_CEILING`] yield the fallback reply.
//!
//! Matching is pure and deterministic. There is no stemming, stopword list,
//! or punctuation normalization.

use std::sync::Arc;

use remix_core::types::Link;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::knowledge::KnowledgeBase;

/// Points for a query token found inside a question token.
pub const QUESTION_MATCH_WEIGHT: u32 = 2;
/// Points for a query token found inside an answer token.
pub const ANSWER_MATCH_WEIGHT: u32 = 1;
/// Best scores at or below this value are too weak to answer with.
pub const FALLBACK_SCORE_CEILING: u32 = 1;
/// Query tokens with this many characters or fewer are ignored.
pub const NOISE_TOKEN_MAX_CHARS: usize = 2;

pub const FALLBACK_ANSWER: &str = "I don't have specific information about that. You might \
find what you're looking for in our Help Center, or you can contact our support team for \
personalized assistance.";

/// The answer half of an assistant turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub answer: String,
    pub links: Vec<Link>,
}

impl Reply {
    pub fn new(answer: impl Into<String>, links: Vec<Link>) -> Self {
        Self {
            answer: answer.into(),
            links,
        }
    }

    /// The low-confidence reply.
    pub fn fallback() -> Self {
        Self::new(
            FALLBACK_ANSWER,
            vec![
                Link::new("Help Center", "/help"),
                Link::new("Contact Support", "/contact"),
            ],
        )
    }
}

/// How a query was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Phase 1 hit: the entry's question contains the query.
    Exact { index: usize },
    /// Phase 2 winner with a score above the fallback ceiling.
    Scored { index: usize, score: u32 },
    /// Nothing scored above the ceiling.
    Fallback { best_score: u32 },
}

/// Lowercased view of one entry, computed once per catalog.
#[derive(Debug)]
struct IndexedEntry {
    question: String,
    question_tokens: Vec<String>,
    answer_tokens: Vec<String>,
}

/// Answers queries against a shared catalog.
#[derive(Debug, Clone)]
pub struct Matcher {
    knowledge: Arc<KnowledgeBase>,
    index: Arc<Vec<IndexedEntry>>,
}

impl Matcher {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        let index = knowledge
            .entries()
            .iter()
            .map(|e| {
                let question = e.question.to_lowercase();
                let question_tokens = question.split_whitespace().map(str::to_string).collect();
                let answer_tokens = e
                    .answer
                    .to_lowercase()
                    .split_whitespace()
                    .map(str::to_string)
                    .collect();
                IndexedEntry {
                    question,
                    question_tokens,
                    answer_tokens,
                }
            })
            .collect();

        Self {
            knowledge,
            index: Arc::new(index),
        }
    }

    pub fn knowledge(&self) -> &Arc<KnowledgeBase> {
        &self.knowledge
    }

    /// Decide which entry (if any) answers `query`.
    pub fn resolve(&self, query: &str) -> MatchOutcome {
        let query = query.to_lowercase();

        if let Some(index) = self.index.iter().position(|e| e.question.contains(&query)) {
            return MatchOutcome::Exact { index };
        }

        let tokens = significant_tokens(&query);

        let mut best: Option<usize> = None;
        let mut best_score = 0;
        for (index, entry) in self.index.iter().enumerate() {
            let score = score_tokens(&tokens, entry);
            if score > best_score {
                best_score = score;
                best = Some(index);
            }
        }

        match best {
            Some(index) if best_score > FALLBACK_SCORE_CEILING => MatchOutcome::Scored {
                index,
                score: best_score,
            },
            _ => MatchOutcome::Fallback { best_score },
        }
    }

    /// Answer `query`, falling back to the fixed low-confidence reply.
    pub fn lookup(&self, query: &str) -> Reply {
        let outcome = self.resolve(query);
        debug!(?outcome, "Knowledge lookup");

        let index = match outcome {
            MatchOutcome::Exact { index } | MatchOutcome::Scored { index, .. } => index,
            MatchOutcome::Fallback { .. } => return Reply::fallback(),
        };

        match self.knowledge.get(index) {
            Some(entry) => Reply::new(entry.answer.clone(), entry.links.clone()),
            None => Reply::fallback(),
        }
    }

    /// Score of one entry for `query`, for diagnostics and tests.
    pub fn score(&self, query: &str, entry_index: usize) -> Option<u32> {
        let query = query.to_lowercase();
        let tokens = significant_tokens(&query);
        self.index.get(entry_index).map(|e| score_tokens(&tokens, e))
    }
}

fn significant_tokens(query: &str) -> Vec<&str> {
    query
        .split_whitespace()
        .filter(|t| t.chars().count() > NOISE_TOKEN_MAX_CHARS)
        .collect()
}

fn score_tokens(tokens: &[&str], entry: &IndexedEntry) -> u32 {
    tokens
        .iter()
        .map(|token| {
            let mut points = 0;
            if entry.question_tokens.iter().any(|w| w.contains(*token)) {
                points += QUESTION_MATCH_WEIGHT;
            }
            if entry.answer_tokens.iter().any(|w| w.contains(*token)) {
                points += ANSWER_MATCH_WEIGHT;
            }
            points
        })
        .sum()
}

/// One-off lookup without keeping a [`Matcher`] around.
pub fn lookup(knowledge: &Arc<KnowledgeBase>, query: &str) -> Reply {
    Matcher::new(Arc::clone(knowledge)).lookup(query)
}
