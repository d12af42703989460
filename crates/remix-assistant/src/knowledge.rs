//! Knowledge catalog: the fixed set of question/answer/links entries the
//! matcher searches.
//!
//! A [`KnowledgeBase`] is immutable once built and is shared between
//! conversations behind an `Arc`; no locking is needed to read it.

use std::path::Path;

use remix_core::types::Link;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog;
use crate::error::AssistantError;

/// One FAQ entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub question: String,
    pub answer: String,
    /// Follow-up references, in display order.
    #[serde(default)]
    pub links: Vec<Link>,
}

impl KnowledgeEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>, links: Vec<Link>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            links,
        }
    }
}

/// Read-only, ordered catalog of knowledge entries.
///
/// Catalog order matters: the substring phase of the matcher returns the
/// first hit, and the scoring phase keeps the first entry on ties.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
}

impl KnowledgeBase {
    /// The built-in VideoRemix.vip FAQ.
    pub fn builtin() -> Self {
        Self {
            entries: catalog::builtin_entries(),
        }
    }

    /// Build a catalog from explicit entries, validating each one.
    pub fn from_entries(entries: Vec<KnowledgeEntry>) -> Result<Self, AssistantError> {
        if entries.is_empty() {
            return Err(AssistantError::EmptyCatalog);
        }
        for (index, entry) in entries.iter().enumerate() {
            validate_entry(index, entry)?;
        }
        Ok(Self { entries })
    }

    /// Parse a JSON array of entries.
    pub fn from_json_str(json: &str) -> Result<Self, AssistantError> {
        let entries: Vec<KnowledgeEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Load a JSON catalog from disk.
    pub fn from_json_file(path: &Path) -> Result<Self, AssistantError> {
        let content = std::fs::read_to_string(path)?;
        let kb = Self::from_json_str(&content)?;
        info!(
            path = %path.display(),
            entries = kb.len(),
            "Knowledge catalog loaded"
        );
        Ok(kb)
    }

    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&KnowledgeEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize the catalog as pretty JSON (same shape `from_json_str` reads).
    pub fn to_json_pretty(&self) -> Result<String, AssistantError> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }
}

fn validate_entry(index: usize, entry: &KnowledgeEntry) -> Result<(), AssistantError> {
    let invalid = |reason: &str| AssistantError::InvalidEntry {
        index,
        reason: reason.to_string(),
    };
    if entry.question.trim().is_empty() {
        return Err(invalid("question is empty"));
    }
    if entry.answer.trim().is_empty() {
        return Err(invalid("answer is empty"));
    }
    if entry
        .links
        .iter()
        .any(|l| l.text.trim().is_empty() || l.url.trim().is_empty())
    {
        return Err(invalid("link text and url must be non-empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn entry(q: &str, a: &str) -> KnowledgeEntry {
        KnowledgeEntry::new(q, a, vec![])
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let kb = KnowledgeBase::builtin();
        assert!(kb.len() >= 20);
        let rebuilt = KnowledgeBase::from_entries(kb.entries().to_vec());
        assert!(rebuilt.is_ok());
    }

    #[test]
    fn test_builtin_first_entry_is_product_overview() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.get(0).unwrap().question, "What is VideoRemix.vip?");
    }

    #[test]
    fn test_from_entries_rejects_empty_catalog() {
        let err = KnowledgeBase::from_entries(vec![]).unwrap_err();
        assert!(matches!(err, AssistantError::EmptyCatalog));
    }

    #[test]
    fn test_from_entries_rejects_blank_question() {
        let err = KnowledgeBase::from_entries(vec![entry("ok?", "fine"), entry("  ", "answer")])
            .unwrap_err();
        match err {
            AssistantError::InvalidEntry { index, reason } => {
                assert_eq!(index, 1);
                assert!(reason.contains("question"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_from_entries_rejects_blank_answer() {
        let err = KnowledgeBase::from_entries(vec![entry("question?", "")]).unwrap_err();
        assert!(matches!(err, AssistantError::InvalidEntry { index: 0, .. }));
    }

    #[test]
    fn test_from_entries_rejects_blank_link() {
        let bad = KnowledgeEntry::new("q?", "a", vec![Link::new("Docs", "")]);
        assert!(KnowledgeBase::from_entries(vec![bad]).is_err());
    }

    #[test]
    fn test_from_json_str_preserves_order_and_links() {
        let json = r#"[
            {"question": "First?", "answer": "One", "links": [{"text": "A", "url": "/a"}, {"text": "B", "url": "/b"}]},
            {"question": "Second?", "answer": "Two"}
        ]"#;
        let kb = KnowledgeBase::from_json_str(json).unwrap();
        assert_eq!(kb.len(), 2);
        assert_eq!(kb.get(0).unwrap().links[1].url, "/b");
        assert!(kb.get(1).unwrap().links.is_empty());
    }

    #[test]
    fn test_from_json_str_malformed() {
        let err = KnowledgeBase::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, AssistantError::CatalogParse(_)));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"[{"question": "Where?", "answer": "Here"}]"#)
            .unwrap();
        let kb = KnowledgeBase::from_json_file(file.path()).unwrap();
        assert_eq!(kb.get(0).unwrap().answer, "Here");
    }

    #[test]
    fn test_from_json_file_missing() {
        let err = KnowledgeBase::from_json_file(Path::new("/no/such/faq.json")).unwrap_err();
        assert!(matches!(err, AssistantError::CatalogIo(_)));
    }

    #[test]
    fn test_json_export_reimports() {
        let kb = KnowledgeBase::builtin();
        let json = kb.to_json_pretty().unwrap();
        let back = KnowledgeBase::from_json_str(&json).unwrap();
        assert_eq!(back.entries(), kb.entries());
    }
}
