//! JSON-in-text structured fields.
//!
//! Tags, neighborhoods, benefits, process steps and FAQs are persisted as JSON
//! arrays inside text columns. Decoding is total: absent, empty or malformed
//! text yields an empty list so a bad record degrades a page instead of
//! failing the request. Encoding drops blank entries so the store never holds
//! placeholder rows left over from an empty form field.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub step: i32,
    pub title: String,
    pub description: String,
}

/// Entries that carry no content and must not be persisted.
pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Blank for Faq {
    fn is_blank(&self) -> bool {
        self.question.trim().is_empty()
    }
}

impl Blank for ProcessStep {
    fn is_blank(&self) -> bool {
        self.title.trim().is_empty()
    }
}

/// Decode a stored text column into its list shape. Never fails.
pub fn decode<T: DeserializeOwned>(raw: Option<&str>) -> Vec<T> {
    let text = match raw.map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => return Vec::new(),
    };

    match serde_json::from_str::<Option<Vec<T>>>(text) {
        Ok(items) => items.unwrap_or_default(),
        Err(e) => {
            tracing::debug!(error = %e, "malformed structured field, decoding as empty");
            Vec::new()
        }
    }
}

/// Drop blank entries, keeping order.
pub fn filter_blanks<T: Blank + Clone>(items: &[T]) -> Vec<T> {
    items.iter().filter(|item| !item.is_blank()).cloned().collect()
}

/// Encode a list for storage, dropping blank entries first.
pub fn encode<T: Serialize + Blank + Clone>(items: &[T]) -> String {
    let kept = filter_blanks(items);
    // Serializing plain strings and derive(Serialize) structs cannot fail.
    serde_json::to_string(&kept).unwrap_or_else(|_| "[]".to_string())
}

/// A structured field as it arrives from a client: either the JSON-encoded
/// text the admin forms send, or an already parsed array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StructuredText<T> {
    Parsed(Vec<T>),
    Encoded(String),
}

impl<T> Default for StructuredText<T> {
    fn default() -> Self {
        StructuredText::Parsed(Vec::new())
    }
}

impl<T: DeserializeOwned + Blank + Clone> StructuredText<T> {
    /// Resolve to a blank-free list. Malformed text resolves to empty.
    pub fn resolve(self) -> Vec<T> {
        let items = match self {
            StructuredText::Parsed(items) => items,
            StructuredText::Encoded(text) => decode(Some(&text)),
        };
        filter_blanks(&items)
    }
}

/// Split a comma-separated keyword override into trimmed, non-empty keywords.
pub fn split_keywords(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect()
    })
    .unwrap_or_default()
}
