//! Ordered, duplicate-free keyword collections

use serde::{Deserialize, Serialize};

/// A keyword set produced by one extraction call.
///
/// Elements are trimmed, non-empty, and unique under case-sensitive
/// comparison. Order is first-seen order from the extraction response,
/// kept stable so repeated runs produce reproducible output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    /// Build a set from raw fragments, enforcing the trim/non-empty/unique
    /// invariants. Duplicates keep their first occurrence.
    pub fn new<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keywords: Vec<String> = Vec::new();
        for fragment in fragments {
            let trimmed = fragment.as_ref().trim();
            if trimmed.is_empty() {
                continue;
            }
            if !keywords.iter().any(|k| k == trimmed) {
                keywords.push(trimmed.to_string());
            }
        }
        Self { keywords }
    }

    pub fn empty() -> Self {
        Self { keywords: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(|k| k.as_str())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.keywords
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.keywords.clone()
    }
}
