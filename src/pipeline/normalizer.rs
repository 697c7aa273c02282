//! Normalization of extraction-service responses into keyword sets
//!
//! The extraction backend is asked for a JSON array of strings but is not
//! contractually guaranteed to return one: responses arrive as bare JSON,
//! JSON wrapped in Markdown code fences, or free-form delimited text. The
//! normalizer makes both shapes first-class instead of nesting failure
//! handling, so the fallback policy stays auditable.

use crate::pipeline::keywords::KeywordSet;

/// Delimiters used by the fallback path when the response is not a JSON
/// string array.
const FALLBACK_DELIMITERS: [char; 3] = [',', '\n', '-'];

/// Which parse path produced the fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedResponse {
    /// The response was a literal JSON array of strings.
    Structured(Vec<String>),
    /// Fragments recovered by splitting on `,`, newline, and `-`.
    Delimited(Vec<String>),
}

impl ParsedResponse {
    pub fn into_fragments(self) -> Vec<String> {
        match self {
            ParsedResponse::Structured(fragments) => fragments,
            ParsedResponse::Delimited(fragments) => fragments,
        }
    }
}

/// Parse a raw extraction response, structured path first.
pub fn parse_response(raw: &str) -> ParsedResponse {
    let candidate = strip_code_fences(raw);
    match serde_json::from_str::<Vec<String>>(candidate) {
        Ok(fragments) => ParsedResponse::Structured(fragments),
        Err(_) => ParsedResponse::Delimited(split_on_delimiters(raw)),
    }
}

/// Turn an arbitrary extraction response into a canonical keyword set.
///
/// Malformed input never errors here: it degrades to an empty or partial
/// set, which is a valid result. Only the total absence of a response is
/// an error, and that is raised by the service client, not the normalizer.
pub fn normalize(raw: &str) -> KeywordSet {
    KeywordSet::new(parse_response(raw).into_fragments())
}

/// Gemini routinely wraps JSON answers in ```json fences; peel them off
/// before attempting the strict parse. Shared with the soft-match parser.
pub(crate) fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

/// Fallback tokenization: split on the delimiter set, trim, and discard
/// fragments of length <= 1 (stray hyphens, empty cells).
fn split_on_delimiters(raw: &str) -> Vec<String> {
    raw.split(FALLBACK_DELIMITERS)
        .map(str::trim)
        .filter(|fragment| fragment.len() > 1)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_json_array() {
        let parsed = parse_response(r#"["Python", "Go", "Rust"]"#);
        assert_eq!(
            parsed,
            ParsedResponse::Structured(vec![
                "Python".to_string(),
                "Go".to_string(),
                "Rust".to_string()
            ])
        );
    }

    #[test]
    fn test_fenced_json_array() {
        let raw = "```json\n[\"React\", \"Node.js\"]\n```";
        let set = normalize(raw);
        assert_eq!(set.as_slice(), &["React", "Node.js"]);
    }

    #[test]
    fn test_non_array_json_falls_back() {
        // Valid JSON, but not a string array: must take the delimiter path.
        let parsed = parse_response(r#"{"keywords": "Python"}"#);
        assert!(matches!(parsed, ParsedResponse::Delimited(_)));
    }

    #[test]
    fn test_delimited_fallback_drops_short_fragments() {
        let set = normalize("Python, Go,, Rust-");
        assert_eq!(set.as_slice(), &["Python", "Go", "Rust"]);
    }

    #[test]
    fn test_hyphen_bullet_list() {
        let set = normalize("- Kubernetes\n- Terraform\n- AWS");
        assert_eq!(set.as_slice(), &["Kubernetes", "Terraform", "AWS"]);
    }

    #[test]
    fn test_no_duplicates_and_no_empties_for_any_input() {
        for raw in [
            "",
            "   ",
            "```json\n[]\n```",
            r#"["SQL", "SQL", "", "  ", "SQL"]"#,
            "a,b,c",
            "Python, Python\nPython",
            "{not json at all",
        ] {
            let set = normalize(raw);
            let mut seen = Vec::new();
            for keyword in set.iter() {
                assert!(!keyword.trim().is_empty(), "empty keyword from {:?}", raw);
                assert!(!seen.contains(&keyword), "duplicate {:?} from {:?}", keyword, raw);
                seen.push(keyword);
            }
        }
    }

    #[test]
    fn test_normalize_is_idempotent_over_serialization() {
        let raw = r#"["React", "Node", "React", "SQL"]"#;
        let once = normalize(raw);
        let serialized = serde_json::to_string(once.as_slice()).unwrap();
        let twice = normalize(&serialized);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_malformed_input_degrades_to_empty() {
        assert!(normalize("").is_empty());
        assert!(normalize("-").is_empty());
        assert!(normalize(", , ,").is_empty());
    }
}
