//! Placeholder taxonomy: detection, tree scanning, and content cleaning of
//! unfinished-content markers.
//!
//! One ordered pattern table drives all three views so the completeness
//! warnings and the export-time cleaner can never drift apart.

use regex::{Regex, RegexBuilder};
use serde::Serialize;
use serde_json::Value;

/// Scan excerpts are bounded to this many characters.
const EXCERPT_LEN: usize = 50;

/// A single incompleteness signature and its human-readable annotation.
/// `$1` style captures survive into the annotation.
struct PlaceholderPattern {
    regex: Regex,
    annotation: &'static str,
}

/// A placeholder occurrence found while scanning a document tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderHit {
    /// Dotted/bracketed path to the offending string, e.g. `blocks[3].talk_track`.
    pub path: String,
    /// First 50 characters of the offending string.
    pub excerpt: String,
}

/// Detector and cleaner for unfinished content.
pub struct PlaceholderScanner {
    patterns: Vec<PlaceholderPattern>,
}

impl PlaceholderScanner {
    pub fn new() -> Self {
        // Natural-language markers match case-insensitively; XXX and
        // double-brace tokens are exact.
        let patterns = vec![
            pattern(r"\{\{\s*([^{}]+?)\s*\}\}", false, "[Missing: $1]"),
            pattern(r"\[TBD\]", true, "[Missing: Content to be determined]"),
            pattern(r"\[TODO[^\]]*\]", true, "[Missing: Content not yet written]"),
            pattern(r"\[INSERT[^\]]*\]", true, "[Missing: Content to insert]"),
            pattern(r"\[PLACEHOLDER\]", true, "[Missing: Placeholder content]"),
            pattern(r"\[FILL[^\]]*\]", true, "[Missing: Content to fill in]"),
            pattern(r"\[ADD[^\]]*\]", true, "[Missing: Content to add]"),
            pattern(r"\w+_placeholder\b", true, "[Missing: Placeholder value]"),
            pattern(r"XXX", false, "[Missing: Unspecified detail]"),
            pattern(r"FIXME", true, "[Missing: Content flagged for revision]"),
        ];
        Self { patterns }
    }

    /// True if the text contains any incompleteness signature.
    pub fn contains_placeholder(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| p.regex.is_match(text))
    }

    /// Walk an entire document tree and report every string value that
    /// contains a placeholder signature.
    pub fn scan(&self, tree: &Value) -> Vec<PlaceholderHit> {
        let mut hits = Vec::new();
        self.scan_value(tree, "", &mut hits);
        hits
    }

    fn scan_value(&self, value: &Value, path: &str, hits: &mut Vec<PlaceholderHit>) {
        match value {
            Value::String(s) => {
                if self.contains_placeholder(s) {
                    hits.push(PlaceholderHit {
                        path: path.to_string(),
                        excerpt: excerpt(s),
                    });
                }
            }
            Value::Object(map) => {
                for (key, child) in map {
                    let child_path = if path.is_empty() {
                        key.clone()
                    } else {
                        format!("{}.{}", path, key)
                    };
                    self.scan_value(child, &child_path, hits);
                }
            }
            Value::Array(items) => {
                for (index, child) in items.iter().enumerate() {
                    self.scan_value(child, &format!("{}[{}]", path, index), hits);
                }
            }
            _ => {}
        }
    }

    /// Replace every placeholder signature with an explicit `[Missing: ...]`
    /// annotation. Uses the same patterns as [`contains_placeholder`], so a
    /// cleaned string always names what the detector would have flagged.
    ///
    /// [`contains_placeholder`]: PlaceholderScanner::contains_placeholder
    pub fn clean(&self, text: &str) -> String {
        let mut cleaned = text.to_string();
        for p in &self.patterns {
            cleaned = p.regex.replace_all(&cleaned, p.annotation).into_owned();
        }
        cleaned
    }
}

impl Default for PlaceholderScanner {
    fn default() -> Self {
        Self::new()
    }
}

fn pattern(re: &str, case_insensitive: bool, annotation: &'static str) -> PlaceholderPattern {
    let regex = RegexBuilder::new(re)
        .case_insensitive(case_insensitive)
        .build()
        .expect("placeholder pattern must compile");
    PlaceholderPattern { regex, annotation }
}

fn excerpt(s: &str) -> String {
    let head: String = s.chars().take(EXCERPT_LEN).collect();
    format!("{}...", head)
}
