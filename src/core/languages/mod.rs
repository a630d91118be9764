//! Language-specific extraction rule sets.
//!
//! Each language variant scans raw text with its own ordered regex passes and
//! produces the shared entity model. Variants are intentionally asymmetric
//! where the behaviors differ (JS/TS is whole-buffer regex driven, Java is
//! line oriented), so they are kept in separate modules rather than unified.

mod javascript;
mod java;

pub use javascript::JavaScriptExtractor;
pub use java::JavaExtractor;

use regex::Regex;

use super::extractor::{CommentInfo, CommentKind, Extraction};
use super::line_index::line_number;

/// Trait that all language extractors implement
pub trait LanguageExtractor {
    /// Scan source text and extract the full entity model
    fn extract(&self, content: &str) -> Extraction;

    /// File extensions this extractor handles (lowercase, without the dot)
    fn file_extensions(&self) -> &[&str];

    /// Language name used for logging
    fn language_name(&self) -> &str;
}

/// One combined scan for `//...` and `/* ... */` comments, classified by the
/// leading delimiter and stripped of delimiter text. Shared by the JS/TS and
/// Java rule sets.
pub(super) fn scan_comments(comment_regex: &Regex, content: &str) -> Vec<CommentInfo> {
    let mut comments = Vec::new();

    for m in comment_regex.find_iter(content) {
        let raw = m.as_str();
        let (text, kind) = if let Some(rest) = raw.strip_prefix("//") {
            (rest.trim().to_string(), CommentKind::Line)
        } else {
            let inner = raw
                .strip_prefix("/*")
                .and_then(|s| s.strip_suffix("*/"))
                .unwrap_or(raw);
            (inner.trim().to_string(), CommentKind::Block)
        };

        comments.push(CommentInfo {
            text,
            line_number: line_number(content, m.start()),
            kind,
        });
    }

    comments
}

/// Pattern matching both comment shapes; the block alternative is non-greedy
/// and may span lines.
pub(super) fn comment_pattern() -> Regex {
    Regex::new(r"//[^\n]*|/\*[\s\S]*?\*/").expect("invalid comment regex")
}
