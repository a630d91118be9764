use regex::Regex;

use super::{comment_pattern, scan_comments, LanguageExtractor};
use crate::core::extractor::{ClassInfo, Extraction, FunctionInfo, VariableInfo};
use crate::core::line_index::line_number;

/// JavaScript/TypeScript rule set.
///
/// Five independent global scans over the full buffer, each restarting from
/// offset zero. Because the scans are independent, an arrow-function binding
/// like `const f = () => {}` is captured by both the function pass and the
/// variable pass; that double count is documented behavior.
pub struct JavaScriptExtractor {
    import_regex: Regex,
    function_regex: Regex,
    class_regex: Regex,
    variable_regex: Regex,
    parameter_regex: Regex,
    comment_regex: Regex,
}

impl JavaScriptExtractor {
    pub fn new() -> Self {
        Self {
            import_regex: Regex::new(r#"(import|from|require)[^;'"]*['"][^'"]+['"]"#)
                .expect("invalid import regex"),
            function_regex: Regex::new(
                r"function\s+(\w+)|const\s+(\w+)\s*=\s*(?:async\s*)?\([^)]*\)\s*=>|let\s+(\w+)\s*=\s*(?:async\s*)?\([^)]*\)\s*=>|var\s+(\w+)\s*=\s*(?:async\s*)?\([^)]*\)\s*=>|async\s+function\s+(\w+)",
            )
            .expect("invalid function regex"),
            class_regex: Regex::new(r"class\s+(\w+)").expect("invalid class regex"),
            variable_regex: Regex::new(r"(const|let|var)\s+(\w+)\s*=")
                .expect("invalid variable regex"),
            parameter_regex: Regex::new(r"\(([^)]*)\)").expect("invalid parameter regex"),
            comment_regex: comment_pattern(),
        }
    }

    /// Parameters come from the first parenthesized group at or after the
    /// match start, split on commas. No nested-parenthesis awareness: a
    /// parameter carrying a function type splits incorrectly, which is a
    /// known limitation.
    fn extract_parameters(&self, content: &str, start: usize) -> Vec<String> {
        let Some(caps) = self.parameter_regex.captures(&content[start..]) else {
            return Vec::new();
        };

        caps[1]
            .split(',')
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect()
    }

    /// Only the single line directly above the match counts, and only when it
    /// is a `//` comment. Block comments and comments further up never attach.
    fn extract_documentation(&self, content: &str, start: usize) -> Option<String> {
        let lines: Vec<&str> = content[..start].split('\n').collect();
        if lines.len() < 2 {
            return None;
        }

        let prev = lines[lines.len() - 2].trim();
        let text = prev.strip_prefix("//")?.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }
}

impl LanguageExtractor for JavaScriptExtractor {
    fn extract(&self, content: &str) -> Extraction {
        let mut result = Extraction::default();

        for m in self.import_regex.find_iter(content) {
            result.imports.push(m.as_str().trim().to_string());
        }

        for caps in self.function_regex.captures_iter(content) {
            // First non-empty capture group wins, whichever alternative hit
            let name = (1..=5)
                .find_map(|i| caps.get(i))
                .map(|m| m.as_str().to_string());
            let Some(name) = name else { continue };

            let start = caps.get(0).map(|m| m.start()).unwrap_or(0);
            result.functions.push(FunctionInfo {
                name,
                parameters: self.extract_parameters(content, start),
                line_number: line_number(content, start),
                documentation: self.extract_documentation(content, start),
            });
        }

        for caps in self.class_regex.captures_iter(content) {
            let start = caps.get(0).map(|m| m.start()).unwrap_or(0);
            result.classes.push(ClassInfo {
                name: caps[1].to_string(),
                methods: Vec::new(),
                properties: Vec::new(),
                line_number: line_number(content, start),
                documentation: self.extract_documentation(content, start),
            });
        }

        for caps in self.variable_regex.captures_iter(content) {
            let start = caps.get(0).map(|m| m.start()).unwrap_or(0);
            result.variables.push(VariableInfo {
                name: caps[2].to_string(),
                line_number: line_number(content, start),
            });
        }

        result.comments = scan_comments(&self.comment_regex, content);

        result
    }

    fn file_extensions(&self) -> &[&str] {
        &["js", "ts"]
    }

    fn language_name(&self) -> &str {
        "javascript"
    }
}

impl Default for JavaScriptExtractor {
    fn default() -> Self {
        Self::new()
    }
}
