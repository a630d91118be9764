use regex::Regex;

use super::{comment_pattern, scan_comments, LanguageExtractor};
use crate::core::extractor::{ClassInfo, Extraction, FunctionInfo};

/// Java rule set.
///
/// Line oriented rather than whole-buffer regex driven: imports, methods and
/// classes are matched one line at a time. Variables are never produced for
/// Java sources.
pub struct JavaExtractor {
    import_regex: Regex,
    method_regex: Regex,
    class_regex: Regex,
    parameter_regex: Regex,
    comment_regex: Regex,
}

impl JavaExtractor {
    pub fn new() -> Self {
        Self {
            import_regex: Regex::new(r"^import\s+[\w.*]+;").expect("invalid import regex"),
            method_regex: Regex::new(r"(public|private|protected|static|\s) +[\w<>\[\]]+\s+(\w+)\s*\([^)]*\)")
                .expect("invalid method regex"),
            // Anchored at column 0 of the raw line, so indented nested
            // classes are missed. Accepted limitation.
            class_regex: Regex::new(r"^class\s+(\w+)").expect("invalid class regex"),
            parameter_regex: Regex::new(r"\(([^)]*)\)").expect("invalid parameter regex"),
            comment_regex: comment_pattern(),
        }
    }

    /// Parameter names only: the last whitespace token of each comma-separated
    /// segment, dropping the type.
    fn extract_parameters(&self, line: &str) -> Vec<String> {
        let Some(caps) = self.parameter_regex.captures(line) else {
            return Vec::new();
        };

        caps[1]
            .split(',')
            .filter_map(|p| p.trim().split_whitespace().last())
            .map(|p| p.to_string())
            .filter(|p| !p.is_empty())
            .collect()
    }

    /// Walk upward from the line above the declaration:
    /// - a `/**` opener discards everything gathered so far and stops,
    /// - `*`-prefixed lines accumulate into a multi-line string,
    /// - a bare `//` line becomes the sole documentation and stops,
    /// - any other non-blank line stops the walk.
    fn extract_documentation(&self, lines: &[&str], line_index: usize) -> Option<String> {
        let mut gathered: Vec<String> = Vec::new();

        for raw in lines[..line_index].iter().rev() {
            let line = raw.trim();
            if line.starts_with("/**") {
                gathered.clear();
                break;
            } else if let Some(rest) = line.strip_prefix('*') {
                gathered.push(rest.trim().to_string());
            } else if let Some(rest) = line.strip_prefix("//") {
                let text = rest.trim();
                return if text.is_empty() {
                    None
                } else {
                    Some(text.to_string())
                };
            } else if !line.is_empty() {
                break;
            }
        }

        gathered.reverse();
        let documentation = gathered.join("\n").trim().to_string();
        if documentation.is_empty() {
            None
        } else {
            Some(documentation)
        }
    }
}

impl LanguageExtractor for JavaExtractor {
    fn extract(&self, content: &str) -> Extraction {
        let mut result = Extraction::default();
        let lines: Vec<&str> = content.split('\n').collect();

        for line in &lines {
            let trimmed = line.trim();
            if self.import_regex.is_match(trimmed) {
                result.imports.push(trimmed.to_string());
            }
        }

        for (index, line) in lines.iter().enumerate() {
            // Lines ending in `;` are abstract/interface signatures or fields
            // that merely resemble a method, so they are skipped
            if line.trim().ends_with(';') {
                continue;
            }
            if let Some(caps) = self.method_regex.captures(line) {
                result.functions.push(FunctionInfo {
                    name: caps[2].to_string(),
                    parameters: self.extract_parameters(line),
                    line_number: index + 1,
                    documentation: self.extract_documentation(&lines, index),
                });
            }
        }

        for (index, line) in lines.iter().enumerate() {
            if let Some(caps) = self.class_regex.captures(line) {
                result.classes.push(ClassInfo {
                    name: caps[1].to_string(),
                    methods: Vec::new(),
                    properties: Vec::new(),
                    line_number: index + 1,
                    documentation: self.extract_documentation(&lines, index),
                });
            }
        }

        result.comments = scan_comments(&self.comment_regex, content);

        result
    }

    fn file_extensions(&self) -> &[&str] {
        &["java"]
    }

    fn language_name(&self) -> &str {
        "java"
    }
}

impl Default for JavaExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(source: &str) -> Extraction {
        JavaExtractor::new().extract(source)
    }

    #[test]
    fn test_imports_match_whole_lines() {
        let source = "import java.util.List;\nimport com.example.*;\nimportant();\n";
        let result = extract(source);
        assert_eq!(
            result.imports,
            vec!["import java.util.List;", "import com.example.*;"]
        );
    }

    #[test]
    fn test_method_with_parameter_names_only() {
        let source = "    public static void main(String[] args) {\n    }\n";
        let result = extract(source);
        assert_eq!(result.functions.len(), 1);
        assert_eq!(result.functions[0].name, "main");
        assert_eq!(result.functions[0].parameters, vec!["args"]);
        assert_eq!(result.functions[0].line_number, 1);
    }

    #[test]
    fn test_semicolon_lines_are_not_methods() {
        let source = "    public abstract int size();\n    private String name;\n";
        let result = extract(source);
        assert!(result.functions.is_empty());
    }

    #[test]
    fn test_class_only_at_column_zero() {
        let source = "class Outer {\n    class Inner {\n    }\n}\n";
        let result = extract(source);
        assert_eq!(result.classes.len(), 1);
        assert_eq!(result.classes[0].name, "Outer");
        assert_eq!(result.classes[0].line_number, 1);
    }

    #[test]
    fn test_javadoc_block_is_discarded_but_stops_the_walk() {
        let source = "\
// not reachable past the block
/**
 * Runs the job.
 * Twice.
 */
    public void run(int times) {
";
        let result = extract(source);
        assert_eq!(result.functions.len(), 1);
        assert_eq!(result.functions[0].documentation, None);
    }

    #[test]
    fn test_line_comment_is_sole_documentation() {
        let source = "// resets the counter\n    public void reset() {\n";
        let result = extract(source);
        assert_eq!(
            result.functions[0].documentation.as_deref(),
            Some("resets the counter")
        );
    }

    #[test]
    fn test_star_lines_accumulate_without_opener() {
        // A plain /* block has no /** opener, so the walk keeps the starred
        // lines it gathered (including the stripped closing delimiter)
        let source = "\
/*
 * first
 * second
 */
    public void go() {
";
        let result = extract(source);
        let doc = result.functions[0].documentation.as_deref().unwrap();
        assert!(doc.starts_with("first\nsecond"));
    }

    #[test]
    fn test_code_line_stops_the_walk() {
        let source = "int x = compute();\n    public void after(int v) {\n";
        let result = extract(source);
        let after = result.functions.iter().find(|f| f.name == "after").unwrap();
        assert_eq!(after.documentation, None);
    }
}
