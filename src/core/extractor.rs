use serde::{Deserialize, Serialize};

use super::languages::{LanguageExtractor, JavaExtractor, JavaScriptExtractor};

/// An extracted function or method mention
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionInfo {
    /// Name of the function
    pub name: String,

    /// Raw parameter tokens, not type-checked
    pub parameters: Vec<String>,

    /// 1-based line of first discovery, computed once and never recomputed
    pub line_number: usize,

    /// Comment text attached by documentation association
    pub documentation: Option<String>,
}

/// An extracted class mention
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassInfo {
    /// Name of the class
    pub name: String,

    /// Always empty — extraction does not descend into class bodies
    pub methods: Vec<FunctionInfo>,

    /// Always empty, same reason as `methods`
    pub properties: Vec<VariableInfo>,

    /// 1-based line of first discovery
    pub line_number: usize,

    /// Comment text attached by documentation association
    pub documentation: Option<String>,
}

/// An extracted variable declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableInfo {
    pub name: String,
    pub line_number: usize,
}

/// Whether a comment used line or block delimiters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentKind {
    Line,
    Block,
}

/// An extracted comment, stripped of its delimiters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentInfo {
    pub text: String,
    pub line_number: usize,
    pub kind: CommentKind,
}

/// The result of one extraction run over a source buffer.
///
/// Each sequence is populated by its own independent scan, so ordering holds
/// within a sequence but not across them. The same declaration can appear in
/// more than one sequence (`const f = () => {}` is both a function and a
/// variable); that duplication is documented behavior, not deduplicated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Extraction {
    pub functions: Vec<FunctionInfo>,
    pub classes: Vec<ClassInfo>,
    pub variables: Vec<VariableInfo>,
    pub imports: Vec<String>,
    pub comments: Vec<CommentInfo>,
}

/// Multi-language extractor that delegates to language-specific rule sets
pub struct SourceExtractor {
    extractors: Vec<Box<dyn LanguageExtractor>>,
}

impl SourceExtractor {
    pub fn new() -> Self {
        Self {
            extractors: vec![
                Box::new(JavaScriptExtractor::new()),
                Box::new(JavaExtractor::new()),
            ],
        }
    }

    /// Run extraction for the language selected by `extension` (lowercase,
    /// without the dot). Unrecognized extensions yield an empty result, not
    /// an error.
    pub fn extract(&self, content: &str, extension: &str) -> Extraction {
        match self.extractor_for(extension) {
            Some(extractor) => {
                tracing::debug!("Extracting with {} rules", extractor.language_name());
                extractor.extract(content)
            }
            None => Extraction::default(),
        }
    }

    fn extractor_for(&self, extension: &str) -> Option<&dyn LanguageExtractor> {
        self.extractors
            .iter()
            .find(|e| e.file_extensions().contains(&extension))
            .map(|e| e.as_ref())
    }
}

impl Default for SourceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_extension_yields_empty_result() {
        let extractor = SourceExtractor::new();
        let result = extractor.extract("function foo() {}", "zig");
        assert!(result.functions.is_empty());
        assert!(result.classes.is_empty());
        assert!(result.variables.is_empty());
        assert!(result.imports.is_empty());
        assert!(result.comments.is_empty());
    }

    #[test]
    fn test_python_has_no_extraction_rules() {
        let extractor = SourceExtractor::new();
        let result = extractor.extract("def foo():\n    pass\n", "py");
        assert!(result.functions.is_empty());
        assert!(result.comments.is_empty());
    }

    #[test]
    fn test_empty_input_never_errors() {
        let extractor = SourceExtractor::new();
        for ext in ["js", "ts", "java", "py", "unknown"] {
            let result = extractor.extract("", ext);
            assert!(result.functions.is_empty());
            assert!(result.imports.is_empty());
        }
    }

    #[test]
    fn test_ts_and_js_share_rules() {
        let extractor = SourceExtractor::new();
        let source = "class Widget {}";
        let js = extractor.extract(source, "js");
        let ts = extractor.extract(source, "ts");
        assert_eq!(js.classes.len(), 1);
        assert_eq!(ts.classes.len(), 1);
        assert_eq!(ts.classes[0].name, "Widget");
    }
}
