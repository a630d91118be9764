use super::extractor::Extraction;

/// Fixed extension-to-fence-label lookup; anything unrecognized renders as a
/// plain `text` block.
pub fn fence_language(extension: &str) -> &'static str {
    match extension {
        "js" => "javascript",
        "ts" => "typescript",
        "py" => "python",
        "java" => "java",
        "c" => "c",
        "cpp" => "cpp",
        "cs" => "csharp",
        "php" => "php",
        "rb" => "ruby",
        "go" => "go",
        _ => "text",
    }
}

/// Assemble the extraction into the fixed-section Markdown document.
///
/// Section order never changes and empty sequences keep their heading with an
/// empty body. The original source is reproduced verbatim inside the final
/// fenced block.
pub fn render_markdown(
    extraction: &Extraction,
    file_name: &str,
    content: &str,
    extension: &str,
) -> String {
    let imports = extraction
        .imports
        .iter()
        .map(|i| format!("- {}", i))
        .collect::<Vec<_>>()
        .join("\n");

    let functions = extraction
        .functions
        .iter()
        .map(|f| format!("- **{}()** (line {})", f.name, f.line_number))
        .collect::<Vec<_>>()
        .join("\n");

    let classes = extraction
        .classes
        .iter()
        .map(|c| format!("- **{}** (line {})", c.name, c.line_number))
        .collect::<Vec<_>>()
        .join("\n");

    let variables = extraction
        .variables
        .iter()
        .map(|v| format!("- {} (line {})", v.name, v.line_number))
        .collect::<Vec<_>>()
        .join("\n");

    let comments = extraction
        .comments
        .iter()
        .map(|c| format!("- {} (line {})", c.text.replace('\n', " "), c.line_number))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "# {file_name} Documentation\n\n\
         ## Overview\n\
         Generated documentation for {file_name}\n\n\
         ## Imports\n{imports}\n\n\
         ## Functions\n{functions}\n\n\
         ## Classes\n{classes}\n\n\
         ## Variables\n{variables}\n\n\
         ## Comments\n{comments}\n\n\
         ## Source Code\n\
         ```{language}\n\
         {content}\n\
         ```\n",
        language = fence_language(extension),
    )
}
