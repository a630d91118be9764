use super::extractor::Extraction;
use super::renderer::render_markdown;

/// Produce the "document" artifact for a conversion.
///
/// Placeholder: no real binary document format is emitted. The output is
/// byte-identical to the Markdown artifact until a proper DOCX writer exists.
pub fn convert_to_document(
    extraction: &Extraction,
    file_name: &str,
    content: &str,
    extension: &str,
) -> String {
    render_markdown(extraction, file_name, content, extension)
}
