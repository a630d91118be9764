mod engine;
mod extractor;
mod line_index;
mod flowchart;
mod renderer;
mod document;

// Language-specific extractors
mod languages;

pub use extractor::{
    SourceExtractor, Extraction, FunctionInfo, ClassInfo, VariableInfo,
    CommentInfo, CommentKind,
};
pub use line_index::line_number;
pub use flowchart::FlowchartGenerator;
pub use renderer::{render_markdown, fence_language};
pub use document::convert_to_document;

// Export the main engine
pub use engine::Engine;
