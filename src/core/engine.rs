use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::{ScribeError, Result};
use super::document::convert_to_document;
use super::extractor::SourceExtractor;
use super::flowchart::FlowchartGenerator;
use super::renderer::render_markdown;

/// Orchestrates per-file and per-folder conversions.
///
/// All file I/O happens here at the boundary; extraction and rendering are
/// pure text transformations that never touch the file system. Each
/// conversion works on its own buffer with no caching across calls.
pub struct Engine {
    config: Config,
    extractor: SourceExtractor,
    flowcharts: FlowchartGenerator,
}

impl Engine {
    pub async fn new(config_path: Option<&Path>) -> Result<Self> {
        let config = Config::load_or_default(config_path)?;
        debug!("Loaded configuration: {:?}", config);

        Ok(Self {
            config,
            extractor: SourceExtractor::new(),
            flowcharts: FlowchartGenerator::new(),
        })
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            extractor: SourceExtractor::new(),
            flowcharts: FlowchartGenerator::new(),
        }
    }

    /// Write a default configuration file into `path` (or the current
    /// directory). Refuses to clobber an existing one.
    pub async fn init(&self, path: Option<&Path>) -> Result<PathBuf> {
        let dir = path.unwrap_or_else(|| Path::new("."));
        let target = dir.join("Codescribe.toml");

        if target.exists() {
            return Err(ScribeError::Config(format!(
                "{} already exists",
                target.display()
            )));
        }

        self.config.save(&target)?;
        info!("Initialized configuration at {}", target.display());
        Ok(target)
    }

    /// Convert a single source file, writing the requested artifacts next to
    /// it (or at `output`). Returns the paths written, in order.
    pub async fn convert_file(
        &self,
        input: &Path,
        output: Option<&Path>,
        format: OutputFormat,
        include_flowchart: bool,
    ) -> Result<Vec<PathBuf>> {
        let content = fs::read_to_string(input)
            .await
            .map_err(|e| ScribeError::Conversion(format!("{}: {}", input.display(), e)))?;

        if content.len() > self.config.scan.max_file_size {
            return Err(ScribeError::Conversion(format!(
                "{} exceeds maximum size limit",
                input.display()
            )));
        }

        let file_name = input
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "source".to_string());
        let extension = Self::extension_of(input);

        info!("Converting {} ({})", input.display(), extension);

        let extraction = self.extractor.extract(&content, &extension);
        let base = self.output_base(input, output);
        let mut outputs = Vec::new();

        if matches!(format, OutputFormat::Markdown | OutputFormat::Both) {
            let markdown = render_markdown(&extraction, &file_name, &content, &extension);
            let path = match format {
                OutputFormat::Markdown => base.clone(),
                _ => base.with_extension("md"),
            };
            self.write_artifact(&path, &markdown, ScribeError::Conversion).await?;
            outputs.push(path);
        }

        if matches!(format, OutputFormat::Docx | OutputFormat::Both) {
            let document = convert_to_document(&extraction, &file_name, &content, &extension);
            let path = base.with_extension("docx");
            self.write_artifact(&path, &document, ScribeError::Conversion).await?;
            outputs.push(path);
        }

        if include_flowchart && self.config.output.include_flowcharts {
            let flowchart = self.flowcharts.generate(&content, &extension);
            let path = self.flowchart_path(&base);
            self.write_artifact(&path, &flowchart, ScribeError::Conversion).await?;
            outputs.push(path);
        }

        Ok(outputs)
    }

    /// Convert every recognized file under `folder` into one concatenated
    /// Markdown document of fenced source blocks. Files are processed
    /// sequentially in path order; the first read failure aborts the whole
    /// folder conversion.
    pub async fn convert_folder(
        &self,
        folder: &Path,
        output: Option<&Path>,
        format: OutputFormat,
    ) -> Result<Vec<PathBuf>> {
        let files = self.collect_source_files(folder)?;
        info!("Converting {} files under {}", files.len(), folder.display());

        let mut combined = String::new();
        for file in &files {
            let content = fs::read_to_string(file).await.map_err(|e| {
                ScribeError::FolderConversion(format!("{}: {}", file.display(), e))
            })?;

            let file_name = file
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "source".to_string());
            // Fence label is the raw extension here, not the mapped language
            let extension = Self::extension_of(file);

            combined.push_str(&format!("# {}\n\n", file_name));
            combined.push_str(&format!("```{}\n{}\n```\n\n", extension, content));
        }

        let base = match output {
            Some(path) => path.to_path_buf(),
            None => folder.join("documentation.md"),
        };
        let mut outputs = Vec::new();

        if matches!(format, OutputFormat::Markdown | OutputFormat::Both) {
            let path = match format {
                OutputFormat::Markdown => base.clone(),
                _ => base.with_extension("md"),
            };
            self.write_artifact(&path, &combined, ScribeError::FolderConversion).await?;
            outputs.push(path);
        }

        if matches!(format, OutputFormat::Docx | OutputFormat::Both) {
            let path = base.with_extension("docx");
            self.write_artifact(&path, &combined, ScribeError::FolderConversion).await?;
            outputs.push(path);
        }

        Ok(outputs)
    }

    /// Recursively gather files whose extension is in the configured list,
    /// in deterministic path order.
    fn collect_source_files(&self, folder: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(folder).sort_by_file_name() {
            let entry = entry.map_err(|e| ScribeError::FileSystem(e.to_string()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let extension = Self::extension_of(entry.path());
            if self.config.scan.extensions.iter().any(|e| e == &extension) {
                files.push(entry.path().to_path_buf());
            }
        }

        Ok(files)
    }

    /// Write one output file, wrapping failures with the caller's error
    /// variant so file and folder conversions report at their own granularity.
    async fn write_artifact(
        &self,
        path: &Path,
        content: &str,
        wrap: fn(String) -> ScribeError,
    ) -> Result<()> {
        fs::write(path, content)
            .await
            .map_err(|e| wrap(format!("{}: {}", path.display(), e)))?;
        info!("Wrote {}", path.display());
        Ok(())
    }

    fn output_base(&self, input: &Path, output: Option<&Path>) -> PathBuf {
        match output {
            Some(path) => path.to_path_buf(),
            None => {
                let stem = input
                    .file_stem()
                    .map(|s| s.to_string_lossy().to_string())
                    .unwrap_or_else(|| "source".to_string());
                input.with_file_name(format!("{}_documentation.md", stem))
            }
        }
    }

    fn flowchart_path(&self, base: &Path) -> PathBuf {
        let stem = base
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "documentation".to_string());
        base.with_file_name(format!("{}{}.md", stem, self.config.output.flowchart_suffix))
    }

    fn extension_of(path: &Path) -> String {
        path.extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    }
}
