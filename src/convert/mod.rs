//! Conversion pipeline: markdown source to a branded output document.
//!
//! A [`Converter`] reads metadata, cleans the source, parses blocks,
//! renders them against the theme and hands the result to a
//! [`FormatWriter`] chosen from a [`WriterRegistry`].
//!
//! # Example
//!
//! ```no_run
//! use brandoc::convert::{ConvertOptions, Converter};
//!
//! fn main() -> brandoc::Result<()> {
//!     let converter = Converter::new(ConvertOptions::new().with_format("html"));
//!     let result = converter.convert_file("opportunity/9-contract/msa.md", "out/msa.html")?;
//!     println!("{} ({} bytes)", result.metadata.title, result.content_len());
//!     Ok(())
//! }
//! ```

mod batch;
mod metadata;
mod writer;

pub use batch::{
    find_markdown_files, BatchConverter, BatchReport, ConversionFailure, ConversionRecord,
    DocumentIndex, IndexEntry, CONVERSION_LOG, DOCUMENT_INDEX, FAILED_CONVERSIONS,
    SKIPPED_FILES,
};
pub use metadata::{extract_metadata, normalize_checkboxes, split_frontmatter};
pub use writer::{FormatWriter, HtmlWriter, JsonWriter, TextWriter, WriterRegistry};

use crate::error::{Error, Result};
use crate::model::DocumentMetadata;
use crate::parser::BlockParser;
use crate::render::{BlockStats, DocumentRenderer, RenderOptions};
use crate::sow;
use crate::theme::{Theme, CONTRACT_PHASE};
use std::path::Path;
use std::sync::Arc;

/// Options for document conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Brand theme
    pub theme: Theme,

    /// Output writer name or extension
    pub format: String,

    /// Rendering options
    pub render: RenderOptions,

    /// Apply Statement-of-Work handling to detected SOW sources
    pub detect_sow: bool,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the output format.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }

    /// Enable or disable SOW detection.
    pub fn with_sow_detection(mut self, detect: bool) -> Self {
        self.detect_sow = detect;
        self
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            theme: Theme::corporate(),
            format: "html".to_string(),
            render: RenderOptions::default(),
            detect_sow: true,
        }
    }
}

/// Result of document conversion.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Serialized output
    pub content: Vec<u8>,

    /// Completed document metadata
    pub metadata: DocumentMetadata,

    /// Block statistics of the parsed source
    pub stats: BlockStats,

    /// MIME type of the output
    pub mime_type: &'static str,

    /// File extension of the output
    pub extension: String,

    /// Whether Statement-of-Work handling was applied
    pub sow: bool,
}

impl ConvertResult {
    /// Get content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }

    /// Output as text, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.content).ok()
    }
}

/// Converts markdown sources with one set of options.
#[derive(Debug, Clone)]
pub struct Converter {
    options: ConvertOptions,
    parser: BlockParser,
    writers: WriterRegistry,
}

impl Converter {
    /// Create a converter with the default writers.
    pub fn new(options: ConvertOptions) -> Self {
        Self::with_registry(options, WriterRegistry::with_defaults())
    }

    /// Create a converter with a custom writer registry.
    pub fn with_registry(options: ConvertOptions, writers: WriterRegistry) -> Self {
        Self {
            options,
            parser: BlockParser::new(),
            writers,
        }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Writer selected by the options.
    pub fn writer(&self) -> Result<Arc<dyn FormatWriter>> {
        self.writers
            .get(&self.options.format)
            .ok_or_else(|| Error::UnknownFormat(self.options.format.clone()))
    }

    /// Convert markdown text. The source path drives phase, title and SOW
    /// detection; it is not read.
    pub fn convert_str(&self, content: &str, source_path: &Path) -> Result<ConvertResult> {
        let is_sow = self.options.detect_sow && sow::is_sow_template(content, source_path);
        self.convert_inner(content, source_path, is_sow)
    }

    /// Convert markdown text as a Statement of Work, regardless of detection.
    pub fn convert_sow(&self, content: &str, source_path: &Path) -> Result<ConvertResult> {
        self.convert_inner(content, source_path, true)
    }

    /// Convert a markdown file and write the output file, creating parent
    /// directories as needed.
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
    ) -> Result<ConvertResult> {
        let input = input.as_ref();
        let output = output.as_ref();
        if !input.is_file() {
            return Err(Error::NotFound(input.to_path_buf()));
        }

        let content = std::fs::read_to_string(input)?;
        let result = self.convert_str(&content, input)?;

        if let Some(parent) = output.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output, &result.content)?;
        log::info!("Converted: {} -> {}", input.display(), output.display());

        Ok(result)
    }

    fn convert_inner(
        &self,
        content: &str,
        source_path: &Path,
        is_sow: bool,
    ) -> Result<ConvertResult> {
        let writer = self.writer()?;
        let mut metadata = extract_metadata(content, source_path, &self.options.theme);
        let (_, body) = split_frontmatter(content);
        let mut body = normalize_checkboxes(body);
        let mut render = self.options.render.clone();

        let sow_theme;
        let theme = if is_sow {
            log::debug!("Applying SOW handling to {}", source_path.display());
            body = sow::preprocess(&body);
            metadata = sow::enhance_metadata(metadata);
            render = sow::render_options(render);
            sow_theme = self.options.theme.to_statement_of_work();
            &sow_theme
        } else {
            if metadata.phase.as_deref() == Some(CONTRACT_PHASE) {
                metadata.cover_page = true;
            }
            &self.options.theme
        };

        let blocks = self.parser.parse(&body);
        let stats = BlockStats::from_blocks(&blocks);
        let doc = DocumentRenderer::new(theme, render).render(&blocks, metadata);
        let metadata = doc.metadata.clone();
        let content = writer.write(doc, theme)?;

        Ok(ConvertResult {
            content,
            metadata,
            stats,
            mime_type: writer.mime_type(),
            extension: writer.extension().to_string(),
            sow: is_sow,
        })
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(ConvertOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_options_builder() {
        let options = ConvertOptions::new()
            .with_format("json")
            .with_sow_detection(false)
            .with_theme(Theme::statement_of_work());

        assert_eq!(options.format, "json");
        assert!(!options.detect_sow);
        assert_eq!(options.theme.name, "sow");
    }

    #[test]
    fn test_unknown_format() {
        let converter = Converter::new(ConvertOptions::new().with_format("docx"));
        let err = converter.convert_str("# Title", Path::new("a.md")).unwrap_err();
        assert!(matches!(err, Error::UnknownFormat(ref f) if f == "docx"));
    }

    #[test]
    fn test_convert_str_text() {
        let converter = Converter::new(ConvertOptions::new().with_format("text"));
        let result = converter
            .convert_str("---\ntitle: Plan\n---\n# Intro\n\n- [x] done", Path::new("plan.md"))
            .unwrap();

        assert_eq!(result.metadata.title, "Plan");
        assert_eq!(result.mime_type, "text/plain");
        assert_eq!(result.extension, "txt");
        assert_eq!(result.stats.heading_count, 1);
        assert!(!result.sow);
        let text = result.as_str().unwrap();
        assert!(text.contains("- [X] done"));
        assert!(!text.contains("title: Plan"));
    }

    #[test]
    fn test_contract_phase_gets_cover() {
        let converter = Converter::new(ConvertOptions::new().with_format("json"));
        let result = converter
            .convert_str("# Master Agreement", Path::new("opportunity/9-contract/msa.md"))
            .unwrap();
        assert!(result.metadata.cover_page);

        let result = converter
            .convert_str("# Notes", Path::new("opportunity/1-research/notes.md"))
            .unwrap();
        assert!(!result.metadata.cover_page);
    }

    #[test]
    fn test_sow_detection_by_path() {
        let converter = Converter::new(ConvertOptions::new().with_format("text"));
        let result = converter
            .convert_str("# Scope\n\n[DELETE] guidance\nKept", Path::new("templates/acme-sow.md"))
            .unwrap();
        assert!(result.sow);
        assert_eq!(result.metadata.document_type, "Statement of Work");
        assert!(!result.as_str().unwrap().contains("guidance"));

        let converter = Converter::new(
            ConvertOptions::new()
                .with_format("text")
                .with_sow_detection(false),
        );
        let result = converter
            .convert_str("# Scope", Path::new("templates/acme-sow.md"))
            .unwrap();
        assert!(!result.sow);
    }
}
