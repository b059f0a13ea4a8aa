//! # brandoc
//!
//! Markdown to branded, structured documents.
//!
//! Markdown text is parsed into a flat sequence of content blocks, styled
//! against a brand theme and emitted through an output sink (HTML, JSON or
//! plain text). Documents can carry a cover page, a table of contents,
//! page breaks and a signature block.
//!
//! ## Quick Start
//!
//! ```
//! use brandoc::{parse_markdown, render, DocumentMetadata, TextSink, Theme};
//!
//! fn main() -> brandoc::Result<()> {
//!     let blocks = parse_markdown("# Title\n\nSome **bold** text.");
//!     let theme = Theme::corporate();
//!     let doc = render::render(&blocks, &theme, DocumentMetadata::with_title("Title"));
//!
//!     let text = doc.write_to(TextSink::default())?;
//!     assert!(text.contains("Title\n====="));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Block parsing**: headings, lists, quotes, fenced code, pipe tables
//! - **Themes**: palette, typography and fonts resolved from style intents
//! - **Document furniture**: cover page, table of contents, signature block
//! - **Output sinks**: branded HTML, JSON and plain text
//! - **Batch conversion**: parallel directory conversion with JSON run logs
//! - **Statements of Work**: detection, cleanup and template generation

pub mod convert;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod sow;
pub mod theme;

// Re-export commonly used types
pub use convert::{
    BatchConverter, BatchReport, ConvertOptions, ConvertResult, Converter, FormatWriter,
    WriterRegistry,
};
pub use error::{Error, Result};
pub use model::{
    Alignment, ContentBlock, DocumentElement, DocumentMetadata, DocumentModel, HeadingElement,
    ImageElement, InlineRun, ParagraphElement, ParagraphKind, StyledRun, TableCell,
    TableElement, TableRow,
};
pub use parser::{BlockParser, InlineFormatter};
pub use render::{
    BlockStats, DocumentRenderer, DocumentSink, HtmlSink, JsonFormat, JsonSink, RenderOptions,
    TableBuilder, TextSink,
};
pub use theme::{ResolvedStyle, Rgb, StyleIntent, Theme};

use std::path::Path;

/// Parse markdown text into content blocks.
///
/// # Example
///
/// ```
/// use brandoc::{parse_markdown, ContentBlock};
///
/// let blocks = parse_markdown("# Title\n\n- item");
/// assert_eq!(blocks.len(), 2);
/// assert!(matches!(blocks[1], ContentBlock::ListItem { ordered: false, .. }));
/// ```
pub fn parse_markdown(text: &str) -> Vec<ContentBlock> {
    BlockParser::new().parse(text)
}

/// Convert markdown text to the named output format with the corporate
/// theme.
///
/// # Example
///
/// ```
/// let html = brandoc::convert_str("# Plan\n\n| A | B |\n|---|---|\n| 1 | 2 |", "html").unwrap();
/// assert!(html.contains("<table>"));
/// ```
pub fn convert_str(text: &str, format: &str) -> Result<String> {
    let converter = Converter::new(ConvertOptions::new().with_format(format));
    let result = converter.convert_str(text, Path::new("document.md"))?;
    String::from_utf8(result.content).map_err(|e| Error::Sink(e.to_string()))
}

/// Convert a markdown file to the named output format, writing `output`.
///
/// # Example
///
/// ```no_run
/// brandoc::convert_file("plan.md", "plan.html", "html").unwrap();
/// ```
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    format: &str,
) -> Result<ConvertResult> {
    Converter::new(ConvertOptions::new().with_format(format)).convert_file(input, output)
}
