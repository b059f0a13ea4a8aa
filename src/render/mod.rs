//! Rendering module: blocks to styled documents, documents to output formats.

mod document;
mod html;
mod json;
mod options;
mod sink;
mod stats;
mod table;
mod text;

pub use document::{render, DocumentRenderer, MAX_STYLED_HEADING};
pub use html::{theme_css, HtmlSink};
pub use json::{to_json, JsonFormat, JsonSink};
pub use options::{RenderOptions, DEFAULT_SIGNATURE_INTRO};
pub use sink::DocumentSink;
pub use stats::BlockStats;
pub use table::TableBuilder;
pub use text::TextSink;
