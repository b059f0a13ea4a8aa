//! Output format writers and their registry.

use crate::error::Result;
use crate::model::DocumentModel;
use crate::render::{HtmlSink, JsonFormat, JsonSink, TextSink};
use crate::theme::Theme;
use std::collections::HashMap;
use std::sync::Arc;

/// Trait for output format writers.
///
/// Implement this trait to add support for a new output format.
pub trait FormatWriter: Send + Sync {
    /// Name used to select the writer (e.g. `html`).
    fn name(&self) -> &str;

    /// File extensions produced by this writer, lowercase without the dot.
    /// The first one is used for output paths.
    fn extensions(&self) -> &[&str];

    /// MIME type of the output.
    fn mime_type(&self) -> &'static str;

    /// Serialize a rendered document.
    fn write(&self, doc: DocumentModel, theme: &Theme) -> Result<Vec<u8>>;

    /// Extension used for output files.
    fn extension(&self) -> &str {
        self.extensions().first().copied().unwrap_or("out")
    }
}

/// Branded HTML.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlWriter;

impl FormatWriter for HtmlWriter {
    fn name(&self) -> &str {
        "html"
    }

    fn extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn mime_type(&self) -> &'static str {
        "text/html"
    }

    fn write(&self, doc: DocumentModel, theme: &Theme) -> Result<Vec<u8>> {
        doc.write_to(HtmlSink::new(theme)).map(String::into_bytes)
    }
}

/// Styled document model as JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonWriter {
    format: JsonFormat,
}

impl JsonWriter {
    pub fn new(format: JsonFormat) -> Self {
        Self { format }
    }
}

impl FormatWriter for JsonWriter {
    fn name(&self) -> &str {
        "json"
    }

    fn extensions(&self) -> &[&str] {
        &["json"]
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }

    fn write(&self, doc: DocumentModel, _theme: &Theme) -> Result<Vec<u8>> {
        doc.write_to(JsonSink::new(self.format)).map(String::into_bytes)
    }
}

/// Plain text.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextWriter;

impl FormatWriter for TextWriter {
    fn name(&self) -> &str {
        "text"
    }

    fn extensions(&self) -> &[&str] {
        &["txt", "text"]
    }

    fn mime_type(&self) -> &'static str {
        "text/plain"
    }

    fn write(&self, doc: DocumentModel, _theme: &Theme) -> Result<Vec<u8>> {
        doc.write_to(TextSink::default()).map(String::into_bytes)
    }
}

/// Registry of output writers.
///
/// Writers are looked up by name or by file extension, both
/// case-insensitively.
#[derive(Clone)]
pub struct WriterRegistry {
    by_extension: HashMap<String, Arc<dyn FormatWriter>>,
    by_name: HashMap<String, Arc<dyn FormatWriter>>,
}

impl WriterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            by_extension: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the HTML, JSON and text writers.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(HtmlWriter));
        registry.register(Arc::new(JsonWriter::default()));
        registry.register(Arc::new(TextWriter));
        registry
    }

    /// Register a writer under its name and all its extensions.
    pub fn register(&mut self, writer: Arc<dyn FormatWriter>) {
        for ext in writer.extensions() {
            self.by_extension.insert(ext.to_lowercase(), writer.clone());
        }
        self.by_name.insert(writer.name().to_lowercase(), writer);
    }

    /// Get a writer by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn FormatWriter>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Get a writer by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn FormatWriter>> {
        self.by_extension.get(&ext.to_lowercase()).cloned()
    }

    /// Get a writer by name, falling back to extension.
    pub fn get(&self, format: &str) -> Option<Arc<dyn FormatWriter>> {
        self.get_by_name(format)
            .or_else(|| self.get_by_extension(format))
    }

    /// Check if a format name or extension is supported.
    pub fn supports(&self, format: &str) -> bool {
        self.get(format).is_some()
    }

    /// Registered writer names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_name.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl Default for WriterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for WriterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WriterRegistry")
            .field("writers", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocumentMetadata;

    #[test]
    fn test_registry_with_defaults() {
        let registry = WriterRegistry::with_defaults();
        assert!(registry.supports("html"));
        assert!(registry.supports("HTM"));
        assert!(registry.supports("txt"));
        assert!(!registry.supports("docx"));
        assert_eq!(registry.names(), vec!["html", "json", "text"]);
    }

    #[test]
    fn test_registry_lookup() {
        let registry = WriterRegistry::with_defaults();
        let writer = registry.get_by_extension("txt").unwrap();
        assert_eq!(writer.name(), "text");
        assert_eq!(writer.extension(), "txt");

        let writer = registry.get("JSON").unwrap();
        assert_eq!(writer.mime_type(), "application/json");
    }

    #[test]
    fn test_writers_produce_output() {
        let theme = Theme::corporate();
        let doc = DocumentModel::new(DocumentMetadata::with_title("Plan"));

        let html = HtmlWriter.write(doc.clone(), &theme).unwrap();
        assert!(String::from_utf8(html).unwrap().contains("<title>Plan</title>"));

        let json = JsonWriter::default().write(doc, &theme).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(value["metadata"]["title"], "Plan");
    }
}
