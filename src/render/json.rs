//! JSON output.

use super::DocumentSink;
use crate::error::{Error, Result};
use crate::model::{
    DocumentMetadata, DocumentModel, HeadingElement, ImageElement, ParagraphElement,
    TableElement,
};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to JSON.
pub fn to_json(doc: &DocumentModel, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Sink(format!("JSON serialization error: {}", e)))
}

/// Serializes the styled document model, resolved styles included.
#[derive(Debug, Default)]
pub struct JsonSink {
    format: JsonFormat,
    doc: DocumentModel,
}

impl JsonSink {
    /// Create a sink writing the given format.
    pub fn new(format: JsonFormat) -> Self {
        Self {
            format,
            doc: DocumentModel::default(),
        }
    }
}

impl DocumentSink for JsonSink {
    type Output = String;

    fn begin_document(&mut self, metadata: &DocumentMetadata) -> Result<()> {
        self.doc.metadata = metadata.clone();
        Ok(())
    }

    fn add_heading(&mut self, heading: &HeadingElement) -> Result<()> {
        self.doc.add_heading(heading.clone());
        Ok(())
    }

    fn add_paragraph(&mut self, paragraph: &ParagraphElement) -> Result<()> {
        self.doc.add_paragraph(paragraph.clone());
        Ok(())
    }

    fn add_table(&mut self, table: &TableElement) -> Result<()> {
        self.doc.add_table(table.clone());
        Ok(())
    }

    fn add_page_break(&mut self) -> Result<()> {
        self.doc.add_page_break();
        Ok(())
    }

    fn add_image(&mut self, image: &ImageElement) -> Result<()> {
        self.doc.add_image(image.clone());
        Ok(())
    }

    fn finish(self) -> Result<String> {
        to_json(&self.doc, self.format)
    }
}
