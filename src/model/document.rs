//! Document-level types.

use super::{DocumentElement, HeadingElement, ImageElement, ParagraphElement, TableElement};
use crate::error::Result;
use crate::render::DocumentSink;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A rendered document: metadata plus an ordered element sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentModel {
    /// Document metadata (title, author, furniture text)
    pub metadata: DocumentMetadata,

    /// Elements in output order
    pub elements: Vec<DocumentElement>,
}

impl DocumentModel {
    /// Create an empty document.
    pub fn new(metadata: DocumentMetadata) -> Self {
        Self {
            metadata,
            elements: Vec::new(),
        }
    }

    pub fn add_heading(&mut self, heading: HeadingElement) {
        self.elements.push(DocumentElement::Heading(heading));
    }

    pub fn add_paragraph(&mut self, paragraph: ParagraphElement) {
        self.elements.push(DocumentElement::Paragraph(paragraph));
    }

    pub fn add_table(&mut self, table: TableElement) {
        self.elements.push(DocumentElement::Table(table));
    }

    pub fn add_page_break(&mut self) {
        self.elements.push(DocumentElement::PageBreak);
    }

    pub fn add_image(&mut self, image: ImageElement) {
        self.elements.push(DocumentElement::Image(image));
    }

    /// Check if the document has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over headings.
    pub fn headings(&self) -> impl Iterator<Item = &HeadingElement> {
        self.elements.iter().filter_map(|e| match e {
            DocumentElement::Heading(h) => Some(h),
            _ => None,
        })
    }

    /// Iterate over tables.
    pub fn tables(&self) -> impl Iterator<Item = &TableElement> {
        self.elements.iter().filter_map(|e| match e {
            DocumentElement::Table(t) => Some(t),
            _ => None,
        })
    }

    /// Number of page breaks.
    pub fn page_break_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e, DocumentElement::PageBreak))
            .count()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.elements
            .iter()
            .filter_map(|e| match e {
                DocumentElement::Heading(h) => Some(h.text.clone()),
                DocumentElement::Paragraph(p) => Some(p.plain_text()),
                DocumentElement::Table(t) => Some(t.plain_text()),
                DocumentElement::PageBreak | DocumentElement::Image(_) => None,
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Replay the document into a sink and finish it.
    pub fn write_to<S: DocumentSink>(self, mut sink: S) -> Result<S::Output> {
        sink.begin_document(&self.metadata)?;
        for element in &self.elements {
            match element {
                DocumentElement::Heading(h) => sink.add_heading(h)?,
                DocumentElement::Paragraph(p) => sink.add_paragraph(p)?,
                DocumentElement::Table(t) => sink.add_table(t)?,
                DocumentElement::PageBreak => sink.add_page_break()?,
                DocumentElement::Image(i) => sink.add_image(i)?,
            }
        }
        sink.finish()
    }
}

/// Document metadata and furniture text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentMetadata {
    /// Document title
    pub title: String,

    /// Document author
    pub author: String,

    /// Document subject
    pub subject: Option<String>,

    /// Confidentiality label (e.g. "Confidential")
    pub confidentiality: String,

    /// Emit a cover page before the content
    pub cover_page: bool,

    /// Page header text; the title when unset
    pub header_text: Option<String>,

    /// Page footer text; derived from confidentiality and title when unset
    pub footer_text: Option<String>,

    /// Document date (`YYYY-MM-DD`)
    pub date: Option<String>,

    /// Document version
    pub version: Option<String>,

    /// Methodology phase key (e.g. `9-contract`)
    pub phase: Option<String>,

    /// Document type (e.g. "documentation", "Statement of Work")
    pub document_type: String,

    /// Cover-page subtitle
    pub subtitle: Option<String>,

    /// Keywords
    pub keywords: Vec<String>,

    /// Additional named properties (e.g. funding type, region)
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
}

impl DocumentMetadata {
    /// Create metadata with a title and default values.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            subject: None,
            confidentiality: "Confidential".to_string(),
            cover_page: false,
            header_text: None,
            footer_text: None,
            date: None,
            version: None,
            phase: None,
            document_type: "documentation".to_string(),
            subtitle: None,
            keywords: Vec::new(),
            properties: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::TextSink;
    use crate::theme::{StyleIntent, Theme};

    #[test]
    fn test_document_new() {
        let doc = DocumentModel::new(DocumentMetadata::with_title("Test"));
        assert!(doc.is_empty());
        assert_eq!(doc.metadata.confidentiality, "Confidential");
    }

    #[test]
    fn test_document_accessors() {
        let theme = Theme::corporate();
        let mut doc = DocumentModel::default();
        doc.add_heading(HeadingElement::new(
            1,
            "Intro",
            theme.resolve(StyleIntent::HeadingLevel(1)),
        ));
        doc.add_page_break();
        doc.add_table(TableElement::new());

        assert_eq!(doc.headings().count(), 1);
        assert_eq!(doc.tables().count(), 1);
        assert_eq!(doc.page_break_count(), 1);
        assert_eq!(doc.plain_text(), "Intro\n\n");
    }

    #[test]
    fn test_write_to_text_sink() {
        let theme = Theme::corporate();
        let mut doc = DocumentModel::new(DocumentMetadata::with_title("T"));
        doc.add_heading(HeadingElement::new(
            2,
            "Scope",
            theme.resolve(StyleIntent::HeadingLevel(2)),
        ));

        let text = doc.write_to(TextSink::new()).unwrap();
        assert!(text.contains("Scope"));
    }

    #[test]
    fn test_metadata_partial_json() {
        let meta: DocumentMetadata = serde_json::from_str(r#"{"title": "SOW"}"#).unwrap();
        assert_eq!(meta.title, "SOW");
        assert_eq!(meta.document_type, "documentation");
        assert!(!meta.cover_page);
    }
}
