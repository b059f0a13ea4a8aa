//! Output sinks for rendered documents.
//!
//! A sink receives the elements of a [`DocumentModel`](crate::model::DocumentModel)
//! in order and produces a finished output. Each output format implements
//! this trait; the renderer itself knows nothing about formats.
//!
//! # Example
//!
//! ```
//! use brandoc::error::Result;
//! use brandoc::model::{DocumentMetadata, HeadingElement, ParagraphElement, TableElement};
//! use brandoc::render::DocumentSink;
//!
//! /// Collects heading text only.
//! #[derive(Default)]
//! struct Outline(Vec<String>);
//!
//! impl DocumentSink for Outline {
//!     type Output = Vec<String>;
//!
//!     fn begin_document(&mut self, _meta: &DocumentMetadata) -> Result<()> {
//!         Ok(())
//!     }
//!     fn add_heading(&mut self, heading: &HeadingElement) -> Result<()> {
//!         self.0.push(heading.text.clone());
//!         Ok(())
//!     }
//!     fn add_paragraph(&mut self, _p: &ParagraphElement) -> Result<()> {
//!         Ok(())
//!     }
//!     fn add_table(&mut self, _t: &TableElement) -> Result<()> {
//!         Ok(())
//!     }
//!     fn finish(self) -> Result<Vec<String>> {
//!         Ok(self.0)
//!     }
//! }
//! ```

use crate::error::Result;
use crate::model::{
    DocumentMetadata, HeadingElement, ImageElement, ParagraphElement, TableElement,
};

/// Receives document elements in output order.
pub trait DocumentSink {
    /// What the sink produces when finished.
    type Output;

    /// Called once before any element.
    fn begin_document(&mut self, metadata: &DocumentMetadata) -> Result<()>;

    /// Add a heading.
    fn add_heading(&mut self, heading: &HeadingElement) -> Result<()>;

    /// Add a paragraph.
    fn add_paragraph(&mut self, paragraph: &ParagraphElement) -> Result<()>;

    /// Add a table.
    fn add_table(&mut self, table: &TableElement) -> Result<()>;

    /// Start a new page. Sinks without pagination ignore this.
    fn add_page_break(&mut self) -> Result<()> {
        Ok(())
    }

    /// Add an image. Sinks that cannot embed images ignore this.
    fn add_image(&mut self, image: &ImageElement) -> Result<()> {
        let _ = image;
        Ok(())
    }

    /// Consume the sink and produce its output.
    fn finish(self) -> Result<Self::Output>;
}
