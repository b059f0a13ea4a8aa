//! Document model types.
//!
//! Two layers live here: the parsed form of markdown ([`ContentBlock`] and
//! [`InlineRun`]) and the styled render target ([`DocumentModel`] and its
//! elements). The parser produces the first, the renderer turns it into the
//! second, and a [`DocumentSink`](crate::render::DocumentSink) consumes the
//! model.

mod block;
mod document;
mod element;
mod table;

pub use block::{runs_text, ContentBlock, InlineRun};
pub use document::{DocumentMetadata, DocumentModel};
pub use element::{
    Alignment, DocumentElement, HeadingElement, ImageElement, ParagraphElement, ParagraphKind,
    StyledRun,
};
pub use table::{TableCell, TableElement, TableRow};
