//! Styled elements of the rendered document.

use super::TableElement;
use crate::theme::ResolvedStyle;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One element of a [`DocumentModel`](super::DocumentModel), in output order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "element", rename_all = "snake_case")]
pub enum DocumentElement {
    Heading(HeadingElement),
    Paragraph(ParagraphElement),
    Table(TableElement),
    PageBreak,
    Image(ImageElement),
}

/// Horizontal alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// CSS `text-align` value.
    pub fn as_css(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

/// A styled heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingElement {
    /// Output level, 1 to 3
    pub level: u8,

    /// Heading text, markup removed
    pub text: String,

    /// Resolved heading style
    pub style: ResolvedStyle,

    #[serde(default)]
    pub alignment: Alignment,
}

impl HeadingElement {
    /// Create a left-aligned heading.
    pub fn new(level: u8, text: impl Into<String>, style: ResolvedStyle) -> Self {
        Self {
            level,
            text: text.into(),
            style,
            alignment: Alignment::Left,
        }
    }

    /// Set alignment and return self.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

/// What a paragraph represents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParagraphKind {
    #[default]
    Body,
    ListItem {
        ordered: bool,
    },
    Quote,
    Code,
    /// Table-of-contents line for a heading of the given level
    Toc {
        level: u8,
    },
    /// Centered rule standing in for a thematic break
    Divider,
    /// Cover-page line (date, version, notice)
    Cover,
}

/// A run of text with its resolved style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyledRun {
    pub text: String,
    pub style: ResolvedStyle,
}

impl StyledRun {
    /// Create a styled run.
    pub fn new(text: impl Into<String>, style: ResolvedStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// A paragraph made of styled runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphElement {
    #[serde(flatten)]
    pub kind: ParagraphKind,

    /// Styled runs in order
    pub runs: Vec<StyledRun>,

    #[serde(default)]
    pub alignment: Alignment,

    /// Left indent in inches
    #[serde(default)]
    pub indent_inches: f32,
}

impl ParagraphElement {
    /// Create an empty paragraph of the given kind.
    pub fn new(kind: ParagraphKind) -> Self {
        Self {
            kind,
            runs: Vec::new(),
            alignment: Alignment::Left,
            indent_inches: 0.0,
        }
    }

    /// Create a paragraph holding a single run.
    pub fn with_text(kind: ParagraphKind, text: impl Into<String>, style: ResolvedStyle) -> Self {
        let mut p = Self::new(kind);
        p.add_run(StyledRun::new(text, style));
        p
    }

    /// Add a styled run.
    pub fn add_run(&mut self, run: StyledRun) {
        self.runs.push(run);
    }

    /// Set alignment and return self.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set left indent and return self.
    pub fn indent(mut self, inches: f32) -> Self {
        self.indent_inches = inches;
        self
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Check if the paragraph is empty.
    pub fn is_empty(&self) -> bool {
        self.plain_text().trim().is_empty()
    }
}

/// An image placed in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageElement {
    /// Image file location
    pub path: PathBuf,

    /// Display width in inches
    pub width_inches: f32,

    #[serde(default)]
    pub alignment: Alignment,
}
