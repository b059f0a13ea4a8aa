//! Abstract style intents and their resolved form.

use super::Rgb;
use serde::{Deserialize, Serialize};

/// An abstract styling request, independent of concrete colors and fonts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "intent", content = "level", rename_all = "snake_case")]
pub enum StyleIntent {
    /// Heading of the given level; levels above 3 share level-3 styling
    HeadingLevel(u8),
    TableHeaderCell,
    TableBodyCellEven,
    TableBodyCellOdd,
    CodeSpan,
    CodeBlock,
    Blockquote,
    /// Small print: cover-page notices, footers
    Caption,
    /// Table-of-contents leader dots
    TocEntry,
    #[default]
    Default,
}

impl StyleIntent {
    /// Body-cell intent for the zero-based position among accepted rows.
    pub fn body_row(index: usize) -> Self {
        if index % 2 == 0 {
            StyleIntent::TableBodyCellEven
        } else {
            StyleIntent::TableBodyCellOdd
        }
    }
}

/// Concrete style attributes produced by the theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedStyle {
    /// Font family name
    pub font_family: String,

    /// Font size in points
    pub size_points: f32,

    /// Foreground color
    pub color: Rgb,

    /// Bold weight
    pub bold: bool,

    /// Italic posture
    pub italic: bool,

    /// Background/shading color
    pub background: Option<Rgb>,
}

impl ResolvedStyle {
    /// CSS declarations for this style.
    pub fn to_css(&self) -> String {
        let mut css = format!(
            "font-family: \"{}\"; font-size: {}pt; color: {}",
            self.font_family, self.size_points, self.color
        );
        if self.bold {
            css.push_str("; font-weight: bold");
        }
        if self.italic {
            css.push_str("; font-style: italic");
        }
        if let Some(background) = self.background {
            css.push_str(&format!("; background-color: {}", background));
        }
        css
    }
}
