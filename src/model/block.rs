//! Parsed markdown blocks and inline runs.

use serde::{Deserialize, Serialize};

/// A block-level construct recognized in markdown source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// ATX heading, level 1 to 6
    Heading { level: u8, runs: Vec<InlineRun> },

    /// Plain paragraph line
    Paragraph { runs: Vec<InlineRun> },

    /// Bullet or numbered list item (flat)
    ListItem { ordered: bool, runs: Vec<InlineRun> },

    /// Block quote line
    BlockQuote { runs: Vec<InlineRun> },

    /// Fenced code, kept verbatim
    CodeBlock { raw_text: String },

    /// Pipe table; every row has `header.len()` cells
    Table {
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },

    /// Horizontal rule
    ThematicBreak,
}

impl ContentBlock {
    /// Inline runs of the block, if it carries any.
    pub fn runs(&self) -> Option<&[InlineRun]> {
        match self {
            ContentBlock::Heading { runs, .. }
            | ContentBlock::Paragraph { runs }
            | ContentBlock::ListItem { runs, .. }
            | ContentBlock::BlockQuote { runs } => Some(runs),
            ContentBlock::CodeBlock { .. }
            | ContentBlock::Table { .. }
            | ContentBlock::ThematicBreak => None,
        }
    }

    /// Text content with markup removed.
    pub fn plain_text(&self) -> String {
        match self {
            ContentBlock::CodeBlock { raw_text } => raw_text.clone(),
            ContentBlock::Table { header, rows } => std::iter::once(header)
                .chain(rows.iter())
                .map(|row| row.join("\t"))
                .collect::<Vec<_>>()
                .join("\n"),
            ContentBlock::ThematicBreak => String::new(),
            _ => self.runs().map(runs_text).unwrap_or_default(),
        }
    }

    /// Check if this is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, ContentBlock::Heading { .. })
    }

    /// Short name of the block kind, used in logs and statistics.
    pub fn kind(&self) -> &'static str {
        match self {
            ContentBlock::Heading { .. } => "heading",
            ContentBlock::Paragraph { .. } => "paragraph",
            ContentBlock::ListItem { .. } => "list_item",
            ContentBlock::BlockQuote { .. } => "block_quote",
            ContentBlock::CodeBlock { .. } => "code_block",
            ContentBlock::Table { .. } => "table",
            ContentBlock::ThematicBreak => "thematic_break",
        }
    }
}

/// A span of text with uniform emphasis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineRun {
    /// The text content, delimiters removed
    pub text: String,

    /// Strong emphasis (`**`)
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,

    /// Emphasis (`*`)
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,

    /// Code span (backticks)
    #[serde(default, skip_serializing_if = "is_false")]
    pub monospace: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl InlineRun {
    /// Create an unstyled run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Create a bold run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            bold: true,
            ..Self::plain(text)
        }
    }

    /// Create an italic run.
    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            italic: true,
            ..Self::plain(text)
        }
    }

    /// Create a code-span run.
    pub fn code(text: impl Into<String>) -> Self {
        Self {
            monospace: true,
            ..Self::plain(text)
        }
    }

    /// Check if the run has no styling.
    pub fn is_plain(&self) -> bool {
        !(self.bold || self.italic || self.monospace)
    }
}

/// Concatenate the text of a run sequence.
pub fn runs_text(runs: &[InlineRun]) -> String {
    runs.iter().map(|r| r.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_plain_text() {
        let block = ContentBlock::Paragraph {
            runs: vec![InlineRun::plain("Hello "), InlineRun::bold("world")],
        };
        assert_eq!(block.plain_text(), "Hello world");
        assert_eq!(block.kind(), "paragraph");
    }

    #[test]
    fn test_table_plain_text() {
        let block = ContentBlock::Table {
            header: vec!["A".into(), "B".into()],
            rows: vec![vec!["1".into(), "2".into()]],
        };
        assert_eq!(block.plain_text(), "A\tB\n1\t2");
        assert!(block.runs().is_none());
    }

    #[test]
    fn test_run_constructors() {
        assert!(InlineRun::plain("x").is_plain());
        assert!(InlineRun::bold("x").bold);
        assert!(InlineRun::italic("x").italic);
        assert!(InlineRun::code("x").monospace);
    }

    #[test]
    fn test_block_serde_tag() {
        let block = ContentBlock::ListItem {
            ordered: true,
            runs: vec![InlineRun::plain("step")],
        };
        let json = serde_json::to_string(&block).unwrap();
        assert_eq!(
            json,
            r#"{"type":"list_item","ordered":true,"runs":[{"text":"step"}]}"#
        );
        let back: ContentBlock = serde_json::from_str(&json).unwrap();
        assert_eq!(back, block);
    }
}
