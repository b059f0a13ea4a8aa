//! Plain text output.

use super::DocumentSink;
use crate::error::Result;
use crate::model::{
    DocumentMetadata, HeadingElement, ParagraphElement, ParagraphKind, TableElement,
};

/// Form feed written for page breaks.
const PAGE_BREAK: &str = "\u{000C}";

/// Renders a document as plain text.
///
/// Headings are underlined, list items keep a marker and tables are
/// tab-separated. Styling is dropped.
#[derive(Debug, Default)]
pub struct TextSink {
    blocks: Vec<String>,
    footer: Option<String>,
    /// Number of the last ordered item in the current list
    ordinal: usize,
    /// Kind of list the last block holds, if any
    list: Option<ParagraphKind>,
}

impl TextSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentSink for TextSink {
    type Output = String;

    fn begin_document(&mut self, metadata: &DocumentMetadata) -> Result<()> {
        if let Some(header) = metadata.header_text.as_deref().filter(|h| !h.is_empty()) {
            self.blocks.push(header.to_string());
        }
        self.footer = metadata.footer_text.clone();
        Ok(())
    }

    fn add_heading(&mut self, heading: &HeadingElement) -> Result<()> {
        let underline = if heading.level == 1 { '=' } else { '-' };
        let rule: String = std::iter::repeat(underline)
            .take(heading.text.chars().count())
            .collect();
        self.blocks.push(format!("{}\n{}", heading.text, rule));
        self.ordinal = 0;
        self.list = None;
        Ok(())
    }

    fn add_paragraph(&mut self, paragraph: &ParagraphElement) -> Result<()> {
        let text = paragraph.plain_text();
        let line = match paragraph.kind {
            ParagraphKind::ListItem { ordered: true } => {
                self.ordinal += 1;
                format!("{}. {}", self.ordinal, text)
            }
            ParagraphKind::ListItem { ordered: false } => format!("- {}", text),
            ParagraphKind::Quote => format!("> {}", text),
            ParagraphKind::Code => text
                .lines()
                .map(|l| format!("    {}", l))
                .collect::<Vec<_>>()
                .join("\n"),
            ParagraphKind::Toc { level } => {
                format!("{}{}", "  ".repeat(level.saturating_sub(1) as usize), text)
            }
            _ => text,
        };
        if !matches!(paragraph.kind, ParagraphKind::ListItem { ordered: true }) {
            self.ordinal = 0;
        }

        let is_item = matches!(paragraph.kind, ParagraphKind::ListItem { .. });
        match self.blocks.last_mut() {
            Some(last) if is_item && self.list == Some(paragraph.kind) => {
                last.push('\n');
                last.push_str(&line);
            }
            _ => self.blocks.push(line),
        }
        self.list = is_item.then_some(paragraph.kind);
        Ok(())
    }

    fn add_table(&mut self, table: &TableElement) -> Result<()> {
        self.blocks.push(table.plain_text());
        self.ordinal = 0;
        self.list = None;
        Ok(())
    }

    fn add_page_break(&mut self) -> Result<()> {
        self.blocks.push(PAGE_BREAK.to_string());
        self.list = None;
        Ok(())
    }

    fn finish(mut self) -> Result<String> {
        if let Some(footer) = self.footer.take() {
            self.blocks.push(footer);
        }
        Ok(self.blocks.join("\n\n").trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocumentModel;
    use crate::parser::BlockParser;
    use crate::render::render;
    use crate::theme::Theme;

    fn to_text(markdown: &str) -> String {
        let blocks = BlockParser::new().parse(markdown);
        let doc = render(&blocks, &Theme::corporate(), DocumentMetadata::default());
        doc.write_to(TextSink::new()).unwrap()
    }

    #[test]
    fn test_headings_and_paragraphs() {
        let text = to_text("# Title\n\nHello **world**.");
        assert!(text.contains("Title\n====="));
        assert!(text.contains("Hello world."));
    }

    #[test]
    fn test_lists_grouped() {
        let text = to_text("1. one\n2. two\n\n- a\n- b");
        assert!(text.contains("1. one\n2. two"));
        assert!(text.contains("2. two\n\n- a\n- b"));
    }

    #[test]
    fn test_table_and_footer() {
        let text = to_text("| A | B |\n|---|---|\n| 1 | 2 |");
        assert!(text.contains("A\tB\n1\t2"));
        assert!(text.ends_with("Confidential - Capgemini |"));
    }

    #[test]
    fn test_empty_document() {
        let doc = DocumentModel::default();
        assert_eq!(doc.write_to(TextSink::new()).unwrap(), "");
    }
}
