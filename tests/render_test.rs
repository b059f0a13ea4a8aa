//! Integration tests for rendering and output sinks.

use brandoc::error::{Error, Result};
use brandoc::model::{
    DocumentElement, DocumentMetadata, HeadingElement, ImageElement, ParagraphElement,
    ParagraphKind, TableElement,
};
use brandoc::parser::BlockParser;
use brandoc::render::{self, DocumentRenderer, DocumentSink, RenderOptions, MAX_STYLED_HEADING};
use brandoc::theme::{StyleIntent, Theme};

/// Records the call sequence.
#[derive(Default)]
struct RecordingSink {
    calls: Vec<String>,
    fail_on_table: bool,
}

impl DocumentSink for RecordingSink {
    type Output = Vec<String>;

    fn begin_document(&mut self, metadata: &DocumentMetadata) -> Result<()> {
        self.calls.push(format!("begin:{}", metadata.title));
        Ok(())
    }

    fn add_heading(&mut self, heading: &HeadingElement) -> Result<()> {
        self.calls.push(format!("h{}:{}", heading.level, heading.text));
        Ok(())
    }

    fn add_paragraph(&mut self, paragraph: &ParagraphElement) -> Result<()> {
        self.calls.push(format!("p:{}", paragraph.plain_text()));
        Ok(())
    }

    fn add_table(&mut self, table: &TableElement) -> Result<()> {
        if self.fail_on_table {
            return Err(Error::Sink("tables unsupported".to_string()));
        }
        self.calls.push(format!("table:{}x{}", table.row_count(), table.column_count()));
        Ok(())
    }

    fn add_page_break(&mut self) -> Result<()> {
        self.calls.push("break".to_string());
        Ok(())
    }

    fn add_image(&mut self, image: &ImageElement) -> Result<()> {
        self.calls.push(format!("image:{}", image.path.display()));
        Ok(())
    }

    fn finish(self) -> Result<Vec<String>> {
        Ok(self.calls)
    }
}

fn parse(markdown: &str) -> Vec<brandoc::ContentBlock> {
    BlockParser::new().parse(markdown)
}

#[test]
fn test_heading_levels_capped() {
    let theme = Theme::corporate();
    for level in 1..=6u8 {
        let markdown = format!("{} Deep", "#".repeat(level as usize));
        let doc = render::render(&parse(&markdown), &theme, DocumentMetadata::with_title("T"));
        let heading = doc.headings().next().unwrap();

        let expected = level.min(MAX_STYLED_HEADING);
        assert_eq!(heading.level, expected);
        assert_eq!(heading.style, theme.resolve(StyleIntent::HeadingLevel(expected)));
    }

    let doc = render::render(&parse("###### Deep"), &theme, DocumentMetadata::default());
    let heading = doc.headings().next().unwrap();
    assert_eq!(heading.style, theme.resolve(StyleIntent::HeadingLevel(3)));
}

#[test]
fn test_resolve_is_pure() {
    let theme = Theme::corporate();
    let intents = [
        StyleIntent::HeadingLevel(1),
        StyleIntent::HeadingLevel(4),
        StyleIntent::TableHeaderCell,
        StyleIntent::TableBodyCellEven,
        StyleIntent::TableBodyCellOdd,
        StyleIntent::CodeSpan,
        StyleIntent::CodeBlock,
        StyleIntent::Blockquote,
        StyleIntent::Caption,
        StyleIntent::TocEntry,
        StyleIntent::Default,
    ];
    let snapshot = theme.clone();
    for intent in intents {
        assert_eq!(theme.resolve(intent), theme.resolve(intent));
    }
    assert_eq!(theme, snapshot);
}

#[test]
fn test_sink_receives_elements_in_order() {
    let theme = Theme::corporate();
    let blocks = parse("# Intro\n\nBody\n\n| A | B |\n|---|---|\n| 1 | 2 |");
    let doc = render::render(&blocks, &theme, DocumentMetadata::with_title("Plan"));

    let calls = doc.write_to(RecordingSink::default()).unwrap();
    assert_eq!(calls, vec!["begin:Plan", "h1:Intro", "p:Body", "table:2x2"]);
}

#[test]
fn test_sink_error_propagates() {
    let theme = Theme::corporate();
    let blocks = parse("| A |\n|---|\n| 1 |");
    let doc = render::render(&blocks, &theme, DocumentMetadata::default());

    let sink = RecordingSink {
        fail_on_table: true,
        ..Default::default()
    };
    assert!(matches!(doc.write_to(sink), Err(Error::Sink(_))));
}

#[test]
fn test_cover_page() {
    let theme = Theme::corporate();
    let metadata = DocumentMetadata {
        title: "Master Agreement".to_string(),
        subtitle: Some("Contract".to_string()),
        date: Some("2025-01-31".to_string()),
        cover_page: true,
        ..Default::default()
    };
    let doc = render::render(&parse("Body"), &theme, metadata);
    let calls = doc.write_to(RecordingSink::default()).unwrap();

    assert_eq!(
        calls,
        vec![
            "begin:Master Agreement",
            "h1:Master Agreement",
            "h2:Contract",
            "p:Date: 2025-01-31",
            "p:Confidential - Capgemini",
            "break",
            "p:Body",
        ]
    );
}

#[test]
fn test_table_of_contents() {
    let theme = Theme::corporate();
    let options = RenderOptions::new().with_toc(true).with_toc_width(40);
    let blocks = parse("# Overview\n\n## [DELETE] Guidance\n\n## Scope\n\ntext");
    let doc = DocumentRenderer::new(&theme, options).render(&blocks, DocumentMetadata::default());

    let entries: Vec<&ParagraphElement> = doc
        .elements
        .iter()
        .filter_map(|e| match e {
            DocumentElement::Paragraph(p) if matches!(p.kind, ParagraphKind::Toc { .. }) => Some(p),
            _ => None,
        })
        .collect();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].runs[0].text, "Overview");
    assert_eq!(entries[0].runs[2].text, " 5");
    assert!(entries[0].runs[2].style.bold);
    assert_eq!(entries[1].runs[2].text, " 6");
    assert_eq!(entries[1].indent_inches, 0.25);

    // "Overview" (8) + " 5" page (1) + leader = 40 columns
    assert_eq!(entries[0].runs[1].text.trim_start().len(), 40 - 8 - 1);
    assert!(matches!(doc.elements[0], DocumentElement::Heading(ref h) if h.text == "Contents"));
}

#[test]
fn test_signature_block() {
    let theme = Theme::corporate();
    let options = RenderOptions::new()
        .with_signature_block(true)
        .with_signature_intro("Signed by both parties.");
    let doc = DocumentRenderer::new(&theme, options)
        .render(&parse("Body"), DocumentMetadata::default());

    let table = doc.tables().last().unwrap();
    assert_eq!(table.column_count(), 2);
    assert_eq!(table.rows[0].cells[0].text, "Customer");
    assert!(table.rows[1].cells[1].text.starts_with("Signature: ____"));
    assert!(table.rows[1].cells[1].text.contains("\nDate: "));
    assert!(doc.plain_text().contains("Signed by both parties."));
}

#[test]
fn test_page_breaks_before_sections() {
    let theme = Theme::statement_of_work();
    let options = RenderOptions::new().with_page_breaks_before(["2. ", "3. Activities"]);
    let blocks =
        parse("## 1. Summary\n\ntext\n\n## 2. Background\n\n## 3. Activities and Deliverables");
    let doc = DocumentRenderer::new(&theme, options).render(&blocks, DocumentMetadata::default());

    let calls = doc.write_to(RecordingSink::default()).unwrap();
    assert_eq!(
        calls,
        vec![
            "begin:",
            "h2:1. Summary",
            "p:text",
            "break",
            "h2:2. Background",
            "break",
            "h2:3. Activities and Deliverables",
        ]
    );
}

#[test]
fn test_table_striping_by_accepted_position() {
    let theme = Theme::corporate();
    let blocks = parse("| A | B |\n|---|---|\n| 1 | 2 |\n| bad |\n| 3 | 4 |\n| 5 | 6 |");
    let doc = render::render(&blocks, &theme, DocumentMetadata::default());
    let table = doc.tables().next().unwrap();

    let intents: Vec<StyleIntent> = table.rows.iter().map(|r| r.intent).collect();
    assert_eq!(
        intents,
        vec![
            StyleIntent::TableHeaderCell,
            StyleIntent::TableBodyCellEven,
            StyleIntent::TableBodyCellOdd,
            StyleIntent::TableBodyCellEven,
        ]
    );
}
