//! Block-to-document rendering.

use super::{RenderOptions, TableBuilder};
use crate::model::{
    runs_text, Alignment, ContentBlock, DocumentElement, DocumentMetadata, DocumentModel,
    HeadingElement, ImageElement, InlineRun, ParagraphElement, ParagraphKind, StyledRun,
};
use crate::theme::{ResolvedStyle, StyleIntent, Theme};

/// Deepest heading level styled distinctly; deeper headings share it.
pub const MAX_STYLED_HEADING: u8 = 3;

/// Width of the underscore rule that replaces a thematic break.
const DIVIDER_WIDTH: usize = 50;

/// Indent per TOC level, in inches.
const TOC_INDENT_STEP: f32 = 0.25;

/// Indent of list items, in inches.
const LIST_INDENT: f32 = 0.25;

/// Indent of block quotes, in inches.
const QUOTE_INDENT: f32 = 0.5;

/// Headings with this prefix are template instructions, left out of the TOC.
const DELETE_MARKER: &str = "[DELETE]";

const SIGNATURE_BLANK: &str = "_________________________";

/// Renders parsed blocks into a styled [`DocumentModel`].
///
/// Rendering is infallible. Problems with single elements (such as a
/// missing logo file) are logged and the element is skipped.
///
/// # Example
///
/// ```
/// use brandoc::model::DocumentMetadata;
/// use brandoc::parser::BlockParser;
/// use brandoc::render::{DocumentRenderer, RenderOptions};
/// use brandoc::theme::Theme;
///
/// let blocks = BlockParser::new().parse("# Scope\n\nDeliver **everything**.");
/// let theme = Theme::corporate();
/// let doc = DocumentRenderer::new(&theme, RenderOptions::default())
///     .render(&blocks, DocumentMetadata::with_title("Proposal"));
///
/// assert_eq!(doc.elements.len(), 2);
/// assert_eq!(doc.metadata.header_text.as_deref(), Some("Proposal"));
/// ```
#[derive(Debug, Clone)]
pub struct DocumentRenderer<'a> {
    theme: &'a Theme,
    options: RenderOptions,
}

impl<'a> DocumentRenderer<'a> {
    /// Create a renderer.
    pub fn new(theme: &'a Theme, options: RenderOptions) -> Self {
        Self { theme, options }
    }

    /// Get the render options.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render blocks into a document.
    pub fn render(&self, blocks: &[ContentBlock], metadata: DocumentMetadata) -> DocumentModel {
        let metadata = self.complete_metadata(metadata);
        let mut doc = DocumentModel::new(metadata);

        if doc.metadata.cover_page {
            self.render_cover(&mut doc);
        }
        if self.options.table_of_contents {
            self.render_toc(blocks, &mut doc);
        }
        for block in blocks {
            self.render_block(block, &mut doc);
        }
        if self.options.signature_block {
            self.render_signature(&mut doc);
        }

        log::debug!(
            "rendered '{}' with {} element(s)",
            doc.metadata.title,
            doc.elements.len()
        );
        doc
    }

    /// Fill in author, header and footer defaults.
    fn complete_metadata(&self, mut metadata: DocumentMetadata) -> DocumentMetadata {
        if metadata.author.is_empty() {
            metadata.author = self.theme.organization.clone();
        }
        if metadata.header_text.is_none() {
            metadata.header_text = Some(metadata.title.clone());
        }
        if metadata.footer_text.is_none() {
            metadata.footer_text = Some(format!(
                "{} - {} | {}",
                metadata.confidentiality, self.theme.organization, metadata.title
            ));
        }
        metadata
    }

    fn render_cover(&self, doc: &mut DocumentModel) {
        if let Some(logo) = &self.options.logo {
            if logo.is_file() {
                doc.add_image(ImageElement {
                    path: logo.clone(),
                    width_inches: self.options.logo_width_inches,
                    alignment: Alignment::Center,
                });
            } else {
                log::warn!("Logo not found, skipping: {}", logo.display());
            }
        }

        let meta = &doc.metadata;
        let mut elements = vec![DocumentElement::Heading(
            HeadingElement::new(1, &meta.title, self.theme.resolve(StyleIntent::HeadingLevel(1)))
                .align(Alignment::Center),
        )];

        if let Some(subtitle) = &meta.subtitle {
            elements.push(DocumentElement::Heading(
                HeadingElement::new(2, subtitle, self.theme.resolve(StyleIntent::HeadingLevel(2)))
                    .align(Alignment::Center),
            ));
        }

        let mut lines = Vec::new();
        if let Some(date) = &meta.date {
            lines.push(format!("Date: {}", date));
        }
        if let Some(version) = &meta.version {
            lines.push(format!("Version: {}", version));
        }
        lines.push(format!("{} - {}", meta.confidentiality, self.theme.organization));

        let caption = self.theme.resolve(StyleIntent::Caption);
        elements.extend(lines.into_iter().map(|line| {
            DocumentElement::Paragraph(
                ParagraphElement::with_text(ParagraphKind::Cover, line, caption.clone())
                    .align(Alignment::Center),
            )
        }));

        doc.elements.extend(elements);
        doc.add_page_break();
    }

    fn render_toc(&self, blocks: &[ContentBlock], doc: &mut DocumentModel) {
        doc.add_heading(HeadingElement::new(
            1,
            &self.options.toc_title,
            self.theme.resolve(StyleIntent::HeadingLevel(1)),
        ));

        let text_style = self.theme.resolve(StyleIntent::Default);
        let leader_style = self.theme.resolve(StyleIntent::TocEntry);
        let page_style = ResolvedStyle {
            bold: true,
            ..text_style.clone()
        };

        let headings = blocks.iter().filter_map(|block| match block {
            ContentBlock::Heading { level, runs } => Some((*level, runs_text(runs))),
            _ => None,
        });
        let entries = headings.filter(|(_, text)| !text.starts_with(DELETE_MARKER));

        for ((level, text), page) in entries.zip(self.options.toc_start_page..) {
            let page = page.to_string();
            let dots = self
                .options
                .toc_width
                .saturating_sub(text.chars().count() + page.len());

            let mut entry = ParagraphElement::new(ParagraphKind::Toc { level })
                .indent(f32::from(level.saturating_sub(1)) * TOC_INDENT_STEP);
            entry.add_run(StyledRun::new(text, text_style.clone()));
            entry.add_run(StyledRun::new(
                format!(" {}", ".".repeat(dots)),
                leader_style.clone(),
            ));
            entry.add_run(StyledRun::new(format!(" {}", page), page_style.clone()));
            doc.add_paragraph(entry);
        }

        doc.add_page_break();
    }

    fn render_block(&self, block: &ContentBlock, doc: &mut DocumentModel) {
        match block {
            ContentBlock::Heading { level, runs } => {
                let text = runs_text(runs);
                if self.options.breaks_before(*level, &text)
                    && !matches!(doc.elements.last(), None | Some(DocumentElement::PageBreak))
                {
                    doc.add_page_break();
                }
                let level = (*level).clamp(1, MAX_STYLED_HEADING);
                doc.add_heading(HeadingElement::new(
                    level,
                    text,
                    self.theme.resolve(StyleIntent::HeadingLevel(level)),
                ));
            }
            ContentBlock::Paragraph { runs } => {
                doc.add_paragraph(self.paragraph(ParagraphKind::Body, StyleIntent::Default, runs));
            }
            ContentBlock::ListItem { ordered, runs } => {
                let kind = ParagraphKind::ListItem { ordered: *ordered };
                doc.add_paragraph(
                    self.paragraph(kind, StyleIntent::Default, runs)
                        .indent(LIST_INDENT),
                );
            }
            ContentBlock::BlockQuote { runs } => {
                doc.add_paragraph(
                    self.paragraph(ParagraphKind::Quote, StyleIntent::Blockquote, runs)
                        .indent(QUOTE_INDENT),
                );
            }
            ContentBlock::CodeBlock { raw_text } => {
                doc.add_paragraph(ParagraphElement::with_text(
                    ParagraphKind::Code,
                    raw_text,
                    self.theme.resolve(StyleIntent::CodeBlock),
                ));
            }
            ContentBlock::Table { header, rows } => {
                let table =
                    TableBuilder::new(self.theme).from_grid(header.as_slice(), rows.as_slice());
                doc.add_table(table);
            }
            ContentBlock::ThematicBreak => {
                doc.add_paragraph(
                    ParagraphElement::with_text(
                        ParagraphKind::Divider,
                        "_".repeat(DIVIDER_WIDTH),
                        self.theme.resolve(StyleIntent::Caption),
                    )
                    .align(Alignment::Center),
                );
            }
        }
    }

    fn paragraph(
        &self,
        kind: ParagraphKind,
        intent: StyleIntent,
        runs: &[InlineRun],
    ) -> ParagraphElement {
        let mut paragraph = ParagraphElement::new(kind);
        for run in runs {
            paragraph.add_run(StyledRun::new(
                run.text.clone(),
                self.theme.resolve_run(intent, run),
            ));
        }
        paragraph
    }

    fn render_signature(&self, doc: &mut DocumentModel) {
        doc.add_paragraph(ParagraphElement::with_text(
            ParagraphKind::Body,
            &self.options.signature_intro,
            self.theme.resolve(StyleIntent::Default),
        ));

        let blanks = ["Signature", "Name", "Title", "Date"]
            .iter()
            .map(|label| format!("{}: {}", label, SIGNATURE_BLANK))
            .collect::<Vec<_>>()
            .join("\n");

        let header = ["Customer", "Partner"];
        let rows = vec![vec![blanks.as_str(), blanks.as_str()]];
        doc.add_table(TableBuilder::new(self.theme).from_grid(&header, &rows));
    }
}

/// Render blocks with default options.
pub fn render(blocks: &[ContentBlock], theme: &Theme, metadata: DocumentMetadata) -> DocumentModel {
    DocumentRenderer::new(theme, RenderOptions::default()).render(blocks, metadata)
}
