//! Rendering options and configuration.

use std::path::PathBuf;

/// Default intro text above the signature table.
pub const DEFAULT_SIGNATURE_INTRO: &str = "By signing below, [CUSTOMER NAME] confirms that \
[PARTNER NAME] has completed the deliverables as stated in this SOW.";

/// Options for rendering a document.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Emit a table of contents after the cover page
    pub table_of_contents: bool,

    /// Heading text of the table of contents
    pub toc_title: String,

    /// Synthetic page number of the first TOC entry
    pub toc_start_page: u32,

    /// Column the TOC leader dots pad to
    pub toc_width: usize,

    /// Append a signature block
    pub signature_block: bool,

    /// Paragraph above the signature table
    pub signature_intro: String,

    /// Cover-page logo image
    pub logo: Option<PathBuf>,

    /// Logo width in inches
    pub logo_width_inches: f32,

    /// Heading text prefixes that start on a new page
    pub page_break_before: Vec<String>,

    /// Source heading level the page-break prefixes apply to
    pub page_break_level: u8,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the table of contents.
    pub fn with_toc(mut self, enabled: bool) -> Self {
        self.table_of_contents = enabled;
        self
    }

    /// Set the first synthetic TOC page number.
    pub fn with_toc_start_page(mut self, page: u32) -> Self {
        self.toc_start_page = page;
        self
    }

    /// Set the TOC leader width.
    pub fn with_toc_width(mut self, width: usize) -> Self {
        self.toc_width = width;
        self
    }

    /// Enable or disable the signature block.
    pub fn with_signature_block(mut self, enabled: bool) -> Self {
        self.signature_block = enabled;
        self
    }

    /// Set the signature intro text.
    pub fn with_signature_intro(mut self, intro: impl Into<String>) -> Self {
        self.signature_intro = intro.into();
        self
    }

    /// Set the cover-page logo.
    pub fn with_logo(mut self, path: impl Into<PathBuf>) -> Self {
        self.logo = Some(path.into());
        self
    }

    /// Set heading prefixes that force a page break.
    pub fn with_page_breaks_before<S: Into<String>>(
        mut self,
        prefixes: impl IntoIterator<Item = S>,
    ) -> Self {
        self.page_break_before = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// Set the heading level the page-break prefixes apply to.
    pub fn with_page_break_level(mut self, level: u8) -> Self {
        self.page_break_level = level;
        self
    }

    /// Check if a heading of this level and text starts a new page.
    pub fn breaks_before(&self, level: u8, heading: &str) -> bool {
        level == self.page_break_level
            && self
                .page_break_before
                .iter()
                .any(|prefix| heading.starts_with(prefix.as_str()))
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            table_of_contents: false,
            toc_title: "Contents".to_string(),
            toc_start_page: 5,
            toc_width: 60,
            signature_block: false,
            signature_intro: DEFAULT_SIGNATURE_INTRO.to_string(),
            logo: None,
            logo_width_inches: 2.0,
            page_break_before: Vec::new(),
            page_break_level: 2,
        }
    }
}
