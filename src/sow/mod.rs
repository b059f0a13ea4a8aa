//! Statement-of-Work (SOW) documents.
//!
//! SOW sources are recognised by path or by their boilerplate, stripped of
//! template guidance, and rendered with a cover page, table of contents,
//! page breaks before the major numbered sections and a signature block.
//! [`SowGenerator`] fills a placeholder template from a [`SowContext`] and
//! stores the converted document.

mod generator;
mod store;
mod template;

pub use generator::SowGenerator;
pub use store::{DirectoryStore, DocumentStore, StoredDocument};
pub use template::{ErrorMode, SowContext, SowTemplate};

use crate::model::DocumentMetadata;
use crate::render::RenderOptions;
use regex::Regex;
use std::path::Path;

/// Phrases typical of SOW templates, matched case-insensitively.
pub const SOW_INDICATORS: &[&str] = &[
    "Statement of Work",
    "DAF",
    "PSF",
    "Google Cloud Workload Implementation",
    "Activities and Deliverables (Scope)",
    "Prerequisites and Customer Cooperation",
    "Roles & Responsibilities",
    "Acceptance Criteria",
    "[PARTNER NAME]",
    "[CUSTOMER NAME]",
];

/// Indicator phrases needed to treat content as a SOW.
pub const INDICATOR_THRESHOLD: usize = 3;

/// Heading prefixes of the sections that start on a new page.
pub const MAJOR_SECTIONS: &[&str] = &[
    "1. Executive Summary",
    "2. ",
    "3. Activities and Deliverables",
    "4. Prerequisites",
    "5. Roles & Responsibilities",
    "6. Financials",
    "7. Acceptance Criteria",
    "8. Appendix",
];

pub const SOW_DOCUMENT_TYPE: &str = "Statement of Work";
pub const SOW_VERSION: &str = "2025.1";

/// Table header cells relabelled in SOW tables.
const HEADER_LABELS: &[(&str, &str)] = &[
    ("| Weeks |", "| **Timeline** |"),
    ("| Role |", "| **Role** |"),
    ("| Workstreams Role Efforts |", "| **Workstreams** |"),
];

/// Check if a source is a SOW template: its path mentions `sow` or
/// `statement-of-work`, or its content has enough indicator phrases.
pub fn is_sow_template(content: &str, path: &Path) -> bool {
    let path_lower = path.to_string_lossy().to_lowercase();
    if path_lower.contains("sow") || path_lower.contains("statement-of-work") {
        return true;
    }

    let content_lower = content.to_lowercase();
    let hits = SOW_INDICATORS
        .iter()
        .filter(|indicator| content_lower.contains(&indicator.to_lowercase()))
        .count();
    hits >= INDICATOR_THRESHOLD
}

/// Strip template guidance and relabel timeline and role tables.
///
/// Removes `[DELETE]` lines, `-ToBeDeleted-...-ToBeDeleted-` and
/// `/CanBeRemoved/.../CanBeRemoved/` spans (which may cross lines).
pub fn preprocess(content: &str) -> String {
    let delete_line = Regex::new(r"\[DELETE\][^\n]*\n").unwrap();
    let to_be_deleted = Regex::new(r"(?s)-ToBeDeleted-.*?-ToBeDeleted-").unwrap();
    let can_be_removed = Regex::new(r"(?s)/CanBeRemoved/.*?/CanBeRemoved/").unwrap();

    let content = delete_line.replace_all(content, "");
    let content = to_be_deleted.replace_all(&content, "");
    let mut content = can_be_removed.replace_all(&content, "").into_owned();

    for (from, to) in HEADER_LABELS {
        content = content.replace(from, to);
    }
    content
}

/// Add SOW defaults to metadata. Values already present win, except the
/// generic `documentation` document type.
pub fn enhance_metadata(mut metadata: DocumentMetadata) -> DocumentMetadata {
    if metadata.document_type == DocumentMetadata::default().document_type {
        metadata.document_type = SOW_DOCUMENT_TYPE.to_string();
    }
    metadata.version.get_or_insert_with(|| SOW_VERSION.to_string());
    metadata
        .subtitle
        .get_or_insert_with(|| SOW_DOCUMENT_TYPE.to_string());
    metadata.cover_page = true;

    let defaults = [
        ("template_type", "Google DAF/PSF SOW Template Y25"),
        ("compliance", "DAF/PSF Requirements"),
        ("classification", "Confidential"),
        ("approval_required", "Yes"),
        ("funding_type", "DAF/PSF"),
        ("region", "NORTHAM"),
    ];
    for (key, value) in defaults {
        metadata
            .properties
            .entry(key.to_string())
            .or_insert_with(|| value.to_string());
    }
    metadata
}

/// SOW layout on top of the given options: table of contents, signature
/// block and page breaks before level-2 [`MAJOR_SECTIONS`] headings.
pub fn render_options(base: RenderOptions) -> RenderOptions {
    base.with_toc(true)
        .with_signature_block(true)
        .with_page_breaks_before(MAJOR_SECTIONS.iter().copied())
        .with_page_break_level(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_path() {
        assert!(is_sow_template("", Path::new("9-contract/Acme-SOW.md")));
        assert!(is_sow_template("", Path::new("docs/statement-of-work/draft.md")));
        assert!(!is_sow_template("# Notes", Path::new("1-research/notes.md")));
    }

    #[test]
    fn test_detect_by_indicators() {
        let two = "Prepared for [CUSTOMER NAME]. See acceptance criteria.";
        assert!(!is_sow_template(two, Path::new("draft.md")));

        let three = "Prepared for [CUSTOMER NAME] by [PARTNER NAME]. See Acceptance Criteria.";
        assert!(is_sow_template(three, Path::new("draft.md")));
    }

    #[test]
    fn test_preprocess_removes_guidance() {
        let content = "Intro\n[DELETE] remove this guidance\nKeep -ToBeDeleted-a\n\
                       b-ToBeDeleted- this\n/CanBeRemoved/x/CanBeRemoved/end\n";
        assert_eq!(preprocess(content), "Intro\nKeep  this\nend\n");
    }

    #[test]
    fn test_preprocess_relabels_headers() {
        let out = preprocess("| Weeks | 1 | 2 |\n| Role | Hours |\n| Workstreams Role Efforts |");
        assert_eq!(
            out,
            "| **Timeline** | 1 | 2 |\n| **Role** | Hours |\n| **Workstreams** |"
        );
    }

    #[test]
    fn test_enhance_metadata() {
        let meta = enhance_metadata(DocumentMetadata::with_title("Acme SOW"));
        assert_eq!(meta.document_type, "Statement of Work");
        assert_eq!(meta.version.as_deref(), Some("2025.1"));
        assert_eq!(meta.subtitle.as_deref(), Some("Statement of Work"));
        assert_eq!(meta.properties["region"], "NORTHAM");
        assert!(meta.cover_page);

        let mut given = DocumentMetadata::with_title("Acme SOW");
        given.version = Some("3.0".to_string());
        given
            .properties
            .insert("region".to_string(), "EMEA".to_string());
        let meta = enhance_metadata(given);
        assert_eq!(meta.version.as_deref(), Some("3.0"));
        assert_eq!(meta.properties["region"], "EMEA");
    }

    #[test]
    fn test_render_options() {
        let options = render_options(RenderOptions::default());
        assert!(options.table_of_contents);
        assert!(options.signature_block);
        assert!(options.breaks_before(2, "6. Financials"));
        assert!(options.breaks_before(2, "2. Background"));
        assert!(!options.breaks_before(4, "2. Second step"));
        assert!(!options.breaks_before(2, "Overview"));
    }
}
