//! Source metadata: frontmatter, title fallbacks and phase detection.

use crate::model::DocumentMetadata;
use crate::theme::{phase_from_path, Theme};
use regex::Regex;
use std::path::Path;

const FRONTMATTER_MARKER: &str = "---";

/// Split a document into its frontmatter block and body.
///
/// A document starting with `---` has frontmatter up to the next `---`.
/// Without a closing marker the whole content is body.
pub fn split_frontmatter(content: &str) -> (Option<&str>, &str) {
    if !content.starts_with(FRONTMATTER_MARKER) {
        return (None, content);
    }
    let rest = &content[FRONTMATTER_MARKER.len()..];
    match rest.find(FRONTMATTER_MARKER) {
        Some(end) => {
            let front = rest[..end].trim();
            let body = rest[end + FRONTMATTER_MARKER.len()..].trim();
            (Some(front), body)
        }
        None => (None, content),
    }
}

/// Build document metadata for a source file.
///
/// Defaults come from the theme and the path; frontmatter `key: value`
/// lines override known keys. The title falls back to the first level-one
/// heading, then to the file stem.
pub fn extract_metadata(content: &str, path: &Path, theme: &Theme) -> DocumentMetadata {
    let mut meta = DocumentMetadata {
        author: theme.organization.clone(),
        date: Some(chrono::Local::now().format("%Y-%m-%d").to_string()),
        phase: phase_from_path(path).map(|p| p.key.to_string()),
        ..Default::default()
    };

    let (front, body) = split_frontmatter(content);
    if let Some(front) = front {
        for line in front.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
            apply_field(&mut meta, key.trim(), value);
        }
    }

    if meta.title.is_empty() {
        meta.title = first_h1(body).unwrap_or_else(|| title_from_stem(path));
    }
    meta
}

fn apply_field(meta: &mut DocumentMetadata, key: &str, value: &str) {
    let value = value.to_string();
    match key {
        "title" => meta.title = value,
        "author" => meta.author = value,
        "date" => meta.date = Some(value),
        "phase" => meta.phase = Some(value),
        "document_type" => meta.document_type = value,
        "subtitle" => meta.subtitle = Some(value),
        "version" => meta.version = Some(value),
        _ => log::debug!("Ignoring frontmatter key: {}", key),
    }
}

fn first_h1(body: &str) -> Option<String> {
    let re = Regex::new(r"(?m)^#\s+(.+)$").unwrap();
    re.captures(body)
        .map(|c| c[1].trim().to_string())
        .filter(|t| !t.is_empty())
}

/// `my-business-case` becomes `My Business Case`.
fn title_from_stem(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    stem.replace('-', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalise task-list markers to `- [ ] ` and `- [X] `.
pub fn normalize_checkboxes(content: &str) -> String {
    let open = Regex::new(r"(?m)^[ \t]*-[ \t]*\[[ \t]*\][ \t]*").unwrap();
    let done = Regex::new(r"(?m)^[ \t]*-[ \t]*\[x\][ \t]*").unwrap();
    let content = open.replace_all(content, "- [ ] ");
    done.replace_all(&content, "- [X] ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_frontmatter() {
        let (front, body) = split_frontmatter("---\ntitle: Plan\n---\n# Body");
        assert_eq!(front, Some("title: Plan"));
        assert_eq!(body, "# Body");

        let (front, body) = split_frontmatter("# No frontmatter");
        assert_eq!(front, None);
        assert_eq!(body, "# No frontmatter");

        let (front, _) = split_frontmatter("---\nunterminated");
        assert_eq!(front, None);
    }

    #[test]
    fn test_frontmatter_overrides() {
        let content = "---\ntitle: \"Business Case\"\nauthor: 'Jane'\nowner: ignored\n---\n# Other";
        let meta = extract_metadata(content, Path::new("doc.md"), &Theme::corporate());
        assert_eq!(meta.title, "Business Case");
        assert_eq!(meta.author, "Jane");
        assert_eq!(meta.document_type, "documentation");
    }

    #[test]
    fn test_defaults() {
        let meta = extract_metadata(
            "# Risk Register\n\ntext",
            Path::new("opportunity/3-analysis/risks.md"),
            &Theme::corporate(),
        );
        assert_eq!(meta.title, "Risk Register");
        assert_eq!(meta.author, "Capgemini");
        assert_eq!(meta.phase.as_deref(), Some("3-analysis"));
        assert_eq!(meta.date.as_deref().map(str::len), Some(10));
    }

    #[test]
    fn test_title_from_file_stem() {
        let meta = extract_metadata(
            "no heading",
            Path::new("my-business-case.md"),
            &Theme::corporate(),
        );
        assert_eq!(meta.title, "My Business Case");
    }

    #[test]
    fn test_normalize_checkboxes() {
        let out = normalize_checkboxes("  -  [ ]  todo\n- [x] done\n- [X] kept");
        assert_eq!(out, "- [ ] todo\n- [X] done\n- [X] kept");
    }
}
