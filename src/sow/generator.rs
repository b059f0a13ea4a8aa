//! Template to stored document in one step.

use super::{DocumentStore, ErrorMode, SowContext, SowTemplate, StoredDocument};
use crate::convert::{ConvertOptions, Converter};
use crate::error::Result;
use std::path::Path;

/// Generates Statement-of-Work documents from placeholder templates.
///
/// ```no_run
/// use brandoc::sow::{DirectoryStore, SowContext, SowGenerator, SowTemplate};
///
/// fn main() -> brandoc::Result<()> {
///     let template = SowTemplate::from_path("templates/sow.md")?;
///     let context = SowContext::new("Acme", "Landing Zone");
///     let store = DirectoryStore::new("out");
///     let stored = SowGenerator::default().generate(&template, &context, &store)?;
///     println!("{}", stored.location);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SowGenerator {
    converter: Converter,
    mode: ErrorMode,
}

impl SowGenerator {
    pub fn new(options: ConvertOptions) -> Self {
        Self {
            converter: Converter::new(options),
            mode: ErrorMode::default(),
        }
    }

    /// Set how unknown template variables are handled.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.mode = mode;
        self
    }

    /// Render, convert and store under a name derived from the project.
    pub fn generate(
        &self,
        template: &SowTemplate,
        context: &SowContext,
        store: &dyn DocumentStore,
    ) -> Result<StoredDocument> {
        let extension = self.converter.writer()?.extension().to_string();
        let name = format!("{}.{}", document_stem(context), extension);
        self.generate_named(template, context, &name, store)
    }

    /// Render, convert and store under the given name.
    pub fn generate_named(
        &self,
        template: &SowTemplate,
        context: &SowContext,
        name: &str,
        store: &dyn DocumentStore,
    ) -> Result<StoredDocument> {
        let markdown = template.render(context, self.mode)?;
        let result = self
            .converter
            .convert_sow(&markdown, Path::new("statement-of-work.md"))?;
        store.store(name, &result.content, result.mime_type)
    }
}

/// `Acme Corp` / `Landing Zone` becomes `acme-corp-landing-zone-sow`.
fn document_stem(context: &SowContext) -> String {
    let words: Vec<String> = [&context.customer_name, &context.project_name]
        .iter()
        .flat_map(|s| s.split(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect();

    if words.is_empty() {
        "statement-of-work".to_string()
    } else {
        format!("{}-sow", words.join("-"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_stem() {
        assert_eq!(
            document_stem(&SowContext::new("Acme Corp.", "Landing Zone")),
            "acme-corp-landing-zone-sow"
        );
        assert_eq!(document_stem(&SowContext::default()), "statement-of-work");
    }
}
