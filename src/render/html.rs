//! Branded HTML output.

use super::DocumentSink;
use crate::error::Result;
use crate::model::{
    DocumentMetadata, HeadingElement, ImageElement, ParagraphElement, ParagraphKind,
    TableElement,
};
use crate::theme::{ResolvedStyle, Theme};
use std::fmt::Write;

/// Renders a document as a standalone HTML page.
///
/// The stylesheet is derived from the theme: page margins, the running
/// footer, table borders and body font. Element styles resolved by the
/// renderer are written inline, so the output does not depend on the
/// stylesheet for brand colors.
#[derive(Debug)]
pub struct HtmlSink {
    css: String,
    monospace: String,
    title: String,
    header: Option<String>,
    footer: Option<String>,
    body: String,
    /// Open list element, `ol` or `ul`
    open_list: Option<&'static str>,
}

impl HtmlSink {
    /// Create a sink styled by the given theme.
    pub fn new(theme: &Theme) -> Self {
        Self {
            css: theme_css(theme),
            monospace: theme.fonts.monospace.clone(),
            title: String::new(),
            header: None,
            footer: None,
            body: String::new(),
            open_list: None,
        }
    }

    fn close_list(&mut self) {
        if let Some(tag) = self.open_list.take() {
            let _ = writeln!(self.body, "</{}>", tag);
        }
    }

    fn runs_html(&self, paragraph: &ParagraphElement) -> String {
        paragraph
            .runs
            .iter()
            .map(|run| {
                let tag = if run.style.font_family == self.monospace {
                    "code"
                } else {
                    "span"
                };
                format!(
                    "<{tag} style=\"{}\">{}</{tag}>",
                    style_attr(&run.style),
                    html_escape(&run.text),
                    tag = tag
                )
            })
            .collect()
    }
}

impl DocumentSink for HtmlSink {
    type Output = String;

    fn begin_document(&mut self, metadata: &DocumentMetadata) -> Result<()> {
        self.title = metadata.title.clone();
        self.header = metadata.header_text.clone();
        self.footer = metadata.footer_text.clone();
        Ok(())
    }

    fn add_heading(&mut self, heading: &HeadingElement) -> Result<()> {
        self.close_list();
        let _ = writeln!(
            self.body,
            "<h{level} style=\"{style}; text-align: {align}\">{text}</h{level}>",
            level = heading.level,
            style = style_attr(&heading.style),
            align = heading.alignment.as_css(),
            text = html_escape(&heading.text),
        );
        Ok(())
    }

    fn add_paragraph(&mut self, paragraph: &ParagraphElement) -> Result<()> {
        let wanted_list = match paragraph.kind {
            ParagraphKind::ListItem { ordered: true } => Some("ol"),
            ParagraphKind::ListItem { ordered: false } => Some("ul"),
            _ => None,
        };
        if self.open_list != wanted_list {
            self.close_list();
            if let Some(tag) = wanted_list {
                let _ = writeln!(self.body, "<{}>", tag);
                self.open_list = Some(tag);
            }
        }

        let align = paragraph.alignment.as_css();
        let indent = paragraph.indent_inches;
        let html = match paragraph.kind {
            ParagraphKind::ListItem { .. } => format!("<li>{}</li>", self.runs_html(paragraph)),
            ParagraphKind::Quote => format!(
                "<blockquote style=\"margin-left: {}in\">{}</blockquote>",
                indent,
                self.runs_html(paragraph)
            ),
            ParagraphKind::Code => {
                let style = paragraph
                    .runs
                    .first()
                    .map(|r| style_attr(&r.style))
                    .unwrap_or_default();
                format!(
                    "<pre style=\"{}\"><code>{}</code></pre>",
                    style,
                    html_escape(&paragraph.plain_text())
                )
            }
            ParagraphKind::Toc { .. } => format!(
                "<p class=\"toc\" style=\"margin-left: {}in\">{}</p>",
                indent,
                self.runs_html(paragraph)
            ),
            ParagraphKind::Divider => format!(
                "<p class=\"divider\" style=\"text-align: {}\">{}</p>",
                align,
                self.runs_html(paragraph)
            ),
            ParagraphKind::Cover => format!(
                "<p class=\"cover\" style=\"text-align: {}\">{}</p>",
                align,
                self.runs_html(paragraph)
            ),
            ParagraphKind::Body => format!(
                "<p style=\"text-align: {}\">{}</p>",
                align,
                self.runs_html(paragraph)
            ),
        };
        let _ = writeln!(self.body, "{}", html);
        Ok(())
    }

    fn add_table(&mut self, table: &TableElement) -> Result<()> {
        self.close_list();
        self.body.push_str("<table>\n");
        for row in &table.rows {
            let tag = if row.is_header() { "th" } else { "td" };
            self.body.push_str("<tr>");
            for cell in &row.cells {
                let text = html_escape(&cell.text).replace('\n', "<br>");
                let _ = write!(
                    self.body,
                    "<{tag} style=\"{}\">{}</{tag}>",
                    style_attr(&cell.style),
                    text,
                    tag = tag
                );
            }
            self.body.push_str("</tr>\n");
        }
        self.body.push_str("</table>\n");
        Ok(())
    }

    fn add_page_break(&mut self) -> Result<()> {
        self.close_list();
        self.body.push_str("<div class=\"page-break\"></div>\n");
        Ok(())
    }

    fn add_image(&mut self, image: &ImageElement) -> Result<()> {
        self.close_list();
        let _ = writeln!(
            self.body,
            "<p style=\"text-align: {}\"><img src=\"{}\" style=\"width: {}in\" alt=\"\"></p>",
            image.alignment.as_css(),
            html_escape(&image.path.to_string_lossy()),
            image.width_inches
        );
        Ok(())
    }

    fn finish(mut self) -> Result<String> {
        self.close_list();
        let header = self
            .header
            .as_deref()
            .map(|h| format!("<header>{}</header>\n", html_escape(h)))
            .unwrap_or_default();
        let footer = self
            .footer
            .as_deref()
            .map(|f| format!("<footer>{}</footer>\n", html_escape(f)))
            .unwrap_or_default();

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="generator" content="brandoc">
  <title>{title}</title>
  <style>
{css}
  </style>
</head>
<body>
{header}<main>
{body}</main>
{footer}</body>
</html>
"#,
            title = html_escape(&self.title),
            css = self.css,
            header = header,
            body = self.body,
            footer = footer,
        ))
    }
}

/// Base stylesheet for a theme.
pub fn theme_css(theme: &Theme) -> String {
    let p = &theme.palette;
    let t = &theme.typography;
    format!(
        r#"@page {{ margin: 1in; }}
body {{
    font-family: {font};
    font-size: {body}pt;
    color: {text};
    line-height: 1.6;
}}
header, footer {{
    font-size: {small}pt;
    color: {medium};
}}
footer {{ text-align: center; }}
h1, h2, h3 {{ page-break-after: avoid; }}
table {{ border-collapse: collapse; width: 100%; margin: 12pt 0; }}
th, td {{ padding: 6pt 8pt; border: 1pt solid {medium}; text-align: left; vertical-align: top; }}
pre {{ padding: 8pt; border-left: 3px solid {secondary}; overflow-x: auto; }}
blockquote {{ border-left: 4px solid {secondary}; padding-left: 12pt; }}
.page-break {{ page-break-after: always; }}"#,
        font = theme.font_stack(),
        body = t.body,
        text = p.text,
        small = t.small,
        medium = p.medium,
        secondary = p.secondary,
    )
}

/// Inline style attribute value for a resolved style.
fn style_attr(style: &ResolvedStyle) -> String {
    html_escape(&style.to_css())
}

/// Escape HTML special characters in text.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::BlockParser;
    use crate::render::render;

    fn to_html(markdown: &str) -> String {
        let theme = Theme::corporate();
        let blocks = BlockParser::new().parse(markdown);
        let doc = render(&blocks, &theme, DocumentMetadata::with_title("Plan <v2>"));
        doc.write_to(HtmlSink::new(&theme)).unwrap()
    }

    #[test]
    fn test_document_shell() {
        let html = to_html("text");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Plan &lt;v2&gt;</title>"));
        assert!(html.contains("font-family: \"Arial\", sans-serif"));
        assert!(html.contains("<footer>Confidential - Capgemini | Plan &lt;v2&gt;</footer>"));
    }

    #[test]
    fn test_heading_colors_inline() {
        let html = to_html("# Title");
        assert!(html.contains("<h1 style=\"font-family: &quot;Arial&quot;"));
        assert!(html.contains("color: #0070AD"));
    }

    #[test]
    fn test_lists_wrapped() {
        let html = to_html("- a\n- b\n1. c");
        assert!(html.contains("<ul>\n<li>"));
        assert!(html.contains("</ul>\n<ol>\n<li>"));
        assert!(html.trim_end().contains("</ol>"));
    }

    #[test]
    fn test_table_markup() {
        let html = to_html("| A | B |\n|---|---|\n| 1 | 2 |\n| 3 | 4 |");
        assert!(html.contains("<th style="));
        assert!(html.contains("background-color: #0070AD"));
        assert!(html.contains("background-color: #F5F5F5"));
    }

    #[test]
    fn test_code_escaped() {
        let html = to_html("```\n<div> & **x**\n```");
        assert!(html.contains("<pre style="));
        assert!(html.contains("&lt;div&gt; &amp; **x**"));
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }
}
