//! Line-oriented block parser.

use super::inline::InlineFormatter;
use super::table::split_grid;
use crate::model::ContentBlock;
use regex::Regex;

/// Maximum ATX heading depth.
const MAX_HEADING_LEVEL: usize = 6;

/// Scanner state between lines.
#[derive(Debug)]
enum Mode {
    Normal,
    /// Inside a fenced code block, collecting verbatim lines
    InCodeBlock(Vec<String>),
    /// Collecting consecutive lines that contain `|`
    InTable(Vec<String>),
}

/// Parses the supported markdown subset into [`ContentBlock`]s.
///
/// Parsing never fails. Constructs that do not parse degrade to paragraphs,
/// and tables with too few lines are dropped.
///
/// # Example
///
/// ```
/// use brandoc::model::ContentBlock;
/// use brandoc::parser::BlockParser;
///
/// let blocks = BlockParser::new().parse("# Title\n\n- item\n---");
/// assert_eq!(blocks.len(), 3);
/// assert!(matches!(blocks[2], ContentBlock::ThematicBreak));
/// ```
#[derive(Debug, Clone)]
pub struct BlockParser {
    inline: InlineFormatter,
    ordered_marker: Regex,
}

impl BlockParser {
    /// Create a parser.
    pub fn new() -> Self {
        Self {
            inline: InlineFormatter::new(),
            ordered_marker: Regex::new(r"^\s*\d+\.\s").unwrap(),
        }
    }

    /// The inline formatter used for block text.
    pub fn inline(&self) -> &InlineFormatter {
        &self.inline
    }

    /// Parse markdown into blocks in document order.
    pub fn parse(&self, raw: &str) -> Vec<ContentBlock> {
        let mut blocks = Vec::new();
        let mut mode = Mode::Normal;

        for line in raw.lines() {
            mode = match mode {
                Mode::InCodeBlock(mut lines) => {
                    if is_fence(line) {
                        blocks.push(ContentBlock::CodeBlock {
                            raw_text: lines.join("\n"),
                        });
                        Mode::Normal
                    } else {
                        lines.push(line.to_string());
                        Mode::InCodeBlock(lines)
                    }
                }
                Mode::InTable(mut lines) if line.contains('|') && !is_fence(line) => {
                    lines.push(line.to_string());
                    Mode::InTable(lines)
                }
                Mode::InTable(lines) => {
                    close_table(&lines, &mut blocks);
                    self.parse_line(line, &mut blocks)
                }
                Mode::Normal => self.parse_line(line, &mut blocks),
            };
        }

        match mode {
            Mode::InCodeBlock(lines) => {
                log::debug!("unterminated code fence at end of input");
                blocks.push(ContentBlock::CodeBlock {
                    raw_text: lines.join("\n"),
                });
            }
            Mode::InTable(lines) => close_table(&lines, &mut blocks),
            Mode::Normal => {}
        }

        blocks
    }

    /// Handle one line in normal mode and return the next mode.
    fn parse_line(&self, line: &str, blocks: &mut Vec<ContentBlock>) -> Mode {
        if is_fence(line) {
            return Mode::InCodeBlock(Vec::new());
        }
        if line.contains('|') {
            return Mode::InTable(vec![line.to_string()]);
        }
        if let Some(block) = self.parse_single_line(line) {
            blocks.push(block);
        }
        Mode::Normal
    }

    /// Classify a standalone line. Blank lines and empty headings or
    /// quotes yield nothing.
    fn parse_single_line(&self, line: &str) -> Option<ContentBlock> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        let hashes = trimmed.chars().take_while(|&c| c == '#').count();
        if (1..=MAX_HEADING_LEVEL).contains(&hashes) {
            let text = trimmed[hashes..].trim();
            if text.is_empty() {
                return None;
            }
            return Some(ContentBlock::Heading {
                level: hashes as u8,
                runs: self.inline.format(text),
            });
        }

        for marker in ["- ", "* ", "+ "] {
            if let Some(rest) = trimmed.strip_prefix(marker) {
                return Some(ContentBlock::ListItem {
                    ordered: false,
                    runs: self.inline.format(rest.trim()),
                });
            }
        }

        if let Some(m) = self.ordered_marker.find(line) {
            return Some(ContentBlock::ListItem {
                ordered: true,
                runs: self.inline.format(line[m.end()..].trim()),
            });
        }

        if trimmed.starts_with('>') {
            let text = trimmed.trim_start_matches(|c: char| c == '>' || c.is_whitespace());
            if text.is_empty() {
                return None;
            }
            return Some(ContentBlock::BlockQuote {
                runs: self.inline.format(text),
            });
        }

        if matches!(trimmed, "---" | "***" | "___") {
            return Some(ContentBlock::ThematicBreak);
        }

        Some(ContentBlock::Paragraph {
            runs: self.inline.format(trimmed),
        })
    }
}

impl Default for BlockParser {
    fn default() -> Self {
        Self::new()
    }
}

fn is_fence(line: &str) -> bool {
    line.trim().starts_with("```")
}

fn close_table(lines: &[String], blocks: &mut Vec<ContentBlock>) {
    if let Some((header, rows)) = split_grid(lines) {
        blocks.push(ContentBlock::Table { header, rows });
    }
}
