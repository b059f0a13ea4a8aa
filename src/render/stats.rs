//! Block statistics.

use crate::model::ContentBlock;
use serde::{Deserialize, Serialize};

/// Counts of parsed blocks and text volume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockStats {
    /// Number of headings
    pub heading_count: u32,

    /// Number of plain paragraphs
    pub paragraph_count: u32,

    /// Number of list items
    pub list_item_count: u32,

    /// Number of tables
    pub table_count: u32,

    /// Number of fenced code blocks
    pub code_block_count: u32,

    /// Number of block quotes
    pub quote_count: u32,

    /// Number of thematic breaks
    pub break_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl BlockStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics over a block sequence.
    pub fn from_blocks(blocks: &[ContentBlock]) -> Self {
        let mut stats = Self::new();
        for block in blocks {
            stats.add_block(block);
        }
        stats
    }

    /// Count one block and its text.
    pub fn add_block(&mut self, block: &ContentBlock) {
        match block {
            ContentBlock::Heading { .. } => self.heading_count += 1,
            ContentBlock::Paragraph { .. } => self.paragraph_count += 1,
            ContentBlock::ListItem { .. } => self.list_item_count += 1,
            ContentBlock::BlockQuote { .. } => self.quote_count += 1,
            ContentBlock::CodeBlock { .. } => self.code_block_count += 1,
            ContentBlock::Table { .. } => self.table_count += 1,
            ContentBlock::ThematicBreak => self.break_count += 1,
        }
        self.count_text(&block.plain_text());
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Total number of blocks counted.
    pub fn block_count(&self) -> u32 {
        self.heading_count
            + self.paragraph_count
            + self.list_item_count
            + self.table_count
            + self.code_block_count
            + self.quote_count
            + self.break_count
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &BlockStats) {
        self.heading_count += other.heading_count;
        self.paragraph_count += other.paragraph_count;
        self.list_item_count += other.list_item_count;
        self.table_count += other.table_count;
        self.code_block_count += other.code_block_count;
        self.quote_count += other.quote_count;
        self.break_count += other.break_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}
