//! Markdown parsing module.

mod block;
mod inline;
mod table;

pub use block::BlockParser;
pub use inline::InlineFormatter;
pub use table::{split_grid, split_row};
