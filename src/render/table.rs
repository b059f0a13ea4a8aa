//! Styled table construction.

use crate::model::{TableCell, TableElement, TableRow};
use crate::parser::split_grid;
use crate::theme::{StyleIntent, Theme};

/// Builds [`TableElement`]s with themed header and striped body rows.
#[derive(Debug, Clone, Copy)]
pub struct TableBuilder<'a> {
    theme: &'a Theme,
}

impl<'a> TableBuilder<'a> {
    /// Create a builder using the given theme.
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    /// Build a table from raw pipe-table lines (header, separator, data).
    ///
    /// Returns `None` when fewer than three lines are given or the header
    /// has no cells.
    pub fn build<S: AsRef<str>>(&self, lines: &[S]) -> Option<TableElement> {
        let (header, rows) = split_grid(lines)?;
        Some(self.from_grid(&header, &rows))
    }

    /// Build a table from an already split grid.
    ///
    /// Rows whose cell count differs from the header are skipped. Body rows
    /// alternate between even and odd styling by their position among the
    /// accepted rows.
    pub fn from_grid<S: AsRef<str>>(&self, header: &[S], rows: &[Vec<S>]) -> TableElement {
        let mut table = TableElement::new();
        table.add_row(self.row(header, StyleIntent::TableHeaderCell));

        let accepted = rows.iter().filter(|row| {
            let keep = row.len() == header.len();
            if !keep {
                log::debug!("skipping row with {} of {} cells", row.len(), header.len());
            }
            keep
        });

        for (index, row) in accepted.enumerate() {
            table.add_row(self.row(row.as_slice(), StyleIntent::body_row(index)));
        }

        table
    }

    fn row<S: AsRef<str>>(&self, cells: &[S], intent: StyleIntent) -> TableRow {
        let style = self.theme.resolve(intent);
        let cells = cells
            .iter()
            .map(|text| TableCell::new(text.as_ref(), style.clone()))
            .collect();
        TableRow::new(cells, intent)
    }
}
