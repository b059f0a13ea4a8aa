//! Table types.

use crate::theme::{ResolvedStyle, StyleIntent};
use serde::{Deserialize, Serialize};

/// A styled table. Header rows come first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableElement {
    /// Rows in the table
    pub rows: Vec<TableRow>,

    /// Number of header rows (0 = no header)
    pub header_rows: u8,
}

impl TableElement {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            header_rows: 0,
        }
    }

    /// Add a row to the table. Header rows must be added before body rows.
    pub fn add_row(&mut self, row: TableRow) {
        if row.is_header() && self.header_rows as usize == self.rows.len() {
            self.header_rows = self.header_rows.saturating_add(1);
        }
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (based on first row).
    pub fn column_count(&self) -> usize {
        self.rows.first().map(|r| r.cells.len()).unwrap_or(0)
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get header rows.
    pub fn header(&self) -> &[TableRow] {
        &self.rows[..self.header_rows as usize]
    }

    /// Get body rows (non-header).
    pub fn body(&self) -> &[TableRow] {
        &self.rows[self.header_rows as usize..]
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for TableElement {
    fn default() -> Self {
        Self::new()
    }
}

/// A table row; every cell shares the row's intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row
    pub cells: Vec<TableCell>,

    /// Style intent the cells were resolved from
    pub intent: StyleIntent,
}

impl TableRow {
    /// Create a row with cells.
    pub fn new(cells: Vec<TableCell>, intent: StyleIntent) -> Self {
        Self { cells, intent }
    }

    /// Create a row from text values sharing one style.
    pub fn from_strings<S: Into<String>>(
        values: impl IntoIterator<Item = S>,
        intent: StyleIntent,
        style: &ResolvedStyle,
    ) -> Self {
        let cells = values
            .into_iter()
            .map(|v| TableCell::new(v, style.clone()))
            .collect();
        Self::new(cells, intent)
    }

    /// Whether this is a header row.
    pub fn is_header(&self) -> bool {
        self.intent == StyleIntent::TableHeaderCell
    }

    /// Get plain text representation.
    pub fn plain_text(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// A table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell text, may contain line breaks
    pub text: String,

    /// Resolved cell style
    pub style: ResolvedStyle,
}

impl TableCell {
    /// Create a new cell.
    pub fn new(text: impl Into<String>, style: ResolvedStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Check if the cell is empty.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn test_table_new() {
        let table = TableElement::new();
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 0);
    }

    #[test]
    fn test_table_with_data() {
        let theme = Theme::corporate();
        let header = theme.resolve(StyleIntent::TableHeaderCell);
        let body = theme.resolve(StyleIntent::TableBodyCellEven);

        let mut table = TableElement::new();
        table.add_row(TableRow::from_strings(
            ["Name", "Age"],
            StyleIntent::TableHeaderCell,
            &header,
        ));
        table.add_row(TableRow::from_strings(
            ["Alice", "30"],
            StyleIntent::TableBodyCellEven,
            &body,
        ));

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.header().len(), 1);
        assert_eq!(table.body().len(), 1);
        assert_eq!(table.plain_text(), "Name\tAge\nAlice\t30");
    }

    #[test]
    fn test_late_header_row_is_body() {
        let theme = Theme::corporate();
        let header = theme.resolve(StyleIntent::TableHeaderCell);
        let body = theme.resolve(StyleIntent::TableBodyCellEven);

        let mut table = TableElement::new();
        table.add_row(TableRow::from_strings(["a"], StyleIntent::TableBodyCellEven, &body));
        table.add_row(TableRow::from_strings(["b"], StyleIntent::TableHeaderCell, &header));
        assert_eq!(table.header_rows, 0);
    }
}
