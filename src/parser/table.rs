//! Pipe-table grid splitting.

/// Cells of one pipe-table line.
///
/// The line is trimmed, one leading and one trailing `|` are removed, and
/// the rest is split on `|` with each cell trimmed. A line with nothing
/// between its outer pipes has no cells.
pub fn split_row(line: &str) -> Vec<String> {
    let trimmed = line.trim();
    let inner = trimmed.strip_prefix('|').unwrap_or(trimmed);
    let inner = inner.strip_suffix('|').unwrap_or(inner);

    if inner.trim().is_empty() {
        return Vec::new();
    }

    inner.split('|').map(|cell| cell.trim().to_string()).collect()
}

/// Header and accepted body rows of a collected pipe table.
///
/// Returns `None` when fewer than three lines were collected or the header
/// has no cells. Line 1 is the separator and is skipped without inspection.
/// Body rows whose cell count differs from the header are dropped.
pub fn split_grid<S: AsRef<str>>(lines: &[S]) -> Option<(Vec<String>, Vec<Vec<String>>)> {
    if lines.len() < 3 {
        log::debug!("dropping table with {} line(s)", lines.len());
        return None;
    }

    let header = split_row(lines[0].as_ref());
    if header.is_empty() {
        log::debug!("dropping table without header cells");
        return None;
    }

    let rows = lines[2..]
        .iter()
        .map(|line| split_row(line.as_ref()))
        .filter(|cells| {
            let keep = cells.len() == header.len();
            if !keep {
                log::debug!(
                    "dropping table row with {} cell(s), expected {}",
                    cells.len(),
                    header.len()
                );
            }
            keep
        })
        .collect();

    Some((header, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_row_outer_pipes() {
        assert_eq!(split_row("| A | B |"), vec!["A", "B"]);
        assert_eq!(split_row("A | B"), vec!["A", "B"]);
        assert_eq!(split_row("  |x|  "), vec!["x"]);
    }

    #[test]
    fn test_split_row_keeps_inner_empty_cells() {
        assert_eq!(split_row("| a || c |"), vec!["a", "", "c"]);
    }

    #[test]
    fn test_split_row_empty() {
        assert!(split_row("||").is_empty());
        assert!(split_row("|").is_empty());
    }

    #[test]
    fn test_split_grid() {
        let lines = ["| A | B |", "|---|---|", "| 1 | 2 |", "| 3 |", "| 4 | 5 |"];
        let (header, rows) = split_grid(&lines).unwrap();
        assert_eq!(header, vec!["A", "B"]);
        assert_eq!(rows, vec![vec!["1", "2"], vec!["4", "5"]]);
    }

    #[test]
    fn test_split_grid_too_short() {
        assert!(split_grid(&["| A |", "|---|"]).is_none());
    }

    #[test]
    fn test_split_grid_all_rows_rejected() {
        let (header, rows) = split_grid(&["| A | B |", "|---|---|", "| only |"]).unwrap();
        assert_eq!(header.len(), 2);
        assert!(rows.is_empty());
    }
}
