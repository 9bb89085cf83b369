//! GitHub-style table row handling.

/// Split a table row into trimmed cells.
///
/// One leading and one trailing pipe are removed first, so empty edge cells
/// written as `| |` are kept and interior empty cells survive.
pub fn split_row(line: &str) -> Vec<String> {
    let mut row = line;
    if let Some(rest) = row.trim_start().strip_prefix('|') {
        row = rest;
    }
    if let Some(rest) = row.trim_end().strip_suffix('|') {
        row = rest;
    }
    row.split('|').map(|c| c.trim().to_string()).collect()
}

/// Whether a single divider cell is a valid alignment marker.
///
/// A run of dashes, optionally flanked by one colon on either side, at least
/// three marker characters long (`---`, `:--:`, `---:`).
fn is_divider_cell(cell: &str) -> bool {
    let inner = cell.strip_prefix(':').unwrap_or(cell);
    let inner = inner.strip_suffix(':').unwrap_or(inner);
    !inner.is_empty() && inner.bytes().all(|b| b == b'-') && cell.len() >= 3
}

/// Whether `line` is a table divider row.
pub fn is_divider(line: &str) -> bool {
    let cells = split_row(line);
    !cells.is_empty() && cells.iter().all(|c| is_divider_cell(c))
}

/// Pad with empty cells or truncate to exactly `columns` cells.
pub fn normalize_row(mut row: Vec<String>, columns: usize) -> Vec<String> {
    row.resize(columns, String::new());
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_row_strips_edge_pipes() {
        assert_eq!(split_row("| a | b |"), vec!["a", "b"]);
        assert_eq!(split_row("a | b"), vec!["a", "b"]);
        assert_eq!(split_row("  | a | b |  "), vec!["a", "b"]);
    }

    #[test]
    fn test_split_row_keeps_empty_cells() {
        assert_eq!(split_row("| a |  | c |"), vec!["a", "", "c"]);
        assert_eq!(split_row("|| b |"), vec!["", "b"]);
        assert_eq!(split_row("|"), vec![""]);
    }

    #[test]
    fn test_is_divider_accepts_alignment_markers() {
        assert!(is_divider("---|:--:|---:"));
        assert!(is_divider("|---|---|"));
        assert!(is_divider("| :--- | :---: | ---: |"));
        assert!(is_divider("-------------------"));
    }

    #[test]
    fn test_is_divider_rejects_non_dash_cells() {
        assert!(!is_divider("abc|---|---"));
        assert!(!is_divider("|--|--|"));
        assert!(!is_divider("| --- | |"));
        assert!(!is_divider("::|---"));
        assert!(!is_divider("-:-|---"));
        assert!(!is_divider(""));
        assert!(!is_divider("|"));
    }

    #[test]
    fn test_normalize_row_pads_and_truncates() {
        let row = vec!["a".to_string()];
        assert_eq!(normalize_row(row, 3), vec!["a", "", ""]);

        let row = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(normalize_row(row, 2), vec!["a", "b"]);

        let row = vec!["a".to_string(), "b".to_string()];
        assert_eq!(normalize_row(row, 2), vec!["a", "b"]);
    }
}
