//! Table rendering for effective configuration output.
//!
//! Thin wrapper over comfy-table: the caller supplies column titles and
//! rows, this module owns presets and header styling.

use comfy_table::{presets, Attribute, Cell, ContentArrangement, Table};

/// Renders `rows` under `columns` as a text table.
///
/// `decorated` selects full UTF-8 borders with bold headers; the plain
/// variant is borderless and style-free, suitable for piping.
pub fn render(columns: &[&str], rows: &[Vec<String>], decorated: bool) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if decorated {
        table.load_preset(presets::UTF8_FULL);
        table.set_header(
            columns
                .iter()
                .map(|column| Cell::new(column).add_attribute(Attribute::Bold))
                .collect::<Vec<_>>(),
        );
    } else {
        table.load_preset(presets::NOTHING);
        table.set_header(columns.iter().map(Cell::new).collect::<Vec<_>>());
    }

    for row in rows {
        table.add_row(row.clone());
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<Vec<String>> {
        vec![
            vec!["first.key".to_string(), "some value".to_string()],
            vec!["second.key".to_string(), "localhost:2255".to_string()],
        ]
    }

    #[test]
    fn test_render_contains_headers_and_rows() {
        let output = render(&["Key", "Value"], &sample_rows(), false);
        assert!(output.contains("Key"));
        assert!(output.contains("Value"));
        assert!(output.contains("first.key"));
        assert!(output.contains("localhost:2255"));
    }

    #[test]
    fn test_decorated_render_draws_borders() {
        let decorated = render(&["Key", "Value"], &sample_rows(), true);
        let plain = render(&["Key", "Value"], &sample_rows(), false);
        assert!(decorated.contains('│'));
        assert!(!plain.contains('│'));
    }

    #[test]
    fn test_render_with_no_rows() {
        let output = render(&["Key", "Value"], &[], false);
        assert!(output.contains("Key"));
    }
}
