//! Booktabs tabular rendering
//!
//! Maps a [`Table`] (or a list of column partitions) to LaTeX `tabular`
//! markup. Output always contains the literal `\toprule` line the decorator
//! anchors on, with one record per line.

use crate::data::constants::{BOTTOM_RULE, CELL_SEP, MID_RULE, ROW_END, TOP_RULE};
use crate::data::escapes::escape_latex;
use crate::table::Table;

/// Rendering options
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Escape LaTeX special characters in headers and cells
    pub escape: bool,
    /// Prepend a positional row-label column (0, 1, 2, ...) so each subtable
    /// stays readable on its own page
    pub row_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            escape: true,
            row_labels: true,
        }
    }
}

/// Render one table as a booktabs `tabular` block.
///
/// The block ends with a newline after `\end{tabular}`, matching what the
/// container wrap expects.
pub fn render_tabular(table: &Table, options: &RenderOptions) -> String {
    let label_cols = usize::from(options.row_labels);
    let col_spec = "l".repeat(table.num_cols() + label_cols);

    let mut output = String::new();
    output.push_str(&format!("\\begin{{tabular}}{{{}}}\n", col_spec));
    output.push_str(TOP_RULE);
    output.push('\n');

    // Header row; the label column gets an empty header cell
    let mut header: Vec<String> = Vec::with_capacity(table.num_cols() + label_cols);
    if options.row_labels {
        header.push(String::new());
    }
    for column in table.columns() {
        header.push(render_cell(&column.name, options));
    }
    output.push_str(&header.join(CELL_SEP));
    output.push_str(ROW_END);
    output.push('\n');

    output.push_str(MID_RULE);
    output.push('\n');

    for row in 0..table.num_rows() {
        let mut cells: Vec<String> = Vec::with_capacity(table.num_cols() + label_cols);
        if options.row_labels {
            cells.push(row.to_string());
        }
        for col in 0..table.num_cols() {
            cells.push(render_cell(table.cell(row, col), options));
        }
        output.push_str(&cells.join(CELL_SEP));
        output.push_str(ROW_END);
        output.push('\n');
    }

    output.push_str(BOTTOM_RULE);
    output.push('\n');
    output.push_str("\\end{tabular}\n");

    output
}

/// Render each partition to its own tabular block, preserving order
pub fn render_subtables(subtables: &[Table], options: &RenderOptions) -> Vec<String> {
    subtables
        .iter()
        .map(|t| render_tabular(t, options))
        .collect()
}

fn render_cell(text: &str, options: &RenderOptions) -> String {
    if options.escape {
        escape_latex(text)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Table {
        Table::from_pairs([("a", vec!["1", "2"]), ("b", vec!["3", "4"])])
    }

    #[test]
    fn test_basic_layout() {
        let opts = RenderOptions {
            escape: true,
            row_labels: false,
        };
        let out = render_tabular(&sample(), &opts);
        assert_eq!(
            out,
            "\\begin{tabular}{ll}\n\
             \\toprule\n\
             a & b \\\\\n\
             \\midrule\n\
             1 & 3 \\\\\n\
             2 & 4 \\\\\n\
             \\bottomrule\n\
             \\end{tabular}\n"
        );
    }

    #[test]
    fn test_row_labels() {
        let out = render_tabular(&sample(), &RenderOptions::default());
        assert!(out.contains("\\begin{tabular}{lll}"));
        assert!(out.contains(" & a & b \\\\"));
        assert!(out.contains("0 & 1 & 3 \\\\"));
        assert!(out.contains("1 & 2 & 4 \\\\"));
    }

    #[test]
    fn test_top_rule_is_own_line() {
        let out = render_tabular(&sample(), &RenderOptions::default());
        assert!(out.lines().any(|l| l == TOP_RULE));
    }

    #[test]
    fn test_escaping_applied() {
        let t = Table::from_pairs([("p_50", vec!["5%"])]);
        let out = render_tabular(&t, &RenderOptions::default());
        assert!(out.contains("p\\_50"));
        assert!(out.contains("5\\%"));
    }

    #[test]
    fn test_escaping_disabled() {
        let t = Table::from_pairs([("raw", vec!["$x^2$"])]);
        let opts = RenderOptions {
            escape: false,
            row_labels: false,
        };
        let out = render_tabular(&t, &opts);
        assert!(out.contains("$x^2$"));
    }

    #[test]
    fn test_subtables_preserve_order() {
        let parts = vec![
            Table::from_pairs([("a", vec!["1"])]),
            Table::from_pairs([("b", vec!["2"])]),
        ];
        let blocks = render_subtables(&parts, &RenderOptions::default());
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].contains("& a"));
        assert!(blocks[1].contains("& b"));
    }
}
