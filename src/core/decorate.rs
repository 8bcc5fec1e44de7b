//! Block decoration
//!
//! Wraps rendered tabular blocks in named containers and inserts single-line
//! directives at offsets measured from the `\toprule` marker line. This is
//! where the positional arithmetic lives: insertion indices are computed over
//! an explicit line vector, and repeated insertions into the same block must
//! account for the lines added before them.

use crate::data::constants::{
    CENTERING, LANDSCAPE_CONTAINER, MID_RULE, TABLE_CONTAINER, TOP_RULE,
};
use crate::utils::error::{WideTableError, WideTableResult};

/// Wrap each block between `\begin{container}` and `\end{container}` lines.
///
/// Relies on blocks ending with a newline so the closing directive starts a
/// fresh line, which `render_tabular` guarantees.
pub fn wrap_container(blocks: &[String], container: &str) -> Vec<String> {
    blocks
        .iter()
        .map(|block| format!("\\begin{{{}}}\n{}\\end{{{}}}\n", container, block, container))
        .collect()
}

/// Insert `command` as its own line at `offset` lines past the first
/// `\toprule` line of each block.
///
/// Offset 0 places the command on the line immediately before the marker,
/// inside any containers but above the tabular body. Offsets past the end of
/// a block append. A block with no marker line fails with
/// [`WideTableError::MalformedMarkup`]; the renderer always emits one, so a
/// missing marker means the block was not produced by this pipeline.
pub fn insert_command(
    blocks: &[String],
    command: &str,
    offset: usize,
) -> WideTableResult<Vec<String>> {
    blocks
        .iter()
        .enumerate()
        .map(|(index, block)| {
            let mut lines: Vec<&str> = block.split('\n').collect();
            let marker = lines
                .iter()
                .position(|line| *line == TOP_RULE)
                .ok_or_else(|| {
                    WideTableError::malformed_markup(format!(
                        "block {} has no {} line",
                        index, TOP_RULE
                    ))
                })?;
            let at = (marker + offset).min(lines.len());
            lines.insert(at, command);
            Ok(lines.join("\n"))
        })
        .collect()
}

/// Insert a `\midrule` at each body-relative offset, in list order.
///
/// Each insertion shifts every later line of the same block down by one, so
/// the k-th offset lands at `marker + offset + k`. Offsets are interpreted
/// against the block as originally rendered, which is what callers count
/// rows in.
pub fn insert_mid_rules(blocks: &[String], offsets: &[usize]) -> WideTableResult<Vec<String>> {
    let mut decorated = blocks.to_vec();
    for (k, offset) in offsets.iter().enumerate() {
        decorated = insert_command(&decorated, MID_RULE, offset + k)?;
    }
    Ok(decorated)
}

/// Wrap in a `table` float and add `\centering` above the top rule
pub fn center_pass(blocks: &[String]) -> WideTableResult<Vec<String>> {
    let wrapped = wrap_container(blocks, TABLE_CONTAINER);
    insert_command(&wrapped, CENTERING, 0)
}

/// Wrap in a `landscape` container. Applied after the center pass when both
/// are requested, so landscape is the outer container.
pub fn landscape_pass(blocks: &[String]) -> Vec<String> {
    wrap_container(blocks, LANDSCAPE_CONTAINER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn block() -> String {
        "\\begin{tabular}{ll}\n\
         \\toprule\n\
         a & b \\\\\n\
         \\midrule\n\
         1 & 2 \\\\\n\
         3 & 4 \\\\\n\
         \\bottomrule\n\
         \\end{tabular}\n"
            .to_string()
    }

    #[test]
    fn test_wrap_container() {
        let wrapped = wrap_container(&[block()], "landscape");
        assert!(wrapped[0].starts_with("\\begin{landscape}\n\\begin{tabular}"));
        assert!(wrapped[0].ends_with("\\end{tabular}\n\\end{landscape}\n"));
    }

    #[test]
    fn test_insert_at_offset_zero_precedes_marker() {
        let out = insert_command(&[block()], CENTERING, 0).unwrap();
        let lines: Vec<&str> = out[0].split('\n').collect();
        let marker = lines.iter().position(|l| *l == TOP_RULE).unwrap();
        assert_eq!(lines[marker - 1], CENTERING);
    }

    #[test]
    fn test_insert_offset_zero_after_wrap() {
        // Wrapping shifts the marker down; offset 0 must still target it
        let wrapped = wrap_container(&[block()], "table");
        let out = insert_command(&wrapped, CENTERING, 0).unwrap();
        let lines: Vec<&str> = out[0].split('\n').collect();
        assert_eq!(lines[0], "\\begin{table}");
        assert_eq!(lines[2], CENTERING);
        assert_eq!(lines[3], TOP_RULE);
    }

    #[test]
    fn test_insert_deeper_offset() {
        let out = insert_command(&[block()], MID_RULE, 3).unwrap();
        let lines: Vec<&str> = out[0].split('\n').collect();
        let marker = lines.iter().position(|l| *l == TOP_RULE).unwrap();
        assert_eq!(lines[marker + 3], MID_RULE);
    }

    #[test]
    fn test_insert_uses_first_marker_only() {
        let doubled = format!("{}{}", block(), block());
        let out = insert_command(&[doubled], CENTERING, 0).unwrap();
        let first = out[0].find(CENTERING).unwrap();
        let top = out[0].find(TOP_RULE).unwrap();
        assert!(first < top);
        assert_eq!(out[0].matches(CENTERING).count(), 1);
    }

    #[test]
    fn test_missing_marker_is_error() {
        let bad = "\\begin{tabular}{l}\nno rules here\n\\end{tabular}\n".to_string();
        let err = insert_command(&[bad], CENTERING, 0).unwrap_err();
        assert!(matches!(err, WideTableError::MalformedMarkup { .. }));
    }

    #[test]
    fn test_oversized_offset_appends() {
        let out = insert_command(&[block()], MID_RULE, 100).unwrap();
        assert!(out[0].ends_with(MID_RULE));
    }

    #[test]
    fn test_cumulative_shift() {
        // Two mid-rules at original offsets [2, 2] must land on consecutive
        // lines, not both at marker+2
        let out = insert_mid_rules(&[block()], &[2, 2]).unwrap();
        let lines: Vec<&str> = out[0].split('\n').collect();
        let marker = lines.iter().position(|l| *l == TOP_RULE).unwrap();
        assert_eq!(lines[marker + 2], MID_RULE);
        assert_eq!(lines[marker + 3], MID_RULE);
        // The header separator originally at marker+2 moved down by two,
        // and the first data row follows it
        assert_eq!(lines[marker + 4], "\\midrule");
        assert_eq!(lines[marker + 5], "1 & 2 \\\\");
    }

    #[test]
    fn test_mid_rules_ascending_offsets() {
        let out = insert_mid_rules(&[block()], &[2, 4]).unwrap();
        let lines: Vec<&str> = out[0].split('\n').collect();
        let marker = lines.iter().position(|l| *l == TOP_RULE).unwrap();
        assert_eq!(lines[marker + 2], MID_RULE);
        // Second offset 4 shifts by one prior insertion: lands at marker+5
        assert_eq!(lines[marker + 5], MID_RULE);
    }

    #[test]
    fn test_center_pass_structure() {
        let out = center_pass(&[block()]).unwrap();
        let lines: Vec<&str> = out[0].split('\n').collect();
        assert_eq!(lines[0], "\\begin{table}");
        assert_eq!(lines[2], CENTERING);
        assert_eq!(lines[3], TOP_RULE);
        assert!(out[0].ends_with("\\end{table}\n"));
    }

    #[test]
    fn test_landscape_outside_table() {
        let centered = center_pass(&[block()]).unwrap();
        let out = landscape_pass(&centered);
        let landscape = out[0].find("\\begin{landscape}").unwrap();
        let table = out[0].find("\\begin{table}").unwrap();
        assert!(landscape < table);
    }

    #[test]
    fn test_inputs_unchanged() {
        let original = vec![block()];
        let _ = insert_command(&original, CENTERING, 0).unwrap();
        assert_eq!(original[0], block());
    }
}
