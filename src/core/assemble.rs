//! Output assembly
//!
//! Joins decorated blocks into the final document fragment, one subtable per
//! page.

use crate::data::constants::NEW_PAGE;

/// Prefix each block with a `\newpage` line and concatenate.
///
/// No separator is added between blocks beyond the page break itself; blocks
/// carry their own trailing newline.
pub fn combine_blocks(blocks: &[String]) -> String {
    let mut output = String::with_capacity(
        blocks.iter().map(String::len).sum::<usize>() + blocks.len() * (NEW_PAGE.len() + 1),
    );
    for block in blocks {
        output.push_str(NEW_PAGE);
        output.push('\n');
        output.push_str(block);
    }
    output
}
