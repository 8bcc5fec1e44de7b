//! Column partitioning
//!
//! Splits a wide table into contiguous column groups of a fixed width plus a
//! narrower remainder group, the unit of pagination for the rest of the
//! pipeline.

use crate::table::Table;
use crate::utils::error::{WideTableError, WideTableResult};

/// Split `table` into subtables of `width` contiguous columns each.
///
/// With `C` columns this yields `C / width` full subtables covering
/// `[0, width)`, `[width, 2*width)`, ... followed by one subtable holding the
/// last `C % width` columns. When the columns divide evenly there is no
/// remainder subtable; a width larger than the table yields a single subtable
/// equal to the whole table.
///
/// Fails with [`WideTableError::InvalidArgument`] when `width` is zero.
pub fn partition_columns(table: &Table, width: usize) -> WideTableResult<Vec<Table>> {
    if width == 0 {
        return Err(WideTableError::invalid_argument(
            "column width must be a positive integer",
        ));
    }

    let cols = table.num_cols();
    let full = cols / width;
    let remainder = cols % width;

    let mut subtables = Vec::with_capacity(full + usize::from(remainder > 0));
    for i in 0..full {
        subtables.push(table.slice_cols(i * width..(i + 1) * width));
    }
    // An evenly divisible table gets no remainder subtable; appending a
    // zero-width slice here would degenerate to a duplicate of the full table
    // in negative-index terms, which is never wanted.
    if remainder > 0 {
        subtables.push(table.slice_cols(cols - remainder..cols));
    }

    Ok(subtables)
}
