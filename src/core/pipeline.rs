//! Wide-table pipeline orchestration
//!
//! Fixed pass order: partition the columns, render each partition, apply the
//! center pass, then the landscape pass, then mid-rule insertions, then join
//! everything with page breaks. Options are an immutable value passed in;
//! nothing here touches files or global state.

use log::{debug, trace};

use crate::core::assemble::combine_blocks;
use crate::core::decorate::{center_pass, insert_mid_rules, landscape_pass};
use crate::core::partition::partition_columns;
use crate::core::render::{render_subtables, RenderOptions};
use crate::table::Table;
use crate::utils::error::WideTableResult;

/// Options for [`wide_table`]
#[derive(Debug, Clone)]
pub struct WideTableOptions {
    /// Columns per subtable (required, must be positive)
    pub column_width: usize,
    /// Wrap each subtable in a `landscape` container
    pub landscape: bool,
    /// Wrap each subtable in a `table` float with `\centering`
    pub center: bool,
    /// Body-relative line offsets at which to insert `\midrule`, applied in
    /// list order with cumulative shifting
    pub mid_rules: Vec<usize>,
    /// Rendering options for each subtable
    pub render: RenderOptions,
}

impl WideTableOptions {
    /// Options with the standard decoration passes enabled
    pub fn new(column_width: usize) -> Self {
        Self {
            column_width,
            landscape: true,
            center: true,
            mid_rules: Vec::new(),
            render: RenderOptions::default(),
        }
    }

    /// Options producing undecorated tabular blocks (no containers, no
    /// centering), still joined by page breaks
    pub fn plain(column_width: usize) -> Self {
        Self {
            column_width,
            landscape: false,
            center: false,
            mid_rules: Vec::new(),
            render: RenderOptions::default(),
        }
    }
}

/// Split a wide table into LaTeX subtables and join them into one document
/// fragment, one subtable per page.
pub fn wide_table(table: &Table, options: &WideTableOptions) -> WideTableResult<String> {
    let subtables = partition_columns(table, options.column_width)?;
    debug!(
        "partitioned {} columns into {} subtables of width {}",
        table.num_cols(),
        subtables.len(),
        options.column_width
    );

    let mut blocks = render_subtables(&subtables, &options.render);
    trace!(
        "rendered {} blocks, {} lines total",
        blocks.len(),
        blocks.iter().map(|b| b.lines().count()).sum::<usize>()
    );

    if options.center {
        blocks = center_pass(&blocks)?;
    }
    if options.landscape {
        blocks = landscape_pass(&blocks);
    }
    if !options.mid_rules.is_empty() {
        blocks = insert_mid_rules(&blocks, &options.mid_rules)?;
    }

    Ok(combine_blocks(&blocks))
}
