//! # widetex
//!
//! Split wide tabular data into a series of paginated LaTeX subtables.
//!
//! ## Features
//!
//! - **Column Partitioning**: fixed-width column groups plus a narrower
//!   remainder group
//! - **Booktabs Rendering**: each group becomes a `tabular` block with
//!   `\toprule`/`\midrule`/`\bottomrule`
//! - **Decoration Passes**: `table` float with `\centering`, outer
//!   `landscape` container, `\midrule` insertion at body-relative offsets
//! - **Pagination**: subtables joined by `\newpage`
//! - **Data Loading**: build tables from CSV or JSON records (feature
//!   `data-loading`)
//! - **Pure Core**: no I/O and no global state; every stage maps values to
//!   new values
//!
//! ## Usage Examples
//!
//! ```rust
//! use widetex::{wide_table, Table, WideTableOptions};
//!
//! let table = Table::from_pairs([
//!     ("alpha", vec!["1", "2"]),
//!     ("beta", vec!["3", "4"]),
//!     ("gamma", vec!["5", "6"]),
//! ]);
//!
//! let latex = wide_table(&table, &WideTableOptions::new(2)).unwrap();
//! assert!(latex.starts_with("\\newpage\n\\begin{landscape}"));
//! assert!(latex.contains("\\centering"));
//! ```
//!
//! Disable the decoration passes for raw tabular blocks:
//!
//! ```rust
//! use widetex::{wide_table, Table, WideTableOptions};
//!
//! let table = Table::from_pairs([("a", vec!["1"]), ("b", vec!["2"])]);
//! let latex = wide_table(&table, &WideTableOptions::plain(1)).unwrap();
//! assert!(!latex.contains("\\begin{table}"));
//! ```

/// Core pipeline modules
pub mod core;

/// Data layer - static data and table ingestion
pub mod data;

/// Table data model
pub mod table;

/// Utility modules
pub mod utils;

// Re-export the pipeline surface
pub use core::pipeline::{wide_table, WideTableOptions};
pub use core::{
    center_pass, combine_blocks, insert_command, insert_mid_rules, landscape_pass,
    partition_columns, render_subtables, render_tabular, wrap_container, RenderOptions,
};

// Re-export the data model and errors
pub use table::{Column, Table};
pub use utils::error::{WideTableError, WideTableResult};

// Re-export data-layer items
pub use data::constants;
pub use data::escapes::escape_latex;

#[cfg(feature = "data-loading")]
pub use data::loader::{table_from_csv_path, table_from_csv_str, table_from_json_records};
