//! Core pipeline modules
//!
//! The splitting pipeline, stage by stage:
//! - `partition`: column partitioning arithmetic
//! - `render`: booktabs tabular rendering
//! - `decorate`: container wrapping and marker-relative directive insertion
//! - `assemble`: page-break joining
//! - `pipeline`: orchestration and options

pub mod assemble;
pub mod decorate;
pub mod partition;
pub mod pipeline;
pub mod render;

// Re-export the stage entry points
pub use assemble::combine_blocks;
pub use decorate::{
    center_pass, insert_command, insert_mid_rules, landscape_pass, wrap_container,
};
pub use partition::partition_columns;
pub use pipeline::{wide_table, WideTableOptions};
pub use render::{render_subtables, render_tabular, RenderOptions};
