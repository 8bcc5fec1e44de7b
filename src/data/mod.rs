//! Data layer - Static data and table ingestion
//!
//! This module contains the static data used by the pipeline:
//! - LaTeX command and marker constants
//! - Special-character escape tables
//! - Table loading from CSV and JSON records (feature-gated)

pub mod constants;
pub mod escapes;

#[cfg(feature = "data-loading")]
pub mod loader;

// Re-export commonly used items
pub use constants::{
    BOTTOM_RULE, CENTERING, LANDSCAPE_CONTAINER, MID_RULE, NEW_PAGE, TABLE_CONTAINER, TOP_RULE,
};
pub use escapes::{escape_latex, LATEX_ESCAPES};

#[cfg(feature = "data-loading")]
pub use loader::{table_from_csv_path, table_from_csv_str, table_from_json_records};
