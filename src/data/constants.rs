//! LaTeX command constants used by the splitting pipeline
//!
//! Every directive the pipeline emits or searches for lives here, so the
//! decorator and renderer agree on the exact spelling of each token.

/// Booktabs rule printed above the header row. Also the anchor line the
/// decorator searches for when inserting commands at body-relative offsets.
pub const TOP_RULE: &str = "\\toprule";

/// Booktabs rule between header and body, and the directive inserted by
/// mid-rule passes.
pub const MID_RULE: &str = "\\midrule";

/// Booktabs rule closing the table body.
pub const BOTTOM_RULE: &str = "\\bottomrule";

/// Centering directive placed inside the `table` container.
pub const CENTERING: &str = "\\centering";

/// Page break separating consecutive subtables.
pub const NEW_PAGE: &str = "\\newpage";

/// Container name for the float wrapper applied by the center pass.
pub const TABLE_CONTAINER: &str = "table";

/// Container name for the rotated-page wrapper (pdflscape/lscape).
pub const LANDSCAPE_CONTAINER: &str = "landscape";

/// Row terminator inside a tabular body.
pub const ROW_END: &str = " \\\\";

/// Cell separator inside a tabular row.
pub const CELL_SEP: &str = " & ";
