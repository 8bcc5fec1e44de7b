//! LaTeX special-character escapes
//!
//! Cell text and column headers pass through `escape_latex` before rendering
//! so that data containing `&`, `%`, `_` and friends produces compilable
//! markup. Matches the escape set applied by common dataframe exporters.

use phf::phf_map;

/// Characters with reserved meaning in LaTeX text mode and their replacements
pub static LATEX_ESCAPES: phf::Map<char, &'static str> = phf_map! {
    '&' => "\\&",
    '%' => "\\%",
    '$' => "\\$",
    '#' => "\\#",
    '_' => "\\_",
    '{' => "\\{",
    '}' => "\\}",
    '~' => "\\textasciitilde{}",
    '^' => "\\textasciicircum{}",
    '\\' => "\\textbackslash{}",
};

/// Escape LaTeX special characters in a text fragment
pub fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match LATEX_ESCAPES.get(&c) {
            Some(rep) => out.push_str(rep),
            None => out.push(c),
        }
    }
    out
}
