//! Widetex CLI - split a wide CSV into paginated LaTeX subtables

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use widetex::{table_from_csv_str, wide_table, RenderOptions, WideTableOptions};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "wtab")]
#[command(version)]
#[command(about = "Widetex - split wide tabular data into paginated LaTeX subtables", long_about = None)]
struct Cli {
    /// Input CSV file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Number of columns per subtable
    #[arg(short, long)]
    columns: usize,

    /// Do not wrap subtables in a landscape container
    #[arg(long)]
    no_landscape: bool,

    /// Do not wrap subtables in a centered table float
    #[arg(long)]
    no_center: bool,

    /// Insert a \midrule at this body-relative offset (repeatable, applied
    /// in order)
    #[arg(short, long = "midrule")]
    midrules: Vec<usize>,

    /// Do not escape LaTeX special characters in cells
    #[arg(long)]
    no_escape: bool,

    /// Do not prepend a positional row-label column
    #[arg(long)]
    no_row_labels: bool,

    /// Emit a compilable standalone document instead of a fragment
    #[arg(long)]
    standalone: bool,
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let input = match cli.input_file {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let table = match table_from_csv_str(&input) {
        Ok(table) => table,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    let options = WideTableOptions {
        column_width: cli.columns,
        landscape: !cli.no_landscape,
        center: !cli.no_center,
        mid_rules: cli.midrules.clone(),
        render: RenderOptions {
            escape: !cli.no_escape,
            row_labels: !cli.no_row_labels,
        },
    };

    let fragment = match wide_table(&table, &options) {
        Ok(fragment) => fragment,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    let result = if cli.standalone {
        standalone_document(&fragment, options.landscape)
    } else {
        fragment
    };

    match cli.output {
        Some(path) => {
            let mut file = fs::File::create(&path)?;
            write!(file, "{}", result)?;
            eprintln!("✓ Output written to: {}", path);
        }
        None => {
            print!("{}", result);
        }
    }

    Ok(())
}

/// Wrap a fragment in a minimal document with the packages its directives need
#[cfg(feature = "cli")]
fn standalone_document(fragment: &str, landscape: bool) -> String {
    let mut doc = String::new();
    doc.push_str("\\documentclass{article}\n");
    doc.push_str("\\usepackage{booktabs}\n");
    if landscape {
        doc.push_str("\\usepackage{pdflscape}\n");
    }
    doc.push_str("\\begin{document}\n");
    doc.push_str(fragment);
    doc.push_str("\\end{document}\n");
    doc
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install widetex --features cli");
    eprintln!("  wtab --columns <N> [OPTIONS] [INPUT_FILE]");
}
