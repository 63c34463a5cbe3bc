//! relayout - Reconstruct document layout from recognizer output
//!
//! A command line tool that reads per-page recognizer output (native text
//! blocks and word boxes, or an OCR token stream, plus detected table
//! boxes) from a JSON file, runs the reconstruction pipeline, and writes
//! the page hierarchy as JSON.

use clap::{ArgAction, Parser, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use tesela_core::high_level::reconstruct_page_lossy;
use tesela_core::utils::bbox2str;
use tesela_core::{AnchorMode, LineGrouping, Page, PageInput, ReconstructOptions, TableSettings};

/// Row anchor strategy for table clustering.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum AnchorArg {
    /// Anchor drifts to the last appended word (compatible behavior)
    #[default]
    Drifting,
    /// Anchor stays at the row's first word
    FirstWord,
}

/// Line grouping strategy for the OCR path.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum GroupingArg {
    /// Flush on every line-id change (compatible behavior)
    #[default]
    Adjacent,
    /// Merge non-adjacent runs with equal line ids
    ById,
}

/// Reconstruct document layout (lines, words, tables, cells) from
/// recognizer output.
#[derive(Parser, Debug)]
#[command(name = "relayout")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON file holding a list of page inputs
    input: PathBuf,

    /// Output file ("-" for stdout)
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// Pretty-print the output JSON
    #[arg(long, action = ArgAction::SetTrue)]
    pretty: bool,

    // === Clustering options ===
    /// Row anchor strategy
    #[arg(long, value_enum, default_value = "drifting")]
    anchor: AnchorArg,

    /// OCR line grouping strategy
    #[arg(long = "line-grouping", value_enum, default_value = "adjacent")]
    line_grouping: GroupingArg,

    /// Margin around a table box when testing word membership (document units)
    #[arg(long = "table-margin", default_value = "10.0")]
    table_margin: f64,

    /// Quantization step for the row scan-order key
    #[arg(long = "row-quantum", default_value = "10.0")]
    row_quantum: f64,

    /// Maximum vertical distance from the row anchor
    #[arg(long = "row-tolerance", default_value = "10.0")]
    row_tolerance: f64,

    /// Horizontal gap below which adjacent words merge into one cell
    #[arg(long = "cell-gap", default_value = "15.0")]
    cell_gap: f64,
}

fn build_options(args: &Args) -> ReconstructOptions {
    ReconstructOptions {
        table: TableSettings {
            membership_margin: args.table_margin,
            row_quantum: args.row_quantum,
            row_tolerance: args.row_tolerance,
            cell_gap: args.cell_gap,
            anchor: match args.anchor {
                AnchorArg::Drifting => AnchorMode::Drifting,
                AnchorArg::FirstWord => AnchorMode::FirstWord,
            },
        },
        line_grouping: match args.line_grouping {
            GroupingArg::Adjacent => LineGrouping::Adjacent,
            GroupingArg::ById => LineGrouping::ById,
        },
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let options = build_options(&args);

    let data = std::fs::read_to_string(&args.input)
        .map_err(|e| format!("failed to read {}: {}", args.input.display(), e))?;
    let inputs: Vec<PageInput> = serde_json::from_str(&data)?;

    // Per-page table failures are reported but never abort the run; the
    // page keeps its lines and words.
    let mut pages: Vec<Page> = Vec::with_capacity(inputs.len());
    for input in &inputs {
        let (page, dropped) = reconstruct_page_lossy(input, &options);
        if let Some(e) = dropped {
            for table in &input.tables {
                eprintln!(
                    "page {}: table [{}] dropped: {}",
                    input.number,
                    bbox2str(table.bbox),
                    e
                );
            }
        }
        pages.push(page);
    }

    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(&args.outfile)
            .map_err(|e| format!("failed to create output file {}: {}", args.outfile, e))?;
        Box::new(BufWriter::new(file))
    };

    if args.pretty {
        serde_json::to_writer_pretty(&mut output, &pages)?;
    } else {
        serde_json::to_writer(&mut output, &pages)?;
    }
    writeln!(output)?;
    output.flush()?;

    Ok(())
}
