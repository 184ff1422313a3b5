//! xlsx2json - Extract threat matrix records from a spreadsheet
//!
//! Reads the first worksheet of a workbook (or a JSON dump of its rows),
//! flattens the category/value/identifier layout into records and writes
//! them as a JSON array.

mod logging;

use std::collections::HashSet;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use threatgrid_core::extract::{
    ExtractOptions, OutputOptions, TrailingRow, extract_file, write_artifact, write_records,
};
use tracing::{info, warn};

/// Extract threat matrix records from a spreadsheet into a JSON artifact.
#[derive(Parser, Debug)]
#[command(name = "xlsx2json")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the workbook (.xlsx, .xls, .ods, ...) or a JSON row dump
    input: PathBuf,

    /// Path to write the JSON artifact to, or "-" for stdout
    #[arg(short = 'o', long, default_value = "data.json")]
    outfile: String,

    /// Indent the JSON output
    #[arg(long, action = ArgAction::SetTrue)]
    pretty: bool,

    /// Drop a final value row that has no identifier row instead of failing
    #[arg(long = "allow-trailing-row", action = ArgAction::SetTrue)]
    allow_trailing_row: bool,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,
}

impl Args {
    fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            trailing_row: if self.allow_trailing_row {
                TrailingRow::Ignore
            } else {
                TrailingRow::Reject
            },
        }
    }

    fn output_options(&self) -> OutputOptions {
        OutputOptions {
            pretty: self.pretty,
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let extraction = extract_file(&args.input, &args.extract_options())
        .with_context(|| format!("failed to extract {}", args.input.display()))?;

    let used: HashSet<&str> = extraction
        .records
        .iter()
        .map(|record| record.category.as_str())
        .collect();
    for category in &extraction.categories {
        if !used.contains(category.as_str()) {
            warn!(category = %category, "category has no records");
        }
    }

    if args.outfile == "-" {
        let mut out = BufWriter::new(io::stdout().lock());
        write_records(&extraction.records, &mut out, &args.output_options())
            .context("failed to write records to stdout")?;
    } else {
        let path = PathBuf::from(&args.outfile);
        write_artifact(&path, &extraction.records, &args.output_options())
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), records = extraction.records.len(), "artifact written");
    }

    Ok(())
}

fn main() {
    let args = Args::parse();
    logging::init(args.debug);

    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
