//! matrixdump - Lay out a threat matrix artifact as a grid
//!
//! Loads the JSON records written by xlsx2json, groups them into category
//! columns and prints the grid with each record's derived tags.

mod logging;

use std::fmt::Write as _;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, ValueEnum};
use serde::Serialize;
use threatgrid_core::describe::{description_html, linkify_html};
use threatgrid_core::layout::{ClassifiedRow, Matrix};
use threatgrid_core::model::Tag;
use threatgrid_core::source::read_records;

/// Output type for the grid.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputType {
    /// Fixed-width text grid (default)
    #[default]
    Text,
    /// Categories, height and cells in render order
    Json,
    /// Plain HTML table with escaped, linkified descriptions
    Html,
}

/// Lay out a threat matrix artifact as a category grid.
#[derive(Parser, Debug)]
#[command(name = "matrixdump")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON record artifact
    data: PathBuf,

    /// Type of output to generate
    #[arg(short = 't', long = "output_type", value_enum, default_value = "text")]
    output_type: OutputType,

    /// Only highlight records carrying this tag (Cloud, Containers, CI/CD)
    #[arg(long)]
    tag: Option<String>,

    /// Column width for text output
    #[arg(short = 'w', long, default_value = "24")]
    width: usize,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,
}

#[derive(Serialize)]
struct CellView<'a> {
    #[serde(flatten)]
    row: &'a ClassifiedRow<'a>,
    dimmed: bool,
}

#[derive(Serialize)]
struct GridView<'a> {
    categories: &'a [String],
    height: usize,
    cells: Vec<Option<CellView<'a>>>,
}

/// Truncates or pads `s` to exactly `width` characters.
fn fit(s: &str, width: usize) -> String {
    let count = s.chars().count();
    if count <= width {
        format!("{:<width$}", s, width = width)
    } else if width == 0 {
        String::new()
    } else {
        let mut out: String = s.chars().take(width - 1).collect();
        out.push('…');
        out
    }
}

fn tag_labels(row: &ClassifiedRow<'_>) -> String {
    row.tags
        .iter()
        .map(|tag| tag.label())
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_text(matrix: &Matrix<'_>, filter: Option<Tag>, width: usize) -> String {
    let mut out = String::new();
    let sep = " | ";

    let header: Vec<String> = matrix.categories().iter().map(|c| fit(c, width)).collect();
    let _ = writeln!(out, "{}", header.join(sep).trim_end());
    let rule = vec!["-".repeat(width); matrix.width()];
    let _ = writeln!(out, "{}", rule.join("-+-"));

    for row in matrix.rows() {
        let mut values = Vec::with_capacity(row.len());
        let mut tags = Vec::with_capacity(row.len());
        for cell in row {
            match cell {
                Some(cell) if cell.matches(filter) => {
                    values.push(fit(&cell.record.value, width));
                    tags.push(fit(&tag_labels(cell), width));
                }
                Some(cell) => {
                    values.push(fit(&format!("({})", cell.record.value), width));
                    tags.push(fit("", width));
                }
                None => {
                    values.push(fit("", width));
                    tags.push(fit("", width));
                }
            }
        }
        let _ = writeln!(out, "{}", values.join(sep).trim_end());
        let _ = writeln!(out, "{}", tags.join(sep).trim_end());
    }

    out
}

fn render_json(matrix: &Matrix<'_>, filter: Option<Tag>) -> Result<String> {
    let view = GridView {
        categories: matrix.categories(),
        height: matrix.height(),
        cells: matrix
            .cells()
            .iter()
            .map(|cell| {
                cell.as_ref().map(|row| CellView {
                    row,
                    dimmed: !row.matches(filter),
                })
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&view)?)
}

fn render_html(matrix: &Matrix<'_>, filter: Option<Tag>) -> String {
    let mut out = String::from("<table>\n<thead><tr>");
    for category in matrix.categories() {
        let _ = write!(out, "<th>{}</th>", linkify_html(category));
    }
    out.push_str("</tr></thead>\n<tbody>\n");

    for row in matrix.rows() {
        out.push_str("<tr>");
        for cell in row {
            let Some(cell) = cell else {
                out.push_str("<td></td>");
                continue;
            };
            let class = if cell.matches(filter) { "" } else { r#" class="dimmed""# };
            let _ = write!(
                out,
                "<td{}><strong>{}</strong><div>{}</div><details><summary>ID: {}</summary>{}</details></td>",
                class,
                linkify_html(&cell.record.value),
                linkify_html(&tag_labels(cell)),
                linkify_html(&cell.record.id),
                description_html(&cell.record.description),
            );
        }
        out.push_str("</tr>\n");
    }

    out.push_str("</tbody>\n</table>\n");
    out
}

fn run(args: &Args) -> Result<()> {
    let filter = match args.tag.as_deref() {
        None => None,
        Some(label) => match Tag::from_label(label) {
            Some(tag) => Some(tag),
            None => bail!("unknown tag {label:?}, expected one of Cloud, Containers, CI/CD"),
        },
    };

    let records = read_records(&args.data)
        .with_context(|| format!("failed to load {}", args.data.display()))?;
    let matrix = Matrix::build(&records);
    tracing::debug!(
        categories = matrix.width(),
        height = matrix.height(),
        records = matrix.len(),
        "matrix laid out"
    );

    let rendered = match args.output_type {
        OutputType::Text => render_text(&matrix, filter, args.width.max(1)),
        OutputType::Json => render_json(&matrix, filter)?,
        OutputType::Html => render_html(&matrix, filter),
    };

    let mut out = BufWriter::new(io::stdout().lock());
    out.write_all(rendered.as_bytes())?;
    if !rendered.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    out.flush()?;
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
