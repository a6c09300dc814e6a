//! Splitbook CLI - split a CSV table into per-group files

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use splitbook_core::{
    letters_to_column, partition, split_used_range, sums, Selection, SumColumn,
};
use splitbook_csv::{read_matrix, CsvDirWriter};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "splitbook")]
#[command(
    author,
    version,
    about = "Split a table into per-group sheets keyed by one column"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a CSV file into one CSV per group
    Split {
        /// Input CSV file
        input: PathBuf,

        /// Header-marker cell value (locates the header row)
        #[arg(short, long)]
        marker: String,

        /// Column the marker is matched in (letters, e.g. "A")
        #[arg(short = 'c', long, default_value = "A")]
        marker_column: String,

        /// Column to sum per group (letters, repeatable)
        #[arg(short, long)]
        sum: Vec<String>,

        /// Directory the per-group CSV files are written to
        #[arg(short, long, default_value = "split-out")]
        out_dir: PathBuf,
    },

    /// Report the detected header and groups without writing anything
    Inspect {
        /// Input CSV file
        input: PathBuf,

        /// Header-marker cell value (locates the header row)
        #[arg(short, long)]
        marker: String,

        /// Column the marker is matched in (letters, e.g. "A")
        #[arg(short = 'c', long, default_value = "A")]
        marker_column: String,

        /// Column to sum per group (letters, repeatable)
        #[arg(short, long)]
        sum: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Split {
            input,
            marker,
            marker_column,
            sum,
            out_dir,
        } => split(&input, &marker, &marker_column, &sum, &out_dir),
        Commands::Inspect {
            input,
            marker,
            marker_column,
            sum,
        } => inspect(&input, &marker, &marker_column, &sum),
    }
}

fn build_selection(marker: &str, marker_column: &str, sum: &[String]) -> Result<Selection> {
    let marker_col = letters_to_column(marker_column)
        .with_context(|| format!("Invalid marker column '{marker_column}'"))?;

    let mut selection = Selection::new(marker, marker_col);
    for letters in sum {
        let col = letters_to_column(letters)
            .with_context(|| format!("Invalid sum column '{letters}'"))?;
        selection.add_sum_column(SumColumn::new(letters.clone(), col));
    }
    Ok(selection)
}

fn split(
    input: &PathBuf,
    marker: &str,
    marker_column: &str,
    sum: &[String],
    out_dir: &PathBuf,
) -> Result<()> {
    let selection = build_selection(marker, marker_column, sum)?;
    let rows =
        read_matrix(input).with_context(|| format!("Failed to read '{}'", input.display()))?;

    let mut writer = CsvDirWriter::new(out_dir);
    let report = split_used_range(&mut writer, &rows, &selection)
        .context("Split failed")?;

    if report.sheets.is_empty() {
        eprintln!("Warning: marker value '{marker}' not found in column {marker_column}; nothing written");
        return Ok(());
    }

    let paths = writer
        .flush()
        .with_context(|| format!("Failed to write output to '{}'", out_dir.display()))?;

    println!("Wrote {} group file(s):", paths.len());
    for path in paths {
        println!("  {}", path.display());
    }
    Ok(())
}

fn inspect(input: &PathBuf, marker: &str, marker_column: &str, sum: &[String]) -> Result<()> {
    let selection = build_selection(marker, marker_column, sum)?;
    let rows =
        read_matrix(input).with_context(|| format!("Failed to read '{}'", input.display()))?;

    let part = partition(&rows, &selection.marker_value, selection.marker_col);
    if !part.has_header() {
        eprintln!("Warning: marker value '{marker}' not found in column {marker_column}");
        return Ok(());
    }

    println!("Header: {}", part.header.join(", "));
    println!("Groups: {}", part.groups.len());
    for group in &part.groups {
        print!("  {} ({} rows)", group.key, group.rows.len());
        if !selection.sum_columns.is_empty() {
            let totals: Vec<String> = selection
                .sum_columns
                .iter()
                .zip(sums(&group.rows, &selection.sum_columns))
                .map(|(col, total)| format!("{}={}", col.label, total))
                .collect();
            print!("  [{}]", totals.join(", "));
        }
        println!();
    }
    Ok(())
}
