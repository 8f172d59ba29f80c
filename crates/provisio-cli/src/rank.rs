//! Ranking pipeline: scan the corpus → rank → report.

use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;
use provisio_core::{Ranking, rank};
use provisio_scan::{ScanOptions, scan_decisions};

use crate::display::ReportTable;

pub enum ReportFormat {
    Table,
    Json,
}

/// Scan `dir`, rank its decisions, and return the ranking.
pub fn build_ranking(dir: &Path, top_n: usize, options: &ScanOptions) -> anyhow::Result<Ranking> {
    let outcome = scan_decisions(dir, options)
        .with_context(|| format!("scanning decisions in {}", dir.display()))?;
    Ok(rank(outcome.records, top_n))
}

/// Write `ranking` to `out` in the requested format.
pub fn write_report<W: Write>(
    mut out: W,
    ranking: &Ranking,
    top_n: usize,
    format: ReportFormat,
) -> anyhow::Result<()> {
    match format {
        ReportFormat::Table => write!(out, "{}", ReportTable::new(ranking, top_n))?,
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut out, ranking).context("serialising ranking")?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

pub fn run(
    dir: &Path,
    top_n: usize,
    options: &ScanOptions,
    format: ReportFormat,
) -> anyhow::Result<()> {
    let ranking = build_ranking(dir, top_n, options)?;
    write_report(io::stdout().lock(), &ranking, top_n, format)
}
