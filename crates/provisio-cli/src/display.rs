//! Fixed-width console report for a provision ranking.

use std::fmt;

use provisio_core::{RankedDecision, Ranking};

const RULE_WIDTH: usize = 80;

/// Shown in place of a decision or numeric id the document did not carry.
const UNKNOWN: &str = "Unknown";

/// Ranked table followed by corpus totals.
pub struct ReportTable<'a> {
    ranking: &'a Ranking,
    top_n: usize,
}

impl<'a> ReportTable<'a> {
    pub fn new(ranking: &'a Ranking, top_n: usize) -> Self {
        Self { ranking, top_n }
    }
}

impl fmt::Display for ReportTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let banner = "=".repeat(RULE_WIDTH);

        writeln!(f)?;
        writeln!(f, "{banner}")?;
        writeln!(f, "TOP {} DECISIONS WITH MOST CITED PROVISIONS", self.top_n)?;
        writeln!(f, "{banner}")?;
        writeln!(
            f,
            "{:<6} {:<12} {:<18} {}",
            "Rank", "Numeric ID", "Provision Count", "Decision ID"
        )?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;

        for entry in &self.ranking.top {
            write_row(f, entry)?;
        }

        writeln!(f, "{banner}")?;

        let stats = &self.ranking.stats;
        writeln!(f)?;
        writeln!(f, "Total decisions analyzed: {}", stats.decisions)?;
        writeln!(f, "Total provisions cited: {}", stats.total_provisions)?;
        writeln!(
            f,
            "Average provisions per decision: {:.2}",
            stats.average_provisions
        )
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, entry: &RankedDecision) -> fmt::Result {
    let record = &entry.record;
    let numeric_id = record
        .numeric_id
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| UNKNOWN.to_string());
    let decision_id = record.decision_id.as_deref().unwrap_or(UNKNOWN);

    writeln!(
        f,
        "{:<6} {:<12} {:<18} {}",
        entry.rank, numeric_id, record.provision_count, decision_id
    )
}
