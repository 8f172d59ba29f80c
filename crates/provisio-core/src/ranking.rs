//! Ranking decisions by number of cited provisions.

use serde::Serialize;

use crate::decision::DecisionRecord;

/// Default length of the ranked list.
pub const DEFAULT_TOP_N: usize = 10;

/// Aggregates over every parsed record, not just the ranked ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProvisionStats {
    pub decisions: usize,
    pub total_provisions: usize,
    /// `total_provisions / decisions`, or 0 when there are no decisions.
    pub average_provisions: f64,
}

impl ProvisionStats {
    pub fn from_records(records: &[DecisionRecord]) -> Self {
        let decisions = records.len();
        let total_provisions: usize = records.iter().map(|r| r.provision_count).sum();
        let average_provisions = if decisions == 0 {
            0.0
        } else {
            total_provisions as f64 / decisions as f64
        };
        Self {
            decisions,
            total_provisions,
            average_provisions,
        }
    }
}

/// A record with its 1-based position in the ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedDecision {
    pub rank: usize,
    #[serde(flatten)]
    pub record: DecisionRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking {
    pub top: Vec<RankedDecision>,
    pub stats: ProvisionStats,
}

/// Rank `records` by descending provision count and keep the first `top_n`.
///
/// The sort is stable: records with equal counts keep the order in which
/// they were collected.
pub fn rank(mut records: Vec<DecisionRecord>, top_n: usize) -> Ranking {
    let stats = ProvisionStats::from_records(&records);

    records.sort_by(|a, b| b.provision_count.cmp(&a.provision_count));
    records.truncate(top_n);

    let top = records
        .into_iter()
        .enumerate()
        .map(|(i, record)| RankedDecision { rank: i + 1, record })
        .collect();

    Ranking { top, stats }
}
