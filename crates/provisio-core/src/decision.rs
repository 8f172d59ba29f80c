//! Decision documents as read from the corpus, and the per-file record the
//! ranker keeps.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{self, DocumentError};

/// External-system identifier of a decision.
///
/// The corpus stores `id` as either a JSON number or a string; both are
/// kept as found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for NumericId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => f.pad(&n.to_string()),
            Self::Text(s) => f.pad(s),
        }
    }
}

/// The subset of a decision JSON document the ranker reads.
///
/// Every field is optional; unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DecisionDocument {
    #[serde(default)]
    pub decision_id: Option<String>,
    #[serde(default)]
    pub id: Option<NumericId>,
    #[serde(default, rename = "citedProvisions")]
    pub cited_provisions: Option<Vec<serde_json::Value>>,
}

/// A decision reduced to what the ranking needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionRecord {
    pub decision_id: Option<String>,
    pub numeric_id: Option<NumericId>,
    pub provision_count: usize,
}

impl DecisionRecord {
    /// Build a record from a parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, DocumentError> {
        let doc: DecisionDocument = error::from_object(value)?;
        Ok(doc.into())
    }
}

impl From<DecisionDocument> for DecisionRecord {
    fn from(doc: DecisionDocument) -> Self {
        Self {
            decision_id: doc.decision_id,
            numeric_id: doc.id,
            provision_count: doc.cited_provisions.map_or(0, |p| p.len()),
        }
    }
}
