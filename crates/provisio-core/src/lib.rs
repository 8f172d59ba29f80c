//! Core types and algorithms for provisio: decision records, provision
//! snippet extraction, and ranking by cited-provision count.

pub mod decision;
pub mod error;
pub mod extraction;
pub mod ranking;
pub mod snippet;

pub use decision::{DecisionDocument, DecisionRecord, NumericId};
pub use error::DocumentError;
pub use extraction::{DEFAULT_LANGUAGE, ExtractionRequest, ExtractionResult};
pub use ranking::{DEFAULT_TOP_N, ProvisionStats, RankedDecision, Ranking, rank};
pub use snippet::{CONTEXT_WINDOW_SIZE, PROVISION_KEYWORDS, SnippetExtractor};
