use serde::{Deserialize, Serialize};

use crate::model::VariantRecord;

/// A chunk whose extraction failed, with its anchor page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkFailure {
    pub page: usize,
    pub reason: String,
}

/// What happened to one chunk.
#[derive(Debug, Clone, PartialEq)]
pub enum ChunkOutcome {
    /// A record with a SKU, promoted to the output.
    Extracted(VariantRecord),
    /// Extraction succeeded but found no SKU; the record is dropped.
    Incomplete { page: usize },
    Failed(ChunkFailure),
}

/// Aggregated extraction result for a whole catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Valid records, in chunk order.
    pub variants: Vec<VariantRecord>,
    /// Chunks dropped for lacking a SKU.
    pub incomplete: usize,
    pub failures: Vec<ChunkFailure>,
}

impl ExtractionResult {
    pub fn from_outcomes(outcomes: impl IntoIterator<Item = ChunkOutcome>) -> Self {
        let mut result = ExtractionResult::default();
        for outcome in outcomes {
            match outcome {
                ChunkOutcome::Extracted(record) => result.variants.push(record),
                ChunkOutcome::Incomplete { .. } => result.incomplete += 1,
                ChunkOutcome::Failed(failure) => result.failures.push(failure),
            }
        }
        result
    }
}
