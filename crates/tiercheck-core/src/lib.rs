pub mod error;
pub mod model;
pub mod normalize;
pub mod pathway;
pub mod score;
pub mod tables;
pub mod trace;
pub mod warnings;

pub use rust_decimal::Decimal;

use error::TiercheckError;
use model::{Field, RawInput};
use score::outcome::{ComplianceResult, ComplianceWarning};
use std::path::Path;
use tables::schema::TableSet;

/// Options controlling how a total is turned into a status.
#[derive(Debug, Clone, Default)]
pub struct ScoringPolicy {
    /// Minimum total for `Pass`. Zero by default, which every input meets
    /// because points are never negative.
    pub min_total_points: Decimal,
}

/// Main API entry point: normalize a raw form record and evaluate it.
pub fn evaluate_record(
    raw: &RawInput,
    tables: &TableSet,
    policy: &ScoringPolicy,
) -> ComplianceResult {
    let input = normalize::normalize_input(raw);
    score::evaluate(&input, tables, policy)
}

/// Evaluate the code-minimum warnings for one field of a raw record.
pub fn check_record_field(
    raw: &RawInput,
    field: Field,
    tables: &TableSet,
) -> Vec<ComplianceWarning> {
    let input = normalize::normalize_input(raw);
    warnings::check_field(field, &input, tables)
}

/// Read a form record from a JSON file.
pub fn load_input(path: &Path) -> Result<RawInput, TiercheckError> {
    let content = std::fs::read_to_string(path).map_err(|e| TiercheckError::InputLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| TiercheckError::InputLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
