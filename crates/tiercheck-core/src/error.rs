use std::path::PathBuf;

/// Errors raised outside the scoring path: loading tables and input records.
///
/// Scoring itself never fails; unrecognized input degrades to zero points.
#[derive(Debug, thiserror::Error)]
pub enum TiercheckError {
    #[error("failed to load tables from {path}: {reason}")]
    TableLoad { path: PathBuf, reason: String },

    #[error("invalid table set: {0}")]
    TableInvalid(String),

    #[error("failed to read input record from {path}: {reason}")]
    InputLoad { path: PathBuf, reason: String },

    #[error("unknown field '{0}'. Expected one of: attic_rsi, wall_rsi, below_grade_rsi, window_u_value, water_heater, ventilation, airtightness, building_volume")]
    UnknownField(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
