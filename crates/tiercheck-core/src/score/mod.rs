pub mod engine;
pub mod lookup;
pub mod outcome;

pub use engine::{evaluate, score, score_field};
pub use lookup::lookup_points;
pub use outcome::{
    BracketMatch, ComplianceResult, ComplianceStatus, ComplianceWarning, FieldScore,
    ScoreBreakdown, TierResult,
};
