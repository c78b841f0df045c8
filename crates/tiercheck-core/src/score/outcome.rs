use crate::model::{ClimateZone, Field, FieldValue, Province};
use crate::pathway::PathwayClass;
use crate::tables::schema::Condition;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The bracket a value matched during lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketMatch {
    /// Zero-based position of the bracket in its table.
    pub index: usize,
    pub condition: Condition,
    pub points: Decimal,
}

/// Points awarded for a single field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldScore {
    pub field: Field,
    /// The normalized value, if one was entered.
    pub value: Option<FieldValue>,
    /// Points from the matched bracket; `None` when nothing matched.
    pub points: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<BracketMatch>,
    /// Zone variant of the table that was used; `None` for shared tables.
    pub zone: Option<ClimateZone>,
    /// Human-readable explanation of the lookup.
    pub reason: String,
}

impl FieldScore {
    pub fn awarded(&self) -> Decimal {
        self.points.unwrap_or(Decimal::ZERO)
    }
}

/// Per-field points and their sum.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub fields: BTreeMap<Field, FieldScore>,
    pub total: Decimal,
}

impl ScoreBreakdown {
    /// Points for a field, zero when absent or unmatched.
    pub fn points(&self, field: Field) -> Decimal {
        self.fields
            .get(&field)
            .map(FieldScore::awarded)
            .unwrap_or(Decimal::ZERO)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Pass,
    Fail,
    /// The pathway is not one the engine can score yet.
    Unavailable,
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplianceStatus::Pass => write!(f, "Pass"),
            ComplianceStatus::Fail => write!(f, "Fail"),
            ComplianceStatus::Unavailable => write!(f, "Not yet available"),
        }
    }
}

/// An advisory code-minimum violation. Never affects status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceWarning {
    pub field: Field,
    pub message: String,
    /// The condition a compliant value would satisfy.
    pub required: Condition,
    pub actual: FieldValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<ClimateZone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl fmt::Display for ComplianceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} (entered {}, required {})",
            self.field, self.message, self.actual, self.required
        )?;
        if let Some(ref reference) = self.reference {
            write!(f, " [{}]", reference)?;
        }
        Ok(())
    }
}

/// Energy performance tier reached by a tiered pathway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierResult {
    pub tier: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub min_points: Decimal,
    /// Points still needed for the next tier, if there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_to_next: Option<Decimal>,
}

/// Full outcome of evaluating one input against a table set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceResult {
    pub status: ComplianceStatus,
    pub status_reason: String,
    pub pathway: PathwayClass,
    pub province: Province,
    pub zone: ClimateZone,
    pub breakdown: ScoreBreakdown,
    /// Advisory warnings keyed by field. Fields without warnings are absent.
    pub warnings: BTreeMap<Field, Vec<ComplianceWarning>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<TierResult>,
    pub min_total_points: Decimal,
}

impl ComplianceResult {
    pub fn total(&self) -> Decimal {
        self.breakdown.total
    }

    pub fn has_warnings(&self) -> bool {
        self.warnings.values().any(|w| !w.is_empty())
    }

    pub fn warnings_for(&self, field: Field) -> &[ComplianceWarning] {
        self.warnings.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }
}
