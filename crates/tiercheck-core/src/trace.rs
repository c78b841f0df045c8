use crate::model::{ClimateZone, Field, FieldValue, RawInput};
use crate::normalize::{category::normalize_category, values::parse_numeric};
use crate::score::outcome::{ComplianceResult, ComplianceStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const TRACE_SCHEMA_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceSeverity {
    Critical,
    Important,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceStepType {
    NormalizeValue,
    SelectTable,
    BracketMatch,
    OverallDecision,
    TierDecision,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceStep {
    pub step_type: TraceStepType,
    pub message: String,
}

/// How one field went from raw form value to points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceEntry {
    pub entry_id: String,
    pub field: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<Decimal>,
    pub steps: Vec<TraceStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceDecisionTarget {
    Overall,
    Tier,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceDecision {
    pub decision_id: String,
    pub target: TraceDecisionTarget,
    pub outcome: String,
    pub reason: String,
    pub severity: TraceSeverity,
    pub steps: Vec<TraceStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceWarning {
    pub field: Field,
    pub message: String,
    pub severity: TraceSeverity,
}

/// Audit record of one evaluation, suitable for export alongside a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceBundle {
    pub trace_schema_version: String,
    pub pathway: String,
    pub zone: ClimateZone,
    pub entries: Vec<TraceEntry>,
    pub decisions: Vec<TraceDecision>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<TraceWarning>,
}

pub fn build_trace(raw: &RawInput, result: &ComplianceResult) -> TraceBundle {
    let entries = Field::ALL
        .iter()
        .enumerate()
        .map(|(idx, &field)| build_entry_trace(idx, field, raw, result))
        .collect();

    let mut decisions = vec![TraceDecision {
        decision_id: "dec_overall".to_string(),
        target: TraceDecisionTarget::Overall,
        outcome: result.status.to_string(),
        reason: result.status_reason.clone(),
        severity: match result.status {
            ComplianceStatus::Pass => TraceSeverity::Info,
            ComplianceStatus::Fail => TraceSeverity::Critical,
            ComplianceStatus::Unavailable => TraceSeverity::Important,
        },
        steps: vec![TraceStep {
            step_type: TraceStepType::OverallDecision,
            message: format!(
                "Total {} compared with minimum {} under {}",
                result.total(),
                result.min_total_points,
                result.pathway
            ),
        }],
    }];

    if let Some(ref tier) = result.tier {
        let next = match tier.points_to_next {
            Some(points) => format!("{points} more points reach the next tier"),
            None => "highest tier reached".to_string(),
        };
        decisions.push(TraceDecision {
            decision_id: "dec_tier".to_string(),
            target: TraceDecisionTarget::Tier,
            outcome: format!("Tier {}", tier.tier),
            reason: format!("Total {} reaches tier minimum {}", result.total(), tier.min_points),
            severity: TraceSeverity::Info,
            steps: vec![TraceStep {
                step_type: TraceStepType::TierDecision,
                message: next,
            }],
        });
    }

    let warnings = result
        .warnings
        .values()
        .flatten()
        .map(|w| TraceWarning {
            field: w.field,
            message: w.to_string(),
            severity: TraceSeverity::Important,
        })
        .collect();

    TraceBundle {
        trace_schema_version: TRACE_SCHEMA_VERSION.to_string(),
        pathway: result.pathway.to_string(),
        zone: result.zone,
        entries,
        decisions,
        warnings,
    }
}

fn build_entry_trace(
    idx: usize,
    field: Field,
    raw: &RawInput,
    result: &ComplianceResult,
) -> TraceEntry {
    let raw_value = raw.get(field).map(|v| v.as_text());
    let normalized = match raw_value.as_deref() {
        Some(text) if field.is_categorical() => normalize_category(text).map(FieldValue::Category),
        Some(text) => parse_numeric(text).map(FieldValue::Numeric),
        None => None,
    };

    let mut steps = vec![TraceStep {
        step_type: TraceStepType::NormalizeValue,
        message: match (&raw_value, &normalized) {
            (None, _) => "Not entered".to_string(),
            (Some(r), Some(n)) => format!("Normalized '{}' -> '{}'", r, n),
            (Some(r), None) => format!("Could not interpret '{}', ignored", r),
        },
    }];

    let scored = result.breakdown.fields.get(&field);
    if let Some(fs) = scored {
        steps.push(TraceStep {
            step_type: TraceStepType::SelectTable,
            message: match fs.zone {
                Some(zone) => format!("Using zone {} table", zone),
                None => "Using table shared by all zones".to_string(),
            },
        });
        steps.push(TraceStep {
            step_type: TraceStepType::BracketMatch,
            message: fs.reason.clone(),
        });
    }

    TraceEntry {
        entry_id: format!("ent_{}_{}", idx, field),
        field,
        raw_value,
        normalized,
        points: scored.and_then(|fs| fs.points),
        steps,
    }
}
