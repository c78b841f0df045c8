use crate::model::{ClimateZone, Field, FieldValue};
use crate::pathway::{classify_pathway, Pathway};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A set of point tables, code-minimum requirements and tier thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSet {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    pub fields: Vec<FieldTable>,
    #[serde(default)]
    pub requirements: Vec<Requirement>,
    /// Ascending list of energy performance tiers.
    #[serde(default)]
    pub tiers: Vec<TierDef>,
}

impl TableSet {
    pub fn table(&self, field: Field) -> Option<&FieldTable> {
        self.fields.iter().find(|t| t.field == field)
    }

    pub fn requirements_for(&self, field: Field) -> impl Iterator<Item = &Requirement> {
        self.requirements.iter().filter(move |r| r.field == field)
    }
}

/// Point brackets for one field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldTable {
    pub field: Field,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    /// Brackets are evaluated in order and the first match wins.
    pub brackets: ByZone<Vec<Bracket>>,
}

impl FieldTable {
    pub fn is_zone_dependent(&self) -> bool {
        matches!(self.brackets, ByZone::Zones { .. })
    }
}

/// A value that is either shared by all climate zones or given per zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ByZone<T> {
    All(T),
    Zones {
        #[serde(rename = "7A")]
        zone_7a: T,
        #[serde(rename = "7B")]
        zone_7b: T,
    },
}

impl<T> ByZone<T> {
    /// Select the variant for a zone. The returned zone is `None` when the
    /// value is shared by all zones.
    pub fn select(&self, zone: ClimateZone) -> (&T, Option<ClimateZone>) {
        match self {
            ByZone::All(value) => (value, None),
            ByZone::Zones { zone_7a, zone_7b } => match zone {
                ClimateZone::Zone7A => (zone_7a, Some(zone)),
                ClimateZone::Zone7B => (zone_7b, Some(zone)),
            },
        }
    }

    pub fn variants(&self) -> Vec<(Option<ClimateZone>, &T)> {
        match self {
            ByZone::All(value) => vec![(None, value)],
            ByZone::Zones { zone_7a, zone_7b } => vec![
                (Some(ClimateZone::Zone7A), zone_7a),
                (Some(ClimateZone::Zone7B), zone_7b),
            ],
        }
    }
}

/// A single table row: the condition a value must meet and the points it earns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bracket {
    pub when: Condition,
    pub points: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Value is greater than or equal to the threshold (e.g. RSI).
    AtLeast(Decimal),
    /// Value is less than or equal to the threshold (e.g. U-value, ACH50).
    AtMost(Decimal),
    /// Value equals the canonical category key.
    Category(String),
}

impl Condition {
    /// Numeric values only match thresholds and categories only match
    /// categories; a mismatch in kind never matches.
    pub fn matches(&self, value: &FieldValue) -> bool {
        match (self, value) {
            (Condition::AtLeast(threshold), FieldValue::Numeric(v)) => v >= threshold,
            (Condition::AtMost(threshold), FieldValue::Numeric(v)) => v <= threshold,
            (Condition::Category(key), FieldValue::Category(c)) => key == c,
            _ => false,
        }
    }

    pub fn is_categorical(&self) -> bool {
        matches!(self, Condition::Category(_))
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::AtLeast(t) => write!(f, ">= {t}"),
            Condition::AtMost(t) => write!(f, "<= {t}"),
            Condition::Category(c) => write!(f, "= {c}"),
        }
    }
}

/// An advisory code minimum (or maximum) for a field under given pathways.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Requirement {
    pub field: Field,
    /// Pathway codes this requirement applies to.
    pub pathways: Vec<String>,
    /// The condition a compliant value satisfies.
    pub condition: ByZone<Condition>,
    pub message: String,
    #[serde(default)]
    pub reference: Option<String>,
}

impl Requirement {
    /// Listed codes are matched in any form the classifier accepts
    /// ("9362", "9.36.2", "NBC 9362").
    pub fn applies_to(&self, pathway: Pathway) -> bool {
        self.pathways
            .iter()
            .any(|code| classify_pathway(code).pathway() == Some(pathway))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierDef {
    pub tier: u8,
    pub min_points: Decimal,
    #[serde(default)]
    pub label: Option<String>,
}
