use crate::model::{Field, ScoringInput};
use crate::pathway::classify_pathway;
use crate::score::outcome::ComplianceWarning;
use crate::tables::schema::TableSet;
use std::collections::BTreeMap;

/// Evaluate the code-minimum requirements for a single field.
///
/// Used when one field changes. Returns an empty list when the field has no
/// value, no known pathway is selected, or every applicable requirement is met.
pub fn check_field(field: Field, input: &ScoringInput, tables: &TableSet) -> Vec<ComplianceWarning> {
    let Some(pathway) = classify_pathway(&input.pathway).pathway() else {
        return Vec::new();
    };
    let Some(value) = input.value(field) else {
        return Vec::new();
    };
    let zone = input.climate_zone();

    tables
        .requirements_for(field)
        .filter(|req| req.applies_to(pathway))
        .filter_map(|req| {
            let (condition, variant) = req.condition.select(zone);
            if condition.matches(&value) {
                return None;
            }
            tracing::debug!(
                field = %field,
                value = %value,
                required = %condition,
                "code minimum not met"
            );
            Some(ComplianceWarning {
                field,
                message: req.message.clone(),
                required: condition.clone(),
                actual: value.clone(),
                zone: variant,
                reference: req.reference.clone(),
            })
        })
        .collect()
}

/// Evaluate requirements for every field. Fields without warnings are absent.
pub fn check_all(
    input: &ScoringInput,
    tables: &TableSet,
) -> BTreeMap<Field, Vec<ComplianceWarning>> {
    Field::ALL
        .iter()
        .map(|&field| (field, check_field(field, input, tables)))
        .filter(|(_, warnings)| !warnings.is_empty())
        .collect()
}
