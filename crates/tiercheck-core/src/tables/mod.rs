pub mod builtin;
pub mod schema;

use crate::error::TiercheckError;
use crate::model::Field;
use crate::pathway::classify_pathway;
use schema::{Bracket, Condition, TableSet};
use std::collections::HashSet;
use std::path::Path;

/// Load a table set from a JSON file.
pub fn load_tables(path: &Path) -> Result<TableSet, TiercheckError> {
    let content = std::fs::read_to_string(path).map_err(|e| TiercheckError::TableLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_tables(&content, path)
}

/// Parse a table set from a JSON string.
pub fn parse_tables(json: &str, source: &Path) -> Result<TableSet, TiercheckError> {
    let tables: TableSet = serde_json::from_str(json).map_err(|e| TiercheckError::TableLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_tables(&tables)?;
    Ok(tables)
}

/// Parse a table set from a JSON string (no file path context).
pub fn parse_tables_str(json: &str) -> Result<TableSet, TiercheckError> {
    let tables: TableSet = serde_json::from_str(json)?;
    validate_tables(&tables)?;
    Ok(tables)
}

/// Validate that a table set is well-formed.
///
/// Bracket ordering is not checked here; see [`ordering_warnings`].
pub fn validate_tables(tables: &TableSet) -> Result<(), TiercheckError> {
    if tables.fields.is_empty() {
        return Err(TiercheckError::TableInvalid("fields must not be empty".into()));
    }

    let mut seen = HashSet::new();
    for table in &tables.fields {
        if !seen.insert(table.field) {
            return Err(TiercheckError::TableInvalid(format!(
                "field '{}' has more than one table",
                table.field
            )));
        }

        for (zone, brackets) in table.brackets.variants() {
            let variant = zone.map(|z| format!(" (zone {z})")).unwrap_or_default();
            if brackets.is_empty() {
                return Err(TiercheckError::TableInvalid(format!(
                    "field '{}'{} has no brackets",
                    table.field, variant
                )));
            }
            for bracket in brackets {
                check_condition_kind(table.field, &bracket.when)?;
                if bracket.points.is_sign_negative() {
                    return Err(TiercheckError::TableInvalid(format!(
                        "field '{}'{} has negative points {}",
                        table.field, variant, bracket.points
                    )));
                }
            }
        }
    }

    for req in &tables.requirements {
        if req.pathways.is_empty() {
            return Err(TiercheckError::TableInvalid(format!(
                "requirement on '{}' lists no pathways",
                req.field
            )));
        }
        for code in &req.pathways {
            if classify_pathway(code).pathway().is_none() {
                return Err(TiercheckError::TableInvalid(format!(
                    "requirement on '{}' references unknown pathway '{}'",
                    req.field, code
                )));
            }
        }
        for (_, condition) in req.condition.variants() {
            check_condition_kind(req.field, condition)?;
        }
    }

    for pair in tables.tiers.windows(2) {
        if pair[1].tier <= pair[0].tier || pair[1].min_points <= pair[0].min_points {
            return Err(TiercheckError::TableInvalid(format!(
                "tiers must be ascending: tier {} ({}) follows tier {} ({})",
                pair[1].tier, pair[1].min_points, pair[0].tier, pair[0].min_points
            )));
        }
    }

    Ok(())
}

fn check_condition_kind(field: Field, condition: &Condition) -> Result<(), TiercheckError> {
    if field.is_categorical() != condition.is_categorical() {
        let expected = if field.is_categorical() {
            "category"
        } else {
            "at_least/at_most"
        };
        return Err(TiercheckError::TableInvalid(format!(
            "field '{}' uses condition '{}' but expects {} conditions",
            field, condition, expected
        )));
    }
    Ok(())
}

/// Report bracket orderings that would make a later bracket unreachable.
///
/// Lookup takes the first matching bracket, so `at_least` brackets must be
/// listed from the highest threshold down and `at_most` brackets from the
/// lowest up. These are advisory; lookup does not enforce them.
pub fn ordering_warnings(tables: &TableSet) -> Vec<String> {
    let mut warnings = Vec::new();

    for table in &tables.fields {
        for (zone, brackets) in table.brackets.variants() {
            let variant = zone.map(|z| format!(" (zone {z})")).unwrap_or_default();
            for (i, pair) in brackets.windows(2).enumerate() {
                if let Some(issue) = shadowed(&pair[0], &pair[1]) {
                    warnings.push(format!(
                        "field '{}'{}: bracket {} {}",
                        table.field,
                        variant,
                        i + 2,
                        issue
                    ));
                }
            }

            let mut categories = HashSet::new();
            for bracket in brackets {
                if let Condition::Category(key) = &bracket.when {
                    if !categories.insert(key.as_str()) {
                        warnings.push(format!(
                            "field '{}'{}: category '{}' listed more than once",
                            table.field, variant, key
                        ));
                    }
                }
            }
        }
    }

    warnings
}

fn shadowed(earlier: &Bracket, later: &Bracket) -> Option<String> {
    match (&earlier.when, &later.when) {
        (Condition::AtLeast(a), Condition::AtLeast(b)) if b >= a => Some(format!(
            "(>= {b}) is unreachable after >= {a}; list at_least thresholds from highest to lowest"
        )),
        (Condition::AtMost(a), Condition::AtMost(b)) if b <= a => Some(format!(
            "(<= {b}) is unreachable after <= {a}; list at_most thresholds from lowest to highest"
        )),
        (Condition::AtLeast(_), Condition::AtMost(_))
        | (Condition::AtMost(_), Condition::AtLeast(_)) => {
            Some("mixes at_least and at_most conditions in one table".to_string())
        }
        _ => None,
    }
}
