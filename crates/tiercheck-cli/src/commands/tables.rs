use std::path::{Path, PathBuf};
use tiercheck_core::error::TiercheckError;
use tiercheck_core::model::Field;
use tiercheck_core::tables::builtin;
use tiercheck_core::tables::ordering_warnings;

use crate::commands::resolve_tables;

pub fn list() -> Result<(), TiercheckError> {
    println!("Available predefined table sets:\n");
    for name in builtin::PRESETS {
        let tables = builtin::load_preset(name)?;
        let default = if *name == builtin::DEFAULT_PRESET {
            " [default]"
        } else {
            ""
        };
        println!("  {:<8} {} (v{}){}", name, tables.name, tables.version, default);
        if let Some(ref desc) = tables.description {
            println!("           {}", desc);
        }
        println!(
            "           {} field tables, {} requirements, {} tiers",
            tables.fields.len(),
            tables.requirements.len(),
            tables.tiers.len()
        );
        println!();
    }
    Ok(())
}

pub fn explain(
    field: &str,
    explicit: Option<PathBuf>,
    configured: Option<PathBuf>,
) -> Result<(), TiercheckError> {
    let field =
        Field::from_str_loose(field).ok_or_else(|| TiercheckError::UnknownField(field.to_string()))?;
    let tables = resolve_tables(explicit, configured)?;

    println!("{} ({}) in {} (version {})\n", field.label(), field, tables.name, tables.version);

    let Some(table) = tables.table(field) else {
        println!("This table set has no points table for {}; it never earns points.", field);
        return Ok(());
    };

    if let Some(ref note) = table.note {
        println!("{}\n", note);
    }

    println!("Brackets are checked top to bottom; the first match earns its points.\n");
    let unit = table.unit.as_deref().unwrap_or("");
    for (zone, brackets) in table.brackets.variants() {
        match zone {
            Some(zone) => println!("  Zone {}:", zone),
            None => println!("  All zones:"),
        }
        for bracket in brackets {
            println!("    {:<24} {:>6} points", format!("{} {}", bracket.when, unit), bracket.points);
        }
        println!();
    }

    let requirements: Vec<_> = tables.requirements_for(field).collect();
    if !requirements.is_empty() {
        println!("Code minimums (advisory):\n");
        for req in requirements {
            let reference = req
                .reference
                .as_deref()
                .map(|r| format!(" [{}]", r))
                .unwrap_or_default();
            println!("  Pathways {}: {}{}", req.pathways.join(", "), req.message, reference);
            for (zone, condition) in req.condition.variants() {
                let zone = zone
                    .map(|z| format!("zone {}", z))
                    .unwrap_or_else(|| "all zones".to_string());
                println!("    {:<10} {} {}", zone, condition, unit);
            }
        }
        println!();
    }

    Ok(())
}

pub fn schema() -> Result<(), TiercheckError> {
    print!(
        r#"JSON Table Schema
=================

A table file defines how many points each building parameter earns, the
advisory code minimums per pathway, and the energy performance tiers.
When you run `tiercheck score`, each entered value is looked up in its
field's table and the points are summed.

Top-level fields:
  name          (string, required)  Human-readable name of the table set
  description   (string, optional)  What this table set is for
  version       (string, required)  Version identifier (e.g., "2020.1")
  fields        (array, required)   One points table per field (see below)
  requirements  (array, optional)   Advisory code minimums (see below)
  tiers         (array, optional)   Ascending tiers: {{ "tier", "min_points", "label" }}

Each entry in "fields":
  field         (string, required)  One of: attic_rsi, wall_rsi,
                                    below_grade_rsi, window_u_value,
                                    water_heater, ventilation,
                                    airtightness, building_volume
  unit          (string, optional)  Unit for display
  note          (string, optional)  Regulatory reference or explanation
  brackets      (object, required)  Either {{ "all": [...] }} for a table
                                    shared by every climate zone, or
                                    {{ "zones": {{ "7A": [...], "7B": [...] }} }}

Each bracket:
  when          (object, required)  One of {{ "at_least": "3.08" }},
                                    {{ "at_most": "1.22" }} or
                                    {{ "category": "heat_pump" }}
  points        (string, required)  Points earned, e.g. "1.6"

Brackets are checked in order and the first match wins: list at_least
thresholds from highest to lowest and at_most thresholds from lowest to
highest. `tiercheck tables validate` reports brackets that can never match.

Each entry in "requirements":
  field         (string, required)  Field the minimum applies to
  pathways      (array, required)   Pathway codes: 9362, 9365, 9367, 9368
  condition     (object, required)  {{ "all": {{ "at_least": "2.97" }} }} or
                                    {{ "zones": {{ "7A": ..., "7B": ... }} }}
  message       (string, required)  Shown when the value does not comply
  reference     (string, optional)  Code clause

Example:
{{
  "name": "Municipal pilot",
  "version": "1.0",
  "fields": [
    {{
      "field": "airtightness",
      "unit": "ACH50",
      "brackets": {{ "all": [
        {{ "when": {{ "at_most": "1.5" }}, "points": "12" }},
        {{ "when": {{ "at_most": "2.5" }}, "points": "5" }}
      ] }}
    }}
  ],
  "requirements": [
    {{
      "field": "airtightness",
      "pathways": ["9368"],
      "condition": {{ "all": {{ "at_most": "3.0" }} }},
      "message": "Pilot homes must test at 3.0 ACH50 or better"
    }}
  ]
}}

Note: thresholds and points must be quoted strings, not bare numbers,
to preserve exact decimal precision (e.g., "3.69" not 3.69).
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), TiercheckError> {
    let tables = tiercheck_core::tables::load_tables(file)?;

    println!("Table set '{}' (v{}) is valid.", tables.name, tables.version);
    let fields: Vec<String> = tables.fields.iter().map(|t| t.field.to_string()).collect();
    println!("  Fields: {}", fields.join(", "));
    println!("  Requirements: {}", tables.requirements.len());
    println!("  Tiers: {}", tables.tiers.len());

    let mut warnings = ordering_warnings(&tables);
    for field in Field::ALL {
        if tables.table(field).is_none() {
            warnings.push(format!("field '{}' has no table and never earns points", field));
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
