use std::fmt::Write;
use tiercheck_core::model::Field;
use tiercheck_core::score::{ComplianceResult, ComplianceStatus, ComplianceWarning};

pub fn print(result: &ComplianceResult, tables_name: &str, verbose: bool) {
    print!("{}", format_result(result, tables_name, verbose));
}

pub fn format_result(result: &ComplianceResult, tables_name: &str, verbose: bool) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "=== {} ===\n", tables_name);
    let _ = writeln!(out, "  Pathway:  {}", result.pathway);
    let _ = writeln!(out, "  Province: {} (zone {})", result.province, result.zone);
    let _ = writeln!(out, "  Status:   {} ({})", result.status, result.status_reason);

    if let Some(ref tier) = result.tier {
        let label = tier
            .label
            .clone()
            .unwrap_or_else(|| format!("Tier {}", tier.tier));
        match tier.points_to_next {
            Some(points) => {
                let _ = writeln!(out, "  Tier:     {} ({} points to next tier)", label, points);
            }
            None => {
                let _ = writeln!(out, "  Tier:     {}", label);
            }
        }
    }
    let _ = writeln!(out);

    if result.status == ComplianceStatus::Unavailable {
        return out;
    }

    let label_width = Field::ALL
        .iter()
        .map(|f| f.label().len())
        .max()
        .unwrap_or(20);

    let _ = writeln!(
        out,
        "  {:<width$}  {:<24}  {:>6}",
        "Field",
        "Value",
        "Points",
        width = label_width
    );
    let _ = writeln!(out, "  {}", "-".repeat(label_width + 36));

    for fs in result.breakdown.fields.values() {
        let value = fs
            .value
            .as_ref()
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string());
        let points = fs
            .points
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());
        let warned = if result.warnings_for(fs.field).is_empty() {
            ""
        } else {
            " (!)"
        };
        let _ = writeln!(
            out,
            "  {:<width$}  {:<24}  {:>6}{}",
            fs.field.label(),
            value,
            points,
            warned,
            width = label_width
        );
        if verbose {
            let _ = writeln!(out, "    {}", fs.reason);
        }
    }

    let _ = writeln!(out, "  {}", "-".repeat(label_width + 36));
    let _ = writeln!(
        out,
        "  {:<width$}  {:<24}  {:>6}\n",
        "Total",
        "",
        result.total(),
        width = label_width
    );

    if result.has_warnings() {
        let _ = writeln!(out, "  Warnings (advisory):");
        for warning in result.warnings.values().flatten() {
            let _ = writeln!(out, "    - {}", warning);
        }
        let _ = writeln!(out);
    }

    out
}

pub fn format_warnings(field: Field, warnings: &[ComplianceWarning]) -> String {
    if warnings.is_empty() {
        return format!("{}: no warnings\n", field);
    }

    let mut out = String::new();
    for warning in warnings {
        let _ = writeln!(out, "{}", warning);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiercheck_core::model::RawInput;
    use tiercheck_core::tables::builtin::default_tables;
    use tiercheck_core::{evaluate_record, ScoringPolicy};

    fn evaluate(json: &str) -> ComplianceResult {
        let raw: RawInput = serde_json::from_str(json).unwrap();
        evaluate_record(&raw, &default_tables().unwrap(), &ScoringPolicy::default())
    }

    #[test]
    fn table_lists_fields_total_and_warnings() {
        let result = evaluate(
            r#"{ "wall_rsi": "3.2", "airtightness": "2.0", "province": "SK", "pathway": "9362" }"#,
        );
        let out = format_result(&result, "NBC", false);
        assert!(out.contains("=== NBC ==="));
        assert!(out.contains("Saskatchewan (zone 7B)"));
        assert!(out.contains("Above-grade walls"));
        assert!(out.contains("(!)"));
        assert!(out.contains("Warnings (advisory):"));
        assert!(out.contains("Total"));
        assert!(!out.contains("Tier:"));
    }

    #[test]
    fn verbose_adds_reasons() {
        let result = evaluate(r#"{ "wall_rsi": "4.57", "pathway": "9368" }"#);
        let out = format_result(&result, "NBC", true);
        assert!(out.contains("matches >= 4.57 (zone 7A) -> 10.0 points"));
        assert!(out.contains("Tier:"));
    }

    #[test]
    fn unavailable_pathway_skips_breakdown() {
        let result = evaluate(r#"{ "wall_rsi": "4.57", "pathway": "abc" }"#);
        let out = format_result(&result, "NBC", false);
        assert!(out.contains("Not yet available"));
        assert!(!out.contains("Total"));
    }

    #[test]
    fn empty_warning_list() {
        assert_eq!(format_warnings(Field::WallRsi, &[]), "wall_rsi: no warnings\n");
    }
}
