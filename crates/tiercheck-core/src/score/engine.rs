use crate::model::{Field, ScoringInput};
use crate::pathway::{classify_pathway, PathwayClass};
use crate::score::lookup::lookup_points;
use crate::score::outcome::{
    ComplianceResult, ComplianceStatus, FieldScore, ScoreBreakdown, TierResult,
};
use crate::tables::schema::{TableSet, TierDef};
use crate::warnings::check_all;
use crate::ScoringPolicy;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Look up points for every field and sum them.
///
/// The table variant for zone-dependent fields follows the province's
/// climate zone. Missing fields, unmatched values and fields without a
/// table contribute nothing.
pub fn score(input: &ScoringInput, tables: &TableSet) -> ScoreBreakdown {
    let fields: BTreeMap<Field, FieldScore> = Field::ALL
        .iter()
        .map(|&field| (field, score_field(field, input, tables)))
        .collect();
    let total = fields.values().map(FieldScore::awarded).sum();

    ScoreBreakdown { fields, total }
}

/// Look up points for a single field.
pub fn score_field(field: Field, input: &ScoringInput, tables: &TableSet) -> FieldScore {
    let value = input.value(field);

    let Some(table) = tables.table(field) else {
        return FieldScore {
            field,
            value,
            points: None,
            matched: None,
            zone: None,
            reason: format!("{}: no table for this field -> no points", field.label()),
        };
    };

    let (brackets, zone) = table.brackets.select(input.climate_zone());
    let matched = lookup_points(value.as_ref(), brackets);
    let zone_note = zone.map(|z| format!(" (zone {z})")).unwrap_or_default();
    let unit = table.unit.as_deref().map(|u| format!(" {u}")).unwrap_or_default();

    let reason = match (&value, &matched) {
        (None, _) => format!("{}: not entered -> no points", field.label()),
        (Some(v), Some(m)) => format!(
            "{}: {}{} matches {}{} -> {} points",
            field.label(),
            v,
            unit,
            m.condition,
            zone_note,
            m.points
        ),
        (Some(v), None) => format!(
            "{}: {}{} matches no bracket{} -> no points",
            field.label(),
            v,
            unit,
            zone_note
        ),
    };
    tracing::debug!(field = %field, points = ?matched.as_ref().map(|m| m.points), "{reason}");

    FieldScore {
        field,
        points: matched.as_ref().map(|m| m.points),
        value,
        matched,
        zone,
        reason,
    }
}

/// Score an input and derive status, warnings and tier.
///
/// An unknown pathway yields `Unavailable` with zero points and no warnings.
/// Without a selected pathway the fields are still scored, but no code
/// minimums or tiers apply. Otherwise the status is `Pass` when the total reaches the policy minimum;
/// warnings are advisory and do not affect it.
pub fn evaluate(input: &ScoringInput, tables: &TableSet, policy: &ScoringPolicy) -> ComplianceResult {
    let pathway = classify_pathway(&input.pathway);
    let zone = input.climate_zone();

    if let PathwayClass::Unavailable { .. } = pathway {
        tracing::warn!(pathway = %input.pathway, "pathway not recognized, scoring not available");
        return ComplianceResult {
            status: ComplianceStatus::Unavailable,
            status_reason: format!("{pathway}: scoring is not yet available"),
            pathway,
            province: input.province,
            zone,
            breakdown: ScoreBreakdown::default(),
            warnings: BTreeMap::new(),
            tier: None,
            min_total_points: policy.min_total_points,
        };
    }

    let breakdown = score(input, tables);
    let warnings = check_all(input, tables);
    let tier = match pathway.pathway() {
        Some(known) if known.is_tiered() => determine_tier(breakdown.total, &tables.tiers),
        _ => None,
    };

    let (status, status_reason) = if breakdown.total >= policy.min_total_points {
        (
            ComplianceStatus::Pass,
            format!(
                "{} points meets the required minimum of {}",
                breakdown.total, policy.min_total_points
            ),
        )
    } else {
        (
            ComplianceStatus::Fail,
            format!(
                "{} points is below the required minimum of {}",
                breakdown.total, policy.min_total_points
            ),
        )
    };

    tracing::info!(
        pathway = pathway.pathway().map_or("none", |p| p.code()),
        zone = %zone,
        total = %breakdown.total,
        status = %status,
        warnings = warnings.values().map(Vec::len).sum::<usize>(),
        "evaluated compliance"
    );

    ComplianceResult {
        status,
        status_reason,
        pathway,
        province: input.province,
        zone,
        breakdown,
        warnings,
        tier,
        min_total_points: policy.min_total_points,
    }
}

/// Highest tier whose minimum the total reaches.
fn determine_tier(total: Decimal, tiers: &[TierDef]) -> Option<TierResult> {
    let position = tiers.iter().rposition(|t| total >= t.min_points)?;
    let reached = &tiers[position];
    let points_to_next = tiers.get(position + 1).map(|next| next.min_points - total);

    Some(TierResult {
        tier: reached.tier,
        label: reached.label.clone(),
        min_points: reached.min_points,
        points_to_next,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClimateZone, FieldValue, Province};
    use crate::tables::builtin::default_tables;
    use rust_decimal_macros::dec;

    fn base(pathway: &str, province: Province) -> ScoringInput {
        ScoringInput {
            pathway: pathway.into(),
            province,
            ..Default::default()
        }
    }

    fn full(pathway: &str, province: Province) -> ScoringInput {
        ScoringInput {
            attic_rsi: Some(dec!(14.79)),
            wall_rsi: Some(dec!(4.40)),
            below_grade_rsi: Some(dec!(4.23)),
            window_u_value: Some(dec!(1.22)),
            water_heater: Some("heat_pump".into()),
            ventilation: Some("hrv_75".into()),
            airtightness: Some(dec!(1.5)),
            building_volume: Some(dec!(600)),
            ..base(pathway, province)
        }
    }

    #[test]
    fn test_empty_input_passes_with_zero() {
        let tables = default_tables().unwrap();
        let result = evaluate(&base("9362", Province::Alberta), &tables, &ScoringPolicy::default());
        assert_eq!(result.total(), dec!(0));
        assert_eq!(result.status, ComplianceStatus::Pass);
        assert!(!result.has_warnings());
    }

    #[test]
    fn test_total_is_sum_of_fields() {
        let tables = default_tables().unwrap();
        let breakdown = score(&full("9368", Province::Alberta), &tables);
        let sum: Decimal = Field::ALL.iter().map(|f| breakdown.points(*f)).sum();
        assert_eq!(breakdown.total, sum);
        // 5.6 + 8.9 + 3.8 + 3.3 + 5.4 + 2.2 + 12.4 + 2.0
        assert_eq!(breakdown.total, dec!(43.6));
    }

    #[test]
    fn test_7b_tables_used_for_saskatchewan() {
        let tables = default_tables().unwrap();
        let breakdown = score(&full("9368", Province::Saskatchewan), &tables);
        assert_eq!(breakdown.fields[&Field::WallRsi].zone, Some(ClimateZone::Zone7B));
        assert_eq!(breakdown.points(Field::WallRsi), dec!(5.9));
        // Water heater and volume tables are shared by both zones.
        assert_eq!(breakdown.fields[&Field::WaterHeater].zone, None);
        assert_eq!(breakdown.points(Field::WaterHeater), dec!(5.4));
    }

    #[test]
    fn test_value_below_every_bracket_scores_zero() {
        let tables = default_tables().unwrap();
        let mut input = base("9368", Province::Saskatchewan);
        input.wall_rsi = Some(dec!(3.69));
        let fs = score_field(Field::WallRsi, &input, &tables);
        assert_eq!(fs.points, None);
        assert_eq!(fs.awarded(), dec!(0));
        assert!(fs.reason.contains("no bracket"));
        assert_eq!(fs.value, Some(FieldValue::Numeric(dec!(3.69))));
    }

    #[test]
    fn test_unknown_category_scores_zero() {
        let tables = default_tables().unwrap();
        let mut input = base("9368", Province::Alberta);
        input.water_heater = Some("solar_thermal".into());
        assert_eq!(score(&input, &tables).total, dec!(0));
    }

    #[test]
    fn test_unknown_pathway_is_unavailable() {
        let tables = default_tables().unwrap();
        let result = evaluate(&full("9999", Province::Alberta), &tables, &ScoringPolicy::default());
        assert_eq!(result.status, ComplianceStatus::Unavailable);
        assert_eq!(result.total(), dec!(0));
        assert!(result.breakdown.fields.is_empty());
        assert!(!result.has_warnings());
        assert!(result.tier.is_none());
    }

    #[test]
    fn test_default_input_passes_with_zero() {
        let tables = default_tables().unwrap();
        let result = evaluate(&ScoringInput::default(), &tables, &ScoringPolicy::default());
        assert_eq!(result.pathway, PathwayClass::Unselected);
        assert_eq!(result.total(), dec!(0));
        assert_eq!(result.status, ComplianceStatus::Pass);
        assert!(result.tier.is_none());
    }

    #[test]
    fn test_unselected_pathway_scores_without_warnings_or_tier() {
        let tables = default_tables().unwrap();
        let mut input = full("", Province::Alberta);
        input.wall_rsi = Some(dec!(2.0));
        let result = evaluate(&input, &tables, &ScoringPolicy::default());
        assert_eq!(result.status, ComplianceStatus::Pass);
        assert!(!result.breakdown.fields.is_empty());
        assert!(result.total() > dec!(0));
        assert!(!result.has_warnings());
        assert!(result.tier.is_none());
    }

    #[test]
    fn test_min_points_policy_can_fail() {
        let tables = default_tables().unwrap();
        let policy = ScoringPolicy {
            min_total_points: dec!(50),
        };
        let result = evaluate(&full("9368", Province::Alberta), &tables, &policy);
        assert_eq!(result.status, ComplianceStatus::Fail);
        assert!(result.status_reason.contains("below"));
    }

    #[test]
    fn test_warnings_do_not_change_status() {
        let tables = default_tables().unwrap();
        let mut input = base("9362", Province::Saskatchewan);
        input.wall_rsi = Some(dec!(2.0));
        let result = evaluate(&input, &tables, &ScoringPolicy::default());
        assert_eq!(result.status, ComplianceStatus::Pass);
        assert_eq!(result.warnings_for(Field::WallRsi).len(), 1);
    }

    #[test]
    fn test_tier_only_for_tiered_pathways() {
        let tables = default_tables().unwrap();
        let tiered = evaluate(&full("9368", Province::Alberta), &tables, &ScoringPolicy::default());
        let tier = tiered.tier.unwrap();
        assert_eq!(tier.tier, 4);
        assert_eq!(tier.points_to_next, Some(dec!(31.4)));

        let plain = evaluate(&full("9362", Province::Alberta), &tables, &ScoringPolicy::default());
        assert!(plain.tier.is_none());
    }

    #[test]
    fn test_determine_tier_boundaries() {
        let tiers = vec![
            TierDef {
                tier: 1,
                min_points: dec!(0),
                label: None,
            },
            TierDef {
                tier: 2,
                min_points: dec!(10),
                label: None,
            },
        ];
        assert_eq!(determine_tier(dec!(9.9), &tiers).unwrap().tier, 1);
        let top = determine_tier(dec!(10), &tiers).unwrap();
        assert_eq!(top.tier, 2);
        assert_eq!(top.points_to_next, None);
        assert!(determine_tier(dec!(5), &[]).is_none());
    }
}
