pub mod category;
pub mod values;

use crate::model::{Field, Province, RawInput, RawValue, ScoringInput};
use category::normalize_category;
use values::parse_numeric;

/// Convert a raw form record into the typed input the scorer expects.
///
/// Never fails: unparseable numbers and blank categories become `None`,
/// which scores as "no points" downstream.
pub fn normalize_input(raw: &RawInput) -> ScoringInput {
    let numeric = |field: Field| {
        let value = raw.get(field)?;
        let text = value.as_text();
        let parsed = parse_numeric(&text);
        if parsed.is_none() && !text.trim().is_empty() {
            tracing::debug!(field = %field, raw = %text, "ignoring unparseable numeric value");
        }
        parsed
    };
    let category = |field: Field| raw.get(field).and_then(|v| normalize_category(&v.as_text()));

    ScoringInput {
        attic_rsi: numeric(Field::AtticRsi),
        wall_rsi: numeric(Field::WallRsi),
        below_grade_rsi: numeric(Field::BelowGradeRsi),
        window_u_value: numeric(Field::WindowUValue),
        water_heater: category(Field::WaterHeater),
        ventilation: category(Field::Ventilation),
        airtightness: numeric(Field::Airtightness),
        building_volume: numeric(Field::BuildingVolume),
        province: raw
            .province
            .as_ref()
            .map(|p| Province::from_str_loose(&p.as_text()))
            .unwrap_or_default(),
        pathway: raw
            .pathway
            .as_ref()
            .map(RawValue::as_text)
            .map(|p| p.trim().to_string())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_normalize_full_record() {
        let raw: RawInput = serde_json::from_str(
            r#"{
                "wall_rsi": "3.69",
                "attic_rsi": 10.43,
                "window_u_value": "1,22",
                "water_heater": "Heat pump water heater",
                "ventilation": "HRV 75% SRE",
                "airtightness": "2.5 ACH50",
                "building_volume": "1,200",
                "province": "Saskatchewan",
                "pathway": " 9368 "
            }"#,
        )
        .unwrap();

        let input = normalize_input(&raw);
        assert_eq!(input.wall_rsi, Some(dec!(3.69)));
        assert_eq!(input.attic_rsi, Some(dec!(10.43)));
        assert_eq!(input.window_u_value, Some(dec!(1.22)));
        assert_eq!(input.water_heater.as_deref(), Some("heat_pump"));
        assert_eq!(input.ventilation.as_deref(), Some("hrv_75"));
        assert_eq!(input.airtightness, Some(dec!(2.5)));
        assert_eq!(input.building_volume, Some(dec!(1200)));
        assert_eq!(input.province, Province::Saskatchewan);
        assert_eq!(input.pathway, "9368");
    }

    #[test]
    fn test_garbage_values_become_none() {
        let raw = RawInput {
            wall_rsi: Some("lots".into()),
            below_grade_rsi: Some("".into()),
            water_heater: Some("   ".into()),
            ..Default::default()
        };
        let input = normalize_input(&raw);
        assert_eq!(input.wall_rsi, None);
        assert_eq!(input.below_grade_rsi, None);
        assert_eq!(input.water_heater, None);
        assert_eq!(input.province, Province::Unknown);
        assert_eq!(input.pathway, "");
    }

    #[test]
    fn test_json_number_in_exponent_form() {
        let raw: RawInput =
            serde_json::from_str(r#"{ "building_volume": 1e20, "airtightness": 2.5e0 }"#).unwrap();
        let input = normalize_input(&raw);
        assert_eq!(input.building_volume, Some(dec!(100000000000000000000)));
        assert_eq!(input.airtightness, Some(dec!(2.5)));
    }

    #[test]
    fn test_empty_record() {
        let input = normalize_input(&RawInput::default());
        assert_eq!(input, ScoringInput::default());
    }
}
