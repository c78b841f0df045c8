use std::collections::HashMap;
use std::sync::LazyLock;

/// Normalize a categorical form value to a canonical key.
///
/// Steps:
/// 1. Trim and lowercase
/// 2. Replace spaces, hyphens, slashes, parentheses and `%` with underscores
/// 3. Collapse multiple underscores
/// 4. Look up in alias map
///
/// Empty input yields None. Keys without an alias pass through, so table
/// authors can add categories without touching the alias map.
pub fn normalize_category(raw: &str) -> Option<String> {
    let s = raw.trim().to_lowercase();
    if s.is_empty() {
        return None;
    }

    let mut result = String::with_capacity(s.len());
    let mut prev_underscore = true;
    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c);
            prev_underscore = false;
        } else if !prev_underscore {
            result.push('_');
            prev_underscore = true;
        }
    }
    if result.ends_with('_') {
        result.pop();
    }

    if result.is_empty() {
        return None;
    }

    match ALIASES.get(result.as_str()) {
        Some(canonical) => Some(canonical.to_string()),
        None => Some(result),
    }
}

static ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    // Water heaters
    m.insert("conventional", "conventional_tank");
    m.insert("conventional_gas", "conventional_tank");
    m.insert("gas_tank", "conventional_tank");
    m.insert("natural_gas_tank", "conventional_tank");
    m.insert("standard_tank", "conventional_tank");
    m.insert("electric", "electric_tank");
    m.insert("electric_storage", "electric_tank");
    m.insert("condensing", "condensing_tank");
    m.insert("condensing_storage", "condensing_tank");
    m.insert("condensing_gas_tank", "condensing_tank");
    m.insert("tankless", "instantaneous");
    m.insert("on_demand", "instantaneous");
    m.insert("instantaneous_gas", "instantaneous");
    m.insert("condensing_tankless", "instantaneous_condensing");
    m.insert("tankless_condensing", "instantaneous_condensing");
    m.insert("condensing_instantaneous", "instantaneous_condensing");
    m.insert("heat_pump_water_heater", "heat_pump");
    m.insert("hpwh", "heat_pump");
    m.insert("heat_pump_tank", "heat_pump");

    // Ventilation
    m.insert("no_hrv", "none");
    m.insert("no", "none");
    m.insert("exhaust_only", "none");
    m.insert("hrv", "hrv_60");
    m.insert("hrv_60_sre", "hrv_60");
    m.insert("hrv_65_sre", "hrv_65");
    m.insert("hrv_75_sre", "hrv_75");
    m.insert("erv", "erv_60");
    m.insert("erv_60_sre", "erv_60");
    m.insert("erv_65_sre", "erv_65");
    m.insert("erv_75_sre", "erv_75");

    m
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_key_passthrough() {
        assert_eq!(normalize_category("heat_pump").as_deref(), Some("heat_pump"));
    }

    #[test]
    fn test_trimming_and_case() {
        assert_eq!(normalize_category("  Heat Pump  ").as_deref(), Some("heat_pump"));
    }

    #[test]
    fn test_water_heater_aliases() {
        assert_eq!(
            normalize_category("Heat pump water heater").as_deref(),
            Some("heat_pump")
        );
        assert_eq!(normalize_category("Tankless").as_deref(), Some("instantaneous"));
        assert_eq!(
            normalize_category("Condensing tankless").as_deref(),
            Some("instantaneous_condensing")
        );
        assert_eq!(
            normalize_category("Natural-gas tank").as_deref(),
            Some("conventional_tank")
        );
    }

    #[test]
    fn test_ventilation_aliases() {
        assert_eq!(normalize_category("HRV 75% SRE").as_deref(), Some("hrv_75"));
        assert_eq!(normalize_category("HRV").as_deref(), Some("hrv_60"));
        assert_eq!(normalize_category("ERV (65% SRE)").as_deref(), Some("erv_65"));
        assert_eq!(normalize_category("Exhaust only").as_deref(), Some("none"));
    }

    #[test]
    fn test_empty_returns_none() {
        assert_eq!(normalize_category(""), None);
        assert_eq!(normalize_category("   "), None);
        assert_eq!(normalize_category("--"), None);
    }

    #[test]
    fn test_unknown_passthrough() {
        assert_eq!(
            normalize_category("Solar thermal").as_deref(),
            Some("solar_thermal")
        );
    }
}
