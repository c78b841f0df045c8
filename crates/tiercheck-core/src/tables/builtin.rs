use crate::error::TiercheckError;
use crate::tables::schema::TableSet;
use crate::tables::validate_tables;

const NBC_2020_JSON: &str = include_str!("../../../../tables/nbc-2020.json");

/// Available predefined table sets.
pub const PRESETS: &[&str] = &["nbc2020"];

pub const DEFAULT_PRESET: &str = "nbc2020";

/// Load a predefined table set by name.
pub fn load_preset(name: &str) -> Result<TableSet, TiercheckError> {
    match name {
        "nbc2020" => {
            let tables: TableSet = serde_json::from_str(NBC_2020_JSON)?;
            validate_tables(&tables)?;
            Ok(tables)
        }
        _ => Err(TiercheckError::TableInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}

/// The table set used when no custom tables are given.
pub fn default_tables() -> Result<TableSet, TiercheckError> {
    load_preset(DEFAULT_PRESET)
}
