use std::path::PathBuf;
use tiercheck_core::error::TiercheckError;
use tiercheck_core::model::Field;

use crate::commands::resolve_tables;
use crate::output;

pub fn run(
    input_file: PathBuf,
    field: &str,
    tables: Option<PathBuf>,
    configured_tables: Option<PathBuf>,
) -> Result<(), TiercheckError> {
    let field =
        Field::from_str_loose(field).ok_or_else(|| TiercheckError::UnknownField(field.to_string()))?;
    let tables = resolve_tables(tables, configured_tables)?;
    let raw = tiercheck_core::load_input(&input_file)?;

    let warnings = tiercheck_core::check_record_field(&raw, field, &tables);
    print!("{}", output::table::format_warnings(field, &warnings));

    Ok(())
}
