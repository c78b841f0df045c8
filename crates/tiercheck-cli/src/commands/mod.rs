pub mod check;
pub mod pathways;
pub mod score;
pub mod tables;

use std::path::PathBuf;
use tiercheck_core::error::TiercheckError;
use tiercheck_core::tables::builtin;
use tiercheck_core::tables::schema::TableSet;

/// Pick the table set: an explicit `--tables` file, then the configured
/// file, then the built-in tables.
pub fn resolve_tables(
    explicit: Option<PathBuf>,
    configured: Option<PathBuf>,
) -> Result<TableSet, TiercheckError> {
    match explicit.or(configured) {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading custom tables");
            tiercheck_core::tables::load_tables(&path)
        }
        None => builtin::default_tables(),
    }
}
