use std::path::PathBuf;
use tiercheck_core::error::TiercheckError;
use tiercheck_core::trace::build_trace;
use tiercheck_core::{Decimal, ScoringPolicy};

use crate::commands::resolve_tables;
use crate::output::{self, OutputFormat};

pub struct ScoreArgs {
    pub input_file: PathBuf,
    pub tables: Option<PathBuf>,
    pub output: OutputFormat,
    pub verbose: bool,
    pub trace: bool,
    pub min_points: Decimal,
}

pub fn run(args: ScoreArgs, configured_tables: Option<PathBuf>) -> Result<(), TiercheckError> {
    let tables = resolve_tables(args.tables, configured_tables)?;
    let raw = tiercheck_core::load_input(&args.input_file)?;
    let policy = ScoringPolicy {
        min_total_points: args.min_points,
    };

    let result = tiercheck_core::evaluate_record(&raw, &tables, &policy);
    let trace = args.trace.then(|| build_trace(&raw, &result));

    match args.output {
        OutputFormat::Json => output::json::print(&result, trace.as_ref())?,
        OutputFormat::Table => {
            output::table::print(&result, &tables.name, args.verbose);
            if let Some(ref trace) = trace {
                println!("{}", serde_json::to_string_pretty(trace)?);
            }
        }
    }

    Ok(())
}
