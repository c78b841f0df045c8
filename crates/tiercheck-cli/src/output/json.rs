use serde_json::json;
use tiercheck_core::error::TiercheckError;
use tiercheck_core::score::ComplianceResult;
use tiercheck_core::trace::TraceBundle;

pub fn print(result: &ComplianceResult, trace: Option<&TraceBundle>) -> Result<(), TiercheckError> {
    let json = match trace {
        Some(trace) => serde_json::to_string_pretty(&json!({ "result": result, "trace": trace }))?,
        None => serde_json::to_string_pretty(result)?,
    };
    println!("{json}");
    Ok(())
}
