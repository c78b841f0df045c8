use tiercheck_core::error::TiercheckError;
use tiercheck_core::pathway::Pathway;

pub fn list() -> Result<(), TiercheckError> {
    println!("Compliance pathways:\n");
    for pathway in Pathway::ALL {
        let tiered = if pathway.is_tiered() {
            ", reports energy tier"
        } else {
            ""
        };
        println!(
            "  {:<6} {:<20} {} family{}",
            pathway.code(),
            pathway.to_string(),
            pathway.family(),
            tiered
        );
    }
    println!();
    println!("Any other code is reported as not yet available and scores no points.");
    Ok(())
}
