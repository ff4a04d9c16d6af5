use fertmix_core::error::FertmixError;
use fertmix_core::solve::SolveOutcome;

pub fn print(outcome: &SolveOutcome) -> Result<(), FertmixError> {
    let json = serde_json::to_string_pretty(outcome)?;
    println!("{json}");
    Ok(())
}
