use fertmix_core::catalog::builtin;
use fertmix_core::catalog::schema::CatalogDef;
use fertmix_core::error::FertmixError;
use fertmix_core::model::SolveInput;
use fertmix_core::solve::{SolveOutcome, Solver, SubsetTrace};
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::output;

pub struct SolveArgs {
    pub crop: String,
    pub area: Decimal,
    pub soil: (Decimal, Decimal, Decimal),
    pub preset: Option<String>,
    pub catalog: Option<PathBuf>,
}

pub fn run(args: SolveArgs, output_format: &str, verbose: bool) -> Result<(), FertmixError> {
    let catalog = load_catalog(args.preset.as_deref(), args.catalog.as_ref())?;
    tracing::info!(catalog = %catalog.name, version = %catalog.version, "catalog loaded");

    let (soil_n, soil_p, soil_k) = args.soil;
    let input = SolveInput::new(args.crop, args.area).with_soil(soil_n, soil_p, soil_k);

    let solver = Solver::new(&catalog)?;
    let (outcome, traces) = evaluate(&solver, &input, verbose)?;

    match output_format {
        "json" => output::json::print(&outcome)?,
        _ => output::table::print(&catalog, &input, &outcome, traces.as_deref()),
    }

    Ok(())
}

/// Subset traces are only collected when they will be printed.
fn evaluate(
    solver: &Solver<'_>,
    input: &SolveInput,
    verbose: bool,
) -> Result<(SolveOutcome, Option<Vec<SubsetTrace>>), FertmixError> {
    if verbose {
        let (outcome, traces) = solver.solve_traced(input)?;
        Ok((outcome, Some(traces)))
    } else {
        Ok((solver.solve(input)?, None))
    }
}

fn load_catalog(
    preset: Option<&str>,
    file: Option<&PathBuf>,
) -> Result<CatalogDef, FertmixError> {
    match (preset, file) {
        (_, Some(path)) => fertmix_core::catalog::load_catalog(path),
        (Some(name), None) => builtin::load_preset(name),
        (None, None) => builtin::load_preset(builtin::DEFAULT_PRESET),
    }
}
