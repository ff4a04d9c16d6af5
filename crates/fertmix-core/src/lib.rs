pub mod catalog;
pub mod error;
pub mod model;
pub mod solve;

use catalog::schema::CatalogDef;
use error::FertmixError;
use model::SolveInput;
use solve::{Solver, SolveOutcome};

/// Main API entry point: find fertilizer combinations for a crop.
///
/// Unknown crops and soils that already cover the requirement are
/// reported as [`SolveOutcome::Message`]; invalid input and malformed
/// catalogs are errors.
pub fn solve(catalog: &CatalogDef, input: &SolveInput) -> Result<SolveOutcome, FertmixError> {
    Solver::new(catalog)?.solve(input)
}
