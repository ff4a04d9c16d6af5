pub mod engine;
pub mod grouping;
pub mod outcome;
pub mod subsets;
pub mod trace;

pub use engine::{Solver, SolverOptions};
pub use grouping::{partition, FertilizerGroup, NutrientGroup};
pub use outcome::{Combination, FertilizerAmount, MessageKind, SolveOutcome};
pub use trace::{AllocationStep, SubsetTrace};
