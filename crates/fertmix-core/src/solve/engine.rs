use crate::catalog::schema::{CatalogDef, FertilizerDef};
use crate::catalog::validate_catalog;
use crate::error::FertmixError;
use crate::model::{Npk, NutrientDeficit, SolveInput};
use crate::solve::grouping::partition;
use crate::solve::outcome::{Combination, FertilizerAmount, MessageKind, SolveOutcome};
use crate::solve::subsets::all_subsets;
use crate::solve::trace::{AllocationStep, SubsetTrace};
use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places of reported quantities.
pub const QUANTITY_DP: u32 = 3;

/// Tuning knobs for [`Solver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverOptions {
    /// Maximum number of combinations returned.
    pub max_results: usize,
    /// Residual (kg/ha) still counted as closed. Also the smallest
    /// allocation that is reported.
    pub tolerance: Decimal,
}

impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions {
            max_results: 5,
            tolerance: Decimal::new(1, 9),
        }
    }
}

/// Finds fertilizer combinations covering a crop's nutrient deficit.
///
/// Subsets of nutrient groups are tried smallest first. Within a subset,
/// fertilizers are allocated greedily in group then catalog order, each
/// closing the most binding nutrient it supplies. With at most seven
/// groups, a solve evaluates no more than 127 subsets whatever the
/// catalog size.
#[derive(Debug, Clone)]
pub struct Solver<'a> {
    catalog: &'a CatalogDef,
    options: SolverOptions,
}

/// Greedy allocation over one flattened subset.
struct Allocation<'f> {
    amounts: Vec<(&'f str, Decimal)>,
    steps: Vec<AllocationStep>,
    remaining: NutrientDeficit,
}

impl<'a> Solver<'a> {
    pub fn new(catalog: &'a CatalogDef) -> Result<Self, FertmixError> {
        Self::with_options(catalog, SolverOptions::default())
    }

    pub fn with_options(
        catalog: &'a CatalogDef,
        options: SolverOptions,
    ) -> Result<Self, FertmixError> {
        validate_catalog(catalog)?;
        Ok(Solver { catalog, options })
    }

    /// Solve for the first feasible combinations.
    pub fn solve(&self, input: &SolveInput) -> Result<SolveOutcome, FertmixError> {
        self.run(input, None)
    }

    /// Like [`Solver::solve`], also returning how each subset was evaluated.
    pub fn solve_traced(
        &self,
        input: &SolveInput,
    ) -> Result<(SolveOutcome, Vec<SubsetTrace>), FertmixError> {
        let mut traces = Vec::new();
        let outcome = self.run(input, Some(&mut traces))?;
        Ok((outcome, traces))
    }

    fn run(
        &self,
        input: &SolveInput,
        mut traces: Option<&mut Vec<SubsetTrace>>,
    ) -> Result<SolveOutcome, FertmixError> {
        input.validate()?;

        let Some(crop) = self.catalog.find_crop(&input.crop_name) else {
            tracing::debug!(crop = %input.crop_name, "crop not in catalog");
            return Ok(SolveOutcome::message(MessageKind::UnknownCrop));
        };

        let deficit = Npk::deficit(&crop.requirement(), &input.soil());
        if deficit.is_zero() {
            tracing::debug!(crop = %crop.name, "soil already covers requirement");
            return Ok(SolveOutcome::message(MessageKind::NoFertilizerRequired));
        }

        let groups = partition(&self.catalog.fertilizers);
        tracing::debug!(
            crop = %crop.name,
            deficit = %deficit,
            groups = groups.len(),
            "searching fertilizer combinations"
        );

        let mut combinations = Vec::new();
        let mut evaluated = 0usize;
        for indices in all_subsets(groups.len()) {
            if combinations.len() >= self.options.max_results {
                break;
            }

            let members: Vec<&FertilizerDef> = indices
                .iter()
                .flat_map(|&i| groups[i].members.iter().copied())
                .collect();
            let allocation = allocate(&deficit, &members);
            let accepted = allocation.remaining.is_settled(self.options.tolerance);
            evaluated += 1;

            tracing::trace!(
                subset = ?indices.iter().map(|&i| groups[i].group).collect::<Vec<_>>(),
                remaining = %allocation.remaining,
                accepted,
                "evaluated subset"
            );

            if accepted {
                combinations.push(self.report(&allocation, input.farm_area)?);
            }

            if let Some(traces) = traces.as_deref_mut() {
                traces.push(SubsetTrace {
                    groups: indices.iter().map(|&i| groups[i].group).collect(),
                    steps: allocation.steps,
                    accepted,
                });
            }
        }

        tracing::debug!(
            evaluated,
            found = combinations.len(),
            "fertilizer search finished"
        );
        Ok(SolveOutcome::Combinations(combinations))
    }

    /// Scale per-hectare amounts to the farm and drop empty allocations.
    fn report(
        &self,
        allocation: &Allocation<'_>,
        farm_area: Decimal,
    ) -> Result<Combination, FertmixError> {
        let mut amounts = Vec::new();
        for &(name, per_ha) in &allocation.amounts {
            if per_ha <= self.options.tolerance {
                continue;
            }
            let total = per_ha.checked_mul(farm_area).ok_or_else(|| {
                FertmixError::InvalidInput(format!("farm area {} is too large", farm_area))
            })?;
            amounts.push(FertilizerAmount {
                fertilizer: name.to_string(),
                quantity_kg: round_quantity(total),
            });
        }
        Ok(Combination { amounts })
    }
}

fn allocate<'f>(deficit: &NutrientDeficit, members: &[&'f FertilizerDef]) -> Allocation<'f> {
    let mut remaining = *deficit;
    let mut amounts: Vec<(&'f str, Decimal)> = Vec::new();
    let mut steps = Vec::with_capacity(members.len());

    for fert in members {
        let content = fert.content();
        // A fertilizer whose nutrients are already closed gets nothing.
        let amount = allocation_amount(&remaining, &content)
            .unwrap_or(Decimal::ZERO)
            .max(Decimal::ZERO);
        remaining = apply_allocation(&remaining, &content, amount);

        match amounts.iter_mut().find(|(name, _)| *name == fert.name) {
            Some((_, total)) => *total += amount,
            None => amounts.push((fert.name.as_str(), amount)),
        }
        steps.push(AllocationStep {
            fertilizer: fert.name.clone(),
            amount_per_ha: amount,
            remaining,
        });
    }

    Allocation {
        amounts,
        steps,
        remaining,
    }
}

/// Amount (kg/ha) of a fertilizer that exactly closes the most binding
/// nutrient it supplies.
///
/// Axes with zero content do not constrain the amount. Returns `None`
/// when the content supplies nothing.
pub fn allocation_amount(remaining: &Npk, content: &Npk) -> Option<Decimal> {
    content
        .iter()
        .filter(|(_, pct)| *pct > Decimal::ZERO)
        .map(|(nutrient, pct)| remaining.get(nutrient) / (pct / Decimal::ONE_HUNDRED))
        .min()
}

/// Deficit after applying `amount` kg/ha of a fertilizer with `content`.
pub fn apply_allocation(remaining: &Npk, content: &Npk, amount: Decimal) -> Npk {
    let mut next = *remaining;
    for (nutrient, pct) in content.iter() {
        *next.get_mut(nutrient) -= amount * (pct / Decimal::ONE_HUNDRED);
    }
    next
}

/// Round half away from zero to [`QUANTITY_DP`] places, always keeping
/// that many places.
pub fn round_quantity(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(QUANTITY_DP, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(QUANTITY_DP);
    rounded
}
