use crate::model::Npk;
use crate::solve::grouping::NutrientGroup;
use rust_decimal::Decimal;
use serde::Serialize;

/// One greedy allocation inside a subset evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationStep {
    pub fertilizer: String,
    /// Allocated amount in kg/ha, before farm-area scaling and rounding.
    pub amount_per_ha: Decimal,
    /// Deficit left after this step. Negative axes are overshoot.
    pub remaining: Npk,
}

/// How one subset of nutrient groups was evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubsetTrace {
    pub groups: Vec<NutrientGroup>,
    pub steps: Vec<AllocationStep>,
    pub accepted: bool,
}

impl SubsetTrace {
    /// Deficit left after the last step.
    pub fn remaining(&self) -> Option<&Npk> {
        self.steps.last().map(|s| &s.remaining)
    }

    /// One-line summary, e.g. `[N+P, K] rejected: N 100.43 / P 0 / K 0 left`.
    pub fn describe(&self) -> String {
        let groups: Vec<String> = self.groups.iter().map(|g| g.to_string()).collect();
        let verdict = if self.accepted { "accepted" } else { "rejected" };
        match self.remaining() {
            Some(left) => {
                let rounded = Npk::new(
                    left.n.round_dp(2).max(Decimal::ZERO),
                    left.p.round_dp(2).max(Decimal::ZERO),
                    left.k.round_dp(2).max(Decimal::ZERO),
                );
                format!("[{}] {}: {} left", groups.join(", "), verdict, rounded)
            }
            None => format!("[{}] {}", groups.join(", "), verdict),
        }
    }
}
