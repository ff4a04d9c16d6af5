use crate::catalog::schema::FertilizerDef;
use crate::model::{Npk, Nutrient};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of N, P and K a fertilizer supplies.
///
/// Every fertilizer with at least one non-zero content value belongs to
/// exactly one group. Declaration order is the enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NutrientGroup {
    Npk,
    Np,
    Nk,
    Pk,
    N,
    P,
    K,
}

impl NutrientGroup {
    pub const ALL: [NutrientGroup; 7] = [
        NutrientGroup::Npk,
        NutrientGroup::Np,
        NutrientGroup::Nk,
        NutrientGroup::Pk,
        NutrientGroup::N,
        NutrientGroup::P,
        NutrientGroup::K,
    ];

    /// Group for a content vector, or `None` if it supplies nothing.
    pub fn of(content: &Npk) -> Option<NutrientGroup> {
        let n = content.n > Decimal::ZERO;
        let p = content.p > Decimal::ZERO;
        let k = content.k > Decimal::ZERO;
        match (n, p, k) {
            (true, true, true) => Some(NutrientGroup::Npk),
            (true, true, false) => Some(NutrientGroup::Np),
            (true, false, true) => Some(NutrientGroup::Nk),
            (false, true, true) => Some(NutrientGroup::Pk),
            (true, false, false) => Some(NutrientGroup::N),
            (false, true, false) => Some(NutrientGroup::P),
            (false, false, true) => Some(NutrientGroup::K),
            (false, false, false) => None,
        }
    }

    pub fn supplies(&self, nutrient: Nutrient) -> bool {
        match nutrient {
            Nutrient::N => matches!(
                self,
                NutrientGroup::Npk | NutrientGroup::Np | NutrientGroup::Nk | NutrientGroup::N
            ),
            Nutrient::P => matches!(
                self,
                NutrientGroup::Npk | NutrientGroup::Np | NutrientGroup::Pk | NutrientGroup::P
            ),
            Nutrient::K => matches!(
                self,
                NutrientGroup::Npk | NutrientGroup::Nk | NutrientGroup::Pk | NutrientGroup::K
            ),
        }
    }
}

impl fmt::Display for NutrientGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = Nutrient::ALL
            .iter()
            .filter(|n| self.supplies(**n))
            .map(|n| n.to_string())
            .collect();
        write!(f, "{}", parts.join("+"))
    }
}

/// The fertilizers of one non-empty group, in catalog order.
#[derive(Debug, Clone)]
pub struct FertilizerGroup<'a> {
    pub group: NutrientGroup,
    pub members: Vec<&'a FertilizerDef>,
}

/// Partition fertilizers into their groups.
///
/// Only non-empty groups are returned, ordered as `NutrientGroup::ALL`.
/// Fertilizers supplying no nutrient are left out.
pub fn partition(fertilizers: &[FertilizerDef]) -> Vec<FertilizerGroup<'_>> {
    NutrientGroup::ALL
        .iter()
        .filter_map(|&group| {
            let members: Vec<&FertilizerDef> = fertilizers
                .iter()
                .filter(|f| NutrientGroup::of(&f.content()) == Some(group))
                .collect();
            (!members.is_empty()).then_some(FertilizerGroup { group, members })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn fert(name: &str, n: Decimal, p: Decimal, k: Decimal) -> FertilizerDef {
        FertilizerDef {
            name: name.into(),
            n,
            p,
            k,
            note: None,
        }
    }

    #[test]
    fn test_group_of_single_nutrient() {
        let urea = Npk::new(dec!(46), dec!(0), dec!(0));
        assert_eq!(NutrientGroup::of(&urea), Some(NutrientGroup::N));
        let mop = Npk::new(dec!(0), dec!(0), dec!(60));
        assert_eq!(NutrientGroup::of(&mop), Some(NutrientGroup::K));
    }

    #[test]
    fn test_group_of_mixed() {
        let dap = Npk::new(dec!(18), dec!(46), dec!(0));
        assert_eq!(NutrientGroup::of(&dap), Some(NutrientGroup::Np));
        let complex = Npk::new(dec!(10), dec!(26), dec!(26));
        assert_eq!(NutrientGroup::of(&complex), Some(NutrientGroup::Npk));
        let mkp = Npk::new(dec!(0), dec!(52), dec!(34));
        assert_eq!(NutrientGroup::of(&mkp), Some(NutrientGroup::Pk));
        assert_eq!(NutrientGroup::of(&Npk::ZERO), None);
    }

    #[test]
    fn test_group_display() {
        assert_eq!(NutrientGroup::Npk.to_string(), "N+P+K");
        assert_eq!(NutrientGroup::Pk.to_string(), "P+K");
        assert_eq!(NutrientGroup::K.to_string(), "K");
    }

    #[test]
    fn test_partition_skips_empty_groups_and_keeps_order() {
        let fertilizers = vec![
            fert("Urea", dec!(46), dec!(0), dec!(0)),
            fert("DAP", dec!(18), dec!(46), dec!(0)),
            fert("MOP", dec!(0), dec!(0), dec!(60)),
            fert("AS", dec!(21), dec!(0), dec!(0)),
        ];
        let groups = partition(&fertilizers);
        let shape: Vec<(NutrientGroup, Vec<&str>)> = groups
            .iter()
            .map(|g| (g.group, g.members.iter().map(|f| f.name.as_str()).collect()))
            .collect();
        assert_eq!(
            shape,
            vec![
                (NutrientGroup::Np, vec!["DAP"]),
                (NutrientGroup::N, vec!["Urea", "AS"]),
                (NutrientGroup::K, vec!["MOP"]),
            ]
        );
    }
}
