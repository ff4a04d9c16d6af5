//! Property tests over random soil readings and farm areas.

use fertmix_core::catalog::builtin::load_preset;
use fertmix_core::catalog::schema::CatalogDef;
use fertmix_core::model::{Npk, SolveInput};
use fertmix_core::solve::{MessageKind, Solver};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn presets() -> Vec<CatalogDef> {
    ["default", "extended"]
        .iter()
        .map(|name| load_preset(name).unwrap())
        .collect()
}

fn input_strategy() -> impl Strategy<Value = (usize, usize, SolveInput)> {
    (
        0usize..2,
        0usize..10,
        0i64..=2500,
        0i64..=250,
        0i64..=250,
        0i64..=250,
    )
        .prop_map(|(preset, crop, area_tenths, n, p, k)| {
            // Area in 0.1 ha steps, at least 0.1 ha.
            let area = Decimal::new(area_tenths.max(1), 1);
            let input = SolveInput::new("", area).with_soil(
                Decimal::from(n),
                Decimal::from(p),
                Decimal::from(k),
            );
            (preset, crop, input)
        })
}

proptest! {
    #[test]
    fn returned_combinations_cover_the_deficit((preset, crop, mut input) in input_strategy()) {
        let catalogs = presets();
        let catalog = &catalogs[preset];
        let crop = &catalog.crops[crop % catalog.crops.len()];
        input.crop_name = crop.name.clone();

        let solver = Solver::new(catalog).unwrap();
        let outcome = solver.solve(&input).unwrap();
        let deficit = Npk::deficit(&crop.requirement(), &input.soil());

        match outcome.combinations() {
            None => {
                prop_assert_eq!(outcome.message_kind(), Some(MessageKind::NoFertilizerRequired));
                prop_assert!(deficit.is_zero());
            }
            Some(found) => {
                prop_assert!(!deficit.is_zero());
                prop_assert!(found.len() <= 5);
                for c in found {
                    for amount in &c.amounts {
                        prop_assert!(amount.quantity_kg >= Decimal::ZERO);
                        prop_assert_eq!(amount.quantity_kg.scale(), 3);
                    }
                    let supplied = c.supplied(catalog);
                    for (nutrient, need) in deficit.iter() {
                        // Rounding moves each quantity by at most 0.0005 kg.
                        prop_assert!(
                            supplied.get(nutrient) + dec!(0.01) >= need * input.farm_area,
                            "{} short: {} < {}", nutrient, supplied.get(nutrient), need * input.farm_area
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn covered_soil_needs_no_fertilizer(extra_n in 0i64..500, extra_p in 0i64..500, extra_k in 0i64..500) {
        let catalog = load_preset("extended").unwrap();
        let solver = Solver::new(&catalog).unwrap();
        for crop in &catalog.crops {
            let need = crop.requirement();
            let input = SolveInput::new(crop.name.clone(), dec!(1)).with_soil(
                need.n + Decimal::from(extra_n),
                need.p + Decimal::from(extra_p),
                need.k + Decimal::from(extra_k),
            );
            let outcome = solver.solve(&input).unwrap();
            prop_assert_eq!(outcome.message_kind(), Some(MessageKind::NoFertilizerRequired));
        }
    }

    #[test]
    fn unknown_crops_never_yield_combinations(name in "[a-z_]{1,16}") {
        let catalog = load_preset("default").unwrap();
        prop_assume!(catalog.find_crop(&name).is_none());
        let solver = Solver::new(&catalog).unwrap();
        let outcome = solver.solve(&SolveInput::new(name, dec!(1))).unwrap();
        prop_assert_eq!(outcome.message_kind(), Some(MessageKind::UnknownCrop));
        prop_assert!(outcome.combinations().is_none());
    }
}
