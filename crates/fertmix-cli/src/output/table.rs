use fertmix_core::catalog::schema::CatalogDef;
use fertmix_core::model::{Npk, SolveInput};
use fertmix_core::solve::{SolveOutcome, SubsetTrace};

pub fn print(
    catalog: &CatalogDef,
    input: &SolveInput,
    outcome: &SolveOutcome,
    traces: Option<&[SubsetTrace]>,
) {
    println!("=== {} ({} v{}) ===\n", input.crop_name, catalog.name, catalog.version);

    let combinations = match outcome {
        SolveOutcome::Message { message, .. } => {
            println!("  {}\n", message);
            return;
        }
        SolveOutcome::Combinations(list) => list,
    };

    // Crop exists here, otherwise the outcome would be a message.
    if let Some(crop) = catalog.find_crop(&input.crop_name) {
        let deficit = Npk::deficit(&crop.requirement(), &input.soil());
        println!("  Farm area: {} ha", input.farm_area.normalize());
        println!("  Soil:      {} kg/ha", input.soil());
        println!("  Deficit:   {} kg/ha\n", deficit);
    }

    if combinations.is_empty() {
        println!("  No combination of the catalog fertilizers covers the deficit.\n");
    }

    for (i, combination) in combinations.iter().enumerate() {
        println!("  Option {}", i + 1);

        let max_name = combination
            .amounts
            .iter()
            .map(|a| a.fertilizer.len())
            .max()
            .unwrap_or(10);

        for amount in &combination.amounts {
            println!(
                "    {:<width$}  {:>12} kg",
                amount.fertilizer,
                amount.quantity_kg,
                width = max_name
            );
        }

        let supplied = combination.supplied(catalog);
        println!(
            "    Supplies: N {} / P {} / K {} kg\n",
            supplied.n.round_dp(3),
            supplied.p.round_dp(3),
            supplied.k.round_dp(3)
        );
    }

    if let Some(traces) = traces {
        println!("  Evaluated subsets:");
        for trace in traces {
            println!("    {}", trace.describe());
            for step in &trace.steps {
                println!(
                    "      {} -> {} kg/ha",
                    step.fertilizer,
                    step.amount_per_ha.round_dp(3)
                );
            }
        }
        println!();
    }
}
