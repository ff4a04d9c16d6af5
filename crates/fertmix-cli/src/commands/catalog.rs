use fertmix_core::catalog::builtin;
use fertmix_core::error::FertmixError;
use fertmix_core::solve::{partition, NutrientGroup};
use std::path::Path;

pub fn list() -> Result<(), FertmixError> {
    println!("Available predefined catalogs:\n");
    for name in builtin::PRESETS {
        let catalog = builtin::load_preset(name)?;
        let default_marker = if *name == builtin::DEFAULT_PRESET {
            " [default]"
        } else {
            ""
        };
        println!(
            "  {:<10} {} (v{}){}",
            name, catalog.name, catalog.version, default_marker
        );
        if let Some(ref desc) = catalog.description {
            println!("             {}", desc);
        }
        println!(
            "             {} fertilizers, {} crops",
            catalog.fertilizers.len(),
            catalog.crops.len()
        );
        println!();
    }
    Ok(())
}

pub fn explain(preset: &str) -> Result<(), FertmixError> {
    let catalog = builtin::load_preset(preset)?;

    println!("{} (version {})\n", catalog.name, catalog.version);

    if let Some(ref desc) = catalog.description {
        println!("{}\n", desc);
    }

    let max_name_len = catalog
        .fertilizers
        .iter()
        .map(|f| f.name.len())
        .chain(catalog.crops.iter().map(|c| c.name.len()))
        .max()
        .unwrap_or(20);

    println!("Fertilizers (% by mass), by nutrient group:\n");
    print!("  {:<width$}", "Fertilizer", width = max_name_len + 2);
    println!("  {:<6}  {:<6}  {:<6}  Group", "N", "P", "K");
    println!("  {}", "-".repeat(max_name_len + 2 + 8 * 3 + 7));

    for group in partition(&catalog.fertilizers) {
        for fert in &group.members {
            print!("  {:<width$}", fert.name, width = max_name_len + 2);
            println!(
                "  {:<6}  {:<6}  {:<6}  {}",
                fert.n, fert.p, fert.k, group.group
            );
        }
    }

    let empty: Vec<String> = NutrientGroup::ALL
        .iter()
        .filter(|g| {
            !catalog
                .fertilizers
                .iter()
                .any(|f| NutrientGroup::of(&f.content()) == Some(**g))
        })
        .map(|g| g.to_string())
        .collect();
    if !empty.is_empty() {
        println!("\n  Groups without fertilizers: {}", empty.join(", "));
    }

    println!("\nCrop requirements (kg/ha):\n");
    print!("  {:<width$}", "Crop", width = max_name_len + 2);
    println!("  {:<6}  {:<6}  {:<6}", "N", "P", "K");
    println!("  {}", "-".repeat(max_name_len + 2 + 8 * 3));

    for crop in &catalog.crops {
        print!("  {:<width$}", crop.name, width = max_name_len + 2);
        println!("  {:<6}  {:<6}  {:<6}", crop.n, crop.p, crop.k);
    }

    println!();

    Ok(())
}

pub fn schema() -> Result<(), FertmixError> {
    print!(
        r#"JSON Catalog Schema
===================

A catalog file lists the fertilizers available to the solver and the
nutrient requirements of each crop. When you run `fertmix solve`, the
crop's requirement minus the soil levels gives the deficit that the
fertilizer combinations must cover.

Top-level fields:
  name          (string, required)  Human-readable name of the catalog
  description   (string, optional)  What this catalog is for
  version       (string, required)  Version identifier (e.g., "2025.1")
  fertilizers   (array, required)   List of fertilizers (see below).
                                    Order matters: within a nutrient
                                    group, fertilizers are allocated in
                                    catalog order.
  crops         (array, required)   List of crops (see below)

Each fertilizer:
  name          (string, required)  Unique fertilizer name
  n, p, k       (number, required)  Nutrient content in percent by mass.
                                    0, or between 0.01 and 100. At least
                                    one must be non-zero.
  note          (string, optional)  Free text

Each crop:
  name          (string, required)  Unique crop name. Matched exactly
                                    (case-sensitive) against --crop.
  n, p, k       (number, required)  Requirement in kg/ha, 0..=100000
  note          (string, optional)  Free text

Numbers may also be given as decimal strings (e.g., "18.5").

Example:
{{
  "name": "My farm catalog",
  "description": "Fertilizers stocked by the local co-op",
  "version": "1.0",
  "fertilizers": [
    {{ "name": "Urea", "n": 46, "p": 0, "k": 0 }},
    {{ "name": "DAP", "n": 18, "p": 46, "k": 0, "note": "Diammonium phosphate" }},
    {{ "name": "MOP", "n": 0, "p": 0, "k": 60 }}
  ],
  "crops": [
    {{ "name": "wheat", "n": 120, "p": 50, "k": 60 }}
  ]
}}

Fertilizers are grouped by the nutrients they supply (N+P+K, N+P, N+K,
P+K, N, P, K). The solver tries subsets of these groups, smallest first,
so the search stays bounded however many fertilizers the catalog holds.
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), FertmixError> {
    let catalog = fertmix_core::catalog::load_catalog(file)?;

    println!(
        "Catalog '{}' (v{}) is valid.",
        catalog.name, catalog.version
    );
    println!("  Fertilizers: {}", catalog.fertilizers.len());
    println!("  Crops: {}", catalog.crops.len());

    // Potential issues (warnings, not errors)
    let mut warnings = Vec::new();
    let groups = partition(&catalog.fertilizers);
    for crop in &catalog.crops {
        for (nutrient, need) in crop.requirement().iter() {
            if need.is_zero() {
                continue;
            }
            let supplied = groups.iter().any(|g| g.group.supplies(nutrient));
            if !supplied {
                warnings.push(format!(
                    "crop '{}' needs {} but no fertilizer supplies it",
                    crop.name,
                    nutrient.name()
                ));
            }
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
