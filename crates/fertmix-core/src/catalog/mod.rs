pub mod builtin;
pub mod schema;

use crate::error::FertmixError;
use rust_decimal::Decimal;
use schema::CatalogDef;
use std::collections::HashSet;
use std::path::Path;

/// Smallest non-zero nutrient content accepted, in hundredths of a percent.
const MIN_CONTENT_HUNDREDTHS: i64 = 1;
/// Largest crop requirement accepted, in kg/ha.
const MAX_REQUIREMENT_KG: i64 = 100_000;

/// Load a catalog from a JSON file.
pub fn load_catalog(path: &Path) -> Result<CatalogDef, FertmixError> {
    let content = std::fs::read_to_string(path).map_err(|e| FertmixError::CatalogLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_catalog(&content, path)
}

/// Parse a catalog from a JSON string.
pub fn parse_catalog(json: &str, source: &Path) -> Result<CatalogDef, FertmixError> {
    let catalog: CatalogDef = serde_json::from_str(json).map_err(|e| FertmixError::CatalogLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Parse a catalog from a JSON string (no file path context).
pub fn parse_catalog_str(json: &str) -> Result<CatalogDef, FertmixError> {
    let catalog: CatalogDef = serde_json::from_str(json).map_err(FertmixError::Json)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Validate that a catalog is well-formed.
pub fn validate_catalog(catalog: &CatalogDef) -> Result<(), FertmixError> {
    let min_content = Decimal::new(MIN_CONTENT_HUNDREDTHS, 2);
    let max_content = Decimal::ONE_HUNDRED;
    let max_requirement = Decimal::from(MAX_REQUIREMENT_KG);

    if catalog.fertilizers.is_empty() {
        return Err(FertmixError::CatalogInvalid(
            "fertilizers must not be empty".into(),
        ));
    }

    if catalog.crops.is_empty() {
        return Err(FertmixError::CatalogInvalid("crops must not be empty".into()));
    }

    let mut seen = HashSet::new();
    for fert in &catalog.fertilizers {
        if fert.name.trim().is_empty() {
            return Err(FertmixError::CatalogInvalid(
                "fertilizer name must not be empty".into(),
            ));
        }
        if !seen.insert(fert.name.as_str()) {
            return Err(FertmixError::CatalogInvalid(format!(
                "duplicate fertilizer '{}'",
                fert.name
            )));
        }

        for (nutrient, pct) in fert.content().iter() {
            let out_of_range = pct < Decimal::ZERO
                || pct > max_content
                || (!pct.is_zero() && pct < min_content);
            if out_of_range {
                return Err(FertmixError::CatalogInvalid(format!(
                    "fertilizer '{}' has {} content {}% (expected 0 or {}..={})",
                    fert.name, nutrient, pct, min_content, max_content
                )));
            }
        }

        if fert.content().is_zero() {
            return Err(FertmixError::CatalogInvalid(format!(
                "fertilizer '{}' supplies no nutrient",
                fert.name
            )));
        }
    }

    let mut seen = HashSet::new();
    for crop in &catalog.crops {
        if crop.name.trim().is_empty() {
            return Err(FertmixError::CatalogInvalid(
                "crop name must not be empty".into(),
            ));
        }
        if !seen.insert(crop.name.as_str()) {
            return Err(FertmixError::CatalogInvalid(format!(
                "duplicate crop '{}'",
                crop.name
            )));
        }

        for (nutrient, need) in crop.requirement().iter() {
            if need < Decimal::ZERO || need > max_requirement {
                return Err(FertmixError::CatalogInvalid(format!(
                    "crop '{}' has {} requirement {} (expected 0..={} kg/ha)",
                    crop.name, nutrient, need, max_requirement
                )));
            }
        }
    }

    Ok(())
}
