use crate::catalog::parse_catalog_str;
use crate::catalog::schema::CatalogDef;
use crate::error::FertmixError;

const DEFAULT_JSON: &str = include_str!("../../../../catalogs/default.json");
const EXTENDED_JSON: &str = include_str!("../../../../catalogs/extended.json");

/// Available predefined catalogs.
pub const PRESETS: &[&str] = &["default", "extended"];

/// Preset used when the caller names none.
pub const DEFAULT_PRESET: &str = "default";

/// Load a predefined catalog by name.
pub fn load_preset(name: &str) -> Result<CatalogDef, FertmixError> {
    match name {
        "default" => parse_catalog_str(DEFAULT_JSON),
        "extended" => parse_catalog_str(EXTENDED_JSON),
        _ => Err(FertmixError::CatalogInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_load_default_preset() {
        let catalog = load_preset("default").unwrap();
        let names: Vec<&str> = catalog.fertilizers.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Urea", "DAP", "MOP"]);
        let wheat = catalog.find_crop("wheat").unwrap();
        assert_eq!((wheat.n, wheat.p, wheat.k), (dec!(120), dec!(50), dec!(60)));
    }

    #[test]
    fn test_load_extended_preset() {
        let catalog = load_preset("extended").unwrap();
        assert!(catalog.fertilizers.len() > 3);
        assert!(catalog.find_crop("maize").is_some());
    }

    #[test]
    fn test_every_preset_loads() {
        for name in PRESETS {
            assert!(load_preset(name).is_ok(), "preset {name} failed to load");
        }
        assert!(PRESETS.contains(&DEFAULT_PRESET));
    }

    #[test]
    fn test_unknown_preset() {
        let err = load_preset("xyz").unwrap_err();
        assert!(err.to_string().contains("default, extended"));
    }
}
