use crate::error::FertmixError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nutrient {
    N,
    P,
    K,
}

impl Nutrient {
    pub const ALL: [Nutrient; 3] = [Nutrient::N, Nutrient::P, Nutrient::K];

    pub fn name(&self) -> &'static str {
        match self {
            Nutrient::N => "nitrogen",
            Nutrient::P => "phosphorus",
            Nutrient::K => "potassium",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nutrient::N => write!(f, "N"),
            Nutrient::P => write!(f, "P"),
            Nutrient::K => write!(f, "K"),
        }
    }
}

/// A value per nutrient axis.
///
/// Used for fertilizer content (% by mass), crop requirements and soil
/// levels (kg/ha), and running deficits during allocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Npk {
    pub n: Decimal,
    pub p: Decimal,
    pub k: Decimal,
}

/// Net nutrient still required after subtracting what the soil supplies.
pub type NutrientDeficit = Npk;

impl Npk {
    pub const ZERO: Npk = Npk {
        n: Decimal::ZERO,
        p: Decimal::ZERO,
        k: Decimal::ZERO,
    };

    pub fn new(n: Decimal, p: Decimal, k: Decimal) -> Self {
        Npk { n, p, k }
    }

    pub fn get(&self, nutrient: Nutrient) -> Decimal {
        match nutrient {
            Nutrient::N => self.n,
            Nutrient::P => self.p,
            Nutrient::K => self.k,
        }
    }

    pub fn get_mut(&mut self, nutrient: Nutrient) -> &mut Decimal {
        match nutrient {
            Nutrient::N => &mut self.n,
            Nutrient::P => &mut self.p,
            Nutrient::K => &mut self.k,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, Decimal)> + '_ {
        Nutrient::ALL.into_iter().map(move |nutrient| (nutrient, self.get(nutrient)))
    }

    /// `max(need - soil, 0)` per nutrient.
    pub fn deficit(need: &Npk, soil: &Npk) -> NutrientDeficit {
        Npk {
            n: (need.n - soil.n).max(Decimal::ZERO),
            p: (need.p - soil.p).max(Decimal::ZERO),
            k: (need.k - soil.k).max(Decimal::ZERO),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.n.is_zero() && self.p.is_zero() && self.k.is_zero()
    }

    /// True when every axis is at or below `tolerance` (closed or overshot).
    pub fn is_settled(&self, tolerance: Decimal) -> bool {
        self.iter().all(|(_, v)| v <= tolerance)
    }
}

impl fmt::Display for Npk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "N {} / P {} / K {}",
            self.n.normalize(),
            self.p.normalize(),
            self.k.normalize()
        )
    }
}

/// Largest farm area accepted, in hectares.
pub const MAX_FARM_AREA_HA: i64 = 1_000_000_000;

/// A solve request as collected by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveInput {
    pub crop_name: String,
    /// Farm area in hectares.
    pub farm_area: Decimal,
    /// Soil nitrogen in kg/ha.
    #[serde(default)]
    pub soil_n: Decimal,
    /// Soil phosphorus in kg/ha.
    #[serde(default)]
    pub soil_p: Decimal,
    /// Soil potassium in kg/ha.
    #[serde(default)]
    pub soil_k: Decimal,
}

impl SolveInput {
    pub fn new(crop_name: impl Into<String>, farm_area: Decimal) -> Self {
        SolveInput {
            crop_name: crop_name.into(),
            farm_area,
            soil_n: Decimal::ZERO,
            soil_p: Decimal::ZERO,
            soil_k: Decimal::ZERO,
        }
    }

    pub fn with_soil(mut self, n: Decimal, p: Decimal, k: Decimal) -> Self {
        self.soil_n = n;
        self.soil_p = p;
        self.soil_k = k;
        self
    }

    pub fn soil(&self) -> Npk {
        Npk::new(self.soil_n, self.soil_p, self.soil_k)
    }

    /// Reject farm areas outside `(0, MAX_FARM_AREA_HA]` and negative soil
    /// readings.
    pub fn validate(&self) -> Result<(), FertmixError> {
        if self.farm_area <= Decimal::ZERO {
            return Err(FertmixError::InvalidInput(format!(
                "farm area must be positive, got {}",
                self.farm_area
            )));
        }
        if self.farm_area > Decimal::from(MAX_FARM_AREA_HA) {
            return Err(FertmixError::InvalidInput(format!(
                "farm area must not exceed {} ha, got {}",
                MAX_FARM_AREA_HA, self.farm_area
            )));
        }
        for (nutrient, level) in self.soil().iter() {
            if level < Decimal::ZERO {
                return Err(FertmixError::InvalidInput(format!(
                    "soil {} must not be negative, got {}",
                    nutrient.name(),
                    level
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deficit_clamps_at_zero() {
        let need = Npk::new(dec!(120), dec!(50), dec!(60));
        let soil = Npk::new(dec!(40), dec!(80), dec!(60));
        let deficit = Npk::deficit(&need, &soil);
        assert_eq!(deficit, Npk::new(dec!(80), dec!(0), dec!(0)));
    }

    #[test]
    fn test_is_settled_with_overshoot() {
        let remaining = Npk::new(dec!(-3.5), dec!(0), dec!(0.0000000001));
        assert!(remaining.is_settled(dec!(0.000000001)));
        assert!(!remaining.is_settled(dec!(0)));
    }

    #[test]
    fn test_display() {
        let v = Npk::new(dec!(120.00), dec!(50), dec!(0));
        assert_eq!(v.to_string(), "N 120 / P 50 / K 0");
    }

    #[test]
    fn test_input_rejects_non_positive_area() {
        assert!(SolveInput::new("wheat", dec!(0)).validate().is_err());
        assert!(SolveInput::new("wheat", dec!(-1)).validate().is_err());
        assert!(SolveInput::new("wheat", dec!(0.5)).validate().is_ok());
    }

    #[test]
    fn test_input_rejects_oversized_area() {
        assert!(SolveInput::new("wheat", dec!(1000000000)).validate().is_ok());
        let err = SolveInput::new("wheat", dec!(1000000000.001))
            .validate()
            .unwrap_err();
        assert!(matches!(err, FertmixError::InvalidInput(_)));
        let huge = Decimal::from_i128_with_scale(10i128.pow(25), 0);
        assert!(SolveInput::new("wheat", huge).validate().is_err());
    }

    #[test]
    fn test_input_rejects_negative_soil() {
        let input = SolveInput::new("wheat", dec!(1)).with_soil(dec!(0), dec!(-5), dec!(0));
        let err = input.validate().unwrap_err();
        assert!(err.to_string().contains("phosphorus"));
    }

    #[test]
    fn test_input_soil_defaults_to_zero() {
        let input: SolveInput =
            serde_json::from_str(r#"{ "crop_name": "rice", "farm_area": 2 }"#).unwrap();
        assert_eq!(input.soil(), Npk::ZERO);
        assert_eq!(input.farm_area, dec!(2));
    }
}
