use crate::catalog::schema::CatalogDef;
use crate::model::Npk;
use rust_decimal::Decimal;
use serde::ser::{Error as _, SerializeMap};
use serde::{Deserialize, Serialize, Serializer};

/// Why a solve produced a message instead of combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    UnknownCrop,
    NoFertilizerRequired,
}

impl MessageKind {
    pub fn text(&self) -> &'static str {
        match self {
            MessageKind::UnknownCrop => "Invalid crop name provided.",
            MessageKind::NoFertilizerRequired => "No additional fertilizer required.",
        }
    }
}

/// Result of a solve call.
///
/// Serializes either as `{ "kind": ..., "message": ... }` or as a plain
/// array of combinations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SolveOutcome {
    Message { kind: MessageKind, message: String },
    Combinations(Vec<Combination>),
}

impl SolveOutcome {
    pub fn message(kind: MessageKind) -> Self {
        SolveOutcome::Message {
            kind,
            message: kind.text().to_string(),
        }
    }

    pub fn message_kind(&self) -> Option<MessageKind> {
        match self {
            SolveOutcome::Message { kind, .. } => Some(*kind),
            SolveOutcome::Combinations(_) => None,
        }
    }

    pub fn combinations(&self) -> Option<&[Combination]> {
        match self {
            SolveOutcome::Message { .. } => None,
            SolveOutcome::Combinations(list) => Some(list),
        }
    }
}

/// Quantity of one fertilizer for the whole farm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FertilizerAmount {
    pub fertilizer: String,
    /// Kilograms for the whole farm, rounded to 3 decimal places.
    pub quantity_kg: Decimal,
}

/// A set of fertilizer quantities that together cover the deficit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Combination {
    /// Amounts in allocation order. Only strictly positive quantities.
    pub amounts: Vec<FertilizerAmount>,
}

impl Combination {
    pub fn get(&self, fertilizer: &str) -> Option<Decimal> {
        self.amounts
            .iter()
            .find(|a| a.fertilizer == fertilizer)
            .map(|a| a.quantity_kg)
    }

    pub fn names(&self) -> Vec<&str> {
        self.amounts.iter().map(|a| a.fertilizer.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    /// Total nutrients (kg) delivered by the reported quantities.
    ///
    /// Fertilizers missing from `catalog` contribute nothing.
    pub fn supplied(&self, catalog: &CatalogDef) -> Npk {
        let mut total = Npk::ZERO;
        for amount in &self.amounts {
            let Some(fert) = catalog.find_fertilizer(&amount.fertilizer) else {
                continue;
            };
            for (nutrient, pct) in fert.content().iter() {
                *total.get_mut(nutrient) += amount.quantity_kg * (pct / Decimal::ONE_HUNDRED);
            }
        }
        total
    }
}

impl Serialize for Combination {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.amounts.len()))?;
        for amount in &self.amounts {
            // Parsed from text to get the float nearest the rounded decimal.
            let kg: f64 = amount
                .quantity_kg
                .to_string()
                .parse()
                .map_err(S::Error::custom)?;
            map.serialize_entry(&amount.fertilizer, &kg)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn combination() -> Combination {
        Combination {
            amounts: vec![
                FertilizerAmount {
                    fertilizer: "DAP".into(),
                    quantity_kg: dec!(108.696),
                },
                FertilizerAmount {
                    fertilizer: "MOP".into(),
                    quantity_kg: dec!(100.000),
                },
            ],
        }
    }

    #[test]
    fn test_message_json_shape() {
        let outcome = SolveOutcome::message(MessageKind::UnknownCrop);
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["message"], "Invalid crop name provided.");
        assert_eq!(json["kind"], "unknown_crop");
    }

    #[test]
    fn test_combinations_serialize_as_ordered_maps() {
        let outcome = SolveOutcome::Combinations(vec![combination()]);
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(json, r#"[{"DAP":108.696,"MOP":100.0}]"#);
    }

    #[test]
    fn test_accessors() {
        let outcome = SolveOutcome::Combinations(vec![]);
        assert_eq!(outcome.message_kind(), None);
        assert_eq!(outcome.combinations().map(|c| c.len()), Some(0));

        let c = combination();
        assert_eq!(c.get("MOP"), Some(dec!(100)));
        assert_eq!(c.get("Urea"), None);
        assert_eq!(c.names(), vec!["DAP", "MOP"]);
        assert_eq!(c.len(), 2);
        assert!(!c.is_empty());
        assert!(Combination::default().is_empty());
    }
}
