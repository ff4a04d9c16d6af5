use crate::model::Npk;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog of fertilizers and crop nutrient requirements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Fertilizers in catalog order. Order is significant: it decides the
    /// allocation order within a nutrient group.
    pub fertilizers: Vec<FertilizerDef>,
    pub crops: Vec<CropDef>,
}

/// A fertilizer and its nutrient content in percent by mass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FertilizerDef {
    pub name: String,
    pub n: Decimal,
    pub p: Decimal,
    pub k: Decimal,
    #[serde(default)]
    pub note: Option<String>,
}

/// A crop and the nutrients it needs in kg/ha.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropDef {
    pub name: String,
    pub n: Decimal,
    pub p: Decimal,
    pub k: Decimal,
    #[serde(default)]
    pub note: Option<String>,
}

impl FertilizerDef {
    pub fn content(&self) -> Npk {
        Npk::new(self.n, self.p, self.k)
    }
}

impl CropDef {
    pub fn requirement(&self) -> Npk {
        Npk::new(self.n, self.p, self.k)
    }
}

impl CatalogDef {
    /// Exact, case-sensitive crop lookup.
    pub fn find_crop(&self, name: &str) -> Option<&CropDef> {
        self.crops.iter().find(|c| c.name == name)
    }

    pub fn find_fertilizer(&self, name: &str) -> Option<&FertilizerDef> {
        self.fertilizers.iter().find(|f| f.name == name)
    }
}
