//! ItemType - Classification of received goods

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Item type accepted at a pickup point
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ItemType {
    #[serde(rename = "электроника", alias = "electronics")]
    Electronics,
    #[serde(rename = "одежда", alias = "clothes")]
    Clothes,
    #[serde(rename = "обувь", alias = "shoes")]
    Shoes,
}

impl ItemType {
    pub const ALL: [ItemType; 3] = [ItemType::Electronics, ItemType::Clothes, ItemType::Shoes];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Electronics => "электроника",
            ItemType::Clothes => "одежда",
            ItemType::Shoes => "обувь",
        }
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ItemType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "электроника" | "electronics" => Ok(ItemType::Electronics),
            "одежда" | "clothes" => Ok(ItemType::Clothes),
            "обувь" | "shoes" => Ok(ItemType::Shoes),
            _ => Err(DomainError::InvalidItemType(s.to_string())),
        }
    }
}
