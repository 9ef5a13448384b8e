use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Категории товаров (фиксированный список, общий для форм и фильтра)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductCategory {
    Electronics,
    Clothing,
    Toys,
    Sports,
    Beauty,
    Health,
    PetSupplies,
    Food,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 8] = [
        ProductCategory::Electronics,
        ProductCategory::Clothing,
        ProductCategory::Toys,
        ProductCategory::Sports,
        ProductCategory::Beauty,
        ProductCategory::Health,
        ProductCategory::PetSupplies,
        ProductCategory::Food,
    ];

    /// Значение, которое хранит и отдаёт backend
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Electronics => "electronics",
            ProductCategory::Clothing => "clothing",
            ProductCategory::Toys => "toys",
            ProductCategory::Sports => "sports",
            ProductCategory::Beauty => "beauty",
            ProductCategory::Health => "health",
            ProductCategory::PetSupplies => "pet-supplies",
            ProductCategory::Food => "food",
        }
    }

    /// Человекочитаемое название
    pub fn label(&self) -> &'static str {
        match self {
            ProductCategory::Electronics => "Electronics",
            ProductCategory::Clothing => "Clothing",
            ProductCategory::Toys => "Toys",
            ProductCategory::Sports => "Sports",
            ProductCategory::Beauty => "Beauty",
            ProductCategory::Health => "Health",
            ProductCategory::PetSupplies => "Pet Supplies",
            ProductCategory::Food => "Food",
        }
    }

    /// Пары (значение, название) для выпадающих списков
    pub fn options() -> Vec<(String, String)> {
        Self::ALL
            .iter()
            .map(|c| (c.as_str().to_string(), c.label().to_string()))
            .collect()
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown product category: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values_round_trip_through_from_str() {
        for category in ProductCategory::ALL {
            assert_eq!(category.as_str().parse::<ProductCategory>(), Ok(category));
        }
    }

    #[test]
    fn test_from_str_is_case_sensitive() {
        assert!("Toys".parse::<ProductCategory>().is_err());
        assert!("all".parse::<ProductCategory>().is_err());
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&ProductCategory::PetSupplies).unwrap();
        assert_eq!(json, "\"pet-supplies\"");
        assert_eq!(ProductCategory::PetSupplies.label(), "Pet Supplies");
    }

    #[test]
    fn test_options_keep_declaration_order() {
        let options = ProductCategory::options();
        assert_eq!(options.len(), 8);
        assert_eq!(options[0], ("electronics".to_string(), "Electronics".to_string()));
        assert_eq!(options[7], ("food".to_string(), "Food".to_string()));
    }
}
