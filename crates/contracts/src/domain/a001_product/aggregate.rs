use crate::domain::common::draft::{
    parse_integer, parse_non_negative_decimal, parse_non_negative_integer, required,
};
use crate::domain::common::{Categorized, Entity, EntityDraft, EntityId, ValidationError};
use crate::enums::ProductCategory;
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Товар на складе
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    pub identifier: i64,
    pub price: f64,
    pub stock: i64,
    #[serde(default)]
    pub category: String,
}

impl Entity for Product {
    type New = NewProduct;

    fn id(&self) -> EntityId {
        self.id
    }

    fn with_id(id: EntityId, new: NewProduct) -> Self {
        Self {
            id,
            name: new.name,
            identifier: new.identifier,
            price: new.price,
            stock: new.stock,
            category: new.category,
        }
    }

    fn collection_name() -> &'static str {
        "product"
    }

    fn element_name() -> &'static str {
        "product"
    }

    fn list_name() -> &'static str {
        "products"
    }
}

impl Categorized for Product {
    fn category(&self) -> Option<&str> {
        // пустая или из одних пробелов категория считается отсутствующей
        if self.category.trim().is_empty() {
            None
        } else {
            Some(&self.category)
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Тело запроса на создание товара (без `id`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub identifier: i64,
    pub price: f64,
    pub stock: i64,
    pub category: String,
}

/// Черновик формы товара
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub identifier: String,
    pub price: String,
    pub stock: String,
    pub category: String,
}

impl EntityDraft for ProductDraft {
    type Target = Product;

    fn from_entity(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            identifier: product.identifier.to_string(),
            price: product.price.to_string(),
            stock: product.stock.to_string(),
            category: product.category.clone(),
        }
    }

    fn validate(&self) -> Result<NewProduct, ValidationError> {
        // Сначала наличие всех полей, затем числа
        let name = required(&self.name, "Product Name")?;
        let identifier = required(&self.identifier, "Identifier")?;
        let price = required(&self.price, "Price")?;
        let stock = required(&self.stock, "Stock")?;
        let category = required(&self.category, "Category")?;

        let identifier = parse_integer(identifier, "Identifier")?;
        let price = parse_non_negative_decimal(price, "Price")?;
        let stock = parse_non_negative_integer(stock, "Stock")?;

        let category: ProductCategory = category
            .parse()
            .map_err(|_| ValidationError::UnknownCategory(category.to_string()))?;

        Ok(NewProduct {
            name: name.to_string(),
            identifier,
            price,
            stock,
            category: category.as_str().to_string(),
        })
    }
}
