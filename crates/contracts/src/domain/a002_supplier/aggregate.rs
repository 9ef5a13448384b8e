use crate::domain::common::draft::required;
use crate::domain::common::{Entity, EntityDraft, EntityId, ValidationError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Поставщик
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: EntityId,
    pub name: String,
    pub address: String,

    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
}

impl Entity for Supplier {
    type New = NewSupplier;

    fn id(&self) -> EntityId {
        self.id
    }

    fn with_id(id: EntityId, new: NewSupplier) -> Self {
        Self {
            id,
            name: new.name,
            address: new.address,
            phone_number: new.phone_number,
        }
    }

    fn collection_name() -> &'static str {
        "supplier"
    }

    fn element_name() -> &'static str {
        "supplier"
    }

    fn list_name() -> &'static str {
        "suppliers"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Тело запроса на создание поставщика
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSupplier {
    pub name: String,
    pub address: String,

    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
}

/// Черновик формы поставщика
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierDraft {
    pub name: String,
    pub address: String,
    pub phone_number: String,
}

impl EntityDraft for SupplierDraft {
    type Target = Supplier;

    fn from_entity(supplier: &Supplier) -> Self {
        Self {
            name: supplier.name.clone(),
            address: supplier.address.clone(),
            phone_number: supplier.phone_number.clone(),
        }
    }

    fn validate(&self) -> Result<NewSupplier, ValidationError> {
        Ok(NewSupplier {
            name: required(&self.name, "Name")?.to_string(),
            address: required(&self.address, "Address")?.to_string(),
            phone_number: required(&self.phone_number, "Phone Number")?.to_string(),
        })
    }
}
