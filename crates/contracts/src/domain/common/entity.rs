use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

/// Идентификатор записи, назначаемый сервером
pub type EntityId = i64;

/// Трейт для сущностей, хранящихся в удалённой коллекции
///
/// Определяет идентификатор записи и статические метаданные коллекции
pub trait Entity: Clone + Debug + PartialEq + Serialize + DeserializeOwned {
    /// Тело запроса на создание (без `id`)
    type New: Clone + Debug + Serialize;

    // ============================================================================
    // Методы экземпляра
    // ============================================================================

    /// Получить ID записи
    fn id(&self) -> EntityId;

    /// Собрать полную запись из тела создания и известного ID
    fn with_id(id: EntityId, new: Self::New) -> Self;

    // ============================================================================
    // Метаданные коллекции
    // ============================================================================

    /// Сегмент URL коллекции (например, "product")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число, например, "product")
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число, например, "products")
    fn list_name() -> &'static str;
}

/// Сущности, которые группируются по категории
pub trait Categorized {
    /// Категория записи; `None`, если она пустая
    fn category(&self) -> Option<&str>;
}
