use super::Entity;
use thiserror::Error;

/// Ошибка клиентской валидации формы (до отправки на сервер)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required: {field} is empty")]
    MissingField { field: &'static str },

    #[error("{field} must be a valid number")]
    NotANumber { field: &'static str },

    #[error("{field} must not be negative")]
    Negative { field: &'static str },

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

/// Черновик формы: все поля строковые, пока форма открыта
pub trait EntityDraft: Clone + Default {
    type Target: Entity;

    /// Заполнить черновик из существующей записи (форма редактирования)
    fn from_entity(entity: &Self::Target) -> Self;

    /// Проверить заполненность и числовые поля, вернуть тело запроса
    fn validate(&self) -> Result<<Self::Target as Entity>::New, ValidationError>;
}

// ============================================================================
// Helpers
// ============================================================================

pub(crate) fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    Ok(trimmed)
}

pub(crate) fn parse_integer(value: &str, field: &'static str) -> Result<i64, ValidationError> {
    value
        .parse::<i64>()
        .map_err(|_| ValidationError::NotANumber { field })
}

pub(crate) fn parse_non_negative_integer(
    value: &str,
    field: &'static str,
) -> Result<i64, ValidationError> {
    let parsed = parse_integer(value, field)?;
    if parsed < 0 {
        return Err(ValidationError::Negative { field });
    }
    Ok(parsed)
}

pub(crate) fn parse_non_negative_decimal(
    value: &str,
    field: &'static str,
) -> Result<f64, ValidationError> {
    let parsed = value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(ValidationError::NotANumber { field })?;
    if parsed < 0.0 {
        return Err(ValidationError::Negative { field });
    }
    Ok(parsed)
}
