//! Common types and traits for all entities

pub mod draft;
pub mod entity;
pub mod envelope;

// Re-exports
pub use draft::{EntityDraft, ValidationError};
pub use entity::{Categorized, Entity, EntityId};
pub use envelope::ApiEnvelope;
