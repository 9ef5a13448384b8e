//! Wire types shared between the inventory frontend and the REST backend.

pub mod domain;
pub mod enums;
