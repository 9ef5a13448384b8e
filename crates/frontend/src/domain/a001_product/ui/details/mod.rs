//! Product create / edit form
//!
//! - view_model.rs: form state and the save command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::ProductDetails;
pub use view_model::ProductDetailsViewModel;
