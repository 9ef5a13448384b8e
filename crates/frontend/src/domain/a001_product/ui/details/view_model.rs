use crate::domain::a001_product::api::ProductController;
use crate::shared::sync::finish_save;
use contracts::domain::a001_product::{Product, ProductDraft};
use contracts::domain::common::{EntityDraft, EntityId};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// ViewModel for the product form
#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductDraft>,
    pub error: RwSignal<Option<String>>,
    pub submitting: RwSignal<bool>,
    editing: Option<EntityId>,
}

impl ProductDetailsViewModel {
    /// Empty form for a new product, or one pre-filled from `existing`.
    pub fn new(existing: Option<&Product>) -> Self {
        Self {
            form: RwSignal::new(existing.map(ProductDraft::from_entity).unwrap_or_default()),
            error: RwSignal::new(None),
            submitting: RwSignal::new(false),
            editing: existing.map(|p| p.id),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing.is_some()
    }

    /// Validates and sends the draft; `on_saved` runs only after the server accepted it.
    pub fn save_command(&self, controller: ProductController, on_saved: Callback<()>) {
        if self.submitting.get_untracked() {
            return;
        }
        let draft = self.form.get_untracked();
        let Self {
            error,
            submitting,
            editing,
            ..
        } = *self;

        error.set(None);
        submitting.set(true);
        spawn_local(async move {
            let result = match editing {
                Some(id) => controller.update(id, &draft).await.map(|_| ()),
                None => controller.create(&draft).await.map(|_| ()),
            };
            // the modal may be gone by now
            let _ = submitting.try_set(false);
            finish_save(result, on_saved, error);
        });
    }
}
