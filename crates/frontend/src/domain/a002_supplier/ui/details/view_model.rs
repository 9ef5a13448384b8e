use crate::domain::a002_supplier::api::SupplierController;
use crate::shared::sync::finish_save;
use contracts::domain::a002_supplier::{Supplier, SupplierDraft};
use contracts::domain::common::{EntityDraft, EntityId};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy)]
pub struct SupplierDetailsViewModel {
    pub form: RwSignal<SupplierDraft>,
    pub error: RwSignal<Option<String>>,
    pub submitting: RwSignal<bool>,
    editing: Option<EntityId>,
}

impl SupplierDetailsViewModel {
    pub fn new(existing: Option<&Supplier>) -> Self {
        Self {
            form: RwSignal::new(existing.map(SupplierDraft::from_entity).unwrap_or_default()),
            error: RwSignal::new(None),
            submitting: RwSignal::new(false),
            editing: existing.map(|s| s.id),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing.is_some()
    }

    pub fn save_command(&self, controller: SupplierController, on_saved: Callback<()>) {
        if self.submitting.get_untracked() {
            return;
        }
        let draft = self.form.get_untracked();
        let (error, submitting, editing) = (self.error, self.submitting, self.editing);

        error.set(None);
        submitting.set(true);
        spawn_local(async move {
            let result = match editing {
                Some(id) => controller.update(id, &draft).await.map(|_| ()),
                None => controller.create(&draft).await.map(|_| ()),
            };
            let _ = submitting.try_set(false);
            finish_save(result, on_saved, error);
        });
    }
}
