use crate::shared::api_utils::api_base;
use crate::shared::config::Config;
use crate::shared::sync::{
    CollectionController, CollectionState, EndpointRules, HttpEntityClient, ResponseShape,
};
use contracts::domain::a002_supplier::Supplier;
use leptos::prelude::*;
use std::sync::Arc;

pub type SupplierClient = HttpEntityClient<Supplier>;
pub type SupplierController =
    CollectionController<SupplierClient, RwSignal<CollectionState<Supplier>>>;

/// `/supplier` wraps only the list in the `{status, message, payload}` envelope.
pub fn supplier_rules() -> EndpointRules {
    EndpointRules {
        list: ResponseShape::Enveloped,
        get: ResponseShape::Bare,
        create: ResponseShape::Bare,
        update: ResponseShape::Bare,
        remove: ResponseShape::Bare,
    }
}

pub fn supplier_controller(
    config: &Config,
    state: RwSignal<CollectionState<Supplier>>,
) -> SupplierController {
    let client = SupplierClient::new(api_base(&config.api)).with_rules(supplier_rules());
    CollectionController::new(Arc::new(client), state, config.sync.policy)
}
