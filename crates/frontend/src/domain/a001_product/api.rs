//! Product endpoints and the controller the product screens share

use crate::shared::api_utils::api_base;
use crate::shared::config::Config;
use crate::shared::sync::{
    CollectionController, CollectionState, EndpointRules, HttpEntityClient, ResponseShape,
};
use contracts::domain::a001_product::Product;
use contracts::enums::ProductCategory;
use leptos::prelude::*;
use std::sync::Arc;

pub type ProductClient = HttpEntityClient<Product>;
pub type ProductController = CollectionController<ProductClient, RwSignal<CollectionState<Product>>>;

/// `/product` wraps only the list in the `{status, message, payload}` envelope.
pub fn product_rules() -> EndpointRules {
    EndpointRules {
        list: ResponseShape::Enveloped,
        get: ResponseShape::Bare,
        create: ResponseShape::Bare,
        update: ResponseShape::Bare,
        remove: ResponseShape::Bare,
    }
}

pub fn product_controller(
    config: &Config,
    state: RwSignal<CollectionState<Product>>,
) -> ProductController {
    let client = ProductClient::new(api_base(&config.api)).with_rules(product_rules());
    CollectionController::new(Arc::new(client), state, config.sync.policy)
}

/// Human label for a wire category; values outside the enumeration are shown as-is.
pub fn category_label(category: &str) -> String {
    category
        .parse::<ProductCategory>()
        .map(|c| c.label().to_string())
        .unwrap_or_else(|_| category.to_string())
}
