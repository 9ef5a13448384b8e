use super::view_model::ProductDetailsViewModel;
use crate::domain::a001_product::api::ProductController;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::icons::icon;
use contracts::domain::a001_product::Product;
use contracts::enums::ProductCategory;
use leptos::prelude::*;

#[component]
pub fn ProductDetails(
    /// `None` opens an empty form for a new product
    existing: Option<Product>,
    controller: ProductController,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ProductDetailsViewModel::new(existing.as_ref());
    let form = vm.form;
    let busy = Signal::derive(move || vm.submitting.get());
    let controller = StoredValue::new(controller);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save_command(controller.get_value(), on_saved);
    };

    view! {
        <form class="details-form" on:submit=submit>
            {move || vm.error.get().map(|e| view! { <div class="form__error">{e}</div> })}

            <Input
                id="product-name"
                label="Product Name"
                placeholder="Enter product name"
                value=Signal::derive(move || form.with(|f| f.name.clone()))
                on_input=Callback::new(move |v| form.update(|f| f.name = v))
                disabled=busy
            />
            <Input
                id="product-identifier"
                label="Identifier"
                placeholder="Enter product identifier"
                value=Signal::derive(move || form.with(|f| f.identifier.clone()))
                on_input=Callback::new(move |v| form.update(|f| f.identifier = v))
                disabled=busy
            />
            <Input
                id="product-price"
                label="Price"
                input_type="number"
                step="0.01"
                placeholder="Enter product price"
                value=Signal::derive(move || form.with(|f| f.price.clone()))
                on_input=Callback::new(move |v| form.update(|f| f.price = v))
                disabled=busy
            />
            <Input
                id="product-stock"
                label="Stock"
                input_type="number"
                placeholder="Enter product stock"
                value=Signal::derive(move || form.with(|f| f.stock.clone()))
                on_input=Callback::new(move |v| form.update(|f| f.stock = v))
                disabled=busy
            />
            <Select
                id="product-category"
                label="Category"
                placeholder="Select a category"
                options=Signal::derive(ProductCategory::options)
                value=Signal::derive(move || form.with(|f| f.category.clone()))
                on_change=Callback::new(move |v| form.update(|f| f.category = v))
                disabled=busy
            />

            <div class="details-actions">
                <Button button_type="submit" disabled=busy>
                    {icon("save")}
                    {move || match (vm.is_edit_mode(), vm.submitting.get()) {
                        (_, true) => "Saving...",
                        (true, false) => "Save Changes",
                        (false, false) => "Add Product",
                    }}
                </Button>
                <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                    {icon("cancel")}
                    "Cancel"
                </Button>
            </div>
        </form>
    }
}
