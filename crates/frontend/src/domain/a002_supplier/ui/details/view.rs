use super::view_model::SupplierDetailsViewModel;
use crate::domain::a002_supplier::api::SupplierController;
use crate::shared::components::ui::{Button, Input};
use crate::shared::icons::icon;
use contracts::domain::a002_supplier::Supplier;
use leptos::prelude::*;

#[component]
pub fn SupplierDetails(
    existing: Option<Supplier>,
    controller: SupplierController,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = SupplierDetailsViewModel::new(existing.as_ref());
    let form = vm.form;
    let busy = Signal::derive(move || vm.submitting.get());
    let controller = StoredValue::new(controller);

    view! {
        <form
            class="details-form"
            on:submit=move |ev| {
                ev.prevent_default();
                vm.save_command(controller.get_value(), on_saved);
            }
        >
            {move || vm.error.get().map(|e| view! { <div class="form__error">{e}</div> })}

            <Input
                id="supplier-name"
                label="Name"
                placeholder="Enter supplier name"
                value=Signal::derive(move || form.with(|f| f.name.clone()))
                on_input=Callback::new(move |v| form.update(|f| f.name = v))
                disabled=busy
            />
            <Input
                id="supplier-address"
                label="Address"
                placeholder="Enter supplier address"
                value=Signal::derive(move || form.with(|f| f.address.clone()))
                on_input=Callback::new(move |v| form.update(|f| f.address = v))
                disabled=busy
            />
            <Input
                id="supplier-phone"
                label="Phone Number"
                input_type="tel"
                placeholder="Enter phone number"
                value=Signal::derive(move || form.with(|f| f.phone_number.clone()))
                on_input=Callback::new(move |v| form.update(|f| f.phone_number = v))
                disabled=busy
            />

            <div class="details-actions">
                <Button button_type="submit" disabled=busy>
                    {icon("save")}
                    {move || match (vm.is_edit_mode(), vm.submitting.get()) {
                        (_, true) => "Saving...",
                        (true, false) => "Save Changes",
                        (false, false) => "Add Supplier",
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
