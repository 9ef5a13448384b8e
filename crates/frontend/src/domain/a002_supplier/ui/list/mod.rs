use crate::domain::a002_supplier::api::supplier_controller;
use crate::domain::a002_supplier::ui::details::SupplierDetails;
use crate::shared::config::Config;
use crate::shared::icons::icon;
use crate::shared::list_utils::{confirm_delete, CollectionStatus};
use crate::shared::modal::Modal;
use crate::shared::sync::CollectionState;
use contracts::domain::a002_supplier::Supplier;
use contracts::domain::common::{Entity, EntityId};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Debug, PartialEq)]
enum FormTarget {
    New,
    Existing(Supplier),
}

#[component]
#[allow(non_snake_case)]
pub fn SupplierList() -> impl IntoView {
    let config = use_context::<Config>().unwrap_or_default();
    let state = RwSignal::new(CollectionState::<Supplier>::default());
    let controller = StoredValue::new(supplier_controller(&config, state));
    let (form_target, set_form_target) = signal::<Option<FormTarget>>(None);

    let fetch = move || {
        let controller = controller.get_value();
        spawn_local(async move {
            let _ = controller.refresh().await;
        });
    };

    let handle_delete = move |id: EntityId| {
        let controller = controller.get_value();
        spawn_local(async move {
            let _ = controller
                .remove(id, || confirm_delete(Supplier::element_name()))
                .await;
        });
    };

    let close_form = Callback::new(move |_: ()| set_form_target.set(None));

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Supplier Management"</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| set_form_target.set(Some(FormTarget::New))
                    >
                        {icon("plus")}
                        "Add New Supplier"
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            <CollectionStatus state=state list_name=Supplier::list_name() />

            <div class="table-container">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Name"</th>
                            <th>"Address"</th>
                            <th>"Phone Number"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || state.with(|s| s.items().to_vec()).into_iter().map(|supplier| {
                            let id = supplier.id;
                            let editing = supplier.clone();
                            view! {
                                <tr>
                                    <td>{supplier.id}</td>
                                    <td class="table__cell--strong">{supplier.name}</td>
                                    <td>{supplier.address}</td>
                                    <td>{supplier.phone_number}</td>
                                    <td class="table__actions">
                                        <button
                                            class="button button--ghost button--small"
                                            on:click=move |_| set_form_target.set(Some(FormTarget::Existing(editing.clone())))
                                        >
                                            {icon("edit")}
                                            "Edit"
                                        </button>
                                        <button
                                            class="button button--danger button--small"
                                            on:click=move |_| handle_delete(id)
                                        >
                                            {icon("delete")}
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            {move || form_target.get().map(|target| {
                let (title, existing) = match target {
                    FormTarget::New => ("Add New Supplier", None),
                    FormTarget::Existing(supplier) => ("Edit Supplier", Some(supplier)),
                };
                view! {
                    <Modal title=title on_close=close_form>
                        <SupplierDetails
                            existing=existing
                            controller=controller.get_value()
                            on_saved=close_form
                            on_cancel=close_form
                        />
                    </Modal>
                }
            })}
        </div>
    }
}
