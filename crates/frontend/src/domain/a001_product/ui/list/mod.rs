use crate::domain::a001_product::api::{category_label, product_controller};
use crate::domain::a001_product::ui::charts::ProductCategoryCharts;
use crate::domain::a001_product::ui::details::ProductDetails;
use crate::shared::components::ui::Select;
use crate::shared::config::Config;
use crate::shared::icons::icon;
use crate::shared::list_utils::{confirm_delete, CollectionStatus};
use crate::shared::modal::Modal;
use crate::shared::number_format::{format_number_int, format_price};
use crate::shared::sync::{filter_by_category, CategoryFilter, CollectionState, ALL_CATEGORIES};
use contracts::domain::a001_product::Product;
use contracts::domain::common::{Entity, EntityId};
use contracts::enums::ProductCategory;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// What the form modal is currently showing
#[derive(Clone, Debug, PartialEq)]
enum FormTarget {
    New,
    Existing(Product),
}

fn filter_options() -> Vec<(String, String)> {
    let mut options = vec![(ALL_CATEGORIES.to_string(), "Filter".to_string())];
    options.extend(ProductCategory::options());
    options
}

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let config = use_context::<Config>().unwrap_or_default();
    let state = RwSignal::new(CollectionState::<Product>::default());
    let controller = StoredValue::new(product_controller(&config, state));
    let (filter, set_filter) = signal(CategoryFilter::All);
    let (form_target, set_form_target) = signal::<Option<FormTarget>>(None);

    let visible = Memo::new(move |_| {
        let filter = filter.get();
        state.with(|s| filter_by_category(s.items(), &filter))
    });

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
                .remove(id, || confirm_delete(Product::element_name()))
                .await;
        });
    };

    let close_form = Callback::new(move |_: ()| set_form_target.set(None));

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Product Management"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            <CollectionStatus state=state list_name=Product::list_name() />

            <div class="table-container">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Product Name"</th>
                            <th>"Identifier"</th>
                            <th class="table__cell--right">"Price"</th>
                            <th class="table__cell--right">"Stock"</th>
                            <th>
                                <Select
                                    id="product-filter"
                                    options=Signal::derive(filter_options)
                                    value=Signal::derive(move || filter.with(|f| f.as_selector().to_string()))
                                    on_change=Callback::new(move |v: String| {
                                        set_filter.set(CategoryFilter::from_selector(&v))
                                    })
                                />
                            </th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible.get().into_iter().map(|product| {
                            let id = product.id;
                            let editing = product.clone();
                            view! {
                                <tr>
                                    <td class="table__cell--strong">{product.name}</td>
                                    <td>{product.identifier}</td>
                                    <td class="table__cell--right">{format_price(product.price)}</td>
                                    <td class="table__cell--right">{format_number_int(product.stock as f64)}</td>
                                    <td>{category_label(&product.category)}</td>
                                    <td class="table__actions">
                                        <button
                                            class="button button--ghost button--small"
                                            title="Edit"
                                            on:click=move |_| set_form_target.set(Some(FormTarget::Existing(editing.clone())))
                                        >
                                            {icon("edit")}
                                            "Edit"
                                        </button>
                                        <button
                                            class="button button--danger button--small"
                                            title="Delete"
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
                    <tfoot>
                        <tr>
                            <td colspan="6" class="table__footer">
                                <button
                                    class="button button--primary"
                                    title="Add New Product"
                                    on:click=move |_| set_form_target.set(Some(FormTarget::New))
                                >
                                    {icon("plus")}
                                </button>
                            </td>
                        </tr>
                    </tfoot>
                </table>
            </div>

            <ProductCategoryCharts state=state />

            {move || form_target.get().map(|target| {
                let (title, existing) = match target {
                    FormTarget::New => ("Add New Product", None),
                    FormTarget::Existing(product) => ("Edit Product", Some(product)),
                };
                view! {
                    <Modal title=title on_close=close_form>
                        <ProductDetails
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
