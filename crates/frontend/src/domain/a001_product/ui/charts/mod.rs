//! Category charts over the loaded product collection

use crate::domain::a001_product::api::category_label;
use crate::shared::components::charts::{BarChart, ChartDatum, PieChart};
use crate::shared::components::CardAnimated;
use crate::shared::sync::{count_by_category, sum_by_category, CollectionState};
use contracts::domain::a001_product::Product;
use leptos::prelude::*;

fn with_labels(mut data: Vec<ChartDatum>) -> Vec<ChartDatum> {
    for datum in &mut data {
        datum.label = category_label(&datum.label);
    }
    data
}

pub fn stock_chart_data(products: &[Product]) -> Vec<ChartDatum> {
    with_labels(
        sum_by_category(products, |p| p.stock)
            .into_iter()
            .map(ChartDatum::from)
            .collect(),
    )
}

pub fn count_chart_data(products: &[Product]) -> Vec<ChartDatum> {
    with_labels(
        count_by_category(products)
            .into_iter()
            .map(ChartDatum::from)
            .collect(),
    )
}

/// Total stock (bar) and product count (pie) per category.
#[component]
pub fn ProductCategoryCharts(state: RwSignal<CollectionState<Product>>) -> impl IntoView {
    let stock = Signal::derive(move || state.with(|s| stock_chart_data(s.items())));
    let counts = Signal::derive(move || state.with(|s| count_chart_data(s.items())));

    view! {
        <div class="charts-grid">
            <CardAnimated title="Total stock by category" delay_ms=0>
                <BarChart data=stock />
            </CardAnimated>
            <CardAnimated title="Products by category" delay_ms=80>
                <PieChart data=counts />
            </CardAnimated>
        </div>
    }
}
