use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a002_supplier::ui::list::SupplierList;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Landing page: both management screens stacked.
#[component]
fn Overview() -> impl IntoView {
    view! {
        <ProductList />
        <SupplierList />
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="header__title">"Page not found"</h1>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=Overview />
                    <Route path=path!("/products") view=ProductList />
                    <Route path=path!("/suppliers") view=SupplierList />
                </Routes>
            </Shell>
        </Router>
    }
}
