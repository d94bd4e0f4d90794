use crate::domain::a001_product::ui::list::ProductManagementPage;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Application root: header shell around the product management screen
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app">
            <header class="app-header">
                <div class="app-title">
                    {icon("products")}
                    <span>{"Ashley ERP"}</span>
                </div>
            </header>
            <main class="app-main">
                <ProductManagementPage />
            </main>
        </div>
    }
}
