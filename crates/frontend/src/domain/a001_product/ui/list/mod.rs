mod view_model;

pub use view_model::ProductListViewModel;

use crate::domain::a001_product::ui::details::AddProductModal;
use crate::shared::format::{format_money, text_or_dash, yes_no};
use crate::shared::icons::icon;
use contracts::domain::a001_product::aggregate::Product;
use leptos::prelude::*;
use std::sync::Arc;

/// One rendered table row, with all cell text precomputed
#[derive(Clone, Debug, PartialEq)]
pub struct ProductRow {
    pub id: String,
    pub code: String,
    pub name: String,
    pub description: String,
    pub supplier_ref: String,
    pub category_ref: String,
    pub unit_cost: String,
    pub selling_price: String,
    pub vat_exempt: String,
    pub stock_on_hand: i32,
    pub active: String,
}

impl ProductRow {
    pub fn from_product(p: &Product) -> Self {
        Self {
            id: p.to_string_id(),
            code: p.base.code.clone(),
            name: p.base.name.clone(),
            description: text_or_dash(p.description.as_deref()),
            supplier_ref: p.supplier_ref.clone(),
            category_ref: p.category_ref.clone(),
            unit_cost: format_money(p.unit_cost),
            selling_price: format_money(p.selling_price),
            vat_exempt: yes_no(p.is_vat_exempt).to_string(),
            stock_on_hand: p.stock_on_hand,
            active: yes_no(p.is_active).to_string(),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProductManagementPage() -> impl IntoView {
    let vm = ProductListViewModel::new();
    vm.load();

    // Responses that resolve after the page is gone are discarded
    {
        let vm = vm.clone();
        on_cleanup(move || vm.cancel());
    }

    let loading = vm.loading;
    let show_modal = vm.show_modal;
    let products = vm.products;
    let suppliers = vm.suppliers;
    let categories = vm.categories;

    let open_modal = {
        let vm = vm.clone();
        move |_| vm.open_modal()
    };
    let close_modal: Arc<dyn Fn(()) + Send + Sync> = {
        let vm = vm.clone();
        Arc::new(move |_| vm.close_modal())
    };
    let refetch: Arc<dyn Fn(()) + Send + Sync> = {
        let vm = vm.clone();
        Arc::new(move |_| vm.fetch_products())
    };

    view! {
        <div class="content">
            <div class="header">
                <h1>{"Product Management"}</h1>
                <div class="header-actions">
                    <button class="btn btn-primary" on:click=open_modal>
                        {icon("plus")}
                        {"Add Product"}
                    </button>
                </div>
            </div>

            {move || if loading.get() {
                view! { <p class="loading">{"Loading products..."}</p> }.into_any()
            } else {
                view! {
                    <div class="table-container">
                        <table>
                            <thead>
                                <tr>
                                    <th>{"Item Code"}</th>
                                    <th>{"Name"}</th>
                                    <th>{"Description"}</th>
                                    <th>{"Supplier"}</th>
                                    <th>{"Category"}</th>
                                    <th>{"Unit Cost"}</th>
                                    <th>{"Selling Price"}</th>
                                    <th>{"VAT Exempt"}</th>
                                    <th>{"Stock"}</th>
                                    <th>{"Active"}</th>
                                    <th>{"Actions"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || products.get().iter().map(|p| {
                                    let row = ProductRow::from_product(p);
                                    view! {
                                        <tr>
                                            <td>{row.code}</td>
                                            <td>{row.name}</td>
                                            <td>{row.description}</td>
                                            <td>{row.supplier_ref}</td>
                                            <td>{row.category_ref}</td>
                                            <td>{row.unit_cost}</td>
                                            <td>{row.selling_price}</td>
                                            <td>{row.vat_exempt}</td>
                                            <td>
                                                <div class="stock-cell">
                                                    {icon("package")}
                                                    <span class="badge">{row.stock_on_hand}</span>
                                                </div>
                                            </td>
                                            <td>{row.active}</td>
                                            <td>
                                                <button class="btn btn-link">
                                                    {icon("pencil")}
                                                    {"Edit"}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }.into_any()
            }}

            <AddProductModal
                is_open=show_modal
                on_close=close_modal
                suppliers=suppliers
                categories=categories
                refetch=refetch
            />
        </div>
    }
}
