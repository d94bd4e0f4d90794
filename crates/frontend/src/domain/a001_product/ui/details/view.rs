use super::view_model::AddProductViewModel;
use crate::shared::icons::icon;
use contracts::domain::a002_supplier::aggregate::Supplier;
use contracts::domain::a003_category::aggregate::Category;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
#[allow(non_snake_case)]
pub fn AddProductModal(
    is_open: RwSignal<bool>,
    on_close: Arc<dyn Fn(()) + Send + Sync>,
    suppliers: RwSignal<Vec<Supplier>>,
    categories: RwSignal<Vec<Category>>,
    refetch: Arc<dyn Fn(()) + Send + Sync>,
) -> impl IntoView {
    let vm = AddProductViewModel::new();

    // After a successful create the page resynchronizes, then the modal closes
    let on_saved: Arc<dyn Fn(()) + Send + Sync> = {
        let refetch = refetch.clone();
        let on_close = on_close.clone();
        Arc::new(move |_| {
            (refetch)(());
            (on_close)(());
        })
    };

    move || {
        if !is_open.get() {
            return view! { <></> }.into_any();
        }

        let vm = vm.clone();
        let on_saved = on_saved.clone();
        let on_close = on_close.clone();

        view! {
            <div class="modal-overlay">
                <div class="modal-content">
                    <div class="details-container add-product-details">
                        <div class="details-header">
                            <h3>{"Add Product"}</h3>
                        </div>

                        {
                            let vm = vm.clone();
                            move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
                        }

                        <div class="details-form">
                            <div class="form-row">
                                <div class="form-group">
                                    <label for="item_code">{"Item Code"}</label>
                                    <input
                                        type="text"
                                        id="item_code"
                                        prop:value={
                                            let vm = vm.clone();
                                            move || vm.form.get().code
                                        }
                                        on:input={
                                            let vm = vm.clone();
                                            move |ev| {
                                                vm.form.update(|f| f.code = event_target_value(&ev));
                                            }
                                        }
                                        placeholder="e.g. ITM-0001"
                                    />
                                </div>

                                <div class="form-group">
                                    <label for="name">{"Name"}</label>
                                    <input
                                        type="text"
                                        id="name"
                                        prop:value={
                                            let vm = vm.clone();
                                            move || vm.form.get().name
                                        }
                                        on:input={
                                            let vm = vm.clone();
                                            move |ev| {
                                                vm.form.update(|f| f.name = event_target_value(&ev));
                                            }
                                        }
                                        placeholder="Product name"
                                    />
                                </div>
                            </div>

                            <div class="form-group">
                                <label for="description">{"Description"}</label>
                                <textarea
                                    id="description"
                                    prop:value={
                                        let vm = vm.clone();
                                        move || vm.form.get().description.clone().unwrap_or_default()
                                    }
                                    on:input={
                                        let vm = vm.clone();
                                        move |ev| {
                                            let value = event_target_value(&ev);
                                            vm.form.update(|f| {
                                                f.description = if value.is_empty() { None } else { Some(value) };
                                            });
                                        }
                                    }
                                    placeholder="Optional description"
                                    rows="3"
                                />
                            </div>

                            <div class="form-row">
                                <div class="form-group">
                                    <label for="supplier">{"Supplier"}</label>
                                    <select
                                        id="supplier"
                                        prop:value={
                                            let vm = vm.clone();
                                            move || vm.form.get().supplier_ref
                                        }
                                        on:change={
                                            let vm = vm.clone();
                                            move |ev| {
                                                vm.form.update(|f| f.supplier_ref = event_target_value(&ev));
                                            }
                                        }
                                    >
                                        <option value="">{"Select a supplier"}</option>
                                        {move || suppliers.get().into_iter().map(|s| {
                                            let id = s.to_string_id();
                                            let name = s.base.name.clone();
                                            view! {
                                                <option value=id>{name}</option>
                                            }
                                        }).collect_view()}
                                    </select>
                                </div>

                                <div class="form-group">
                                    <label for="category">{"Category"}</label>
                                    <select
                                        id="category"
                                        prop:value={
                                            let vm = vm.clone();
                                            move || vm.form.get().category_ref
                                        }
                                        on:change={
                                            let vm = vm.clone();
                                            move |ev| {
                                                vm.form.update(|f| f.category_ref = event_target_value(&ev));
                                            }
                                        }
                                    >
                                        <option value="">{"Select a category"}</option>
                                        {move || categories.get().into_iter().map(|c| {
                                            let id = c.to_string_id();
                                            let name = c.base.name.clone();
                                            view! {
                                                <option value=id>{name}</option>
                                            }
                                        }).collect_view()}
                                    </select>
                                </div>
                            </div>

                            <div class="form-row">
                                <div class="form-group">
                                    <label for="unit_cost">{"Unit Cost"}</label>
                                    <input
                                        type="number"
                                        step="0.01"
                                        id="unit_cost"
                                        prop:value={
                                            let vm = vm.clone();
                                            move || vm.form.get().unit_cost.to_string()
                                        }
                                        on:input={
                                            let vm = vm.clone();
                                            move |ev| {
                                                let value = event_target_value(&ev);
                                                vm.form.update(|f| f.unit_cost = value.parse::<f64>().unwrap_or(0.0));
                                            }
                                        }
                                        placeholder="0.00"
                                    />
                                </div>

                                <div class="form-group">
                                    <label for="selling_price">{"Selling Price"}</label>
                                    <input
                                        type="number"
                                        step="0.01"
                                        id="selling_price"
                                        prop:value={
                                            let vm = vm.clone();
                                            move || vm.form.get().selling_price.to_string()
                                        }
                                        on:input={
                                            let vm = vm.clone();
                                            move |ev| {
                                                let value = event_target_value(&ev);
                                                vm.form.update(|f| f.selling_price = value.parse::<f64>().unwrap_or(0.0));
                                            }
                                        }
                                        placeholder="0.00"
                                    />
                                </div>
                            </div>

                            <div class="form-row">
                                <div class="form-group">
                                    <label for="stock_on_hand">{"Initial Stock"}</label>
                                    <input
                                        type="number"
                                        id="stock_on_hand"
                                        prop:value={
                                            let vm = vm.clone();
                                            move || vm.form.get().stock_on_hand.to_string()
                                        }
                                        on:input={
                                            let vm = vm.clone();
                                            move |ev| {
                                                let value = event_target_value(&ev);
                                                vm.form.update(|f| f.stock_on_hand = value.parse::<i32>().unwrap_or(0));
                                            }
                                        }
                                        placeholder="0"
                                    />
                                </div>

                                <div class="form-group form-group-checkboxes">
                                    <label class="checkbox-label">
                                        <input
                                            type="checkbox"
                                            prop:checked={
                                                let vm = vm.clone();
                                                move || vm.form.get().is_vat_exempt
                                            }
                                            on:change={
                                                let vm = vm.clone();
                                                move |ev| {
                                                    let checked = event_target_checked(&ev);
                                                    vm.form.update(|f| f.is_vat_exempt = checked);
                                                }
                                            }
                                        />
                                        {"VAT exempt"}
                                    </label>
                                    <label class="checkbox-label">
                                        <input
                                            type="checkbox"
                                            prop:checked={
                                                let vm = vm.clone();
                                                move || vm.form.get().is_active
                                            }
                                            on:change={
                                                let vm = vm.clone();
                                                move |ev| {
                                                    let checked = event_target_checked(&ev);
                                                    vm.form.update(|f| f.is_active = checked);
                                                }
                                            }
                                        />
                                        {"Active"}
                                    </label>
                                </div>
                            </div>
                        </div>

                        <div class="details-actions">
                            <button
                                class="btn btn-primary"
                                on:click={
                                    let vm = vm.clone();
                                    let on_saved = on_saved.clone();
                                    move |_| vm.save_command(on_saved.clone())
                                }
                                disabled={
                                    let vm = vm.clone();
                                    move || !vm.is_form_valid()()
                                }
                            >
                                {icon("save")}
                                {"Create"}
                            </button>
                            <button
                                class="btn btn-secondary"
                                on:click={
                                    let on_close = on_close.clone();
                                    move |_| (on_close)(())
                                }
                            >
                                {icon("cancel")}
                                {"Cancel"}
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        }.into_any()
    }
}
