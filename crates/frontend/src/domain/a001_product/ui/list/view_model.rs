use crate::domain::a001_product::api;
use crate::domain::a002_supplier;
use crate::domain::a003_category;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_supplier::aggregate::Supplier;
use contracts::domain::a003_category::aggregate::Category;
use leptos::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// ViewModel for the product management screen.
///
/// Owns the three fetched lists and the two view flags. The async fetch
/// plumbing is separated from the synchronous `apply_*` transitions, which
/// hold the whole state machine of the screen.
#[derive(Clone)]
pub struct ProductListViewModel {
    pub products: RwSignal<Vec<Product>>,
    pub suppliers: RwSignal<Vec<Supplier>>,
    pub categories: RwSignal<Vec<Category>>,
    /// True while the initial products fetch is outstanding
    pub loading: RwSignal<bool>,
    pub show_modal: RwSignal<bool>,
    cancelled: Arc<AtomicBool>,
}

impl ProductListViewModel {
    pub fn new() -> Self {
        Self {
            products: RwSignal::new(Vec::new()),
            suppliers: RwSignal::new(Vec::new()),
            categories: RwSignal::new(Vec::new()),
            loading: RwSignal::new(true),
            show_modal: RwSignal::new(false),
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Detach the view model. Signals owned by the page are disposed with it,
    /// so a fetch that resolves afterwards must be discarded, not applied.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Outcome of a products fetch. The table always shows the full result of
    /// the last successful fetch; a failure keeps the previous list and only
    /// logs. The loading flag is cleared either way.
    pub fn apply_products(&self, result: Result<Vec<Product>, String>) {
        if self.is_cancelled() {
            return;
        }
        match result {
            Ok(items) => self.products.set(items),
            Err(e) => log::error!("Failed to fetch products: {}", e),
        }
        self.loading.set(false);
    }

    /// Outcome of a suppliers fetch; independent of the table and the loading flag
    pub fn apply_suppliers(&self, result: Result<Vec<Supplier>, String>) {
        if self.is_cancelled() {
            return;
        }
        match result {
            Ok(items) => self.suppliers.set(items),
            Err(e) => log::error!("Failed to fetch suppliers: {}", e),
        }
    }

    /// Outcome of a categories fetch; independent of the table and the loading flag
    pub fn apply_categories(&self, result: Result<Vec<Category>, String>) {
        if self.is_cancelled() {
            return;
        }
        match result {
            Ok(items) => self.categories.set(items),
            Err(e) => log::error!("Failed to fetch categories: {}", e),
        }
    }

    pub fn open_modal(&self) {
        self.show_modal.set(true);
    }

    pub fn close_modal(&self) {
        self.show_modal.set(false);
    }

    /// Start a products fetch. Used on attach and as the refetch callback the
    /// add-product modal invokes after a successful create.
    pub fn fetch_products(&self) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::fetch_products().await;
            vm.apply_products(result);
        });
    }

    pub fn fetch_suppliers(&self) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = a002_supplier::api::fetch_suppliers().await;
            vm.apply_suppliers(result);
        });
    }

    pub fn fetch_categories(&self) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = a003_category::api::fetch_categories().await;
            vm.apply_categories(result);
        });
    }

    /// On-attach initialization: the three fetches are issued together, with
    /// no ordering dependency between them.
    pub fn load(&self) {
        self.fetch_products();
        self.fetch_suppliers();
        self.fetch_categories();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::aggregate::ProductDraft;

    fn product(code: &str) -> Product {
        Product::from_draft(ProductDraft {
            code: code.to_string(),
            name: format!("{} name", code),
            supplier_ref: "s1".to_string(),
            category_ref: "c1".to_string(),
            ..ProductDraft::default()
        })
    }

    #[test]
    fn starts_loading_with_modal_closed() {
        let vm = ProductListViewModel::new();
        assert!(vm.loading.get_untracked());
        assert!(!vm.show_modal.get_untracked());
        assert!(vm.products.get_untracked().is_empty());
    }

    #[test]
    fn successful_fetch_replaces_list_and_clears_loading() {
        let vm = ProductListViewModel::new();
        vm.apply_products(Ok(vec![product("A"), product("B"), product("C")]));
        assert_eq!(vm.products.get_untracked().len(), 3);
        assert!(!vm.loading.get_untracked());

        // Refetch replaces the list wholesale
        vm.apply_products(Ok(vec![product("D")]));
        assert_eq!(vm.products.get_untracked().len(), 1);
        assert_eq!(vm.products.get_untracked()[0].base.code, "D");
    }

    #[test]
    fn failed_fetch_keeps_list_and_clears_loading() {
        let vm = ProductListViewModel::new();
        vm.apply_products(Err("HTTP 500".to_string()));
        assert!(vm.products.get_untracked().is_empty());
        assert!(!vm.loading.get_untracked());

        // A later failure keeps the last successful result
        vm.apply_products(Ok(vec![product("A")]));
        vm.apply_products(Err("HTTP 502".to_string()));
        assert_eq!(vm.products.get_untracked().len(), 1);
    }

    #[test]
    fn reference_fetch_failure_does_not_touch_loading() {
        let vm = ProductListViewModel::new();
        vm.apply_suppliers(Err("HTTP 500".to_string()));
        vm.apply_categories(Err("HTTP 500".to_string()));
        assert!(vm.loading.get_untracked());
        assert!(vm.suppliers.get_untracked().is_empty());
        assert!(vm.categories.get_untracked().is_empty());
    }

    #[test]
    fn modal_flag_toggles() {
        let vm = ProductListViewModel::new();
        vm.open_modal();
        assert!(vm.show_modal.get_untracked());
        vm.close_modal();
        assert!(!vm.show_modal.get_untracked());
    }

    #[test]
    fn cancelled_view_model_discards_late_results() {
        let vm = ProductListViewModel::new();
        vm.cancel();
        vm.apply_products(Ok(vec![product("A")]));
        vm.apply_suppliers(Err("slow".to_string()));
        assert!(vm.products.get_untracked().is_empty());
        assert!(vm.loading.get_untracked());
    }

    #[test]
    fn products_parse_from_list_payload() {
        // Wire format as the backend list endpoint returns it
        let json = r#"[
            {
                "id": "5d2f1f36-5a1e-4e6b-9d25-94c1c9e1a001",
                "code": "ITM-0001",
                "name": "Oak Side Table",
                "supplier_ref": "s1",
                "category_ref": "c1",
                "unit_cost": 45.5,
                "selling_price": 99.0,
                "is_vat_exempt": false,
                "stock_on_hand": 12,
                "is_active": true
            }
        ]"#;
        let items: Vec<Product> = serde_json::from_str(json).unwrap();

        let vm = ProductListViewModel::new();
        vm.apply_products(Ok(items));
        assert_eq!(vm.products.get_untracked().len(), 1);
    }
}
