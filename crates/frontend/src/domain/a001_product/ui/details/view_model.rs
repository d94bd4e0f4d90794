use crate::domain::a001_product::api;
use contracts::domain::a001_product::aggregate::ProductDraft;
use leptos::prelude::*;
use std::sync::Arc;

/// ViewModel for the add-product form
#[derive(Clone)]
pub struct AddProductViewModel {
    pub form: RwSignal<ProductDraft>,
    pub error: RwSignal<Option<String>>,
}

impl AddProductViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ProductDraft::default()),
            error: RwSignal::new(None),
        }
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || Self::validate_form(&self.form.get()).is_ok()
    }

    fn validate_form(draft: &ProductDraft) -> Result<(), &'static str> {
        if draft.code.trim().is_empty() {
            return Err("Item code is required");
        }
        if draft.name.trim().is_empty() {
            return Err("Name is required");
        }
        if draft.supplier_ref.trim().is_empty() {
            return Err("Supplier is required");
        }
        if draft.category_ref.trim().is_empty() {
            return Err("Category is required");
        }
        if draft.unit_cost < 0.0 || draft.selling_price < 0.0 {
            return Err("Prices cannot be negative");
        }
        if draft.stock_on_hand < 0 {
            return Err("Stock on hand cannot be negative");
        }
        Ok(())
    }

    /// Clear the form back to an empty draft
    pub fn reset(&self) {
        self.form.set(ProductDraft::default());
        self.error.set(None);
    }

    /// Validate and POST the draft. On success the form is reset and the
    /// caller is notified; the page's refetch runs from that callback.
    pub fn save_command(&self, on_saved: Arc<dyn Fn(()) + Send + Sync>) {
        let current = self.form.get();

        if let Err(msg) = Self::validate_form(&current) {
            self.error.set(Some(msg.to_string()));
            return;
        }

        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match api::create_product(&current).await {
                Ok(()) => {
                    vm.reset();
                    (on_saved)(());
                }
                Err(e) => vm.error.set(Some(e)),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> ProductDraft {
        ProductDraft {
            code: "ITM-0009".to_string(),
            name: "Pine Bookcase".to_string(),
            supplier_ref: "s1".to_string(),
            category_ref: "c1".to_string(),
            unit_cost: 30.0,
            selling_price: 75.0,
            ..ProductDraft::default()
        }
    }

    #[test]
    fn empty_draft_is_invalid() {
        assert!(AddProductViewModel::validate_form(&ProductDraft::default()).is_err());
    }

    #[test]
    fn complete_draft_is_valid() {
        assert!(AddProductViewModel::validate_form(&complete_draft()).is_ok());
    }

    #[test]
    fn missing_category_is_rejected() {
        let mut draft = complete_draft();
        draft.category_ref = String::new();
        assert_eq!(
            AddProductViewModel::validate_form(&draft),
            Err("Category is required")
        );
    }

    #[test]
    fn negative_price_is_rejected() {
        let mut draft = complete_draft();
        draft.selling_price = -1.0;
        assert!(AddProductViewModel::validate_form(&draft).is_err());
    }

    #[test]
    fn reset_clears_form_and_error() {
        let vm = AddProductViewModel::new();
        vm.form.set(complete_draft());
        vm.error.set(Some("boom".to_string()));
        vm.reset();
        assert!(vm.form.get_untracked().code.is_empty());
        assert!(vm.error.get_untracked().is_none());
    }

    #[test]
    fn form_validity_tracks_the_form_signal() {
        let vm = AddProductViewModel::new();
        assert!(!vm.is_form_valid()());
        vm.form.set(complete_draft());
        assert!(vm.is_form_valid()());
    }
}
