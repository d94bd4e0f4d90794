use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique product identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Stocked product sold through the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(flatten)]
    pub base: BaseAggregate<ProductId>,

    /// Free-form description; the UI shows a dash when absent
    pub description: Option<String>,

    /// Supplier reference (a002_supplier id)
    pub supplier_ref: String,

    /// Category reference (a003_category id)
    pub category_ref: String,

    /// Purchase cost per unit
    pub unit_cost: f64,

    /// Retail price per unit
    pub selling_price: f64,

    /// Product is exempt from VAT
    pub is_vat_exempt: bool,

    /// Units currently on hand
    pub stock_on_hand: i32,

    /// Product is available for sale
    pub is_active: bool,
}

impl Product {
    /// Build a product from a creation draft, assigning a fresh ID
    pub fn from_draft(draft: ProductDraft) -> Self {
        Self {
            base: BaseAggregate::new(ProductId::new_v4(), draft.code, draft.name),
            description: draft.description,
            supplier_ref: draft.supplier_ref,
            category_ref: draft.category_ref,
            unit_cost: draft.unit_cost,
            selling_price: draft.selling_price,
            is_vat_exempt: draft.is_vat_exempt,
            stock_on_hand: draft.stock_on_hand,
            is_active: draft.is_active,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn name(&self) -> &str {
        &self.base.name
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "product"
    }

    fn element_name() -> &'static str {
        "Product"
    }

    fn list_name() -> &'static str {
        "Products"
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Creation payload for a new product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDraft {
    /// Item code entered by the operator
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub supplier_ref: String,
    pub category_ref: String,
    pub unit_cost: f64,
    pub selling_price: f64,
    pub is_vat_exempt: bool,
    pub stock_on_hand: i32,
    pub is_active: bool,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            code: String::new(),
            name: String::new(),
            description: None,
            supplier_ref: String::new(),
            category_ref: String::new(),
            unit_cost: 0.0,
            selling_price: 0.0,
            is_vat_exempt: false,
            stock_on_hand: 0,
            // New products go on sale unless the operator opts out
            is_active: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_list_payload_without_metadata() {
        // Shape of a row as the list endpoint returns it
        let json = r#"{
            "id": "5d2f1f36-5a1e-4e6b-9d25-94c1c9e1a001",
            "code": "ITM-0001",
            "name": "Oak Side Table",
            "description": null,
            "supplier_ref": "7b0a8d1c-0000-4000-8000-000000000002",
            "category_ref": "7b0a8d1c-0000-4000-8000-000000000003",
            "unit_cost": 45.5,
            "selling_price": 99.0,
            "is_vat_exempt": false,
            "stock_on_hand": 12,
            "is_active": true
        }"#;

        let product: Product = serde_json::from_str(json).expect("payload should parse");
        assert_eq!(product.base.code, "ITM-0001");
        assert_eq!(product.base.name, "Oak Side Table");
        assert!(product.description.is_none());
        assert_eq!(product.stock_on_hand, 12);
        assert!(!product.is_vat_exempt);
        assert!(product.is_active);
        // Omitted metadata falls back to a fresh default
        assert_eq!(product.base.metadata.version, 0);
    }

    #[test]
    fn product_id_string_form_parses_back() {
        let id = ProductId::new_v4();
        let parsed = ProductId::from_string(&id.as_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn product_id_rejects_garbage() {
        assert!(ProductId::from_string("not-a-uuid").is_err());
    }

    #[test]
    fn registry_names_follow_the_aggregate_index() {
        assert_eq!(Product::full_name(), "a001_product");
        assert_eq!(Product::element_name(), "Product");
        assert_eq!(Product::list_name(), "Products");
    }

    #[test]
    fn aggregate_root_accessors_read_the_base() {
        let product = Product::from_draft(ProductDraft {
            code: "ITM-0003".to_string(),
            name: "Birch Stool".to_string(),
            supplier_ref: "s1".to_string(),
            category_ref: "c1".to_string(),
            ..ProductDraft::default()
        });
        assert_eq!(product.code(), "ITM-0003");
        assert_eq!(product.name(), "Birch Stool");
        assert_eq!(product.id(), product.base.id);
        assert!(!product.metadata().is_deleted);
    }

    #[test]
    fn draft_defaults_to_active_empty_product() {
        let draft = ProductDraft::default();
        assert!(draft.is_active);
        assert!(!draft.is_vat_exempt);
        assert_eq!(draft.stock_on_hand, 0);
        assert!(draft.code.is_empty());
    }

    #[test]
    fn from_draft_carries_all_business_fields() {
        let draft = ProductDraft {
            code: "ITM-0002".to_string(),
            name: "Walnut Shelf".to_string(),
            description: Some("Wall-mounted".to_string()),
            supplier_ref: "s1".to_string(),
            category_ref: "c1".to_string(),
            unit_cost: 10.0,
            selling_price: 25.0,
            is_vat_exempt: true,
            stock_on_hand: 3,
            is_active: false,
        };
        let product = Product::from_draft(draft);
        assert_eq!(product.base.code, "ITM-0002");
        assert_eq!(product.description.as_deref(), Some("Wall-mounted"));
        assert_eq!(product.supplier_ref, "s1");
        assert!(product.is_vat_exempt);
        assert!(!product.is_active);
    }
}
