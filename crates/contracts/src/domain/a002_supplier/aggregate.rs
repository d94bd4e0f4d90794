use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique supplier identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SupplierId(pub Uuid);

impl SupplierId {
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

impl AggregateId for SupplierId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(SupplierId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Vendor the store purchases products from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(flatten)]
    pub base: BaseAggregate<SupplierId>,

    pub contact_person: Option<String>,

    pub email: Option<String>,

    pub phone: Option<String>,

    /// Supplier is available for new purchases
    pub is_active: bool,
}

impl Supplier {
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }
}

impl AggregateRoot for Supplier {
    type Id = SupplierId;

    fn id(&self) -> SupplierId {
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
        "a002"
    }

    fn collection_name() -> &'static str {
        "supplier"
    }

    fn element_name() -> &'static str {
        "Supplier"
    }

    fn list_name() -> &'static str {
        "Suppliers"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_optional_contacts_absent() {
        let json = r#"{
            "id": "7b0a8d1c-0000-4000-8000-000000000002",
            "code": "SUP-001",
            "name": "Northwind Traders",
            "is_active": true
        }"#;

        let supplier: Supplier = serde_json::from_str(json).expect("payload should parse");
        assert_eq!(supplier.base.name, "Northwind Traders");
        assert!(supplier.contact_person.is_none());
        assert!(supplier.email.is_none());
        assert!(supplier.is_active);
    }
}
