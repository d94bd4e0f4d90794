use super::EntityMetadata;

/// Trait implemented by every aggregate root
pub trait AggregateRoot {
    /// Identifier type of the aggregate
    type Id;

    // Instance accessors

    fn id(&self) -> Self::Id;

    fn code(&self) -> &str;

    fn name(&self) -> &str;

    fn metadata(&self) -> &EntityMetadata;

    // Static aggregate class metadata

    /// Aggregate index in the registry (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Collection name used in API paths (e.g. "product")
    fn collection_name() -> &'static str;

    /// Singular UI name (e.g. "Product")
    fn element_name() -> &'static str;

    /// Plural UI name (e.g. "Products")
    fn list_name() -> &'static str;

    /// Full registry name (e.g. "a001_product")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
