pub mod a001_product;
pub mod a002_supplier;
pub mod a003_category;
