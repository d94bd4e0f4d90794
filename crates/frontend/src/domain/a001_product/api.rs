use contracts::domain::a001_product::aggregate::{Product, ProductDraft};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Fetch all products
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    let response = Request::get(&format!("{}/api/product", api_base()))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch products: HTTP {}", response.status()));
    }

    response
        .json::<Vec<Product>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create a new product from a draft
pub async fn create_product(draft: &ProductDraft) -> Result<(), String> {
    let response = Request::post(&format!("{}/api/product", api_base()))
        .header("Accept", "application/json")
        .json(draft)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create product: HTTP {}", response.status()));
    }

    Ok(())
}
