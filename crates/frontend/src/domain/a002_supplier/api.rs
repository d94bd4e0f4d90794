use contracts::domain::a002_supplier::aggregate::Supplier;
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Fetch all suppliers
pub async fn fetch_suppliers() -> Result<Vec<Supplier>, String> {
    let response = Request::get(&format!("{}/api/supplier", api_base()))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch suppliers: HTTP {}", response.status()));
    }

    response
        .json::<Vec<Supplier>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
