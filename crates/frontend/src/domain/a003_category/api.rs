use contracts::domain::a003_category::aggregate::Category;
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Fetch all categories
pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    let response = Request::get(&format!("{}/api/category", api_base()))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch categories: HTTP {}", response.status()));
    }

    response
        .json::<Vec<Category>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
