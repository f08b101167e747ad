use crate::api::errors::ApiError;
use crate::api::response::DataResponse;
use crate::catalog;
use crate::model::Product;
use axum::extract::Path;
use axum::Json;

/// Get all coffees
pub async fn get_all_coffees() -> Json<DataResponse<&'static [Product]>> {
    Json(DataResponse::new(catalog::list_products()))
}

/// Get coffee by ID
pub async fn get_coffee_by_id(
    Path(id): Path<String>,
) -> Result<Json<DataResponse<&'static Product>>, ApiError> {
    let product = catalog::get_product(&id)?;
    Ok(Json(DataResponse::new(product)))
}
