use actix_web::{web, HttpResponse};

use super::AppService;
use crate::domain::product::Product;
use crate::errors::AppError;

/// GET /api/products
///
/// Returns the whole catalog.
#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "All products", body = [Product]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "products"
)]
pub async fn list_products(service: web::Data<AppService>) -> Result<HttpResponse, AppError> {
    let products = web::block(move || service.list_products()).await??;

    Ok(HttpResponse::Ok().json(products))
}
