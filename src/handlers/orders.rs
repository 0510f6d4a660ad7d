use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::AppService;
use crate::domain::order::NewOrder;
use crate::errors::AppError;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct PlaceOrderRequest {
    /// Cart line items, stored as sent.
    #[schema(value_type = Vec<Object>)]
    pub items: Vec<serde_json::Value>,
    /// Sum of the item prices as computed by the client.
    pub total: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderResponse {
    pub order_id: i64,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /api/orders
///
/// Records the submitted cart as one order row and returns its id.
#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = PlaceOrderRequest,
    responses(
        (status = 200, description = "Order placed", body = PlaceOrderResponse),
        (status = 400, description = "Malformed request body"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn place_order(
    service: web::Data<AppService>,
    body: web::Json<PlaceOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let PlaceOrderRequest { items, total } = body.into_inner();
    let item_count = items.len();

    let order_id = web::block(move || service.place_order(NewOrder { items, total })).await??;

    log::info!("Placed order {} with {} item(s), total {:.2}", order_id, item_count, total);
    Ok(HttpResponse::Ok().json(PlaceOrderResponse { order_id }))
}
