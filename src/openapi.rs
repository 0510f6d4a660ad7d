use utoipa::OpenApi;

use crate::domain::product::Product;
use crate::handlers::orders::{PlaceOrderRequest, PlaceOrderResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::products::list_products,
        crate::handlers::orders::place_order,
    ),
    components(schemas(Product, PlaceOrderRequest, PlaceOrderResponse)),
    tags(
        (name = "products", description = "Catalog listing"),
        (name = "orders", description = "Order placement"),
    )
)]
pub struct ApiDoc;
