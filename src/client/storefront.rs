use super::api::{ClientError, StoreApi};
use super::render::render;
use crate::domain::product::Product;

/// Where the user is in the shopping flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutState {
    Browsing,
    CartNonEmpty,
    OrderConfirmed(i64),
}

/// Client-side storefront state: the fetched catalog, the cart and the id of
/// the last placed order. Nothing here is persisted.
pub struct Storefront<A> {
    api: A,
    products: Vec<Product>,
    cart: Vec<Product>,
    order_id: Option<i64>,
}

impl<A: StoreApi> Storefront<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            products: Vec::new(),
            cart: Vec::new(),
            order_id: None,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn cart(&self) -> &[Product] {
        &self.cart
    }

    pub fn order_id(&self) -> Option<i64> {
        self.order_id
    }

    pub fn product(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Fetch the catalog. On failure the product list is left as it was.
    pub async fn load_products(&mut self) -> Result<(), ClientError> {
        self.products = self.api.list_products().await?;
        log::debug!("Loaded {} products", self.products.len());
        Ok(())
    }

    /// Append a line item. Adding the same product twice yields two lines.
    pub fn add_to_cart(&mut self, product: Product) {
        self.cart.push(product);
    }

    pub fn cart_total(&self) -> f64 {
        self.cart.iter().map(|p| p.price).sum()
    }

    /// Submit the cart as an order.
    ///
    /// Returns `Ok(None)` without contacting the service when the cart is
    /// empty. On success the cart is cleared and the order id recorded; on
    /// failure the cart is kept.
    pub async fn place_order(&mut self) -> Result<Option<i64>, ClientError> {
        if self.cart.is_empty() {
            return Ok(None);
        }
        let total = self.cart_total();
        let order_id = self.api.place_order(&self.cart, total).await?;

        log::info!("Order {} placed for {} item(s)", order_id, self.cart.len());
        self.cart.clear();
        self.order_id = Some(order_id);
        Ok(Some(order_id))
    }

    pub fn state(&self) -> CheckoutState {
        match (self.cart.is_empty(), self.order_id) {
            (false, _) => CheckoutState::CartNonEmpty,
            (true, Some(id)) => CheckoutState::OrderConfirmed(id),
            (true, None) => CheckoutState::Browsing,
        }
    }

    pub fn render(&self) -> String {
        render(&self.products, &self.cart, self.order_id)
    }
}
