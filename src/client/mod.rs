//! Terminal storefront: fetches the catalog, keeps a cart locally and
//! submits orders to the service.

pub mod api;
pub mod render;
pub mod storefront;

pub use api::{ClientError, HttpStoreApi, StoreApi};
pub use storefront::{CheckoutState, Storefront};
