use super::errors::DomainError;
use super::order::NewOrder;
use super::product::{NewProduct, Product};

pub trait StoreRepository: Send + Sync + 'static {
    fn list_products(&self) -> Result<Vec<Product>, DomainError>;
    /// Insert `products` only if the catalog holds no rows, atomically.
    /// Returns the number of rows inserted.
    fn seed_if_empty(&self, products: &[NewProduct]) -> Result<usize, DomainError>;
    fn create_order(&self, order: NewOrder) -> Result<i64, DomainError>;
}
