use crate::domain::catalog::seed_products;
use crate::domain::errors::DomainError;
use crate::domain::order::NewOrder;
use crate::domain::ports::StoreRepository;
use crate::domain::product::Product;

pub struct StoreService<R> {
    repo: R,
}

impl<R: StoreRepository> StoreService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list_products(&self) -> Result<Vec<Product>, DomainError> {
        self.repo.list_products()
    }

    pub fn place_order(&self, order: NewOrder) -> Result<i64, DomainError> {
        self.repo.create_order(order)
    }

    /// Insert the seed catalog when no products exist yet.
    ///
    /// Returns how many products were inserted, so a restart against an
    /// already seeded database returns 0.
    pub fn seed_catalog(&self) -> Result<usize, DomainError> {
        self.repo.seed_if_empty(&seed_products())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::domain::product::NewProduct;

    #[derive(Default)]
    struct InMemoryRepository {
        products: Mutex<Vec<Product>>,
        orders: Mutex<Vec<NewOrder>>,
    }

    impl StoreRepository for InMemoryRepository {
        fn list_products(&self) -> Result<Vec<Product>, DomainError> {
            Ok(self.products.lock().unwrap().clone())
        }

        fn seed_if_empty(&self, new: &[NewProduct]) -> Result<usize, DomainError> {
            let mut products = self.products.lock().unwrap();
            if !products.is_empty() {
                return Ok(0);
            }
            for p in new {
                let id = products.len() as i64 + 1;
                products.push(Product {
                    id,
                    name: p.name.clone(),
                    price: p.price,
                    image: p.image.clone(),
                });
            }
            Ok(new.len())
        }

        fn create_order(&self, order: NewOrder) -> Result<i64, DomainError> {
            let mut orders = self.orders.lock().unwrap();
            orders.push(order);
            Ok(orders.len() as i64)
        }
    }

    #[test]
    fn seed_catalog_inserts_six_products_once() {
        let service = StoreService::new(InMemoryRepository::default());

        assert_eq!(service.seed_catalog().expect("seed"), 6);
        assert_eq!(service.seed_catalog().expect("reseed"), 0);
        assert_eq!(service.list_products().expect("list").len(), 6);
    }

    #[test]
    fn place_order_trusts_client_total() {
        let service = StoreService::new(InMemoryRepository::default());

        let id = service
            .place_order(NewOrder {
                items: vec![serde_json::json!({"name": "Hat", "price": 14.99})],
                total: 1000.0,
            })
            .expect("order");

        assert_eq!(id, 1);
        assert_eq!(service.repo.orders.lock().unwrap()[0].total, 1000.0);
    }
}
