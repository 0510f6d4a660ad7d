use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::order::NewOrder;
use crate::domain::ports::StoreRepository;
use crate::domain::product::{NewProduct, Product};
use crate::schema::{orders, products};

use super::models::{NewOrderRow, NewProductRow, ProductRow};

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for DomainError {
    fn from(e: diesel::result::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

// ── Repository ────────────────────────────────────────────────────────────────

pub struct DieselStoreRepository {
    pool: DbPool,
}

impl DieselStoreRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl StoreRepository for DieselStoreRepository {
    fn list_products(&self) -> Result<Vec<Product>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = products::table
            .select(ProductRow::as_select())
            .order(products::id.asc())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    fn seed_if_empty(&self, new_products: &[NewProduct]) -> Result<usize, DomainError> {
        let mut conn = self.pool.get()?;

        let rows: Vec<NewProductRow<'_>> = new_products.iter().map(NewProductRow::from).collect();
        // IMMEDIATE takes the write lock up front, so concurrent starters
        // cannot both observe an empty table.
        conn.immediate_transaction::<_, DomainError, _>(|conn| {
            let existing: i64 = products::table.count().get_result(conn)?;
            if existing > 0 {
                return Ok(0);
            }
            Ok(diesel::insert_into(products::table)
                .values(&rows)
                .execute(conn)?)
        })
    }

    fn create_order(&self, order: NewOrder) -> Result<i64, DomainError> {
        let items = order
            .items_json()
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut conn = self.pool.get()?;
        let id = diesel::insert_into(orders::table)
            .values(&NewOrderRow {
                items,
                total: order.total,
            })
            .returning(orders::id)
            .get_result(&mut conn)?;

        Ok(id)
    }
}
