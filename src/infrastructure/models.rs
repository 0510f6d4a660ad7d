use diesel::prelude::*;

use crate::domain::product::{NewProduct, Product};
use crate::schema::{orders, products};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProductRow {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub image: String,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            price: row.price,
            image: row.image,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = products)]
pub struct NewProductRow<'a> {
    pub name: &'a str,
    pub price: f64,
    pub image: &'a str,
}

impl<'a> From<&'a NewProduct> for NewProductRow<'a> {
    fn from(p: &'a NewProduct) -> Self {
        NewProductRow {
            name: &p.name,
            price: p.price,
            image: &p.image,
        }
    }
}

/// Read side of `orders`; the API never reads orders back.
#[cfg(test)]
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct OrderRow {
    pub id: i64,
    pub items: String,
    pub total: f64,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrderRow {
    pub items: String,
    pub total: f64,
}
