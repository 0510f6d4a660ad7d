use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A catalog entry. Products are created by seeding and never change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    /// URL of the product picture.
    pub image: String,
}

/// A product that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub image: String,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, price: f64, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            image: image.into(),
        }
    }
}
