use super::product::NewProduct;

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150";

const SEED: [(&str, f64); 6] = [
    ("T-shirt", 19.99),
    ("Jeans", 39.99),
    ("Sneakers", 59.99),
    ("Jacket", 79.99),
    ("Hat", 14.99),
    ("Socks", 4.99),
];

/// The fixed product set inserted into an empty catalog.
pub fn seed_products() -> Vec<NewProduct> {
    SEED.iter()
        .map(|(name, price)| NewProduct::new(*name, *price, PLACEHOLDER_IMAGE))
        .collect()
}
