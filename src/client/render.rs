use crate::domain::product::Product;

/// Text view of the storefront.
pub fn render(products: &[Product], cart: &[Product], order_id: Option<i64>) -> String {
    let mut out = String::from("Urban Style Shop\n\nProducts\n");
    out.push_str(&format!("Total products: {}\n", products.len()));
    for p in products {
        out.push_str(&format!("  [{}] {} ${:.2} {}\n", p.id, p.name, p.price, p.image));
    }

    out.push_str(&format!("\nCart ({})\n", cart.len()));
    for item in cart {
        out.push_str(&format!("  - {} - ${:.2}\n", item.name, item.price));
    }
    if !cart.is_empty() {
        out.push_str("Type 'order' to place your order.\n");
    }
    if let Some(id) = order_id {
        out.push_str(&format!("Order placed! Your order ID is {}.\n", id));
    }
    out
}
