use serde_json::Value;

/// An order as submitted by a client.
///
/// `items` is kept as raw JSON: the service stores whatever the client sent
/// and trusts `total` without recomputing it.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub items: Vec<Value>,
    pub total: f64,
}

impl NewOrder {
    /// JSON text stored in the `items` column.
    pub fn items_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.items)
    }
}
