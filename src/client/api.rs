use std::future::Future;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::product::Product;
use crate::handlers::orders::PlaceOrderResponse;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server responded {status}: {message}")]
    Server { status: u16, message: String },
}

/// Transport used by [`Storefront`](super::Storefront) to reach the service.
pub trait StoreApi {
    fn list_products(&self) -> impl Future<Output = Result<Vec<Product>, ClientError>> + Send;

    fn place_order(
        &self,
        items: &[Product],
        total: f64,
    ) -> impl Future<Output = Result<i64, ClientError>> + Send;
}

#[derive(Debug, Serialize)]
struct PlaceOrderBody<'a> {
    items: &'a [Product],
    total: f64,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// [`StoreApi`] over HTTP/JSON.
#[derive(Debug, Clone)]
pub struct HttpStoreApi {
    http: Client,
    base_url: String,
}

impl HttpStoreApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json().await?);
        }
        let message = match resp.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status.canonical_reason().unwrap_or("unknown error").to_string(),
        };
        Err(ClientError::Server {
            status: status.as_u16(),
            message,
        })
    }
}

impl StoreApi for HttpStoreApi {
    async fn list_products(&self) -> Result<Vec<Product>, ClientError> {
        let resp = self
            .http
            .get(format!("{}/api/products", self.base_url))
            .send()
            .await?;
        Self::decode(resp).await
    }

    async fn place_order(&self, items: &[Product], total: f64) -> Result<i64, ClientError> {
        let resp = self
            .http
            .post(format!("{}/api/orders", self.base_url))
            .json(&PlaceOrderBody { items, total })
            .send()
            .await?;
        let confirmation: PlaceOrderResponse = Self::decode(resp).await?;
        Ok(confirmation.order_id)
    }
}
