use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Order handle issued by the payment service: everything the checkout
/// session needs and nothing secret.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PaymentOrder {
    #[serde(rename = "orderId")]
    pub order_id: String,
    /// Minor units.
    pub amount: i64,
    pub currency: String,
    #[serde(rename = "keyId")]
    pub key_id: String,
}

#[derive(Debug, Error)]
pub enum OrderApiError {
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("order request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Serialize)]
struct CreateOrderBody<'a> {
    amount: f64,
    currency: &'a str,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: String,
}

/// Thin client for the order-creation endpoint: send JSON, get JSON or a
/// typed error.
pub struct OrdersApi {
    http: reqwest::Client,
    base_url: String,
}

impl OrdersApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn create_order(
        &self,
        amount: f64,
        currency: &str,
    ) -> Result<PaymentOrder, OrderApiError> {
        let resp = self
            .http
            .post(format!("{}/orders", self.base_url))
            .json(&CreateOrderBody { amount, currency })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp
                .json::<ErrorEnvelope>()
                .await
                .map(|envelope| envelope.error)
                .unwrap_or_else(|_| "Failed to create payment order".to_string());
            return Err(OrderApiError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(resp.json::<PaymentOrder>().await?)
    }
}
