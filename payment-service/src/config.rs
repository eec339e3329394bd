use std::env;
use std::time::Duration;

use crate::gateway::GatewayCredentials;

pub const DEFAULT_CURRENCY: &str = "INR";
const DEFAULT_GATEWAY_BASE_URL: &str = "https://api.razorpay.com";

#[derive(Debug, Clone)]
pub struct PaymentConfig {
    /// Public key identifier; returned to clients alongside created orders.
    pub key_id: Option<String>,
    /// Secret half of the gateway credential pair; never leaves the process.
    pub key_secret: Option<String>,
    pub currency: String,
    pub gateway_base_url: String,
    pub gateway_timeout: Duration,
}

impl PaymentConfig {
    pub fn from_env() -> Self {
        let key_id = env::var("RAZORPAY_KEY_ID").ok().filter(|v| !v.is_empty());
        let key_secret = env::var("RAZORPAY_KEY_SECRET").ok().filter(|v| !v.is_empty());
        let currency =
            env::var("PAYMENT_CURRENCY").unwrap_or_else(|_| DEFAULT_CURRENCY.to_string());
        let gateway_base_url = env::var("GATEWAY_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_GATEWAY_BASE_URL.to_string());
        let timeout_secs = env::var("GATEWAY_TIMEOUT_SECONDS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(10)
            .max(1);

        Self {
            key_id,
            key_secret,
            currency,
            gateway_base_url,
            gateway_timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Both halves of the credential pair, or `None` when either is missing.
    /// Callers must not distinguish which one is absent.
    pub fn credentials(&self) -> Option<GatewayCredentials> {
        match (&self.key_id, &self.key_secret) {
            (Some(key_id), Some(key_secret)) => Some(GatewayCredentials {
                key_id: key_id.clone(),
                key_secret: key_secret.clone(),
            }),
            _ => None,
        }
    }
}
