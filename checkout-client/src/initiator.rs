use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::notify::{NoticeKind, Notifier};
use crate::orders::{OrderApiError, OrdersApi};
use crate::sdk::{CheckoutSdk, CheckoutSession, CustomerPrefill, GatewayEvent};
use common_money::to_minor_units;

/// Storefront brand accent applied to the gateway checkout UI.
pub const THEME_COLOR: &str = "#f97316";

const DEFAULT_CURRENCY: &str = "INR";

#[derive(Debug, Clone)]
pub struct CheckoutOptions {
    /// Major units, exactly as displayed to the customer.
    pub amount: f64,
    pub currency: Option<String>,
    pub description: Option<String>,
    pub customer: CustomerPrefill,
}

/// Terminal result of one checkout attempt. Cancellation is a legitimate
/// outcome, not an error.
#[derive(Debug)]
pub enum PaymentOutcome {
    Completed { payload: Value },
    Cancelled,
}

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("payment gateway failed to load")]
    SdkUnavailable,
    #[error("failed to create payment order: {0}")]
    OrderCreation(String),
    #[error("order amount does not match the quoted amount")]
    AmountMismatch,
    #[error("payment failed")]
    PaymentFailed { payload: Value },
}

/// Orchestrates one checkout attempt: gateway surface, server-created order,
/// hosted checkout session, outcome. Never retries; re-invocation is the
/// caller's decision.
pub struct CheckoutClient {
    sdk: Arc<dyn CheckoutSdk>,
    orders: OrdersApi,
    notifier: Arc<dyn Notifier>,
    brand: String,
}

impl CheckoutClient {
    pub fn new(
        sdk: Arc<dyn CheckoutSdk>,
        orders: OrdersApi,
        notifier: Arc<dyn Notifier>,
        brand: impl Into<String>,
    ) -> Self {
        Self {
            sdk,
            orders,
            notifier,
            brand: brand.into(),
        }
    }

    pub async fn initiate(&self, options: CheckoutOptions) -> Result<PaymentOutcome, CheckoutError> {
        if !self.sdk.ensure_loaded().await {
            self.notifier.notify(
                NoticeKind::Error,
                "Payment Error",
                "Payment gateway failed to load. Please try again.",
            );
            return Err(CheckoutError::SdkUnavailable);
        }

        let currency = options
            .currency
            .clone()
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
        let order = match self.orders.create_order(options.amount, &currency).await {
            Ok(order) => order,
            Err(err) => {
                let message = match &err {
                    OrderApiError::Api { message, .. } => message.clone(),
                    OrderApiError::Transport(_) => "Failed to create payment order".to_string(),
                };
                self.notifier
                    .notify(NoticeKind::Error, "Payment Error", &message);
                return Err(CheckoutError::OrderCreation(message));
            }
        };

        // The order must charge exactly the amount shown to the customer.
        match to_minor_units(options.amount) {
            Ok(quoted) if quoted == order.amount => {}
            _ => {
                warn!(
                    order_id = %order.order_id,
                    order_amount = order.amount,
                    displayed = options.amount,
                    "order amount diverges from the displayed amount"
                );
                self.notifier.notify(
                    NoticeKind::Error,
                    "Payment Error",
                    "Failed to create payment order",
                );
                return Err(CheckoutError::AmountMismatch);
            }
        }

        let session = CheckoutSession {
            key_id: order.key_id,
            order_id: order.order_id.clone(),
            amount_minor: order.amount,
            currency: order.currency,
            brand: self.brand.clone(),
            description: options.description,
            prefill: options.customer,
            theme_color: THEME_COLOR.to_string(),
        };

        match self.sdk.open(session).await {
            GatewayEvent::Completed(payload) => {
                info!(order_id = %order.order_id, "payment completed");
                Ok(PaymentOutcome::Completed { payload })
            }
            GatewayEvent::Dismissed => {
                self.notifier.notify(
                    NoticeKind::Info,
                    "Payment Cancelled",
                    "You cancelled the payment.",
                );
                Ok(PaymentOutcome::Cancelled)
            }
            GatewayEvent::Failed(payload) => {
                warn!(order_id = %order.order_id, "payment failed");
                Err(CheckoutError::PaymentFailed { payload })
            }
        }
    }
}
