use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerPrefill {
    pub name: String,
    pub email: String,
    pub contact: String,
}

/// Configuration for one hosted-checkout session. Carries the server-issued
/// public key; the secret credential pair never reaches this side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSession {
    pub key_id: String,
    pub order_id: String,
    /// Minor units, as confirmed by the server.
    pub amount_minor: i64,
    pub currency: String,
    pub brand: String,
    pub description: Option<String>,
    pub prefill: CustomerPrefill,
    pub theme_color: String,
}

/// Terminal event of one checkout session, as translated from the gateway
/// SDK's callbacks at the boundary.
#[derive(Debug, Clone)]
pub enum GatewayEvent {
    /// The gateway reported a captured payment; payload is passed through
    /// opaque.
    Completed(Value),
    /// The gateway reported a failed payment attempt.
    Failed(Value),
    /// The customer closed the checkout UI without paying.
    Dismissed,
}

#[async_trait::async_trait]
pub trait CheckoutSdk: Send + Sync {
    /// Makes sure the gateway surface is available. Idempotent; resolves
    /// `false` when it cannot be loaded and never errors.
    async fn ensure_loaded(&self) -> bool;

    /// Opens the checkout UI for `session` and resolves once the session
    /// reaches a terminal event.
    async fn open(&self, session: CheckoutSession) -> GatewayEvent;
}

/// Demo stand-in for the hosted checkout; approves every session.
#[derive(Default)]
pub struct SimulatedCheckout;

impl SimulatedCheckout {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl CheckoutSdk for SimulatedCheckout {
    async fn ensure_loaded(&self) -> bool {
        true
    }

    async fn open(&self, session: CheckoutSession) -> GatewayEvent {
        GatewayEvent::Completed(serde_json::json!({
            "razorpay_payment_id": format!("pay_sim_{}", session.order_id),
            "razorpay_order_id": session.order_id,
        }))
    }
}
