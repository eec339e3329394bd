use axum::{extract::State, Json};
use chrono::Utc;
use common_http_errors::{ApiError, ApiResult};
use common_money::to_minor_units;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::gateway::{GatewayError, OrderDraft};
use crate::AppState;

#[derive(Deserialize)]
pub struct CreateOrderRequest {
    pub amount: Option<f64>,
    pub currency: Option<String>,
}

#[derive(Serialize)]
pub struct CreateOrderResponse {
    #[serde(rename = "orderId")]
    pub order_id: String,
    /// Minor units, as echoed by the gateway.
    pub amount: i64,
    pub currency: String,
    #[serde(rename = "keyId")]
    pub key_id: String,
}

fn invalid_amount() -> ApiError {
    ApiError::bad_request("invalid_amount", "Invalid amount")
}

/// Creates exactly one gateway order per call. Secrets never appear in any
/// response; gateway error bodies are logged here and replaced with generic
/// messages before they reach the client.
pub async fn create_payment_order(
    State(state): State<AppState>,
    Json(req): Json<CreateOrderRequest>,
) -> ApiResult<Json<CreateOrderResponse>> {
    let amount_minor = req
        .amount
        .ok_or_else(invalid_amount)
        .and_then(|amount| to_minor_units(amount).map_err(|_| invalid_amount()))?;

    let Some(credentials) = state.config.credentials() else {
        error!("payment gateway credentials are not configured");
        return Err(ApiError::internal(
            "config_error",
            "Payment service configuration error",
        ));
    };

    let currency = req
        .currency
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| state.config.currency.clone());
    let receipt = format!("rcpt_{}", Utc::now().timestamp_millis());
    let draft = OrderDraft {
        amount_minor,
        currency,
        receipt,
    };

    let order = match state.gateway.create_order(&credentials, &draft).await {
        Ok(order) => order,
        Err(GatewayError::Rejected { status, body }) => {
            error!(status, body = %body, "payment gateway rejected order creation");
            return Err(ApiError::internal(
                "order_creation_failed",
                "Failed to create payment order",
            ));
        }
        Err(err) => {
            error!(error = %err, "payment gateway call failed");
            return Err(ApiError::internal("internal_error", "Internal server error"));
        }
    };

    // The order must charge exactly what was quoted; a diverging echo means
    // the order is unusable.
    if order.amount != draft.amount_minor {
        error!(
            requested = draft.amount_minor,
            returned = order.amount,
            order_id = %order.id,
            "gateway echoed a different amount than requested"
        );
        return Err(ApiError::internal("internal_error", "Internal server error"));
    }

    info!(order_id = %order.id, amount = order.amount, currency = %order.currency, "created payment order");
    Ok(Json(CreateOrderResponse {
        order_id: order.id,
        amount: order.amount,
        currency: order.currency,
        key_id: credentials.key_id,
    }))
}
