use std::sync::Arc;

use crate::config::PaymentConfig;
use crate::gateway::OrderGateway;

pub mod app;
pub mod config;
pub mod gateway;
pub mod order_handlers;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<PaymentConfig>,
    pub gateway: Arc<dyn OrderGateway>,
}
