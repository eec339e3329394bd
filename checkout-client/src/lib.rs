//! Client-side checkout orchestration for the storefront: drives one
//! payment attempt end to end (gateway SDK session, server-created order,
//! outcome translation) and carries the verification helpers the checkout
//! forms rely on.

pub mod initiator;
pub mod notify;
pub mod orders;
pub mod rate_limit;
pub mod sdk;
pub mod verify;

pub use initiator::{CheckoutClient, CheckoutError, CheckoutOptions, PaymentOutcome};
pub use orders::{OrderApiError, OrdersApi, PaymentOrder};
pub use rate_limit::AttemptLimiter;
pub use sdk::{CheckoutSdk, CheckoutSession, CustomerPrefill, GatewayEvent};
pub use verify::{IdentifierVerifier, NameResolver};
