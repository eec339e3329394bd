use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use serde::Serialize;
use tokio::time::sleep;

/// Simulated lookup latency applied to both verification operations.
pub const LOOKUP_DELAY: Duration = Duration::from_secs(1);

/// Known UPI handle suffixes and the bank they belong to. When several
/// suffixes appear in a domain part, the longest one wins; among equal
/// lengths the earlier table entry wins.
const BANK_SUFFIXES: &[(&str, &str)] = &[
    ("okhdfcbank", "HDFC Bank"),
    ("okicici", "ICICI Bank"),
    ("okaxis", "Axis Bank"),
    ("oksbi", "State Bank of India"),
    ("hdfc", "HDFC Bank"),
    ("icici", "ICICI Bank"),
    ("axis", "Axis Bank"),
    ("sbi", "State Bank of India"),
    ("paytm", "Paytm Payments Bank"),
    ("ybl", "Yes Bank"),
    ("axl", "Axis Bank"),
    ("apl", "Amazon Pay"),
    ("upi", "UPI"),
];

/// Identifiers with a fixed display name, used by demo accounts.
static KNOWN_IDENTIFIERS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("user@upi", "Amit Sharma"),
        ("priya@okhdfcbank", "Priya Patel"),
        ("rahul@paytm", "Rahul Verma"),
        ("sneha@ybl", "Sneha Iyer"),
    ])
});

/// Customer numbers ending in this suffix are reported as not chargeable.
const INVALID_NUMBER_SUFFIX: &str = "0000";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VerificationResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "bankName", skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VerificationResult {
    fn resolved(name: String, bank_name: &str) -> Self {
        Self {
            success: true,
            name: Some(name),
            bank_name: Some(bank_name.to_string()),
            error: None,
        }
    }

    fn failure(error: &str) -> Self {
        Self {
            success: false,
            name: None,
            bank_name: None,
            error: Some(error.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CustomerNumberResult {
    pub success: bool,
    #[serde(rename = "isValid", skip_serializing_if = "Option::is_none")]
    pub is_valid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CustomerNumberResult {
    fn checked(is_valid: bool) -> Self {
        Self {
            success: true,
            is_valid: Some(is_valid),
            error: None,
        }
    }

    fn failure(error: &str) -> Self {
        Self {
            success: false,
            is_valid: None,
            error: Some(error.to_string()),
        }
    }
}

/// Resolves a display name for identifiers absent from the known table.
pub trait NameResolver: Send + Sync {
    fn resolve(&self, id: &str) -> String;
}

/// Demo-only resolver: picks a random plausible name. Not for tests; use
/// [`FixedNameResolver`] there.
#[derive(Default)]
pub struct DemoNameResolver;

const FIRST_NAMES: &[&str] = &[
    "Aarav", "Ananya", "Arjun", "Diya", "Ishaan", "Kavya", "Rohan", "Saanvi",
];
const LAST_NAMES: &[&str] = &[
    "Agarwal", "Gupta", "Iyer", "Mehta", "Nair", "Reddy", "Singh", "Verma",
];

impl DemoNameResolver {
    pub fn new() -> Self {
        Self
    }
}

impl NameResolver for DemoNameResolver {
    fn resolve(&self, _id: &str) -> String {
        let mut rng = rand::thread_rng();
        let first = FIRST_NAMES.choose(&mut rng).unwrap_or(&FIRST_NAMES[0]);
        let last = LAST_NAMES.choose(&mut rng).unwrap_or(&LAST_NAMES[0]);
        format!("{first} {last}")
    }
}

/// Deterministic resolver returning the same name for every identifier.
pub struct FixedNameResolver(pub String);

impl NameResolver for FixedNameResolver {
    fn resolve(&self, _id: &str) -> String {
        self.0.clone()
    }
}

pub struct IdentifierVerifier {
    resolver: Arc<dyn NameResolver>,
    delay: Duration,
}

impl IdentifierVerifier {
    pub fn new(resolver: Arc<dyn NameResolver>) -> Self {
        Self {
            resolver,
            delay: LOOKUP_DELAY,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Validates a `local@domain` payment identifier and resolves its display
    /// name and bank label. Once the shape is valid this always succeeds with
    /// some name.
    pub async fn verify_identifier(&self, id: &str) -> VerificationResult {
        if id.is_empty() {
            // No lookup to simulate; fail before the delay.
            return VerificationResult::failure("Please enter a UPI ID");
        }
        sleep(self.delay).await;

        let Some(domain) = identifier_domain(id) else {
            return VerificationResult::failure("Invalid UPI ID format");
        };
        let bank = bank_label(domain);
        let name = match KNOWN_IDENTIFIERS.get(id) {
            Some(known) => (*known).to_string(),
            None => self.resolver.resolve(id),
        };
        VerificationResult::resolved(name, bank)
    }

    /// Validates a 10-digit customer mobile number (leading digit 6-9) and
    /// reports the stubbed chargeability flag.
    pub async fn verify_customer_number(&self, number: &str) -> CustomerNumberResult {
        if number.is_empty() {
            return CustomerNumberResult::failure("Please enter a mobile number");
        }
        sleep(self.delay).await;

        if !is_valid_customer_number(number) {
            return CustomerNumberResult::failure("Invalid mobile number format");
        }
        CustomerNumberResult::checked(!number.ends_with(INVALID_NUMBER_SUFFIX))
    }
}

/// Returns the domain part when `id` has the shape `local@domain` with both
/// sides limited to alphanumerics, dot, underscore and hyphen.
fn identifier_domain(id: &str) -> Option<&str> {
    let (local, domain) = id.split_once('@')?;
    let part_ok =
        |part: &str| !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if part_ok(local) && part_ok(domain) {
        Some(domain)
    } else {
        None
    }
}

fn bank_label(domain: &str) -> &'static str {
    let mut best: Option<(&'static str, &'static str)> = None;
    for &(suffix, label) in BANK_SUFFIXES {
        if domain.contains(suffix) {
            match best {
                Some((current, _)) if suffix.len() <= current.len() => {}
                _ => best = Some((suffix, label)),
            }
        }
    }
    best.map(|(_, label)| label).unwrap_or("Unknown Bank")
}

fn is_valid_customer_number(number: &str) -> bool {
    number.len() == 10
        && number.chars().all(|c| c.is_ascii_digit())
        && matches!(number.as_bytes()[0], b'6'..=b'9')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verifier() -> IdentifierVerifier {
        IdentifierVerifier::new(Arc::new(FixedNameResolver("Test User".into())))
    }

    #[tokio::test(start_paused = true)]
    async fn empty_identifier_is_required() {
        let result = verifier().verify_identifier("").await;
        assert_eq!(
            result,
            VerificationResult {
                success: false,
                name: None,
                bank_name: None,
                error: Some("Please enter a UPI ID".into()),
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn malformed_identifier_is_rejected() {
        let result = verifier().verify_identifier("not-an-id").await;
        assert_eq!(result.error.as_deref(), Some("Invalid UPI ID format"));
        assert!(!result.success);

        for bad in ["@upi", "user@", "us er@upi", "user@up!i"] {
            let result = verifier().verify_identifier(bad).await;
            assert_eq!(result.error.as_deref(), Some("Invalid UPI ID format"), "{bad}");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn known_identifier_resolves_from_table() {
        let result = verifier().verify_identifier("user@upi").await;
        assert!(result.success);
        assert_eq!(result.name.as_deref(), Some("Amit Sharma"));
        assert_eq!(result.bank_name.as_deref(), Some("UPI"));
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_identifier_uses_resolver() {
        let result = verifier().verify_identifier("someone@okicici").await;
        assert!(result.success);
        assert_eq!(result.name.as_deref(), Some("Test User"));
        assert_eq!(result.bank_name.as_deref(), Some("ICICI Bank"));
    }

    #[tokio::test(start_paused = true)]
    async fn longest_bank_suffix_wins() {
        // "oksbi" contains both "oksbi" and "sbi"; the longer one decides.
        let result = verifier().verify_identifier("someone@oksbi").await;
        assert_eq!(result.bank_name.as_deref(), Some("State Bank of India"));

        let result = verifier().verify_identifier("someone@mysbi").await;
        assert_eq!(result.bank_name.as_deref(), Some("State Bank of India"));
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_suffix_gets_generic_label() {
        let result = verifier().verify_identifier("someone@zzbank").await;
        assert!(result.success);
        assert_eq!(result.bank_name.as_deref(), Some("Unknown Bank"));
    }

    #[tokio::test(start_paused = true)]
    async fn empty_customer_number_is_required() {
        let result = verifier().verify_customer_number("").await;
        assert_eq!(result.error.as_deref(), Some("Please enter a mobile number"));
        assert!(!result.success);
    }

    #[tokio::test(start_paused = true)]
    async fn customer_number_leading_digit_must_be_six_to_nine() {
        let result = verifier().verify_customer_number("5123456789").await;
        assert_eq!(result.error.as_deref(), Some("Invalid mobile number format"));

        for bad in ["912345678", "91234567890", "9123a56789"] {
            let result = verifier().verify_customer_number(bad).await;
            assert!(!result.success, "{bad}");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn trailing_zeros_number_is_flagged_invalid() {
        let result = verifier().verify_customer_number("9123450000").await;
        assert_eq!(
            result,
            CustomerNumberResult {
                success: true,
                is_valid: Some(false),
                error: None,
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn ordinary_number_is_chargeable() {
        let result = verifier().verify_customer_number("9876543210").await;
        assert_eq!(result.is_valid, Some(true));
        assert!(result.success);
    }
}
