use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stripe's floor for a USD charge: $0.50.
pub const MIN_AMOUNT_CENTS: i64 = 50;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaymentError {
    #[error("Invalid amount")]
    InvalidAmount(i64),
    #[error("Invalid currency {0:?}")]
    InvalidCurrency(String),
}

fn default_currency() -> String {
    "usd".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentIntentRequest {
    /// Minor currency units (cents).
    pub amount: i64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl PaymentIntentRequest {
    pub fn validate(&self) -> Result<(), PaymentError> {
        if self.amount < MIN_AMOUNT_CENTS {
            return Err(PaymentError::InvalidAmount(self.amount));
        }
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(PaymentError::InvalidCurrency(self.currency.clone()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    pub client_secret: String,
    pub payment_intent_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(amount: i64) -> PaymentIntentRequest {
        PaymentIntentRequest {
            amount,
            currency: "usd".to_string(),
            metadata: BTreeMap::new(),
        }
    }

    #[test]
    fn test_minimum_amount() {
        assert_eq!(request(0).validate(), Err(PaymentError::InvalidAmount(0)));
        assert_eq!(request(49).validate(), Err(PaymentError::InvalidAmount(49)));
        assert_eq!(request(-500).validate(), Err(PaymentError::InvalidAmount(-500)));
        assert_eq!(request(50).validate(), Ok(()));
    }

    #[test]
    fn test_currency_defaults_to_usd() {
        let parsed: PaymentIntentRequest = serde_json::from_str(r#"{"amount": 349800}"#).unwrap();
        assert_eq!(parsed.currency, "usd");
        assert!(parsed.metadata.is_empty());
        assert_eq!(parsed.validate(), Ok(()));
    }

    #[test]
    fn test_bad_currency() {
        let mut req = request(100);
        req.currency = "dollars".to_string();
        assert_eq!(req.validate(), Err(PaymentError::InvalidCurrency("dollars".to_string())));
    }

    #[test]
    fn test_response_keys() {
        let response = PaymentIntentResponse {
            client_secret: "pi_1_secret_2".to_string(),
            payment_intent_id: "pi_1".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"clientSecret": "pi_1_secret_2", "paymentIntentId": "pi_1"}));
    }
}
