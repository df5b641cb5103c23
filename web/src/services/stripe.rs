// Stripe PaymentIntents over the form-encoded REST API.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use shared_types::{PaymentIntentRequest, PaymentIntentResponse};
use thiserror::Error;

use crate::config::ConfigError;
#[cfg(feature = "ssr")]
use crate::config::{require, SiteConfig};

pub const PAYMENT_INTENTS_URL: &str = "https://api.stripe.com/v1/payment_intents";
/// `metadata[source]` on every payment intent.
pub const PAYMENT_SOURCE: &str = "bigg-slim-events-website";

#[derive(Debug, Error)]
pub enum StripeError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[cfg(feature = "ssr")]
    #[error("request to Stripe failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Stripe returned {status}: {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Deserialize)]
pub struct StripePaymentIntent {
    pub id: String,
    pub client_secret: String,
}

impl From<StripePaymentIntent> for PaymentIntentResponse {
    fn from(intent: StripePaymentIntent) -> Self {
        PaymentIntentResponse {
            client_secret: intent.client_secret,
            payment_intent_id: intent.id,
        }
    }
}

/// Form body for `POST /v1/payment_intents`. Caller metadata is kept, then
/// `source` and `timestamp` are stamped on top.
pub fn payment_intent_form(
    request: &PaymentIntentRequest,
    source: &str,
    timestamp: DateTime<Utc>,
) -> Vec<(String, String)> {
    let mut form = vec![
        ("amount".to_string(), request.amount.to_string()),
        ("currency".to_string(), request.currency.to_lowercase()),
        ("automatic_payment_methods[enabled]".to_string(), "true".to_string()),
    ];
    for (key, value) in &request.metadata {
        if key == "source" || key == "timestamp" {
            continue;
        }
        form.push((format!("metadata[{}]", key), value.clone()));
    }
    form.push(("metadata[source]".to_string(), source.to_string()));
    form.push(("metadata[timestamp]".to_string(), timestamp.to_rfc3339()));
    form
}

#[cfg(feature = "ssr")]
pub async fn create_payment_intent(
    config: &SiteConfig,
    request: &PaymentIntentRequest,
) -> Result<PaymentIntentResponse, StripeError> {
    let secret_key = require(&config.stripe_secret_key, "STRIPE_SECRET_KEY")?;
    let form = payment_intent_form(request, PAYMENT_SOURCE, Utc::now());

    let response = super::http_client()
        .post(PAYMENT_INTENTS_URL)
        .bearer_auth(secret_key)
        .form(&form)
        .send()
        .await?;

    if !response.status().is_success() {
        let (status, message) = super::error_body(response).await;
        return Err(StripeError::Api { status, message });
    }

    let intent: StripePaymentIntent = response.json().await?;
    tracing::info!(payment_intent = %intent.id, amount = request.amount, "created payment intent");
    Ok(intent.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::BTreeMap;

    #[test]
    fn test_form_fields() {
        let mut metadata = BTreeMap::new();
        metadata.insert("package".to_string(), "ceremony".to_string());
        metadata.insert("source".to_string(), "spoofed".to_string());
        let request = PaymentIntentRequest {
            amount: 349_800,
            currency: "USD".to_string(),
            metadata,
        };
        let ts = Utc.with_ymd_and_hms(2025, 2, 1, 12, 0, 0).unwrap();
        let form = payment_intent_form(&request, PAYMENT_SOURCE, ts);
        let get = |key: &str| form.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str());

        assert_eq!(get("amount"), Some("349800"));
        assert_eq!(get("currency"), Some("usd"));
        assert_eq!(get("automatic_payment_methods[enabled]"), Some("true"));
        assert_eq!(get("metadata[package]"), Some("ceremony"));
        assert_eq!(get("metadata[source]"), Some("bigg-slim-events-website"));
        assert_eq!(get("metadata[timestamp]"), Some("2025-02-01T12:00:00+00:00"));
        assert_eq!(form.iter().filter(|(k, _)| k == "metadata[source]").count(), 1);
    }

    #[test]
    fn test_response_mapping() {
        let intent: StripePaymentIntent = serde_json::from_value(serde_json::json!({
            "id": "pi_123",
            "object": "payment_intent",
            "client_secret": "pi_123_secret_456",
            "amount": 349800
        }))
        .unwrap();
        let response: PaymentIntentResponse = intent.into();
        assert_eq!(response.payment_intent_id, "pi_123");
        assert_eq!(response.client_secret, "pi_123_secret_456");
    }
}
