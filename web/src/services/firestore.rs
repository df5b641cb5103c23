//! Firestore REST persistence for inquiries and booking requests.
//!
//! Documents are written with `createDocument`; the JSON payload is converted
//! into Firestore's typed `Value` encoding first.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::config::ConfigError;
#[cfg(feature = "ssr")]
use crate::config::{require, SiteConfig, SUBMISSION_SOURCE};

pub const CONTACT_COLLECTION: &str = "contact_inquiries";
pub const BOOKING_COLLECTION: &str = "booking_requests";
pub const STATUS_NEW: &str = "new";
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_CONFIRMED: &str = "confirmed";

#[derive(Debug, Error)]
pub enum FirestoreError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[cfg(feature = "ssr")]
    #[error("request to Firestore failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Firestore returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("document must serialize to a JSON object: {0}")]
    Encoding(String),
}

pub fn documents_url(project_id: &str) -> String {
    format!(
        "https://firestore.googleapis.com/v1/projects/{}/databases/(default)/documents",
        project_id
    )
}

/// Converts a JSON value into Firestore's typed value encoding.
pub fn to_firestore_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => match n.as_i64() {
            // integerValue is a string on the wire
            Some(i) => json!({ "integerValue": i.to_string() }),
            None => json!({ "doubleValue": n.as_f64().unwrap_or_default() }),
        },
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => json!({
            "arrayValue": { "values": items.iter().map(to_firestore_value).collect::<Vec<_>>() }
        }),
        Value::Object(map) => json!({ "mapValue": { "fields": to_firestore_fields(map) } }),
    }
}

pub fn to_firestore_fields(map: &Map<String, Value>) -> Map<String, Value> {
    map.iter()
        .map(|(key, value)| (key.clone(), to_firestore_value(value)))
        .collect()
}

/// Builds the `{"fields": ...}` body for a new document, adding the server
/// side `status`, `source` and `createdAt` fields.
pub fn document_body<T: Serialize>(
    payload: &T,
    status: &str,
    source: &str,
    created_at: DateTime<Utc>,
) -> Result<Value, FirestoreError> {
    let value = serde_json::to_value(payload).map_err(|e| FirestoreError::Encoding(e.to_string()))?;
    let map = match value {
        Value::Object(map) => map,
        other => return Err(FirestoreError::Encoding(format!("got {}", other))),
    };

    let mut fields = to_firestore_fields(&map);
    fields.insert("status".to_string(), json!({ "stringValue": status }));
    fields.insert("source".to_string(), json!({ "stringValue": source }));
    fields.insert(
        "createdAt".to_string(),
        json!({ "timestampValue": created_at.to_rfc3339() }),
    );
    Ok(json!({ "fields": fields }))
}

/// The last path segment of a document `name` is its id.
pub fn document_id(response: &Value) -> Option<String> {
    response
        .get("name")
        .and_then(Value::as_str)
        .and_then(|name| name.rsplit('/').next())
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

/// Structured query matching any pending or confirmed booking on `date`.
pub fn date_taken_query(date: NaiveDate) -> Value {
    json!({
        "structuredQuery": {
            "from": [{ "collectionId": BOOKING_COLLECTION }],
            "where": {
                "compositeFilter": {
                    "op": "AND",
                    "filters": [
                        {
                            "fieldFilter": {
                                "field": { "fieldPath": "eventDate" },
                                "op": "EQUAL",
                                "value": { "stringValue": date.to_string() }
                            }
                        },
                        {
                            "fieldFilter": {
                                "field": { "fieldPath": "status" },
                                "op": "IN",
                                "value": { "arrayValue": { "values": [
                                    { "stringValue": STATUS_PENDING },
                                    { "stringValue": STATUS_CONFIRMED }
                                ] } }
                            }
                        }
                    ]
                }
            },
            "limit": 1
        }
    })
}

/// `runQuery` answers with one element per result; entries without a
/// `document` key only carry a read time.
pub fn query_has_documents(response: &Value) -> bool {
    response
        .as_array()
        .map(|rows| rows.iter().any(|row| row.get("document").is_some()))
        .unwrap_or(false)
}

#[cfg(feature = "ssr")]
async fn post_json(url: &str, api_key: &str, body: &Value) -> Result<Value, FirestoreError> {
    let response = super::http_client()
        .post(url)
        .query(&[("key", api_key)])
        .json(body)
        .send()
        .await?;

    if !response.status().is_success() {
        let (status, message) = super::error_body(response).await;
        return Err(FirestoreError::Api { status, message });
    }
    Ok(response.json().await?)
}

/// Stores `payload` in `collection` and returns the new document id.
#[cfg(feature = "ssr")]
pub async fn save_document<T: Serialize>(
    config: &SiteConfig,
    collection: &str,
    payload: &T,
    status: &str,
) -> Result<String, FirestoreError> {
    let project_id = require(&config.firebase_project_id, "FIREBASE_PROJECT_ID")?;
    let api_key = require(&config.firebase_api_key, "FIREBASE_API_KEY")?;

    let body = document_body(payload, status, SUBMISSION_SOURCE, Utc::now())?;
    let url = format!("{}/{}", documents_url(project_id), collection);
    let created = post_json(&url, api_key, &body).await?;

    let id = document_id(&created).unwrap_or_default();
    tracing::info!(collection, document_id = %id, "saved document");
    Ok(id)
}

/// Whether a pending or confirmed booking already holds `date`.
#[cfg(feature = "ssr")]
pub async fn is_date_taken(config: &SiteConfig, date: NaiveDate) -> Result<bool, FirestoreError> {
    let project_id = require(&config.firebase_project_id, "FIREBASE_PROJECT_ID")?;
    let api_key = require(&config.firebase_api_key, "FIREBASE_API_KEY")?;

    let url = format!("{}:runQuery", documents_url(project_id));
    let response = post_json(&url, api_key, &date_taken_query(date)).await?;
    Ok(query_has_documents(&response))
}
