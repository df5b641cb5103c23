pub mod firestore;
pub mod google_places;
pub mod stripe;

#[cfg(feature = "ssr")]
use std::sync::OnceLock;
#[cfg(feature = "ssr")]
use std::time::Duration;

#[cfg(feature = "ssr")]
static HTTP_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Shared outbound client so connections are pooled across requests.
#[cfg(feature = "ssr")]
pub fn http_client() -> &'static reqwest::Client {
    HTTP_CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .unwrap_or_default()
    })
}

/// Reads a non-2xx body into a short message for logs and errors.
#[cfg(feature = "ssr")]
pub(crate) async fn error_body(response: reqwest::Response) -> (u16, String) {
    let status = response.status().as_u16();
    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&text)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .or_else(|| v.get("error_message"))
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or(text);
    (status, message)
}
