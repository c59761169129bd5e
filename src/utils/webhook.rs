use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::info;

use crate::dto::response::ForwardedPayload;
use crate::utils::base64::to_data_uri;
use crate::utils::error::ServiceError;

// The webhook call is the only place in the service with a request timeout.
const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(60);

/// Fetches an image URL and re-encodes the body as a data URI with the MIME
/// type the caller declared. The response status is not inspected; whatever
/// bytes come back are encoded.
pub async fn url_to_base64(client: &Client, url: &str, mime: &str) -> Result<String, ServiceError> {
    let response = client.get(url).send().await.map_err(|e| {
        ServiceError::Internal(format!("Failed to fetch image from '{}': {}", url, e))
    })?;

    let bytes = response.bytes().await.map_err(|e| {
        ServiceError::Internal(format!("Failed to read image bytes from '{}': {}", url, e))
    })?;

    Ok(to_data_uri(mime, &bytes))
}

/// Posts the reshaped payload to the workflow webhook and returns its
/// response: parsed JSON when possible, the raw text otherwise.
pub async fn forward_payload(
    webhook_url: &str,
    payload: &ForwardedPayload,
) -> Result<Value, ServiceError> {
    let client = Client::new();
    let response = client
        .post(webhook_url)
        .json(payload)
        .timeout(WEBHOOK_TIMEOUT)
        .send()
        .await
        .map_err(|e| ServiceError::Internal(format!("Failed to send webhook request: {}", e)))?;

    let status = response.status();
    info!("📡 Webhook responded with status {}", status);

    let body = response.text().await.map_err(|e| {
        ServiceError::Internal(format!("Failed to read webhook response body: {}", e))
    })?;

    if !status.is_success() {
        return Err(ServiceError::Upstream {
            status: status.as_u16(),
            body,
        });
    }

    Ok(serde_json::from_str(&body).unwrap_or(Value::String(body)))
}
