use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::Value;
use tracing::info;

use crate::utils::base64::ImagePayload;
use crate::utils::error::ServiceError;

pub const DEFAULT_PROMPT: &str = "Edit this image";
pub const DEFAULT_SIZE: &str = "1024x1024";

/// Which response shape a route asks the image-edit endpoint for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// Relay the upstream JSON unchanged.
    Raw,
    /// Request `response_format=b64_json` so the first image can be rewrapped
    /// as a data URI with [`extract_b64_data_uri`].
    B64Json,
}

/// Per-route parameterization of the multipart form: which text fields to
/// send and what to fall back to when the caller omits prompt or size.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub model: Option<&'static str>,
    pub default_prompt: &'static str,
    pub default_size: &'static str,
    pub response_shape: ResponseShape,
}

/// One image-edit call: the main image plus the optional mask and product
/// images, already decoded from base64.
#[derive(Debug, Clone)]
pub struct EditRequest {
    pub image: ImagePayload,
    pub mask: Option<ImagePayload>,
    pub product: Option<ImagePayload>,
    pub prompt: Option<String>,
    pub size: Option<String>,
}

fn file_part(payload: ImagePayload, name: &str) -> Result<Part, ServiceError> {
    let file_name = format!("{}.{}", name, payload.extension());
    let mime_type = payload.mime_type.clone();
    Part::bytes(payload.bytes)
        .file_name(file_name)
        .mime_str(&mime_type)
        .map_err(|e| ServiceError::Internal(format!("Failed to build multipart part: {}", e)))
}

fn build_form(req: EditRequest, fields: &FieldSpec) -> Result<Form, ServiceError> {
    let mut form = Form::new();

    if let Some(model) = fields.model {
        form = form.text("model", model);
    }
    form = form.part("image", file_part(req.image, "image")?);
    if let Some(mask) = req.mask {
        form = form.part("mask", file_part(mask, "mask")?);
    }
    if let Some(product) = req.product {
        form = form.part("product", file_part(product, "product")?);
    }
    form = form
        .text(
            "prompt",
            req.prompt
                .unwrap_or_else(|| fields.default_prompt.to_string()),
        )
        .text(
            "size",
            req.size.unwrap_or_else(|| fields.default_size.to_string()),
        );
    if fields.response_shape == ResponseShape::B64Json {
        form = form.text("response_format", "b64_json");
    }

    Ok(form)
}

/// Sends a single multipart POST to the image-edit endpoint and returns the
/// upstream JSON body. One attempt, no retries, no request timeout.
pub async fn edit_image(
    api_base: &str,
    api_key: &str,
    req: EditRequest,
    fields: &FieldSpec,
) -> Result<Value, ServiceError> {
    let form = build_form(req, fields)?;

    let client = Client::new();
    let response = client
        .post(format!(
            "{}/images/edits",
            api_base.trim_end_matches('/')
        ))
        .bearer_auth(api_key)
        .multipart(form)
        .send()
        .await
        .map_err(|e| ServiceError::Internal(format!("Failed to send OpenAI request: {}", e)))?;

    let status = response.status();
    let body = response.text().await.map_err(|e| {
        ServiceError::Internal(format!("Failed to read OpenAI response body: {}", e))
    })?;

    if !status.is_success() {
        return Err(ServiceError::Upstream {
            status: status.as_u16(),
            body,
        });
    }

    info!("OpenAI image edit succeeded with status {}", status);

    serde_json::from_str(&body).map_err(|e| {
        ServiceError::UpstreamProtocol(format!("OpenAI response is not valid JSON: {}", e))
    })
}

/// Pulls `data[0].b64_json` out of a success response and rewraps it as a
/// PNG data URI. A success body without that field is a hard failure.
pub fn extract_b64_data_uri(body: &Value) -> Result<String, ServiceError> {
    let b64 = body
        .pointer("/data/0/b64_json")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            ServiceError::UpstreamProtocol(
                "missing data[0].b64_json in OpenAI response".to_string(),
            )
        })?;
    Ok(format!("data:image/png;base64,{}", b64))
}
