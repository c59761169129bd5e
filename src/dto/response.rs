use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EraseImageResponse {
    pub image_base64: String,
}

/// The payload forwarded to the workflow webhook. Optional text fields that
/// the caller omitted are left out of the JSON entirely; the empty-string
/// fields always appear.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ForwardedPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub phone_number: String,
    pub address: String,
    pub highlight_area: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub design_req: Option<String>,
    pub logo_url: String,
    pub product_images: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TextHeavyResponse {
    pub status: String,
    #[serde(rename = "forwardedPayload")]
    pub forwarded_payload: ForwardedPayload,
    pub response: Value,
}
