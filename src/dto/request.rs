use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditImageRequest {
    pub image_base64: Option<String>,
    pub mask_base64: Option<String>,
    pub product_base64: Option<String>,
    pub prompt: Option<String>,
    pub size: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EraseImageRequest {
    pub image_base64: Option<String>,
    pub mask_base64: Option<String>,
    pub prompt: Option<String>,
    pub size: Option<String>,
}

/// Inbound payload for the text-heavy creative route. The wire format mixes
/// snake_case text fields with a camelCase image list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextHeavyRequest {
    pub category: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub highlight_area: Option<String>,
    pub website: Option<String>,
    pub design_req: Option<String>,
    pub logo_url: Option<String>,
    pub logo_mime: Option<String>,
    #[serde(rename = "productImages", default)]
    pub product_images: Vec<ProductImage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductImage {
    pub url: String,
    pub mime: String,
}
