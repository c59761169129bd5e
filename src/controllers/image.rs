use crate::dto::request::{EditImageRequest, EraseImageRequest};
use crate::dto::response::EraseImageResponse;
use crate::utils::base64::{parse_base64, ImagePayload, DEFAULT_IMAGE_MIME};
use crate::utils::error::ServiceError;
use crate::utils::openai::{
    edit_image as send_edit_request, extract_b64_data_uri, EditRequest, FieldSpec, ResponseShape,
    DEFAULT_PROMPT, DEFAULT_SIZE,
};
use crate::ServiceState;
use axum::{
    extract::{Json, State},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::info;

type AppResult<T> = Result<T, ServiceError>;

const EDIT_FIELDS: FieldSpec = FieldSpec {
    model: Some("gpt-image-1"),
    default_prompt: DEFAULT_PROMPT,
    default_size: DEFAULT_SIZE,
    response_shape: ResponseShape::Raw,
};

const ERASE_FIELDS: FieldSpec = FieldSpec {
    model: None,
    default_prompt: DEFAULT_PROMPT,
    default_size: DEFAULT_SIZE,
    response_shape: ResponseShape::B64Json,
};

fn parse_optional(input: Option<&str>) -> Result<Option<ImagePayload>, ServiceError> {
    input
        .map(|data| parse_base64(data, DEFAULT_IMAGE_MIME))
        .transpose()
}

pub async fn edit_image(
    State(state): State<Arc<ServiceState>>,
    Json(req): Json<EditImageRequest>,
) -> AppResult<impl IntoResponse> {
    let image_base64 = req
        .image_base64
        .ok_or_else(|| ServiceError::Validation("imageBase64 is required".to_string()))?;

    info!(
        "📥 Edit image request (mask: {}, product: {})",
        req.mask_base64.is_some(),
        req.product_base64.is_some()
    );

    let edit = EditRequest {
        image: parse_base64(&image_base64, DEFAULT_IMAGE_MIME)?,
        mask: parse_optional(req.mask_base64.as_deref())?,
        product: parse_optional(req.product_base64.as_deref())?,
        prompt: req.prompt,
        size: req.size,
    };

    let body = send_edit_request(
        &state.config.openai.api_base,
        &state.config.openai.openai_key,
        edit,
        &EDIT_FIELDS,
    )
    .await?;

    Ok(Json(body))
}

pub async fn erase_image(
    State(state): State<Arc<ServiceState>>,
    Json(req): Json<EraseImageRequest>,
) -> AppResult<impl IntoResponse> {
    let (image_base64, mask_base64) = match (req.image_base64, req.mask_base64) {
        (Some(image), Some(mask)) => (image, mask),
        _ => {
            return Err(ServiceError::Validation(
                "imageBase64 and maskBase64 are required".to_string(),
            ))
        }
    };

    info!("📥 Erase image request");

    let edit = EditRequest {
        image: parse_base64(&image_base64, DEFAULT_IMAGE_MIME)?,
        mask: Some(parse_base64(&mask_base64, DEFAULT_IMAGE_MIME)?),
        product: None,
        prompt: req.prompt,
        size: req.size,
    };

    let body = send_edit_request(
        &state.config.openai.api_base,
        &state.config.openai.openai_key,
        edit,
        &ERASE_FIELDS,
    )
    .await?;

    let image_base64 = extract_b64_data_uri(&body)?;
    Ok(Json(EraseImageResponse { image_base64 }))
}
