use crate::dto::request::TextHeavyRequest;
use crate::dto::response::{ForwardedPayload, TextHeavyResponse};
use crate::utils::error::ServiceError;
use crate::utils::webhook::{forward_payload, url_to_base64};
use crate::ServiceState;
use axum::{
    extract::{Json, State},
    response::IntoResponse,
};
use futures::future::try_join_all;
use reqwest::Client;
use std::sync::Arc;
use tracing::info;

type AppResult<T> = Result<T, ServiceError>;

pub async fn text_heavy(
    State(state): State<Arc<ServiceState>>,
    Json(req): Json<TextHeavyRequest>,
) -> AppResult<impl IntoResponse> {
    info!(
        "📥 Text-heavy creative request with {} product images",
        req.product_images.len()
    );

    let client = Client::new();

    // The product image fetches are independent and run concurrently; all of
    // them must finish before the webhook call goes out.
    let product_images = try_join_all(
        req.product_images
            .iter()
            .map(|image| url_to_base64(&client, &image.url, &image.mime)),
    )
    .await?;

    let logo_url = match (&req.logo_url, &req.logo_mime) {
        (Some(url), Some(mime)) => url_to_base64(&client, url, mime).await?,
        _ => String::new(),
    };

    let payload = ForwardedPayload {
        category: req.category,
        phone_number: req.phone_number.unwrap_or_default(),
        address: req.address.unwrap_or_default(),
        highlight_area: req.highlight_area.unwrap_or_default(),
        website: req.website,
        design_req: req.design_req,
        logo_url,
        product_images,
    };

    let response = forward_payload(&state.config.webhook.webhook_url, &payload).await?;

    Ok(Json(TextHeavyResponse {
        status: "success".to_string(),
        forwarded_payload: payload,
        response,
    }))
}
