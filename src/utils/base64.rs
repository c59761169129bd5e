use base64::{prelude::BASE64_STANDARD, Engine};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::utils::error::ServiceError;

pub const DEFAULT_IMAGE_MIME: &str = "image/png";

static DATA_URI_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^data:(.+);base64,(.*)$").unwrap());

/// A decoded inbound image: raw bytes plus the MIME type the caller declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl ImagePayload {
    /// File-name extension for the multipart file part. The MIME subtype is
    /// echoed verbatim, so `image/jpeg` becomes `jpeg`.
    pub fn extension(&self) -> &str {
        self.mime_type.split('/').nth(1).unwrap_or("png")
    }
}

/// Decodes a base64 image string that may carry a `data:<mime>;base64,`
/// prefix. Without a prefix the whole string is treated as base64 data with
/// `default_mime` as the MIME type. Empty or malformed base64 is rejected.
pub fn parse_base64(input: &str, default_mime: &str) -> Result<ImagePayload, ServiceError> {
    let (mime_type, data) = match DATA_URI_PATTERN.captures(input) {
        Some(captures) => (
            captures.get(1).unwrap().as_str().to_string(),
            captures.get(2).unwrap().as_str(),
        ),
        None => (default_mime.to_string(), input),
    };

    if data.is_empty() {
        return Err(ServiceError::InvalidEncoding(
            "base64 data is empty".to_string(),
        ));
    }

    let bytes = BASE64_STANDARD
        .decode(data)
        .map_err(|e| ServiceError::InvalidEncoding(e.to_string()))?;

    Ok(ImagePayload { bytes, mime_type })
}

/// Re-encodes raw bytes as a `data:<mime>;base64,<payload>` string.
pub fn to_data_uri(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, BASE64_STANDARD.encode(bytes))
}
