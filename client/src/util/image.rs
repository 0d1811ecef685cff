//! Image file to data-URL conversion for inline previews.
//!
//! SYSTEM CONTEXT
//! ==============
//! The equipment form embeds the selected picture directly as an `<img src>`
//! value, so nothing is uploaded or fetched. Encoding is a pure function and
//! is testable natively; the browser read path is `csr`-only.
//!
//! ERROR HANDLING
//! ==============
//! Read failures come back as `ImageLoadError` so the admin controller can
//! surface a notice instead of dropping the selection silently.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

const FALLBACK_MIME: &str = "application/octet-stream";

/// Failure while turning a selected file into a data URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageLoadError {
    #[error("not an image file: {0}")]
    NotAnImage(String),
    #[error("file read failed: {0}")]
    Read(String),
}

/// Encode raw bytes as a `data:` URL.
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = mime.trim();
    let mime = if mime.is_empty() { FALLBACK_MIME } else { mime };
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Whether `mime` satisfies the file input's `image/*` accept filter.
pub fn is_image_mime(mime: &str) -> bool {
    mime.trim()
        .to_ascii_lowercase()
        .strip_prefix("image/")
        .is_some_and(|subtype| !subtype.is_empty())
}

/// Read a browser `File` fully and return it as a data URL.
///
/// # Errors
///
/// Returns `NotAnImage` when the file's MIME type is outside `image/*`, or
/// `Read` when the browser rejects the read.
#[cfg(feature = "csr")]
pub async fn load_as_data_url(file: &web_sys::File) -> Result<String, ImageLoadError> {
    let mime = file.type_();
    if !is_image_mime(&mime) {
        return Err(ImageLoadError::NotAnImage(file.name()));
    }
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| ImageLoadError::Read(format!("{e:?}")))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(encode_data_url(&mime, &bytes))
}
