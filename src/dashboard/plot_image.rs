//! Turning plot references from a training report into RGBA pixels.

use base64::Engine;

use crate::service::ServiceClient;

#[derive(Debug, thiserror::Error)]
pub enum PlotImageError {
    #[error("image reference is empty")]
    Empty,
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("unsupported data URI (expected base64 encoding)")]
    UnsupportedDataUri,
    #[error("could not decode image: {0}")]
    Image(#[from] image::ImageError),
    #[error("download failed: {0}")]
    Fetch(String),
}

/// How a plot reference should be resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlotSource<'a> {
    /// Payload of a `data:` URI (still encoded).
    DataUri(&'a str),
    Url(&'a str),
    Base64(&'a str),
}

impl<'a> PlotSource<'a> {
    pub fn classify(reference: &'a str) -> Self {
        let reference = reference.trim();
        if reference.starts_with("data:") {
            Self::DataUri(reference)
        } else if reference.starts_with("http://") || reference.starts_with("https://") {
            Self::Url(reference)
        } else {
            Self::Base64(reference)
        }
    }
}

/// Decoded image ready to upload as a texture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedPlot {
    pub width: u32,
    pub height: u32,
    /// Unmultiplied RGBA8, row-major.
    pub rgba: Vec<u8>,
}

/// Decode encoded image bytes (PNG, JPEG, ...) into RGBA.
pub fn decode_bytes(bytes: &[u8]) -> Result<DecodedPlot, PlotImageError> {
    let image = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = image.dimensions();
    Ok(DecodedPlot {
        width,
        height,
        rgba: image.into_raw(),
    })
}

/// Decode a reference that carries its own bytes (data URI or bare base64).
///
/// URLs are rejected with [`PlotImageError::Fetch`]; use [`load_plot`] for those.
pub fn decode_embedded(reference: &str) -> Result<DecodedPlot, PlotImageError> {
    match PlotSource::classify(reference) {
        PlotSource::DataUri(uri) => decode_bytes(&data_uri_payload(uri)?),
        PlotSource::Base64(payload) => decode_bytes(&decode_base64(payload)?),
        PlotSource::Url(url) => Err(PlotImageError::Fetch(format!(
            "{url} must be fetched before decoding"
        ))),
    }
}

/// Resolve any reference, downloading URLs through `client`.
///
/// Blocks on network I/O for URLs; call from a worker thread.
pub fn load_plot(client: &ServiceClient, reference: &str) -> Result<DecodedPlot, PlotImageError> {
    if reference.trim().is_empty() {
        return Err(PlotImageError::Empty);
    }
    match PlotSource::classify(reference) {
        PlotSource::Url(url) => {
            let bytes = client.fetch_bytes(url).map_err(PlotImageError::Fetch)?;
            decode_bytes(&bytes)
        }
        _ => decode_embedded(reference),
    }
}

fn data_uri_payload(uri: &str) -> Result<Vec<u8>, PlotImageError> {
    let rest = uri.strip_prefix("data:").unwrap_or(uri);
    let (meta, payload) = rest
        .split_once(',')
        .ok_or(PlotImageError::UnsupportedDataUri)?;
    if !meta
        .split(';')
        .any(|part| part.eq_ignore_ascii_case("base64"))
    {
        return Err(PlotImageError::UnsupportedDataUri);
    }
    decode_base64(payload)
}

fn decode_base64(payload: &str) -> Result<Vec<u8>, PlotImageError> {
    let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(PlotImageError::Empty);
    }
    Ok(base64::engine::general_purpose::STANDARD.decode(compact)?)
}
