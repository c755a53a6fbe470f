pub(super) const DEFAULT_BASE_URL: &str = "https://xgbregressor.bhaweshagrawal.com.np";

pub(super) const MIN_CONNECT_TIMEOUT_SECS: u64 = 1;
pub(super) const MAX_CONNECT_TIMEOUT_SECS: u64 = 300;
pub(super) const MIN_READ_TIMEOUT_SECS: u64 = 1;
pub(super) const MAX_READ_TIMEOUT_SECS: u64 = 3_600;
pub(super) const MIN_RESPONSE_BYTES: usize = 1024 * 1024;
pub(super) const MAX_RESPONSE_BYTES: usize = 256 * 1024 * 1024;

pub(super) fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

pub(super) fn default_connect_timeout_secs() -> u64 {
    10
}

/// Plots may arrive as embedded base64 images, so the cap is generous.
pub(super) fn default_max_response_bytes() -> usize {
    32 * 1024 * 1024
}

pub(super) fn clamp_connect_timeout(secs: u64) -> u64 {
    secs.clamp(MIN_CONNECT_TIMEOUT_SECS, MAX_CONNECT_TIMEOUT_SECS)
}

pub(super) fn clamp_read_timeout(secs: Option<u64>) -> Option<u64> {
    secs.map(|secs| secs.clamp(MIN_READ_TIMEOUT_SECS, MAX_READ_TIMEOUT_SECS))
}

pub(super) fn clamp_response_bytes(bytes: usize) -> usize {
    bytes.clamp(MIN_RESPONSE_BYTES, MAX_RESPONSE_BYTES)
}
