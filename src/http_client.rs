//! HTTP agent construction and bounded response helpers.

use std::io::{self, Read};
use std::time::Duration;

use crate::config::NetworkSettings;

const USER_AGENT: &str = concat!("aeroprofit/", env!("CARGO_PKG_VERSION"));

/// Build an HTTP agent from the configured network settings.
///
/// Only connection setup is bounded by default; read and write timeouts are
/// applied when `read_timeout_secs` is set.
pub(crate) fn build_agent(network: &NetworkSettings) -> ureq::Agent {
    let mut builder = ureq::AgentBuilder::new()
        .user_agent(USER_AGENT)
        .timeout_connect(Duration::from_secs(network.connect_timeout_secs));
    if let Some(secs) = network.read_timeout_secs {
        let timeout = Duration::from_secs(secs);
        builder = builder.timeout_read(timeout).timeout_write(timeout);
    }
    builder.build()
}

/// Read a response into memory, enforcing a maximum byte size.
///
/// Oversized bodies fail with [`io::ErrorKind::InvalidData`]; other kinds come
/// from the underlying connection.
pub(crate) fn read_response_bytes(
    response: ureq::Response,
    max_bytes: usize,
) -> Result<Vec<u8>, io::Error> {
    check_content_length(&response, max_bytes)?;
    let mut limited = response.into_reader().take(max_bytes as u64 + 1);
    let mut bytes = Vec::new();
    limited.read_to_end(&mut bytes)?;
    if bytes.len() > max_bytes {
        return Err(too_large(format!("Response exceeded {max_bytes} bytes")));
    }
    Ok(bytes)
}

/// Read a response as UTF-8 text, enforcing a maximum byte size.
pub(crate) fn read_response_text(
    response: ureq::Response,
    max_bytes: usize,
) -> Result<String, String> {
    let bytes = read_response_bytes(response, max_bytes).map_err(|err| err.to_string())?;
    String::from_utf8(bytes).map_err(|err| err.to_string())
}

fn check_content_length(response: &ureq::Response, max_bytes: usize) -> Result<(), io::Error> {
    let Some(length) = response
        .header("Content-Length")
        .and_then(|value| value.parse::<u64>().ok())
    else {
        return Ok(());
    };
    if length > max_bytes as u64 {
        return Err(too_large(format!("Response too large: {length} bytes")));
    }
    Ok(())
}

fn too_large(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::serve_raw_once;

    fn agent() -> ureq::Agent {
        build_agent(&NetworkSettings::default())
    }

    #[test]
    fn read_response_bytes_rejects_content_length_over_max() {
        let url = serve_raw_once(concat!(
            "HTTP/1.1 200 OK\r\n",
            "Content-Length: 100\r\n",
            "\r\n",
            "ok"
        ));
        let response = agent().get(&url).call().unwrap();
        let err = read_response_bytes(response, 10).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn read_response_bytes_rejects_body_over_max() {
        let body = "a".repeat(32);
        let url = serve_raw_once(&format!("HTTP/1.0 200 OK\r\n\r\n{body}"));
        let response = agent().get(&url).call().unwrap();
        let err = read_response_bytes(response, 16).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn read_response_text_accepts_under_limit() {
        let body = "hello";
        let url = serve_raw_once(&format!(
            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\n\r\n{}",
            body.len(),
            body
        ));
        let response = agent().get(&url).call().unwrap();
        assert_eq!(read_response_text(response, 16).unwrap(), body);
    }

    #[test]
    fn agent_with_read_timeout_serves_requests() {
        let network = NetworkSettings {
            read_timeout_secs: Some(5),
            ..NetworkSettings::default()
        };
        let url = serve_raw_once("HTTP/1.1 204 No Content\r\n\r\n");
        let response = build_agent(&network).get(&url).call().unwrap();
        assert_eq!(response.status(), 204);
    }
}
