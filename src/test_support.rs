//! One-shot HTTP servers for exercising the service client and controller.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

/// A request observed by a mock server.
#[derive(Clone, Debug)]
pub(crate) struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

impl CapturedRequest {
    pub(crate) fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }
}

/// Mock endpoint answering exactly one request.
pub(crate) struct MockService {
    pub url: String,
    requests: Receiver<CapturedRequest>,
    release: Option<Sender<()>>,
}

impl MockService {
    /// Respond immediately with `status` and a JSON `body`.
    pub(crate) fn respond(status: u16, body: &str) -> Self {
        Self::spawn(status, body.to_string(), false)
    }

    /// Hold the response until [`MockService::release`] is called.
    pub(crate) fn gated(status: u16, body: &str) -> Self {
        Self::spawn(status, body.to_string(), true)
    }

    pub(crate) fn release(&mut self) {
        if let Some(tx) = self.release.take() {
            let _ = tx.send(());
        }
    }

    /// Wait for the request the server received.
    pub(crate) fn request(&self) -> CapturedRequest {
        self.requests
            .recv_timeout(Duration::from_secs(5))
            .expect("mock service received a request")
    }

    fn spawn(status: u16, body: String, gated: bool) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let (request_tx, requests) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel::<()>();
        thread::spawn(move || {
            let Ok((stream, _)) = listener.accept() else {
                return;
            };
            let Some((captured, mut stream)) = read_request(stream) else {
                return;
            };
            let _ = request_tx.send(captured);
            if gated && release_rx.recv().is_err() {
                return;
            }
            let response = format!(
                "HTTP/1.1 {status} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                reason(status),
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
        });
        Self {
            url,
            requests,
            release: gated.then_some(release_tx),
        }
    }
}

/// Serve a pre-built raw HTTP response to the first connection.
pub(crate) fn serve_raw_once(response: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let response = response.to_string();
    thread::spawn(move || {
        if let Ok((stream, _)) = listener.accept() {
            if let Some((_, mut stream)) = read_request(stream) {
                let _ = stream.write_all(response.as_bytes());
            }
        }
    });
    format!("http://{addr}")
}

/// Address that refuses connections.
pub(crate) fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

fn read_request(stream: TcpStream) -> Option<(CapturedRequest, TcpStream)> {
    let mut reader = BufReader::new(stream);
    let mut request_line = String::new();
    reader.read_line(&mut request_line).ok()?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next()?.to_string();
    let path = parts.next()?.to_string();

    let mut content_length = 0usize;
    let mut content_type = None;
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).ok()?;
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            let value = value.trim();
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.parse().unwrap_or(0);
            } else if name.eq_ignore_ascii_case("content-type") {
                content_type = Some(value.to_string());
            }
        }
    }
    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).ok()?;
    let captured = CapturedRequest {
        method,
        path,
        content_type,
        body: String::from_utf8_lossy(&body).into_owned(),
    };
    Some((captured, reader.into_inner()))
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        422 => "Unprocessable Entity",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    }
}

/// Smallest valid PNG (`width` x `height`, opaque red) as raw bytes.
pub(crate) fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = image::RgbaImage::from_pixel(width, height, image::Rgba([255, 0, 0, 255]));
    let mut bytes = Vec::new();
    image
        .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}

/// `png_bytes` wrapped in a `data:image/png;base64,` URI.
pub(crate) fn png_data_uri(width: u32, height: u32) -> String {
    use base64::Engine as _;
    let encoded = base64::engine::general_purpose::STANDARD.encode(png_bytes(width, height));
    format!("data:image/png;base64,{encoded}")
}
