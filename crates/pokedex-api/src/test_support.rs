//! Fakes shared by the unit tests in this crate.

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Mutex;

use crate::error::TransportError;
use crate::transport::Fetch;

/// Serves canned bodies by URL and records every request.
#[derive(Default)]
pub struct StaticFetch {
    bodies: HashMap<String, Vec<u8>>,
    requests: Mutex<Vec<String>>,
}

impl StaticFetch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        self.bodies.insert(url.to_owned(), body.into());
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Fetch for StaticFetch {
    async fn get(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        self.requests.lock().unwrap().push(url.to_owned());
        self.bodies
            .get(url)
            .cloned()
            .ok_or_else(|| TransportError::Status {
                status: 404,
                url: url.to_owned(),
            })
    }
}

/// A real PNG of the given size.
pub fn png(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::new(width, height);
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
    buf.into_inner()
}

pub fn thumbnail_url(id: u32) -> String {
    format!("https://sprites.test/pokemon/{id}.png")
}

pub fn artwork_url(id: u32) -> String {
    format!("https://sprites.test/pokemon/other/official-artwork/{id}.png")
}

/// A response body shaped like PokeAPI's, pointing at the sprite URLs above.
pub fn pokemon_json(name: &str, id: u32, height: u32, weight: u32) -> String {
    format!(
        r#"{{
            "name": "{name}",
            "id": {id},
            "height": {height},
            "weight": {weight},
            "base_experience": 64,
            "sprites": {{
                "front_default": "{thumb}",
                "back_default": null,
                "other": {{
                    "official-artwork": {{ "front_default": "{art}" }}
                }}
            }}
        }}"#,
        thumb = thumbnail_url(id),
        art = artwork_url(id),
    )
}

/// Fetcher serving both images for `id`.
pub fn fetch_with_images(id: u32) -> StaticFetch {
    StaticFetch::new()
        .with(&thumbnail_url(id), png(2, 2))
        .with(&artwork_url(id), png(8, 8))
}

/// Serve one raw HTTP `response` on a loopback port and return the URL of
/// `path` on it. The connection closes after the response.
pub async fn serve_once(path: &str, response: &'static str) -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
    });
    format!("http://{addr}{path}")
}

/// A loopback URL nothing is listening on.
pub async fn closed_port_url(path: &str) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}{path}")
}

pub const NOT_FOUND: &str =
    "HTTP/1.1 404 Not Found\r\nContent-Length: 9\r\nConnection: close\r\n\r\nNot Found";
