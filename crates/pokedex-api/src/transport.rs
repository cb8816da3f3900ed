//! Raw HTTP GET, behind a trait so the client can be exercised without a
//! network.

use std::future::Future;

use reqwest::Client;

use crate::error::TransportError;

/// Fetches the body behind a URL.
pub trait Fetch: Send + Sync {
    /// GET `url` and return the full body. Non-2xx responses are errors.
    fn get(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, TransportError>> + Send;
}

/// [`Fetch`] over a shared `reqwest` client, using the transport's default
/// timeouts.
#[derive(Clone)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    pub fn new(user_agent: &str) -> Result<Self, TransportError> {
        let http = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { http })
    }

    /// Check the HTTP response for errors.
    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, TransportError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let url = resp.url().to_string();
            tracing::debug!(status, url = %url, "upstream returned an error status");
            Err(TransportError::Status { status, url })
        }
    }
}

impl Fetch for HttpTransport {
    async fn get(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        let resp = self.http.get(url).send().await?;
        let resp = Self::check_response(resp).await?;
        Ok(resp.bytes().await?.to_vec())
    }
}
