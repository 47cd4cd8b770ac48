mod basic;
mod client;
mod headers;

pub use basic::BasicClient;
pub use client::HttpClient;
pub use headers::DefaultHeaders;

use anyhow::{Result, anyhow};
use tracing::debug;

/// GETs `url` and returns the body. Non-2xx responses are errors carrying
/// the status and whatever body the server sent.
#[tracing::instrument(skip(client))]
pub async fn fetch_bytes<C: HttpClient>(client: &C, url: &str) -> Result<Vec<u8>> {
    let req = reqwest::Request::new(reqwest::Method::GET, url.parse()?);

    let resp = client.execute(req).await?;
    let status = resp.status();

    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(anyhow!("GET {url} returned status {status}: {body}"));
    }

    let bytes = resp.bytes().await?;
    debug!(status = status.as_u16(), bytes = bytes.len(), "Response received");
    Ok(bytes.to_vec())
}

#[cfg(test)]
pub(crate) mod mock {
    use super::HttpClient;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Serves canned bodies by exact URL and 404s everything else.
    #[derive(Default)]
    pub struct MockClient {
        routes: HashMap<String, (u16, String)>,
        requested: Mutex<Vec<String>>,
    }

    impl MockClient {
        pub fn with_route(mut self, url: &str, status: u16, body: &str) -> Self {
            self.routes
                .insert(url.to_string(), (status, body.to_string()));
            self
        }

        pub fn requested(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpClient for MockClient {
        async fn execute(&self, req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
            let url = req.url().to_string();
            self.requested.lock().unwrap().push(url.clone());

            let (status, body) = self
                .routes
                .get(&url)
                .cloned()
                .unwrap_or((404, "not found".to_string()));

            let resp = axum::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap();
            Ok(resp.into())
        }
    }
}
