use crate::fetch::client::HttpClient;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue, USER_AGENT};

/// An [`HttpClient`] wrapper that adds a fixed set of headers to every
/// request. Headers already present on the request are left untouched.
///
/// api.weather.gov rejects requests without a `User-Agent`, so the NWS
/// client is always built on top of [`DefaultHeaders::nws`].
pub struct DefaultHeaders<C> {
    inner: C,
    headers: HeaderMap,
}

impl<C> DefaultHeaders<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            headers: HeaderMap::new(),
        }
    }

    /// Adds `name: value`, failing if either is not a valid header token.
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self> {
        let name = HeaderName::from_bytes(name.as_bytes())?;
        let value = HeaderValue::from_str(value)?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// `User-Agent` plus `Accept: application/geo+json`, as the NWS API asks for.
    pub fn nws(inner: C, user_agent: &str) -> Result<Self> {
        Self::new(inner)
            .with_header(USER_AGENT.as_str(), user_agent)?
            .with_header(ACCEPT.as_str(), "application/geo+json")
    }
}

#[async_trait]
impl<C: HttpClient> HttpClient for DefaultHeaders<C> {
    async fn execute(&self, mut req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        for (name, value) in self.headers.iter() {
            req.headers_mut()
                .entry(name.clone())
                .or_insert_with(|| value.clone());
        }
        self.inner.execute(req).await
    }
}
