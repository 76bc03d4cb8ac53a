use std::sync::Arc;

use axum::http::{header, HeaderMap};
use burrow_core::Shortener;

#[derive(Clone)]
pub struct AppState {
    shortener: Arc<dyn Shortener>,
    base_url: Option<String>,
}

impl AppState {
    /// `public_base_url` is the prefix for returned short URLs. Without it
    /// the prefix is derived from the request's `Host` header.
    pub fn new(shortener: Arc<dyn Shortener>, public_base_url: Option<String>) -> Self {
        Self {
            shortener,
            base_url: public_base_url,
        }
    }

    pub fn shortener(&self) -> &dyn Shortener {
        self.shortener.as_ref()
    }

    pub fn public_base_url(&self, headers: &HeaderMap) -> String {
        if let Some(base_url) = &self.base_url {
            return base_url.clone();
        }

        let host = headers
            .get(header::HOST)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("localhost");
        format!("http://{host}")
    }
}
