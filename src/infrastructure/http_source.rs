// SPDX-License-Identifier: MPL-2.0
//! HTTP content source.
//!
//! Requests `GET {endpoint}?page=N&pageSize=M&category=C` for pages and
//! `GET {endpoint}/featured?category=C` for the featured selection. Both
//! answer with a `{"items": [...]}` JSON envelope.

use crate::application::port::{FetchError, PageRequest, PageSource};
use crate::content::PageEnvelope;
use crate::domain::gallery::ContextKey;
use futures_util::future::{BoxFuture, FutureExt};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::time::Duration;

const USER_AGENT: &str = concat!("FolioGallery/", env!("CARGO_PKG_VERSION"));

/// [`PageSource`] backed by a JSON endpoint.
#[derive(Debug, Clone)]
pub struct HttpPageSource<T> {
    client: reqwest::Client,
    endpoint: String,
    _item: PhantomData<fn() -> T>,
}

impl<T> HttpPageSource<T> {
    /// Creates a source for `endpoint` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Network`] if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            _item: PhantomData,
        })
    }

    /// Returns the endpoint pages are requested from.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Maps a transport error onto the fetch taxonomy.
fn classify(err: &reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else if err.is_decode() {
        FetchError::Decode(err.to_string())
    } else if let Some(status) = err.status() {
        FetchError::Status(status.as_u16())
    } else {
        FetchError::Network(err.to_string())
    }
}

async fn get_items<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<Vec<T>, FetchError> {
    let response = request.send().await.map_err(|e| classify(&e))?;

    if !response.status().is_success() {
        return Err(FetchError::Status(response.status().as_u16()));
    }

    let body = response.bytes().await.map_err(|e| classify(&e))?;
    let envelope: PageEnvelope<T> =
        serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))?;
    Ok(envelope.items)
}

impl<T: DeserializeOwned + Send + 'static> PageSource<T> for HttpPageSource<T> {
    fn fetch_page(&self, request: &PageRequest) -> BoxFuture<'static, Result<Vec<T>, FetchError>> {
        let builder = self.client.get(&self.endpoint).query(&[
            ("page", request.page.value().to_string()),
            ("pageSize", request.page_size.value().to_string()),
            ("category", request.context.to_string()),
        ]);
        get_items(builder).boxed()
    }

    fn fetch_featured(&self, context: &ContextKey) -> BoxFuture<'static, Result<Vec<T>, FetchError>> {
        let builder = self
            .client
            .get(format!("{}/featured", self.endpoint))
            .query(&[("category", context.to_string())]);
        get_items(builder).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::RequestToken;
    use crate::content::Artwork;
    use crate::domain::gallery::{PageCursor, PageSize};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves one canned HTTP response and returns the request head it received.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let mut buffer = vec![0_u8; 4096];
            let read = socket.read(&mut buffer).await.expect("read");
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.expect("write");
            String::from_utf8_lossy(&buffer[..read]).to_string()
        });
        (format!("http://{addr}/api/items"), handle)
    }

    fn second_page() -> PageRequest {
        PageRequest {
            token: RequestToken {
                context: ContextKey::from("work"),
                id: 1,
            },
            page: PageCursor::FIRST.advanced(),
            page_size: PageSize::new(12),
            context: ContextKey::from("work"),
        }
    }

    #[tokio::test]
    async fn fetches_and_decodes_a_page() {
        let (endpoint, server) =
            serve_once("200 OK", r#"{"items":[{"id":5,"title":"Five"}]}"#).await;
        let source: HttpPageSource<Artwork> =
            HttpPageSource::new(endpoint, Duration::from_secs(5)).expect("client");

        let items = source.fetch_page(&second_page()).await.expect("page");
        let request_head = server.await.expect("server task");

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Five");
        assert!(request_head.starts_with("GET /api/items?page=2&pageSize=12&category=work"));
    }

    #[tokio::test]
    async fn server_errors_map_to_status() {
        let (endpoint, server) = serve_once("500 Internal Server Error", "{}").await;
        let source: HttpPageSource<Artwork> =
            HttpPageSource::new(endpoint, Duration::from_secs(5)).expect("client");

        let result = source.fetch_page(&second_page()).await;
        let _ = server.await;

        assert_eq!(result.unwrap_err(), FetchError::Status(500));
    }

    #[tokio::test]
    async fn malformed_body_maps_to_decode() {
        let (endpoint, server) = serve_once("200 OK", "not json").await;
        let source: HttpPageSource<Artwork> =
            HttpPageSource::new(endpoint, Duration::from_secs(5)).expect("client");

        let result = source.fetch_featured(&ContextKey::from("play")).await;
        let request_head = server.await.expect("server task");

        assert!(matches!(result, Err(FetchError::Decode(_))));
        assert!(request_head.starts_with("GET /api/items/featured?category=play"));
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let source: HttpPageSource<Artwork> =
            HttpPageSource::new("https://cms.example/api/", Duration::from_secs(1))
                .expect("client");
        assert_eq!(source.endpoint(), "https://cms.example/api");
    }
}
