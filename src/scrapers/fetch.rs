//! Static page fetching over plain HTTP.
//!
//! No JavaScript runs, so lazily loaded cards never appear. This is enough
//! for the headline list, which is present in the initial markup.

use super::PageSource;
use crate::config::ScrapeConfig;
use crate::error::{Result, ScrapeError};
use reqwest::Client;
use tracing::{info, instrument};

/// Fetches pages with a single GET request.
#[derive(Debug, Clone)]
pub struct StaticFetcher {
    client: Client,
}

impl StaticFetcher {
    pub fn new(config: &ScrapeConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self { client })
    }
}

impl PageSource for StaticFetcher {
    #[instrument(level = "info", skip(self))]
    async fn fetch_html(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        info!(bytes = body.len(), %status, "Fetched page");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response on a local port.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 2048];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: text/html; charset=utf-8\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });
        format!("http://{addr}/news")
    }

    #[tokio::test]
    async fn test_fetch_html_success() {
        let url = serve_once("200 OK", "<h3 class=\"gs-c-promo-heading__title\">Hi</h3>").await;
        let fetcher = StaticFetcher::new(&ScrapeConfig::default()).unwrap();

        let body = fetcher.fetch_html(&url).await.unwrap();
        assert!(body.contains("gs-c-promo-heading__title"));
    }

    #[tokio::test]
    async fn test_fetch_html_non_success_status() {
        let url = serve_once("503 Service Unavailable", "down").await;
        let fetcher = StaticFetcher::new(&ScrapeConfig::default()).unwrap();

        match fetcher.fetch_html(&url).await {
            Err(ScrapeError::Status { status, url: failed }) => {
                assert_eq!(status.as_u16(), 503);
                assert_eq!(failed, url);
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_html_connection_refused() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let fetcher = StaticFetcher::new(&ScrapeConfig::default()).unwrap();
        let result = fetcher.fetch_html(&format!("http://{addr}/")).await;
        assert!(matches!(result, Err(ScrapeError::Fetch(_))));
    }
}
