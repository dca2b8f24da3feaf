use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::app::{ExportError, Result};
use crate::fetcher::Fetcher;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = "sitemap-export";

/// Settings applied to every outbound request, feed fetch included.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Per-request timeout in seconds (default: 10)
    pub timeout_secs: u64,

    /// User-Agent header value
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(config.timeout())
            .gzip(true)
            .brotli(true);

        if !config.user_agent.is_empty() {
            builder = builder.user_agent(config.user_agent.clone());
        }

        let client = builder.build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ExportError::fetch(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExportError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ExportError::fetch(url, e))?;

        tracing::debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    #[test]
    fn test_default_config_values() {
        let config = HttpConfig::default();
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.user_agent, "sitemap-export");
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: HttpConfig = toml::from_str("user_agent = \"bot/1.0\"").unwrap();
        assert_eq!(config.user_agent, "bot/1.0");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_client_builds_from_config() {
        let config = HttpConfig {
            timeout_secs: 3,
            user_agent: "bot/1.0".into(),
        };
        assert!(HttpFetcher::new(&config).is_ok());
    }

    /// Serves one connection with `response` and returns the raw request.
    async fn serve_once(response: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/feed.xml", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            request
        });

        (url, handle)
    }

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
        }
        String::from_utf8_lossy(&request).to_lowercase()
    }

    fn fetcher(timeout_secs: u64) -> HttpFetcher {
        HttpFetcher::new(&HttpConfig {
            timeout_secs,
            user_agent: "bot/1.0".into(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_sends_user_agent_and_returns_body() {
        let (url, server) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Length: 9\r\nConnection: close\r\n\r\n<urlset/>",
        )
        .await;

        let body = fetcher(5).fetch(&url).await.unwrap();

        assert_eq!(body, b"<urlset/>");
        let request = server.await.unwrap();
        assert!(request.starts_with("get /feed.xml "));
        assert!(request.contains("user-agent: bot/1.0\r\n"), "{}", request);
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let (url, server) = serve_once(
            "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await;

        let err = fetcher(5).fetch(&url).await.unwrap_err();

        assert!(matches!(
            err,
            ExportError::HttpStatus { status, .. } if status == reqwest::StatusCode::NOT_FOUND
        ));
        assert!(server.await.unwrap().contains("user-agent: bot/1.0"));
    }

    #[tokio::test]
    async fn test_silent_server_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/slow", listener.local_addr().unwrap());
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            read_request(&mut socket).await;
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let started = std::time::Instant::now();
        let err = fetcher(1).fetch(&url).await.unwrap_err();

        assert!(matches!(err, ExportError::Fetch { .. }), "{}", err);
        assert!(started.elapsed() < Duration::from_secs(4));
        server.abort();
    }
}
