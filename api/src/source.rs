//! Defines where the emoji catalog comes from.

use crate::catalog::SymbolCatalog;
use crate::error::CatalogError;
use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::info;

/// A service that can provide the emoji catalog.
pub trait CatalogSource {
    /// Fetches the full catalog. Called once per session.
    async fn fetch_catalog(&self) -> Result<SymbolCatalog, CatalogError>;
}

/// Decodes a response body into a catalog.
///
/// The body must be a JSON object whose values are all strings.
pub fn parse_catalog(body: &str) -> Result<SymbolCatalog, CatalogError> {
    Ok(serde_json::from_str(body)?)
}

/// Provides the catalog from GitHub's emoji API (or anything shaped like it).
pub mod github {
    use super::*;

    /// An implementation of the `CatalogSource` trait for GitHub.
    pub struct GitHubEmojis {
        endpoint: String,
    }

    impl GitHubEmojis {
        pub fn new(endpoint: impl Into<String>) -> Self {
            Self {
                endpoint: endpoint.into(),
            }
        }

        fn client() -> Result<reqwest::Client, CatalogError> {
            let builder = reqwest::Client::builder();
            // browsers set their own; api.github.com refuses requests without one
            #[cfg(not(target_arch = "wasm32"))]
            let builder = builder.user_agent(concat!("emoji-catalog/", env!("CARGO_PKG_VERSION")));
            Ok(builder.build()?)
        }
    }

    impl CatalogSource for GitHubEmojis {
        async fn fetch_catalog(&self) -> Result<SymbolCatalog, CatalogError> {
            debug!("fetching emoji catalog from {}", self.endpoint);

            let resp = Self::client()?.get(&self.endpoint).send().await?;

            let status = resp.status();
            if !status.is_success() {
                return Err(CatalogError::Status(status.as_u16()));
            }

            let body = resp.text().await?;
            let catalog = parse_catalog(&body)?;

            info!(
                "loaded {} emojies from {}",
                catalog.len(),
                self.endpoint
            );
            Ok(catalog)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::github::GitHubEmojis;
    use super::*;
    use tokio::io::AsyncReadExt;
    use tokio::io::AsyncWriteExt;
    use tokio::net::TcpListener;

    /// Answers a single request with `status` and `body`, returns its URL.
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request: Vec<u8> = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        format!("http://{addr}/emojis")
    }

    #[tokio::test]
    async fn non_success_status_is_reported() {
        let url = serve_once("403 Forbidden", r#"{"message": "rate limited"}"#).await;
        let err = GitHubEmojis::new(url).fetch_catalog().await.unwrap_err();
        assert!(matches!(err, CatalogError::Status(403)), "got {err:?}");
    }

    #[tokio::test]
    async fn wrong_body_shape_is_a_decode_error() {
        let url = serve_once("200 OK", r#"{"a":1}"#).await;
        let err = GitHubEmojis::new(url).fetch_catalog().await.unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn fetched_catalog_keeps_response_order() {
        let url = serve_once("200 OK", r#"{"zap": "u1", "+1": "u2", "100": "u3"}"#).await;
        let catalog = GitHubEmojis::new(url).fetch_catalog().await.unwrap();
        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["zap", "+1", "100"]);
    }

    #[test]
    fn parses_flat_object() {
        let catalog = parse_catalog(r#"{"+1": "https://x/1.png", "-1": "https://x/2.png"}"#).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("+1"), Some("https://x/1.png"));
    }

    #[test]
    fn empty_object_is_an_empty_catalog() {
        assert!(parse_catalog("{}").unwrap().is_empty());
    }

    #[test]
    fn rejects_wrong_shapes() {
        for body in [
            "",
            "[]",
            r#"["smile"]"#,
            r#"{"smile": 1}"#,
            r#"{"smile": {"url": "u"}}"#,
            r#"{"message": "API rate limit exceeded", "documentation_url": null}"#,
        ] {
            let err = parse_catalog(body).unwrap_err();
            assert!(
                matches!(err, CatalogError::Decode(_)),
                "{body:?} gave {err:?}"
            );
        }
    }
}
