use crate::errors::FetchError;
use crate::installer::Fetcher;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use std::path::Path;
use tokio::fs;

pub struct HttpRequest;
impl HttpRequest {
    pub async fn get_bytes(client: &Client, url: &str) -> Result<Bytes, FetchError> {
        let response = client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        Ok(response.bytes().await?)
    }
}

pub struct HttpFetcher {
    client: Client,
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str, destination: &Path) -> Result<(), FetchError> {
        log::debug!("GET {url}");
        let bytes = HttpRequest::get_bytes(&self.client, url).await?;
        log::debug!("Downloaded {} bytes from {url}", bytes.len());

        fs::write(destination, &bytes)
            .await
            .map_err(|source| FetchError::Write {
                path: destination.to_path_buf(),
                source,
            })
    }
}

impl HttpFetcher {
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    async fn serve_once(status_line: &'static str, body: &'static [u8]) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 1024];
            let _ = socket.read(&mut request).await;

            let head = format!(
                "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            socket.write_all(head.as_bytes()).await.unwrap();
            socket.write_all(body).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{address}/go1.21.0.linux-amd64.tar.gz")
    }

    fn fetcher() -> HttpFetcher {
        HttpFetcher::with_client(Client::builder().no_proxy().build().unwrap())
    }

    #[tokio::test]
    async fn writes_response_body_to_destination() {
        let url = serve_once("200 OK", b"archive-bytes").await;
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("go1.21.0.linux-amd64.tar.gz");

        fetcher().fetch(&url, &destination).await.unwrap();

        assert_eq!(std::fs::read(&destination).unwrap(), b"archive-bytes");
    }

    #[tokio::test]
    async fn error_status_is_reported_and_nothing_is_written() {
        let url = serve_once("404 Not Found", b"not found").await;
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("go9.9.9.linux-amd64.tar.gz");

        let err = fetcher().fetch(&url, &destination).await.unwrap_err();

        assert!(matches!(err, FetchError::Status { status, .. } if status == reqwest::StatusCode::NOT_FOUND));
        assert!(!destination.exists());
    }
}
