use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use std::time::Duration;

use super::ByteSource;
use crate::error::Error;
use anyhow::Result;

/// HTTP(S) source downloading the whole archive with one GET
pub struct HttpSource {
    url: String,
    timeout: Duration,
    max_retry: u32,
}

impl HttpSource {
    pub fn new(url: String) -> Self {
        Self {
            url,
            timeout: Duration::from_secs(30),
            max_retry: 10,
        }
    }

    /// Override how many connection attempts are made before giving up
    pub fn with_max_retry(mut self, max_retry: u32) -> Self {
        self.max_retry = max_retry.max(1);
        self
    }

    fn fetch_error(&self, source: reqwest::Error) -> Error {
        Error::Fetch {
            url: self.url.clone(),
            source,
        }
    }
}

#[async_trait]
impl ByteSource for HttpSource {
    async fn read_all(&self) -> Result<Bytes> {
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| self.fetch_error(e))?;

        let mut retry_count = 0;

        loop {
            match client.get(&self.url).send().await {
                Ok(resp) => {
                    if !resp.status().is_success() {
                        return Err(Error::HttpStatus {
                            url: self.url.clone(),
                            status: resp.status().as_u16(),
                        }
                        .into());
                    }

                    let bytes = resp.bytes().await.map_err(|e| self.fetch_error(e))?;
                    tracing::debug!(url = %self.url, bytes = bytes.len(), "fetched archive");
                    return Ok(bytes);
                }
                Err(e) if e.is_timeout() || e.is_connect() => {
                    retry_count += 1;
                    if retry_count >= self.max_retry {
                        return Err(self.fetch_error(e).into());
                    }
                    tracing::warn!(
                        url = %self.url,
                        "connection error, retry {}/{}: {}",
                        retry_count,
                        self.max_retry,
                        e
                    );
                    tokio::time::sleep(Duration::from_millis(500 * retry_count as u64)).await;
                }
                Err(e) => return Err(self.fetch_error(e).into()),
            }
        }
    }

    fn location(&self) -> &str {
        &self.url
    }
}
