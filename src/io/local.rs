use super::ByteSource;
use crate::error::Error;
use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;
use std::path::PathBuf;

/// Local file source
pub struct LocalFile {
    path: PathBuf,
    display: String,
}

impl LocalFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let display = path.display().to_string();
        Self { path, display }
    }
}

#[async_trait]
impl ByteSource for LocalFile {
    async fn read_all(&self) -> Result<Bytes> {
        let data = tokio::fs::read(&self.path)
            .await
            .map_err(|source| Error::ReadFile {
                path: self.path.clone(),
                source,
            })?;
        tracing::debug!(path = %self.display, bytes = data.len(), "read archive file");
        Ok(Bytes::from(data))
    }

    fn location(&self) -> &str {
        &self.display
    }
}
