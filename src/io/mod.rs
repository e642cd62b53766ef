//! Archive byte sources.
//!
//! The pipeline needs the whole archive in memory before handing it to the
//! ZIP library. A [`ByteSource`] knows how to produce those bytes, either
//! from the local filesystem or from an HTTP(S) URL.

mod http;
mod local;

pub use http::HttpSource;
pub use local::LocalFile;

use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;
use std::path::PathBuf;
use std::sync::Arc;

use crate::effect::Effect;

/// Trait for sources that can be read in full
#[async_trait]
pub trait ByteSource: Send + Sync {
    /// Read every byte of the source
    async fn read_all(&self) -> Result<Bytes>;

    /// Human-readable location, recorded as the archive's source path
    fn location(&self) -> &str;
}

/// Check whether a location should be fetched over HTTP.
pub fn is_http_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Pick the source matching `location`.
pub fn source_for(location: &str) -> Arc<dyn ByteSource> {
    if is_http_url(location) {
        Arc::new(HttpSource::new(location.to_string()))
    } else {
        Arc::new(LocalFile::new(location))
    }
}

/// Deferred read of a whole source.
pub fn read_source(source: Arc<dyn ByteSource>) -> Effect<Bytes> {
    Effect::new(move || {
        let source = Arc::clone(&source);
        async move { source.read_all().await }
    })
}

/// Deferred read of a local file.
pub fn read_file_bytes(path: impl Into<PathBuf>) -> Effect<Bytes> {
    read_source(Arc::new(LocalFile::new(path)))
}

/// Deferred download of a remote archive.
pub fn fetch_bytes(url: impl Into<String>) -> Effect<Bytes> {
    read_source(Arc::new(HttpSource::new(url.into())))
}

/// Deferred read of either a file path or an HTTP(S) URL.
pub fn read_bytes(location: &str) -> Effect<Bytes> {
    read_source(source_for(location))
}
