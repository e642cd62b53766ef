//! Writing archive metadata out.
//!
//! An entry writer turns one [`ArchiveEntryInfo`] into a deferred write. The
//! archive writer built from it starts every entry's write at once and
//! completes when all of them have, failing as soon as one fails.

use std::sync::Arc;

use anyhow::Result;
use futures::future::try_join_all;
use tokio::io::AsyncWriteExt;

use crate::archive::{ArchiveEntryInfo, ArchiveInfo};
use crate::effect::Effect;
use crate::error::Error;

/// Build an archive writer from a per-entry writer.
pub fn archive_writer<W>(entry_writer: W) -> impl Fn(ArchiveInfo) -> Effect<()> + Send + Sync + 'static
where
    W: Fn(ArchiveEntryInfo) -> Effect<()> + Send + Sync + 'static,
{
    let entry_writer = Arc::new(entry_writer);
    move |info: ArchiveInfo| {
        let entry_writer = Arc::clone(&entry_writer);
        let entries = Arc::new(info.entries);
        Effect::new(move || {
            let writes: Vec<_> = entries
                .iter()
                .map(|entry| entry_writer(entry.clone()))
                .collect();
            async move {
                try_join_all(writes.iter().map(|write| write.run()))
                    .await
                    .map(|_| ())
            }
        })
    }
}

/// Write one entry as a JSON line to standard output.
pub fn entry_to_stdout(entry: ArchiveEntryInfo) -> Effect<()> {
    let entry = Arc::new(entry);
    Effect::new(move || {
        let entry = Arc::clone(&entry);
        async move { write_line(&entry).await }
    })
}

async fn write_line(entry: &ArchiveEntryInfo) -> Result<()> {
    let line = json_line(entry)?;
    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(line.as_bytes())
        .await
        .map_err(|source| Error::Write { source })?;
    stdout
        .flush()
        .await
        .map_err(|source| Error::Write { source })?;
    Ok(())
}

/// Print every entry of `info` to standard output, one JSON line each.
pub fn print_archive(info: ArchiveInfo) -> Effect<()> {
    archive_writer(entry_to_stdout)(info)
}

/// Serialize an entry, newline included.
pub fn json_line(entry: &ArchiveEntryInfo) -> Result<String> {
    let mut line = entry.to_json_line().map_err(|source| Error::Encode {
        name: entry.name.clone(),
        source,
    })?;
    line.push('\n');
    Ok(line)
}
