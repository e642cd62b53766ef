//! Metadata extraction on top of the `zip` crate.
//!
//! Only the central directory (and, through the library, each entry's local
//! header) is looked at; no decompressor is ever set up, so entries using
//! methods the library cannot decode are still listed. Everything that
//! touches `zip` types lives in this file so the library can be replaced
//! without changing the data model.

use std::io::Cursor;

use anyhow::Result;
use bytes::Bytes;
use chrono::{Duration, NaiveDate};
use zip::ZipArchive;

use super::model::{ArchiveEntryInfo, ArchiveInfo, CompressionMethod};
use crate::effect::Effect;
use crate::error::Error;

/// Immutable, shareable archive bytes.
pub type ArchiveBuffer = Bytes;

/// View raw bytes as an [`ArchiveBuffer`] without copying them.
pub async fn bytes_to_buffer(raw: Bytes) -> Result<ArchiveBuffer> {
    Ok(raw)
}

/// Deferred metadata parse of an in-memory archive.
///
/// The synchronous reader runs on the blocking pool and owns the archive
/// handle until it returns. `source_path` of the result is left empty.
pub fn parse_archive_metadata(buffer: ArchiveBuffer) -> Effect<ArchiveInfo> {
    Effect::new(move || {
        let buffer = buffer.clone();
        async move { tokio::task::spawn_blocking(move || read_metadata(buffer)).await? }
    })
}

fn read_metadata(buffer: ArchiveBuffer) -> Result<ArchiveInfo> {
    let invalid = |source| Error::InvalidArchive { source };

    let mut archive = ZipArchive::new(Cursor::new(buffer)).map_err(invalid)?;
    let comment = String::from_utf8_lossy(archive.comment()).into_owned();

    let mut entries = Vec::with_capacity(archive.len());
    for index in 0..archive.len() {
        let file = archive.by_index_raw(index).map_err(invalid)?;
        entries.push(ArchiveEntryInfo {
            name: file.name().to_string(),
            comment: file.comment().to_string(),
            modified_epoch_seconds: epoch_seconds(file.name(), &file.last_modified()),
            size: 0,
            method: method_from_zip(file.compression()),
            is_directory: file.is_dir(),
        });
    }

    tracing::debug!(entries = entries.len(), "parsed archive metadata");

    Ok(ArchiveInfo {
        comment,
        source_path: String::new(),
        entries,
    })
}

/// Translate the library's method into the closed enumeration.
fn method_from_zip(method: zip::CompressionMethod) -> CompressionMethod {
    match method {
        zip::CompressionMethod::Stored => CompressionMethod::Store,
        zip::CompressionMethod::Deflated => CompressionMethod::Deflate,
        _ => CompressionMethod::Unspecified,
    }
}

/// DOS date/time fields read as UTC, in whole seconds since the Unix epoch.
///
/// Out-of-range fields carry into the neighbouring unit instead of being
/// rejected, so an all-zero stamp is 1979-11-30T00:00:00Z.
fn epoch_seconds(name: &str, modified: &zip::DateTime) -> i64 {
    let months = i32::from(modified.year()) * 12 + i32::from(modified.month()) - 1;
    let year = months.div_euclid(12);
    let month = months.rem_euclid(12) as u32 + 1;
    let timestamp = NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.and_hms_opt(0, 0, 0))
        .map(|midnight| {
            midnight
                + Duration::days(i64::from(modified.day()) - 1)
                + Duration::hours(i64::from(modified.hour()))
                + Duration::minutes(i64::from(modified.minute()))
                + Duration::seconds(i64::from(modified.second()))
        })
        .map(|datetime| datetime.and_utc().timestamp());

    match timestamp {
        Some(seconds) => seconds,
        None => {
            tracing::warn!(entry = name, "unrepresentable modification time, using 0");
            0
        }
    }
}
