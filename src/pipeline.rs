//! The archive metadata pipeline.
//!
//! ```text
//! read bytes -> bytes_to_buffer -> parse_archive_metadata -> print_archive
//! ```
//!
//! Each stage is a deferred effect chained with `bind`; building the
//! pipeline reads nothing.

use crate::archive::{ArchiveInfo, bytes_to_buffer, parse_archive_metadata};
use crate::effect::{Effect, lift};
use crate::io::read_bytes;
use crate::output::print_archive;

/// Deferred load of the archive at `location` (file path or HTTP(S) URL).
///
/// The returned [`ArchiveInfo`] carries `location` as its source path.
pub fn load_archive(location: &str) -> Effect<ArchiveInfo> {
    let source_path = location.to_string();
    read_bytes(location)
        .bind(lift(bytes_to_buffer))
        .bind(parse_archive_metadata)
        .map(move |info| info.with_source_path(source_path.clone()))
}

/// Deferred load of the archive at `location` followed by printing every
/// entry to standard output.
pub fn archive_to_stdout(location: &str) -> Effect<()> {
    load_archive(location)
        .map(|info| {
            tracing::info!(
                source = %info.source_path,
                entries = info.entries.len(),
                "loaded archive"
            );
            info
        })
        .bind(print_archive)
}
