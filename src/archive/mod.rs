//! ZIP archive metadata.
//!
//! - [`model`]: the values handed to the printer ([`ArchiveInfo`],
//!   [`ArchiveEntryInfo`], [`CompressionMethod`])
//! - [`parser`]: turns archive bytes into those values through the `zip` crate
//!
//! ## Limitations
//!
//! - Entry sizes are not reported (`size` is always 0)
//! - Encrypted and multi-disk archives are rejected by the library

mod model;
mod parser;

pub use model::{ArchiveEntryInfo, ArchiveInfo, CompressionMethod};
pub use parser::{ArchiveBuffer, bytes_to_buffer, parse_archive_metadata};
