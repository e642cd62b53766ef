//! # zipmeta
//!
//! Print the metadata of every entry in a ZIP archive as JSON lines, without
//! decompressing any payload.
//!
//! The work is described as a chain of deferred [`Effect`]s (read bytes,
//! parse metadata, print entries) that only runs when the final effect is
//! invoked.
//!
//! ## Features
//!
//! - Read archives from the local filesystem or from HTTP/HTTPS URLs
//! - Entry name, comment, modification time, compression method and
//!   directory flag for every entry, in central-directory order
//! - Composable [`effect`] primitives: [`effect::of`], [`effect::lift`],
//!   [`effect::bind`]
//!
//! ## Example
//!
//! ```no_run
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let info = zipmeta::load_archive("./sample.zip").run().await?;
//!     for entry in &info.entries {
//!         println!("{} ({:?})", entry.name, entry.method);
//!     }
//!
//!     // Or print everything as JSON lines
//!     zipmeta::archive_to_stdout("./sample.zip").run().await?;
//!     Ok(())
//! }
//! ```

pub mod archive;
pub mod cli;
pub mod effect;
pub mod error;
pub mod io;
pub mod output;
pub mod pipeline;

pub use archive::{ArchiveEntryInfo, ArchiveInfo, CompressionMethod};
pub use cli::Cli;
pub use effect::Effect;
pub use error::Error;
pub use io::{ByteSource, HttpSource, LocalFile};
pub use pipeline::{archive_to_stdout, load_archive};
