//! Hand-written ZIP fixtures.
//!
//! Archives are assembled field by field so that entry comments, methods and
//! timestamps are exactly what the tests expect.

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use byteorder::{LittleEndian, WriteBytesExt};
use flate2::Compression;
use flate2::Crc;
use flate2::write::DeflateEncoder;

const LFH_SIGNATURE: u32 = 0x0403_4b50;
const CDFH_SIGNATURE: u32 = 0x0201_4b50;
const EOCD_SIGNATURE: u32 = 0x0605_4b50;

pub const STORED: u16 = 0;
pub const DEFLATED: u16 = 8;
/// LZMA; the payload is written as-is since it is never decoded.
pub const LZMA: u16 = 14;

/// 2024-03-15 12:34:56 UTC
pub const MARCH_2024: (u16, u16) = dos_datetime(2024, 3, 15, 12, 34, 56);
pub const MARCH_2024_EPOCH: i64 = 1_710_506_096;
/// 2023-11-02 08:00:00 UTC
pub const NOVEMBER_2023: (u16, u16) = dos_datetime(2023, 11, 2, 8, 0, 0);
pub const NOVEMBER_2023_EPOCH: i64 = 1_698_912_000;

pub struct FixtureEntry {
    pub name: &'static str,
    pub data: &'static [u8],
    pub method: u16,
    pub comment: &'static str,
    /// (date, time) in MS-DOS encoding
    pub modified: (u16, u16),
}

impl FixtureEntry {
    fn is_dir(&self) -> bool {
        self.name.ends_with('/')
    }
}

/// Encode a calendar time the way ZIP headers store it: (date, time).
pub const fn dos_datetime(year: u16, month: u16, day: u16, hour: u16, minute: u16, second: u16) -> (u16, u16) {
    let date = ((year - 1980) << 9) | (month << 5) | day;
    let time = (hour << 11) | (minute << 5) | (second / 2);
    (date, time)
}

/// Build a complete archive from `entries`, in the given order.
pub fn build_zip(entries: &[FixtureEntry], archive_comment: &str) -> Vec<u8> {
    let mut out = Vec::new();
    let mut central = Vec::new();

    for entry in entries {
        let mut crc = Crc::new();
        crc.update(entry.data);

        let payload = match entry.method {
            DEFLATED => {
                let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
                encoder.write_all(entry.data).unwrap();
                encoder.finish().unwrap()
            }
            _ => entry.data.to_vec(),
        };

        let offset = out.len() as u32;
        let (date, time) = entry.modified;

        out.write_u32::<LittleEndian>(LFH_SIGNATURE).unwrap();
        out.write_u16::<LittleEndian>(20).unwrap(); // version needed
        out.write_u16::<LittleEndian>(0).unwrap(); // flags
        out.write_u16::<LittleEndian>(entry.method).unwrap();
        out.write_u16::<LittleEndian>(time).unwrap();
        out.write_u16::<LittleEndian>(date).unwrap();
        out.write_u32::<LittleEndian>(crc.sum()).unwrap();
        out.write_u32::<LittleEndian>(payload.len() as u32).unwrap();
        out.write_u32::<LittleEndian>(entry.data.len() as u32).unwrap();
        out.write_u16::<LittleEndian>(entry.name.len() as u16).unwrap();
        out.write_u16::<LittleEndian>(0).unwrap(); // extra length
        out.write_all(entry.name.as_bytes()).unwrap();
        out.write_all(&payload).unwrap();

        central.write_u32::<LittleEndian>(CDFH_SIGNATURE).unwrap();
        central.write_u16::<LittleEndian>(20).unwrap(); // version made by (MS-DOS)
        central.write_u16::<LittleEndian>(20).unwrap(); // version needed
        central.write_u16::<LittleEndian>(0).unwrap(); // flags
        central.write_u16::<LittleEndian>(entry.method).unwrap();
        central.write_u16::<LittleEndian>(time).unwrap();
        central.write_u16::<LittleEndian>(date).unwrap();
        central.write_u32::<LittleEndian>(crc.sum()).unwrap();
        central.write_u32::<LittleEndian>(payload.len() as u32).unwrap();
        central.write_u32::<LittleEndian>(entry.data.len() as u32).unwrap();
        central.write_u16::<LittleEndian>(entry.name.len() as u16).unwrap();
        central.write_u16::<LittleEndian>(0).unwrap(); // extra length
        central.write_u16::<LittleEndian>(entry.comment.len() as u16).unwrap();
        central.write_u16::<LittleEndian>(0).unwrap(); // disk number start
        central.write_u16::<LittleEndian>(0).unwrap(); // internal attributes
        central
            .write_u32::<LittleEndian>(if entry.is_dir() { 0x10 } else { 0 })
            .unwrap();
        central.write_u32::<LittleEndian>(offset).unwrap();
        central.write_all(entry.name.as_bytes()).unwrap();
        central.write_all(entry.comment.as_bytes()).unwrap();
    }

    let cd_offset = out.len() as u32;
    out.write_all(&central).unwrap();

    out.write_u32::<LittleEndian>(EOCD_SIGNATURE).unwrap();
    out.write_u16::<LittleEndian>(0).unwrap(); // disk number
    out.write_u16::<LittleEndian>(0).unwrap(); // disk with central directory
    out.write_u16::<LittleEndian>(entries.len() as u16).unwrap();
    out.write_u16::<LittleEndian>(entries.len() as u16).unwrap();
    out.write_u32::<LittleEndian>(central.len() as u32).unwrap();
    out.write_u32::<LittleEndian>(cd_offset).unwrap();
    out.write_u16::<LittleEndian>(archive_comment.len() as u16).unwrap();
    out.write_all(archive_comment.as_bytes()).unwrap();

    out
}

/// Stored file, deflated file, empty directory, commented deflated file.
pub fn mixed_entries() -> Vec<FixtureEntry> {
    vec![
        FixtureEntry {
            name: "stored.txt",
            data: b"plain bytes, not compressed\n",
            method: STORED,
            comment: "",
            modified: MARCH_2024,
        },
        FixtureEntry {
            name: "deflated.txt",
            data: b"aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa\n",
            method: DEFLATED,
            comment: "",
            modified: NOVEMBER_2023,
        },
        FixtureEntry {
            name: "empty/",
            data: b"",
            method: STORED,
            comment: "",
            modified: MARCH_2024,
        },
        FixtureEntry {
            name: "notes.md",
            data: b"# notes\n\nsome text that deflates a little\n",
            method: DEFLATED,
            comment: "reviewed by ops",
            modified: NOVEMBER_2023,
        },
    ]
}

/// Write `bytes` to a fresh file inside `dir`.
pub fn write_fixture(dir: &tempfile::TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}
