use serde::{Serialize, Serializer};

/// How an entry's payload is compressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionMethod {
    /// Anything other than stored or deflated
    #[default]
    Unspecified,
    Store,
    Deflate,
}

impl CompressionMethod {
    pub fn code(&self) -> u8 {
        match self {
            CompressionMethod::Unspecified => 0,
            CompressionMethod::Store => 1,
            CompressionMethod::Deflate => 2,
        }
    }

    #[cfg(test)]
    fn from_code(code: u8) -> Self {
        match code {
            1 => CompressionMethod::Store,
            2 => CompressionMethod::Deflate,
            _ => CompressionMethod::Unspecified,
        }
    }
}

impl Serialize for CompressionMethod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// Metadata of a single archive entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveEntryInfo {
    pub name: String,
    pub comment: String,
    pub modified_epoch_seconds: i64,
    /// Not computed; always 0.
    pub size: u64,
    pub method: CompressionMethod,
    pub is_directory: bool,
}

impl ArchiveEntryInfo {
    /// Render as a single line of JSON, without the trailing newline.
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Metadata of a whole archive, entries in central-directory order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveInfo {
    pub comment: String,
    pub source_path: String,
    pub entries: Vec<ArchiveEntryInfo>,
}

impl ArchiveInfo {
    pub fn with_source_path(mut self, source_path: impl Into<String>) -> Self {
        self.source_path = source_path.into();
        self
    }
}
