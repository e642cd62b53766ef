use std::path::PathBuf;

/// Failures the pipeline can end with.
///
/// Stages return `anyhow::Result`; these values travel inside the
/// `anyhow::Error` and can be recovered with `downcast_ref::<Error>()`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot read file `{}`", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot fetch `{url}`")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP request for `{url}` failed with status: {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Not a valid ZIP archive")]
    InvalidArchive {
        #[source]
        source: zip::result::ZipError,
    },

    #[error("Cannot encode entry `{name}` as JSON")]
    Encode {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot write to standard output")]
    Write {
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// True when the archive source itself could not be read.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            Error::ReadFile { .. } | Error::Fetch { .. } | Error::HttpStatus { .. }
        )
    }
}
