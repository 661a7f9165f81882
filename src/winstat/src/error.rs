use std::io::Error as IoError;
use std::path::PathBuf;
use thiserror::Error;

/// Represents an error when [`crate::stat()`] fails.
#[derive(Debug, Error)]
pub enum StatError {
    /// The file could not be opened. This is reported for any failure of the open call, not only
    /// when the file does not exist.
    #[error("no such file or directory: {}", .0.display())]
    NotFound(PathBuf),

    #[error("{operation} failed with error {code}")]
    SystemCallFailed { operation: &'static str, code: i32 },

    /// A call failed without an OS error code, e.g. the path was rejected before reaching the OS.
    #[error("{operation} failed")]
    Io {
        operation: &'static str,
        #[source]
        source: IoError,
    },
}

impl StatError {
    /// Returns the OS error behind [`StatError::SystemCallFailed`].
    pub fn os_error(&self) -> Option<IoError> {
        match self {
            Self::NotFound(_) | Self::Io { .. } => None,
            Self::SystemCallFailed { code, .. } => Some(IoError::from_raw_os_error(*code)),
        }
    }
}
