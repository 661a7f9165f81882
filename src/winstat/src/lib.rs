//! POSIX-style `stat` for Windows.
//!
//! On Windows the metadata is read from a file handle with `GetFileInformationByHandle` and
//! converted to the same units as `stat`. On Unix the host `stat` is used directly.
pub use self::error::*;
pub use self::info::*;
pub use self::path::*;
pub use self::stat::*;
pub use self::sys::*;
pub use self::time::*;
#[cfg(windows)]
pub use self::windows::*;

use std::path::Path;

mod error;
mod info;
mod path;
#[cfg(unix)]
mod portable;
mod stat;
mod sys;
mod time;
#[cfg(windows)]
mod windows;

/// Gets metadata of the file at `path`.
///
/// `path` may use either `/` or `\` on Windows.
#[cfg(windows)]
pub fn stat(path: impl AsRef<Path>) -> Result<Stat, StatError> {
    stat_with(&Kernel32, path.as_ref())
}

/// Gets metadata of the file at `path`.
#[cfg(unix)]
pub fn stat(path: impl AsRef<Path>) -> Result<Stat, StatError> {
    self::portable::stat(path.as_ref())
}

/// Implementation used by [`stat()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// File handle and `GetFileInformationByHandle`.
    Native,
    /// `stat` of the host.
    Portable,
}

impl Backend {
    /// Returns the backend selected for the target platform.
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self::Native
        } else {
            Self::Portable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend() {
        #[cfg(windows)]
        assert_eq!(Backend::current(), Backend::Native);
        #[cfg(unix)]
        assert_eq!(Backend::current(), Backend::Portable);
    }
}
