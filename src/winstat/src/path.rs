use std::path::Path;

/// A null-terminated UTF-16 path suitable for the `W` family of Win32 functions.
///
/// Every `/` is replaced with `\` so callers can pass POSIX-style paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidePath(Vec<u16>);

impl WidePath {
    const SEPARATOR: u16 = b'\\' as u16;
    const ALT_SEPARATOR: u16 = b'/' as u16;

    pub fn new(path: &Path) -> Self {
        let mut buf: Vec<u16> = encode(path)
            .map(|c| {
                if c == Self::ALT_SEPARATOR {
                    Self::SEPARATOR
                } else {
                    c
                }
            })
            .collect();

        buf.push(0);

        Self(buf)
    }

    /// Returns a pointer to the first element. The buffer is always null-terminated.
    pub fn as_ptr(&self) -> *const u16 {
        self.0.as_ptr()
    }

    /// Returns the content including the terminating null.
    pub fn as_slice(&self) -> &[u16] {
        &self.0
    }
}

#[cfg(windows)]
fn encode(path: &Path) -> impl Iterator<Item = u16> + '_ {
    use std::os::windows::ffi::OsStrExt;

    path.as_os_str().encode_wide()
}

#[cfg(not(windows))]
fn encode(path: &Path) -> impl Iterator<Item = u16> + '_ {
    // Non-Unicode bytes have no UTF-16 form here.
    path.to_string_lossy().encode_utf16().collect::<Vec<_>>().into_iter()
}
