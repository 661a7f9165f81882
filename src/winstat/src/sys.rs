use crate::error::StatError;
use crate::info::FileInformation;
use crate::path::WidePath;
use crate::stat::Stat;
use log::{debug, trace};
use std::path::Path;

/// Native file API required by [`stat_with()`].
///
/// On Windows, `Kernel32` is the implementation backed by Win32.
pub trait NativeFs {
    type Handle: Copy;

    /// Opens an existing file for reading with the most permissive sharing mode.
    ///
    /// Returns the last error code if the OS returned the invalid handle.
    fn open(&self, path: &WidePath) -> Result<Self::Handle, i32>;

    /// An implementation of `GetFileInformationByHandle`.
    fn query(&self, handle: Self::Handle, info: &mut FileInformation) -> Result<(), i32>;

    /// Releases a handle returned by [`NativeFs::open()`]. Called exactly once per handle.
    fn close(&self, handle: Self::Handle);
}

/// Open handle that will be closed when dropped.
struct OwnedHandle<'a, S: NativeFs + ?Sized> {
    sys: &'a S,
    raw: S::Handle,
}

impl<'a, S: NativeFs + ?Sized> OwnedHandle<'a, S> {
    fn open(sys: &'a S, path: &Path) -> Result<Self, StatError> {
        let wide = WidePath::new(path);

        trace!("Opening {}.", path.display());

        match sys.open(&wide) {
            Ok(raw) => Ok(Self { sys, raw }),
            Err(code) => {
                debug!("Failed to open {} (error {code}).", path.display());
                Err(StatError::NotFound(path.to_owned()))
            }
        }
    }

    fn query(&self) -> Result<FileInformation, StatError> {
        let mut info = FileInformation::zeroed();

        self.sys
            .query(self.raw, &mut info)
            .map_err(|code| StatError::SystemCallFailed {
                operation: "GetFileInformationByHandle",
                code,
            })?;

        Ok(info)
    }
}

impl<S: NativeFs + ?Sized> Drop for OwnedHandle<'_, S> {
    fn drop(&mut self) {
        self.sys.close(self.raw);
    }
}

/// Gets metadata of `path` through `sys`.
///
/// The handle opened by this function is always closed before it returns.
pub fn stat_with<S: NativeFs + ?Sized>(sys: &S, path: &Path) -> Result<Stat, StatError> {
    let handle = OwnedHandle::open(sys, path)?;
    let info = handle.query()?;

    Ok(Stat::from(&info))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::info::FileTime;
    use std::cell::{Cell, RefCell};

    /// In-memory [`NativeFs`] that counts its calls.
    #[derive(Default)]
    struct MockFs {
        files: Vec<(Vec<u16>, FileInformation)>,
        query_error: Option<i32>,
        next: Cell<usize>,
        opened: RefCell<Vec<usize>>,
        closed: RefCell<Vec<usize>>,
    }

    impl MockFs {
        fn with_file(path: &str, info: FileInformation) -> Self {
            Self {
                files: vec![(WidePath::new(Path::new(path)).as_slice().to_vec(), info)],
                ..Self::default()
            }
        }
    }

    impl NativeFs for MockFs {
        type Handle = usize;

        fn open(&self, path: &WidePath) -> Result<usize, i32> {
            let index = self
                .files
                .iter()
                .position(|(p, _)| p.as_slice() == path.as_slice())
                .ok_or(2)?;
            let handle = self.next.get() + 1;

            self.next.set(handle);
            self.opened.borrow_mut().push(handle);

            Ok((handle << 8) | index)
        }

        fn query(&self, handle: usize, info: &mut FileInformation) -> Result<(), i32> {
            assert!(self.opened.borrow().contains(&(handle >> 8)));
            assert!(!self.closed.borrow().contains(&(handle >> 8)));
            assert_eq!(*info, FileInformation::zeroed());

            if let Some(e) = self.query_error {
                return Err(e);
            }

            *info = self.files[handle & 0xff].1;

            Ok(())
        }

        fn close(&self, handle: usize) {
            self.closed.borrow_mut().push(handle >> 8);
        }
    }

    fn info() -> FileInformation {
        FileInformation {
            attributes: 0x80,
            creation_time: FileTime {
                low: 0xd53e8000,
                high: 0x019db1de,
            },
            access_time: FileTime {
                low: 0xd53e8000,
                high: 0x019db1de,
            },
            write_time: FileTime {
                low: 0xd53e8000,
                high: 0x019db1de,
            },
            volume_serial: 0x1234abcd,
            size_high: 0,
            size_low: 4096,
            links: 1,
            index_high: 0x10,
            index_low: 0x20,
        }
    }

    #[test]
    fn stat_existing_file() {
        let fs = MockFs::with_file("C:\\data\\file.bin", info());
        let stat = stat_with(&fs, Path::new("C:/data/file.bin")).unwrap();

        assert_eq!(stat.device_id(), 0x1234abcd);
        assert_eq!(stat.file_index(), 0x10_0000_0020);
        assert_eq!(stat.size(), 4096);
        assert_eq!(stat.modify_time().unix_secs(), 0);
        assert_eq!(stat.access_time(), stat.creation_time());
        assert_eq!(*fs.opened.borrow(), [1]);
        assert_eq!(*fs.closed.borrow(), [1]);
    }

    #[test]
    fn missing_file_acquires_nothing() {
        let fs = MockFs::with_file("C:\\data\\file.bin", info());

        match stat_with(&fs, Path::new("C:/data/other.bin")) {
            Err(StatError::NotFound(p)) => assert_eq!(p, Path::new("C:/data/other.bin")),
            r => panic!("unexpected result: {r:?}"),
        }

        assert!(fs.opened.borrow().is_empty());
        assert!(fs.closed.borrow().is_empty());
    }

    #[test]
    fn failed_query_closes_handle() {
        let fs = MockFs {
            query_error: Some(6),
            ..MockFs::with_file("file.bin", info())
        };

        match stat_with(&fs, Path::new("file.bin")) {
            Err(StatError::SystemCallFailed { operation, code }) => {
                assert_eq!(operation, "GetFileInformationByHandle");
                assert_eq!(code, 6);
            }
            r => panic!("unexpected result: {r:?}"),
        }

        assert_eq!(*fs.opened.borrow(), [1]);
        assert_eq!(*fs.closed.borrow(), [1]);
    }

    #[test]
    fn repeated_stat_is_identical() {
        let fs = MockFs::with_file("file.bin", info());
        let first = stat_with(&fs, Path::new("file.bin")).unwrap();
        let second = stat_with(&fs, Path::new("file.bin")).unwrap();

        assert_eq!(first, second);
        assert_eq!(*fs.opened.borrow(), [1, 2]);
        assert_eq!(*fs.closed.borrow(), [1, 2]);
    }
}
