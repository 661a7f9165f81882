use bytemuck::{Pod, Zeroable};
use std::mem::{align_of, offset_of, size_of};

/// An implementation of the `FILETIME` structure.
///
/// The value is the number of 100-nanosecond ticks since 1601-01-01 UTC, split into two halves.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileTime {
    pub low: u32,  // dwLowDateTime
    pub high: u32, // dwHighDateTime
}

/// An implementation of the `BY_HANDLE_FILE_INFORMATION` structure.
///
/// This is the record filled in by `GetFileInformationByHandle` so the field order and widths are
/// dictated by the OS, not by us.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileInformation {
    pub attributes: u32,         // dwFileAttributes
    pub creation_time: FileTime, // ftCreationTime
    pub access_time: FileTime,   // ftLastAccessTime
    pub write_time: FileTime,    // ftLastWriteTime
    pub volume_serial: u32,      // dwVolumeSerialNumber
    pub size_high: u32,          // nFileSizeHigh
    pub size_low: u32,           // nFileSizeLow
    pub links: u32,              // nNumberOfLinks
    pub index_high: u32,         // nFileIndexHigh
    pub index_low: u32,          // nFileIndexLow
}

impl FileInformation {
    /// Size of the record in bytes, as defined by the OS.
    pub const SIZE: usize = 52;

    /// Returns an all-zero record ready to be passed to the query.
    pub fn zeroed() -> Self {
        Zeroable::zeroed()
    }

    /// Reads a record from its raw in-memory representation.
    ///
    /// Returns [`None`] if `data` is not exactly [`Self::SIZE`] bytes.
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        if data.len() != Self::SIZE {
            return None;
        }

        Some(bytemuck::pod_read_unaligned(data))
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

// SAFETY: both structures are repr(C), contain only u32 fields and have no padding.
unsafe impl Zeroable for FileTime {}
unsafe impl Pod for FileTime {}
unsafe impl Zeroable for FileInformation {}
unsafe impl Pod for FileInformation {}

const _: () = {
    assert!(size_of::<FileTime>() == 8);
    assert!(align_of::<FileTime>() == 4);
    assert!(size_of::<FileInformation>() == FileInformation::SIZE);
    assert!(align_of::<FileInformation>() == 4);
    assert!(offset_of!(FileInformation, attributes) == 0);
    assert!(offset_of!(FileInformation, creation_time) == 4);
    assert!(offset_of!(FileInformation, access_time) == 12);
    assert!(offset_of!(FileInformation, write_time) == 20);
    assert!(offset_of!(FileInformation, volume_serial) == 28);
    assert!(offset_of!(FileInformation, size_high) == 32);
    assert!(offset_of!(FileInformation, size_low) == 36);
    assert!(offset_of!(FileInformation, links) == 40);
    assert!(offset_of!(FileInformation, index_high) == 44);
    assert!(offset_of!(FileInformation, index_low) == 48);
};

#[cfg(windows)]
const _: () = {
    use windows_sys::Win32::Foundation::FILETIME;
    use windows_sys::Win32::Storage::FileSystem::BY_HANDLE_FILE_INFORMATION;

    assert!(size_of::<FILETIME>() == size_of::<FileTime>());
    assert!(size_of::<BY_HANDLE_FILE_INFORMATION>() == size_of::<FileInformation>());
    assert!(align_of::<BY_HANDLE_FILE_INFORMATION>() == align_of::<FileInformation>());
    assert!(offset_of!(BY_HANDLE_FILE_INFORMATION, ftLastWriteTime) == 20);
    assert!(offset_of!(BY_HANDLE_FILE_INFORMATION, nFileIndexLow) == 48);
};
