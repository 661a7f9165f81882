use crate::info::FileInformation;
use crate::time::{combine, Timestamp};
use std::fmt::{Display, Formatter};

/// Metadata of a file, in the spirit of the `stat` structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stat {
    device_id: u64,           // st_dev
    file_index: u64,          // st_ino
    size: u64,                // st_size
    access_time: Timestamp,   // st_atime
    modify_time: Timestamp,   // st_mtime
    creation_time: Timestamp, // st_birthtime
}

impl Stat {
    #[cfg_attr(windows, allow(dead_code))]
    pub(crate) fn new(
        device_id: u64,
        file_index: u64,
        size: u64,
        access_time: Timestamp,
        modify_time: Timestamp,
        creation_time: Timestamp,
    ) -> Self {
        Self {
            device_id,
            file_index,
            size,
            access_time,
            modify_time,
            creation_time,
        }
    }

    /// Volume serial number on Windows or `st_dev` elsewhere.
    pub fn device_id(&self) -> u64 {
        self.device_id
    }

    /// Unique identifier of the file within its volume. This plays the role of an inode number.
    pub fn file_index(&self) -> u64 {
        self.file_index
    }

    /// Size of the file, in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn access_time(&self) -> Timestamp {
        self.access_time
    }

    pub fn modify_time(&self) -> Timestamp {
        self.modify_time
    }

    pub fn creation_time(&self) -> Timestamp {
        self.creation_time
    }
}

impl From<&FileInformation> for Stat {
    fn from(v: &FileInformation) -> Self {
        Self {
            device_id: v.volume_serial.into(),
            file_index: combine(v.index_high, v.index_low),
            size: combine(v.size_high, v.size_low),
            access_time: v.access_time.into(),
            modify_time: v.write_time.into(),
            creation_time: v.creation_time.into(),
        }
    }
}

impl Display for Stat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#<Stat dev={} ino={} size={} atime={} mtime={} ctime={}>",
            self.device_id,
            self.file_index,
            self.size,
            self.access_time.unix_secs(),
            self.modify_time.unix_secs(),
            self.creation_time.unix_secs()
        )
    }
}
