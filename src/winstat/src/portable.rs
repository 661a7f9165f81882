use crate::error::StatError;
use crate::stat::Stat;
use crate::time::Timestamp;
use log::trace;
use std::io::ErrorKind;
use std::os::unix::fs::MetadataExt;
use std::path::Path;

/// Gets metadata of `path` from the POSIX `stat` of the host.
pub(crate) fn stat(path: &Path) -> Result<Stat, StatError> {
    trace!("Getting metadata of {}.", path.display());

    let meta = match std::fs::metadata(path) {
        Ok(v) => v,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(StatError::NotFound(path.to_owned()))
        }
        Err(e) => {
            return Err(match e.raw_os_error() {
                Some(code) => StatError::SystemCallFailed {
                    operation: "stat",
                    code,
                },
                None => StatError::Io {
                    operation: "stat",
                    source: e,
                },
            })
        }
    };

    // Not every filesystem records a birth time.
    let creation_time = match meta.created() {
        Ok(v) => Timestamp::from_system_time(v),
        Err(_) => Timestamp::from_unix_secs(meta.ctime()),
    };

    Ok(Stat::new(
        meta.dev(),
        meta.ino(),
        meta.size(),
        Timestamp::from_unix_secs(meta.atime()),
        Timestamp::from_unix_secs(meta.mtime()),
        creation_time,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn regular_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();

        file.write_all(b"0123456789").unwrap();
        file.flush().unwrap();

        let meta = std::fs::metadata(file.path()).unwrap();
        let stat = stat(file.path()).unwrap();

        assert_eq!(stat.size(), 10);
        assert_eq!(stat.file_index(), meta.ino());
        assert_eq!(stat.device_id(), meta.dev());
    }

    #[test]
    fn not_a_directory() {
        let file = tempfile::NamedTempFile::new().unwrap();

        // ENOTDIR is not a NotFound error.
        match stat(&file.path().join("child")) {
            Err(StatError::SystemCallFailed { operation, code }) => {
                assert_eq!(operation, "stat");
                assert_ne!(code, 0);
            }
            r => panic!("unexpected result: {r:?}"),
        }
    }

    #[test]
    fn interior_nul() {
        // Rejected by std before any syscall so there is no OS error code.
        match stat(Path::new("bad\0name")) {
            Err(StatError::Io { operation, source }) => {
                assert_eq!(operation, "stat");
                assert!(source.raw_os_error().is_none());
            }
            r => panic!("unexpected result: {r:?}"),
        }
    }
}
