use crate::info::FileInformation;
use crate::path::WidePath;
use crate::sys::NativeFs;
use log::trace;
use std::ptr::{null, null_mut};
use windows_sys::Win32::Foundation::{CloseHandle, GetLastError, HANDLE, INVALID_HANDLE_VALUE};
use windows_sys::Win32::Storage::FileSystem::{
    CreateFileW, GetFileInformationByHandle, BY_HANDLE_FILE_INFORMATION, FILE_ATTRIBUTE_NORMAL,
    FILE_SHARE_DELETE, FILE_SHARE_READ, FILE_SHARE_WRITE, OPEN_EXISTING,
};

const GENERIC_READ: u32 = 0x80000000;

/// [`NativeFs`] on top of `kernel32.dll`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Kernel32;

impl NativeFs for Kernel32 {
    type Handle = HANDLE;

    fn open(&self, path: &WidePath) -> Result<HANDLE, i32> {
        let share = FILE_SHARE_READ | FILE_SHARE_WRITE | FILE_SHARE_DELETE;
        let handle = unsafe {
            CreateFileW(
                path.as_ptr(),
                GENERIC_READ,
                share,
                null(),
                OPEN_EXISTING,
                FILE_ATTRIBUTE_NORMAL,
                Default::default(),
            )
        };

        if handle == INVALID_HANDLE_VALUE {
            Err(unsafe { GetLastError() } as i32)
        } else {
            Ok(handle)
        }
    }

    fn query(&self, handle: HANDLE, info: &mut FileInformation) -> Result<(), i32> {
        let info: *mut FileInformation = info;

        if unsafe { GetFileInformationByHandle(handle, info.cast::<BY_HANDLE_FILE_INFORMATION>()) }
            == 0
        {
            return Err(unsafe { GetLastError() } as i32);
        }

        Ok(())
    }

    fn close(&self, handle: HANDLE) {
        if unsafe { CloseHandle(handle) } == 0 {
            trace!("CloseHandle failed with error {}.", unsafe { GetLastError() });
        }
    }
}
