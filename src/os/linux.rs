//! Operating system entropy (Linux)
//!
//! Cryptographically secure bytes are obtained from the kernel with the
//! `getrandom` system call. Without flags the call blocks until the kernel
//! entropy pool has been initialised, and never afterwards.

use std::io;

use libc::{c_void, getrandom};

/// Fills a buffer with cryptographically secure random bytes from the OS.
///
/// `getrandom` may return fewer bytes than requested (large buffers, or a
/// signal arriving mid-call), so the call is repeated until the buffer is
/// full. `EINTR` is retried; any other error is returned.
pub(crate) fn sys_random(buf: &mut [u8]) -> io::Result<()> {
    let mut filled = 0;

    while filled < buf.len() {
        let ret = unsafe {
            getrandom(
                buf[filled..].as_mut_ptr() as *mut c_void,
                buf.len() - filled,
                0,
            )
        };

        if ret < 0 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::Interrupted {
                continue;
            }
            return Err(err);
        }

        filled += ret as usize;
    }

    Ok(())
}
