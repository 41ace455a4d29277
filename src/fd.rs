//! Owned pipe descriptors with idempotent, EINTR-safe close.
//!
//! Every descriptor the engine touches lives in exactly one `PipeFd` slot.
//! Closing nulls the slot, so a second close is a no-op, and `Drop` closes
//! whatever is still open on any exit path.

use std::os::unix::io::RawFd;

use nix::errno::Errno;
use nix::fcntl::{fcntl, FcntlArg, FdFlag};
use nix::unistd;

/// Owning wrapper around a pipe end. A negative value is the closed sentinel.
#[derive(Debug)]
pub(crate) struct PipeFd(RawFd);

impl PipeFd {
    /// The closed sentinel.
    pub const fn closed() -> Self {
        PipeFd(-1)
    }

    pub fn from_raw(fd: RawFd) -> Self {
        PipeFd(fd)
    }

    pub fn is_open(&self) -> bool {
        self.0 >= 0
    }

    /// Raw descriptor value; -1 when closed.
    pub fn raw(&self) -> RawFd {
        self.0
    }

    /// Close the descriptor and null the slot. Safe to call repeatedly.
    pub fn close(&mut self) {
        if self.0 >= 0 {
            close_retry(self.0);
            self.0 = -1;
        }
    }

    /// Set the close-on-exec flag.
    pub fn set_cloexec(&self) -> Result<(), Errno> {
        fcntl(self.0, FcntlArg::F_SETFD(FdFlag::FD_CLOEXEC)).map(drop)
    }
}

impl Drop for PipeFd {
    fn drop(&mut self) {
        self.close();
    }
}

/// Create a pipe with close-on-exec on both ends, returned `(read, write)`.
pub(crate) fn pipe_cloexec() -> Result<(PipeFd, PipeFd), Errno> {
    let (read, write) = unistd::pipe()?;
    let read = PipeFd::from_raw(read);
    let write = PipeFd::from_raw(write);
    read.set_cloexec()?;
    write.set_cloexec()?;
    Ok((read, write))
}

/// Create the exec-handshake pipe: close-on-exec on the write end only, so a
/// successful exec closes it and the parent reads EOF.
pub(crate) fn error_pipe() -> Result<(PipeFd, PipeFd), Errno> {
    let (read, write) = unistd::pipe()?;
    let read = PipeFd::from_raw(read);
    let write = PipeFd::from_raw(write);
    write.set_cloexec()?;
    Ok((read, write))
}

/// Read once, retrying on EINTR. Returns `None` on any other error, which
/// callers treat like end-of-file.
pub(crate) fn read_retry(fd: RawFd, buf: &mut [u8]) -> Option<usize> {
    loop {
        match unistd::read(fd, buf) {
            Ok(n) => return Some(n),
            Err(Errno::EINTR) => continue,
            Err(_) => return None,
        }
    }
}

fn close_retry(fd: RawFd) {
    while let Err(Errno::EINTR) = unistd::close(fd) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_is_idempotent() {
        let (mut read, mut write) = pipe_cloexec().expect("pipe");
        assert!(read.is_open());
        assert!(write.is_open());

        read.close();
        read.close();
        assert!(!read.is_open());
        assert_eq!(read.raw(), -1);

        write.close();
        assert!(!write.is_open());
    }

    #[test]
    fn closed_sentinel_reports_closed() {
        let fd = PipeFd::closed();
        assert!(!fd.is_open());
        assert_eq!(fd.raw(), -1);
    }

    #[test]
    fn error_pipe_keeps_read_end_inheritable() {
        let (read, write) = error_pipe().expect("pipe");
        let read_flags = fcntl(read.raw(), FcntlArg::F_GETFD).expect("getfd");
        let write_flags = fcntl(write.raw(), FcntlArg::F_GETFD).expect("getfd");
        assert_eq!(read_flags & libc::FD_CLOEXEC, 0);
        assert_ne!(write_flags & libc::FD_CLOEXEC, 0);
    }

    #[test]
    fn data_flows_through_cloexec_pipe() {
        let (read, write) = pipe_cloexec().expect("pipe");
        nix::unistd::write(write.raw(), b"ping").expect("write");
        let mut buf = [0u8; 8];
        let n = read_retry(read.raw(), &mut buf).expect("read");
        assert_eq!(&buf[..n], b"ping");
    }
}
