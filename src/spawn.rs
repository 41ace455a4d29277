//! Per-stage child spawning: fork, descriptor wiring, and the exec-failure
//! handshake.
//!
//! Each stage gets a fresh error-report pipe whose write end carries
//! close-on-exec. A successful exec closes it and the parent reads EOF;
//! anything the child writes before that is the failure message.

use std::ffi::{CStr, CString};
use std::os::unix::io::RawFd;

use nix::errno::Errno;
use nix::fcntl::{fcntl, FcntlArg, FdFlag};
use nix::sys::signal::{kill, Signal};
use nix::unistd::{self, fork, ForkResult, Pid};
use tracing::debug;

use crate::fd::{self, PipeFd};
use crate::group::PIPE_BUFFER_SIZE;
use crate::signals;

/// Why a stage failed to start.
pub(crate) enum SpawnFailure {
    /// A syscall in the parent failed.
    Os(Errno),
    /// The child reported through the handshake pipe that it could not exec.
    Child(String),
}

impl SpawnFailure {
    pub fn into_message(self) -> String {
        match self {
            SpawnFailure::Os(errno) => errno.desc().to_string(),
            SpawnFailure::Child(message) => message,
        }
    }
}

pub(crate) struct SpawnedStage {
    pub pid: Pid,
    /// Read end of this stage's stdout pipe: the next stage's stdin, or the
    /// group's stdout slot for the final stage.
    pub stdout_read: PipeFd,
}

/// Fork and exec one pipeline stage.
///
/// `stdin` is the read end of the previous stage's stdout pipe; the first
/// stage inherits the parent's fd 0. `stderr_write` and `term_write` are the
/// shared write ends every child receives. argv and the working directory are
/// already C strings so the child branch performs no allocation.
pub(crate) fn spawn_stage(
    argv: &[CString],
    working_dir: Option<&CStr>,
    stdin: Option<PipeFd>,
    stderr_write: RawFd,
    term_write: RawFd,
) -> Result<SpawnedStage, SpawnFailure> {
    let mut stdin = stdin;

    let (stdout_read, mut stdout_write) = fd::pipe_cloexec().map_err(SpawnFailure::Os)?;
    let (mut error_read, mut error_write) = fd::error_pipe().map_err(SpawnFailure::Os)?;

    let pid = match unsafe { fork() } {
        Ok(ForkResult::Parent { child }) => child,
        Ok(ForkResult::Child) => child_setup_and_exec(
            argv,
            working_dir,
            stdin.as_ref(),
            &stdout_write,
            stderr_write,
            term_write,
            &error_read,
            &error_write,
        ),
        Err(errno) => return Err(SpawnFailure::Os(errno)),
    };

    // Drop our copy of the write end so the child holds the last reference,
    // then block until exec succeeds (EOF) or the child reports a failure.
    error_write.close();

    let mut buffer = [0u8; PIPE_BUFFER_SIZE];
    let mut total = 0;
    while total < PIPE_BUFFER_SIZE {
        match fd::read_retry(error_read.raw(), &mut buffer[total..]) {
            Some(n) if n > 0 => total += n,
            _ => break,
        }
    }
    error_read.close();

    if total > 0 {
        // The child wrote its errno text and called _exit. Collect it so no
        // zombie outlives the failed spawn.
        let _ = kill(pid, Signal::SIGKILL);
        reap_quietly(pid);
        let message = String::from_utf8_lossy(&buffer[..total]).into_owned();
        return Err(SpawnFailure::Child(message));
    }

    // The parent keeps only the stage's stdout read end.
    if let Some(fd) = stdin.as_mut() {
        fd.close();
    }
    stdout_write.close();

    debug!(pid = pid.as_raw(), command = ?argv[0], "stage spawned");
    Ok(SpawnedStage { pid, stdout_read })
}

/// Reap a child, retrying on EINTR and discarding the status.
pub(crate) fn reap_quietly(pid: Pid) {
    let mut status: libc::c_int = 0;
    loop {
        let rc = unsafe { libc::waitpid(pid.as_raw(), &mut status, 0) };
        if rc >= 0 || Errno::last() != Errno::EINTR {
            break;
        }
    }
}

/// Child-side setup between fork and exec. Wires fds 0/1/2, keeps the
/// termination sentinel across exec, resets signal handlers, applies the
/// working directory, then execs. Only reachable failure exit is through the
/// handshake pipe.
#[allow(clippy::too_many_arguments)]
fn child_setup_and_exec(
    argv: &[CString],
    working_dir: Option<&CStr>,
    stdin: Option<&PipeFd>,
    stdout_write: &PipeFd,
    stderr_write: RawFd,
    term_write: RawFd,
    error_read: &PipeFd,
    error_write: &PipeFd,
) -> ! {
    let report_fd = error_write.raw();

    let _ = unistd::close(error_read.raw());

    if let Some(stdin) = stdin {
        let _ = unistd::dup2(stdin.raw(), 0);
    }
    let _ = unistd::dup2(stdout_write.raw(), 1);
    let _ = unistd::dup2(stderr_write, 2);

    // Every other descriptor closes at exec. 0/1/2 and the termination
    // sentinel's write end must survive it.
    for fd in 0..=2 {
        let _ = fcntl(fd, FcntlArg::F_SETFD(FdFlag::empty()));
    }
    let _ = fcntl(term_write, FcntlArg::F_SETFD(FdFlag::empty()));

    signals::reset_child_signal_handlers();

    if let Some(dir) = working_dir {
        loop {
            match unistd::chdir(dir) {
                Ok(()) => break,
                Err(Errno::EINTR) => continue,
                Err(_) => child_error_exit(report_fd),
            }
        }
    }

    let _ = unistd::execvp(&argv[0], argv);
    child_error_exit(report_fd)
}

/// Report errno through the handshake pipe and terminate without running
/// destructors or flushing buffered streams.
fn child_error_exit(error_fd: RawFd) -> ! {
    let message = Errno::last().desc();
    let _ = unistd::write(error_fd, message.as_bytes());
    unsafe { libc::_exit(1) }
}
