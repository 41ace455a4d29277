//! Process group lifecycle: pipeline construction, select-loop output
//! multiplexing, reaping, and status decoding.

use std::ffi::CString;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;
use std::time::{Duration, Instant};

use nix::errno::Errno;
use nix::sys::select::{select, FdSet};
use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;
use tracing::{debug, warn};

use crate::deadline;
use crate::error::{ProcessError, Result};
use crate::fd::{self, PipeFd};
use crate::signals::SigchldGuard;
use crate::spawn;

/// Size of the scratch buffer [`wait_for_data`](ProcessGroup::wait_for_data)
/// hands out borrows into; also the upper bound on a delivered chunk.
pub const PIPE_BUFFER_SIZE: usize = 1024;

/// Read-end slots: stdout of the last stage, the shared stderr pipe, and the
/// termination sentinel that only closes when the last child exits.
const PIPE_COUNT: usize = 3;
const PIPE_STDOUT: usize = 0;
const PIPE_STDERR: usize = 1;
const PIPE_TERM: usize = 2;

/// Where a pipeline is in its life, with the payloads that only make sense
/// in that state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessState {
    /// Commands may be added; nothing has been spawned.
    Starting,
    /// Children are running.
    Executing,
    /// The last stage exited on its own.
    Exited {
        /// The value the last stage passed to exit.
        exit_value: i32,
    },
    /// The last stage died from a signal.
    Exception {
        kind: ExceptionKind,
        /// The raw wait-status word the signal death produced.
        raw_status: i32,
    },
    /// The group was killed on request.
    Killed,
    /// The process-lifetime timeout expired and the children were killed.
    Expired,
    /// The engine failed internally, or a child could not exec.
    Error { message: String },
}

/// Classification of a signal-caused child death.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExceptionKind {
    /// SIGSEGV or SIGBUS.
    Fault,
    /// SIGILL.
    Illegal,
    /// SIGINT.
    Interrupt,
    /// SIGFPE.
    Numerical,
    /// Any other signal.
    Other,
}

impl ExceptionKind {
    fn from_signal(signal: i32) -> Self {
        match signal {
            libc::SIGSEGV | libc::SIGBUS => ExceptionKind::Fault,
            libc::SIGFPE => ExceptionKind::Numerical,
            libc::SIGILL => ExceptionKind::Illegal,
            libc::SIGINT => ExceptionKind::Interrupt,
            _ => ExceptionKind::Other,
        }
    }
}

/// Which output pipes a `wait_for_data` call wants reported. The termination
/// sentinel is always monitored but never reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipeInterest {
    stdout: bool,
    stderr: bool,
}

impl PipeInterest {
    /// Monitor only; discard any data that arrives.
    pub const NONE: Self = PipeInterest {
        stdout: false,
        stderr: false,
    };
    /// Report stdout of the last stage.
    pub const STDOUT: Self = PipeInterest {
        stdout: true,
        stderr: false,
    };
    /// Report the shared stderr pipe.
    pub const STDERR: Self = PipeInterest {
        stdout: false,
        stderr: true,
    };
    /// Report both output pipes.
    pub const ALL: Self = PipeInterest {
        stdout: true,
        stderr: true,
    };

    fn wants(self, slot: usize) -> bool {
        match slot {
            PIPE_STDOUT => self.stdout,
            PIPE_STDERR => self.stderr,
            _ => false,
        }
    }
}

/// Outcome of a [`ProcessGroup::wait_for_data`] call.
#[derive(Debug, PartialEq, Eq)]
pub enum WaitData<'a> {
    /// Bytes from the last stage's stdout. Valid until the next call that
    /// may overwrite the scratch buffer.
    Stdout(&'a [u8]),
    /// Bytes from the shared stderr pipe.
    Stderr(&'a [u8]),
    /// The caller's wait budget ran out; the children are still running and
    /// the call may be repeated.
    Timeout,
    /// Every pipe has closed, or the process timeout fired and the children
    /// were killed. Proceed to [`ProcessGroup::wait_for_exit`].
    Done,
}

/// Outcome of a [`ProcessGroup::wait_for_exit`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitResult {
    /// The pipeline has terminated and its status is decoded.
    Terminated,
    /// The caller's wait budget ran out before termination; the call may be
    /// repeated.
    TimedOut,
}

/// Captured output of a [`ProcessGroup::run`] call.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Output {
    /// Everything the last stage wrote to stdout.
    pub stdout: Vec<u8>,
    /// Everything any stage wrote to stderr.
    pub stderr: Vec<u8>,
}

/// A pipeline of child processes sharing stderr and a termination sentinel.
///
/// Commands are chained stdout→stdin in the order they are added. One thread
/// drives the group: [`execute`](Self::execute), then
/// [`wait_for_data`](Self::wait_for_data) until it reports
/// [`WaitData::Done`], then [`wait_for_exit`](Self::wait_for_exit) to reap
/// the children and decode the terminal state.
///
/// Dropping a group that is still executing blocks until the pipeline exits,
/// indefinitely unless a timeout was armed or [`kill`](Self::kill) was called.
pub struct ProcessGroup {
    commands: Vec<Vec<CString>>,
    working_dir: Option<CString>,
    timeout: Option<Duration>,
    state: ProcessState,
    child_pids: Vec<Pid>,
    command_statuses: Vec<i32>,
    pipe_read_ends: [PipeFd; PIPE_COUNT],
    /// Readiness carried over from the previous select, drained before the
    /// next one.
    ready: [bool; PIPE_COUNT],
    pipes_left: usize,
    read_buffer: [u8; PIPE_BUFFER_SIZE],
    start_time: Option<Instant>,
    deadline: Option<Instant>,
    killed: bool,
    timeout_expired: bool,
    select_error: Option<String>,
    sigchld: Option<SigchldGuard>,
}

impl ProcessGroup {
    /// Create an empty group in the `Starting` state.
    pub fn new() -> Self {
        ProcessGroup {
            commands: Vec::new(),
            working_dir: None,
            timeout: None,
            state: ProcessState::Starting,
            child_pids: Vec::new(),
            command_statuses: Vec::new(),
            pipe_read_ends: [PipeFd::closed(), PipeFd::closed(), PipeFd::closed()],
            ready: [false; PIPE_COUNT],
            pipes_left: 0,
            read_buffer: [0; PIPE_BUFFER_SIZE],
            start_time: None,
            deadline: None,
            killed: false,
            timeout_expired: false,
            select_error: None,
            sigchld: None,
        }
    }

    /// Append a command to the pipeline.
    ///
    /// The arguments are deep-copied. On error nothing is installed.
    ///
    /// # Examples
    /// ```
    /// use procpipe::ProcessGroup;
    ///
    /// let mut group = ProcessGroup::new();
    /// group.add_command(["echo", "hello"]).unwrap();
    /// group.add_command(["wc", "-c"]).unwrap();
    /// ```
    pub fn add_command<I, S>(&mut self, argv: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<Vec<u8>>,
    {
        let argv = argv
            .into_iter()
            .map(CString::new)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        if argv.is_empty() {
            return Err(ProcessError::EmptyCommand);
        }
        self.commands.push(argv);
        Ok(())
    }

    /// Replace all commands with a single one.
    pub fn set_command<I, S>(&mut self, argv: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<Vec<u8>>,
    {
        self.commands.clear();
        self.add_command(argv)
    }

    /// Remove every command.
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Directory each child changes into before exec. Not validated here;
    /// a bad path is reported by the child through the exec handshake.
    pub fn set_working_directory(&mut self, dir: impl AsRef<Path>) -> Result<()> {
        self.working_dir = Some(CString::new(dir.as_ref().as_os_str().as_bytes())?);
        Ok(())
    }

    /// Children inherit the parent's working directory again.
    pub fn clear_working_directory(&mut self) {
        self.working_dir = None;
    }

    /// Process-lifetime timeout in seconds. Zero, negative, and non-finite
    /// values all disable it. Takes effect at the next execute.
    pub fn set_timeout(&mut self, seconds: f64) {
        self.timeout = deadline::timeout_from_secs(seconds);
    }

    pub fn state(&self) -> &ProcessState {
        &self.state
    }

    /// Exit value of the last stage; `Some` only in `Exited`.
    pub fn exit_value(&self) -> Option<i32> {
        match &self.state {
            ProcessState::Exited { exit_value } => Some(*exit_value),
            _ => None,
        }
    }

    /// Signal classification of the last stage; `Some` only in `Exception`.
    pub fn exit_exception(&self) -> Option<ExceptionKind> {
        match &self.state {
            ProcessState::Exception { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Raw wait-status word of the last stage, once it exited or died from a
    /// signal.
    pub fn exit_code(&self) -> Option<i32> {
        match &self.state {
            ProcessState::Exited { .. } => self.command_statuses.last().copied(),
            ProcessState::Exception { raw_status, .. } => Some(*raw_status),
            _ => None,
        }
    }

    /// Raw wait-status words of every stage, in pipeline order. Meaningful
    /// after [`wait_for_exit`](Self::wait_for_exit) reports termination.
    pub fn command_exit_codes(&self) -> &[i32] {
        &self.command_statuses
    }

    /// The failure message; `Some` only in `Error`.
    pub fn error_string(&self) -> Option<&str> {
        match &self.state {
            ProcessState::Error { message } => Some(message),
            _ => None,
        }
    }

    /// Start the pipeline. Non-blocking; a no-op while already executing.
    ///
    /// On success the state is `Executing` and every stage has a pid. On any
    /// setup failure — a syscall error in the parent or a child that could
    /// not exec — already-spawned children are killed and the state is
    /// `Error` with the failure message.
    pub fn execute(&mut self) {
        if matches!(self.state, ProcessState::Executing) {
            return;
        }
        self.initialize();

        if self.commands.is_empty() {
            self.state = ProcessState::Error {
                message: String::from("no commands have been added"),
            };
            return;
        }

        match SigchldGuard::install() {
            Ok(guard) => self.sigchld = Some(guard),
            Err(errno) => {
                self.fail_setup(errno.desc().to_string());
                return;
            }
        }

        // Shared stderr and termination pipes, inherited by every stage.
        let (stderr_read, mut stderr_write) = match fd::pipe_cloexec() {
            Ok(ends) => ends,
            Err(errno) => {
                self.fail_setup(errno.desc().to_string());
                return;
            }
        };
        let (term_read, mut term_write) = match fd::pipe_cloexec() {
            Ok(ends) => ends,
            Err(errno) => {
                self.fail_setup(errno.desc().to_string());
                return;
            }
        };
        self.pipe_read_ends[PIPE_STDERR] = stderr_read;
        self.pipe_read_ends[PIPE_TERM] = term_read;

        // The timeout period starts now.
        self.start_time = Some(Instant::now());

        let mut next_stdin: Option<PipeFd> = None;
        for index in 0..self.commands.len() {
            let result = spawn::spawn_stage(
                &self.commands[index],
                self.working_dir.as_deref(),
                next_stdin.take(),
                stderr_write.raw(),
                term_write.raw(),
            );
            match result {
                Ok(stage) => {
                    self.child_pids.push(stage.pid);
                    next_stdin = Some(stage.stdout_read);
                }
                Err(failure) => {
                    let message = failure.into_message();
                    warn!(stage = index, message = %message, "stage failed to start");
                    self.fail_setup(message);
                    return;
                }
            }
        }

        // The last stage's stdout feeds the caller.
        if let Some(read_end) = next_stdin.take() {
            self.pipe_read_ends[PIPE_STDOUT] = read_end;
        }

        // Only the children may now hold the shared write ends; the
        // termination sentinel reads EOF exactly when the last child exits.
        stderr_write.close();
        term_write.close();

        self.pipes_left = PIPE_COUNT;
        self.state = ProcessState::Executing;
        debug!(stages = self.commands.len(), "pipeline executing");
    }

    /// Block until output arrives, a pipe closes, or a timeout fires.
    ///
    /// `interest` selects which pipes are reported; data arriving on an
    /// unselected pipe is read and discarded. `user_timeout` is a budget for
    /// this call, decremented in place (saturating at zero); when it runs out
    /// the call returns [`WaitData::Timeout`] and the children keep running.
    /// The process-lifetime timeout is enforced here as well: when it fires
    /// the children are killed and the call reports [`WaitData::Done`], with
    /// the `Expired` state surfacing from the next
    /// [`wait_for_exit`](Self::wait_for_exit).
    pub fn wait_for_data(
        &mut self,
        interest: PipeInterest,
        mut user_timeout: Option<&mut Duration>,
    ) -> WaitData<'_> {
        let user_start = user_timeout.as_ref().map(|_| Instant::now());
        let (effective, user_won) = self.effective_deadline(user_timeout.as_deref());
        let mut expired = false;
        let mut delivered: Option<(usize, usize)> = None;

        while self.pipes_left > 0 {
            // Drain pipes the previous select reported ready.
            for slot in 0..PIPE_COUNT {
                if !self.ready[slot] {
                    continue;
                }
                self.ready[slot] = false;
                if !self.pipe_read_ends[slot].is_open() {
                    continue;
                }
                let raw = self.pipe_read_ends[slot].raw();
                match fd::read_retry(raw, &mut self.read_buffer) {
                    Some(n) if n > 0 => {
                        if slot == PIPE_TERM {
                            // Liveness chatter on the sentinel; never reported.
                        } else if interest.wants(slot) {
                            delivered = Some((slot, n));
                            break;
                        }
                    }
                    _ => {
                        // EOF, or a read error treated the same way.
                        self.pipe_read_ends[slot].close();
                        self.pipes_left -= 1;
                    }
                }
            }
            if delivered.is_some() {
                break;
            }

            // Rebuild the select set from the slots still open.
            let mut set = FdSet::new();
            for slot in &self.pipe_read_ends {
                if slot.is_open() {
                    set.insert(slot.raw());
                }
            }
            let nfds = match set.highest() {
                Some(highest) => highest + 1,
                None => break,
            };

            let mut timeval = match effective {
                Some(at) => match deadline::remaining(at) {
                    Some(left) => Some(deadline::to_timeval(left)),
                    None => {
                        expired = true;
                        break;
                    }
                },
                None => None,
            };

            match select(nfds, &mut set, None, None, timeval.as_mut()) {
                Ok(0) => {
                    expired = true;
                    break;
                }
                Ok(_) => {
                    for slot in 0..PIPE_COUNT {
                        self.ready[slot] = self.pipe_read_ends[slot].is_open()
                            && set.contains(self.pipe_read_ends[slot].raw());
                    }
                }
                Err(Errno::EINTR) => continue,
                Err(errno) => {
                    warn!(error = %errno, "select failed; terminating pipeline");
                    self.select_error = Some(errno.desc().to_string());
                    self.kill();
                    self.killed = false;
                    self.pipes_left = 0;
                }
            }
        }

        if let (Some(budget), Some(started)) = (user_timeout.as_deref_mut(), user_start) {
            *budget = budget.saturating_sub(started.elapsed());
        }

        if let Some((slot, len)) = delivered {
            let data = &self.read_buffer[..len];
            return if slot == PIPE_STDOUT {
                WaitData::Stdout(data)
            } else {
                WaitData::Stderr(data)
            };
        }
        if expired {
            if user_won {
                return WaitData::Timeout;
            }
            debug!("process timeout expired; killing pipeline");
            self.kill();
            self.killed = false;
            self.timeout_expired = true;
            self.pipes_left = 0;
        }
        WaitData::Done
    }

    /// Drain the remaining output, reap every child in pipeline order, and
    /// decode the terminal state.
    ///
    /// Returns [`WaitResult::TimedOut`] without reaping when the caller's
    /// budget runs out first; the call may then be repeated. In every other
    /// case the group leaves `Executing` and its resources are released.
    pub fn wait_for_exit(&mut self, mut user_timeout: Option<&mut Duration>) -> WaitResult {
        if !matches!(self.state, ProcessState::Executing) {
            return WaitResult::Terminated;
        }

        loop {
            match self.wait_for_data(PipeInterest::NONE, user_timeout.as_deref_mut()) {
                WaitData::Timeout => return WaitResult::TimedOut,
                WaitData::Done => break,
                WaitData::Stdout(_) | WaitData::Stderr(_) => {}
            }
        }

        // The sentinel has closed, so every child has exited; collect them in
        // pipeline order, holding only the first waitpid failure.
        let mut reap_error: Option<String> = None;
        for (index, pid) in self.child_pids.iter().enumerate() {
            let mut status: libc::c_int = 0;
            let rc = loop {
                let rc = unsafe { libc::waitpid(pid.as_raw(), &mut status, 0) };
                if rc >= 0 || Errno::last() != Errno::EINTR {
                    break rc;
                }
            };
            if rc <= 0 {
                if reap_error.is_none() {
                    let errno = Errno::last();
                    warn!(pid = pid.as_raw(), error = %errno, "waitpid failed");
                    reap_error = Some(errno.desc().to_string());
                }
            } else {
                self.command_statuses[index] = status;
            }
        }

        if let Some(message) = reap_error {
            self.cleanup();
            self.state = ProcessState::Error { message };
            return WaitResult::Terminated;
        }
        if let Some(message) = self.select_error.take() {
            self.cleanup();
            self.state = ProcessState::Error { message };
            return WaitResult::Terminated;
        }

        let status = self.command_statuses.last().copied().unwrap_or(0);
        self.state = if self.killed {
            ProcessState::Killed
        } else if self.timeout_expired {
            ProcessState::Expired
        } else if libc::WIFEXITED(status) {
            ProcessState::Exited {
                exit_value: libc::WEXITSTATUS(status),
            }
        } else if libc::WIFSIGNALED(status) {
            ProcessState::Exception {
                kind: ExceptionKind::from_signal(libc::WTERMSIG(status)),
                raw_status: status,
            }
        } else {
            ProcessState::Error {
                message: String::from("unable to decode child exit status"),
            }
        };

        self.cleanup();
        WaitResult::Terminated
    }

    /// Request termination: SIGKILL every child. A no-op outside `Executing`;
    /// safe to call repeatedly. The `Killed` state surfaces from the next
    /// [`wait_for_exit`](Self::wait_for_exit).
    pub fn kill(&mut self) {
        if !matches!(self.state, ProcessState::Executing) {
            return;
        }
        self.killed = true;
        for pid in &self.child_pids {
            if pid.as_raw() > 0 {
                debug!(pid = pid.as_raw(), "sending SIGKILL");
                let _ = kill(*pid, Signal::SIGKILL);
            }
        }
    }

    /// Execute the pipeline and drive it to completion, capturing both output
    /// streams. The terminal state is readable afterwards through
    /// [`state`](Self::state) and the exit getters.
    ///
    /// # Examples
    /// ```no_run
    /// use procpipe::{ProcessGroup, ProcessState};
    ///
    /// let mut group = ProcessGroup::new();
    /// group.add_command(["echo", "hello"]).unwrap();
    /// let output = group.run();
    /// assert_eq!(output.stdout, b"hello\n");
    /// assert_eq!(group.state(), &ProcessState::Exited { exit_value: 0 });
    /// ```
    pub fn run(&mut self) -> Output {
        let mut output = Output::default();
        self.execute();
        loop {
            match self.wait_for_data(PipeInterest::ALL, None) {
                WaitData::Stdout(data) => output.stdout.extend_from_slice(data),
                WaitData::Stderr(data) => output.stderr.extend_from_slice(data),
                WaitData::Timeout | WaitData::Done => break,
            }
        }
        self.wait_for_exit(None);
        output
    }

    /// Reset per-run bookkeeping ahead of a fresh execute.
    fn initialize(&mut self) {
        for slot in &mut self.pipe_read_ends {
            slot.close();
        }
        self.ready = [false; PIPE_COUNT];
        self.pipes_left = 0;
        self.start_time = None;
        self.deadline = None;
        self.killed = false;
        self.timeout_expired = false;
        self.select_error = None;
        self.state = ProcessState::Starting;
        self.child_pids.clear();
        self.command_statuses = vec![0; self.commands.len()];
    }

    /// Abort a failed execute: kill and collect anything already spawned,
    /// release run resources, and latch the error.
    fn fail_setup(&mut self, message: String) {
        for pid in &self.child_pids {
            if pid.as_raw() > 0 {
                let _ = kill(*pid, Signal::SIGKILL);
                spawn::reap_quietly(*pid);
            }
        }
        self.cleanup();
        self.state = ProcessState::Error { message };
    }

    /// Release everything a run holds: the SIGCHLD disposition, the child
    /// pid table, and any still-open read ends.
    fn cleanup(&mut self) {
        if let Some(mut guard) = self.sigchld.take() {
            guard.restore();
        }
        self.child_pids.clear();
        for slot in &mut self.pipe_read_ends {
            slot.close();
        }
    }

    /// The earlier of the armed process deadline and the caller's budget;
    /// the flag reports whether the budget won. The process deadline is
    /// derived once, on the first wait after execute.
    fn effective_deadline(&mut self, user_timeout: Option<&Duration>) -> (Option<Instant>, bool) {
        if self.deadline.is_none() {
            if let (Some(timeout), Some(start)) = (self.timeout, self.start_time) {
                self.deadline = Some(start + timeout);
            }
        }
        if let Some(budget) = user_timeout {
            let user_deadline = Instant::now() + *budget;
            if self.deadline.map_or(true, |at| user_deadline < at) {
                return (Some(user_deadline), true);
            }
        }
        (self.deadline, false)
    }
}

impl Default for ProcessGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ProcessGroup {
    fn drop(&mut self) {
        if matches!(self.state, ProcessState::Executing) {
            self.wait_for_exit(None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echo_runs_to_completion() {
        let mut group = ProcessGroup::new();
        group.add_command(["/bin/echo", "hello"]).unwrap();
        group.execute();
        assert_eq!(group.state(), &ProcessState::Executing);

        assert_eq!(group.wait_for_exit(None), WaitResult::Terminated);
        assert_eq!(group.state(), &ProcessState::Exited { exit_value: 0 });
        assert_eq!(group.exit_value(), Some(0));
        assert_eq!(group.exit_exception(), None);
    }

    #[test]
    fn rejects_empty_command() {
        let mut group = ProcessGroup::new();
        let err = group.add_command(Vec::<Vec<u8>>::new()).unwrap_err();
        assert!(matches!(err, ProcessError::EmptyCommand));
        assert_eq!(group.state(), &ProcessState::Starting);
    }

    #[test]
    fn rejects_interior_nul() {
        let mut group = ProcessGroup::new();
        let err = group.add_command(["bad\0arg"]).unwrap_err();
        assert!(matches!(err, ProcessError::NulByte(_)));
    }

    #[test]
    fn getters_are_empty_before_execute() {
        let group = ProcessGroup::new();
        assert_eq!(group.state(), &ProcessState::Starting);
        assert_eq!(group.exit_value(), None);
        assert_eq!(group.exit_exception(), None);
        assert_eq!(group.exit_code(), None);
        assert_eq!(group.error_string(), None);
        assert!(group.command_exit_codes().is_empty());
    }

    #[test]
    fn execute_without_commands_is_an_error() {
        let mut group = ProcessGroup::new();
        group.execute();
        assert!(matches!(group.state(), ProcessState::Error { .. }));
    }

    #[test]
    fn clear_commands_empties_the_pipeline() {
        let mut group = ProcessGroup::new();
        group.add_command(["/bin/echo", "a"]).unwrap();
        group.add_command(["wc", "-l"]).unwrap();
        group.clear_commands();
        assert_eq!(group.state(), &ProcessState::Starting);

        group.execute();
        assert_eq!(group.error_string(), Some("no commands have been added"));
    }

    #[test]
    fn signal_mapping_covers_the_fault_set() {
        assert_eq!(ExceptionKind::from_signal(libc::SIGSEGV), ExceptionKind::Fault);
        assert_eq!(ExceptionKind::from_signal(libc::SIGBUS), ExceptionKind::Fault);
        assert_eq!(ExceptionKind::from_signal(libc::SIGFPE), ExceptionKind::Numerical);
        assert_eq!(ExceptionKind::from_signal(libc::SIGILL), ExceptionKind::Illegal);
        assert_eq!(ExceptionKind::from_signal(libc::SIGINT), ExceptionKind::Interrupt);
        assert_eq!(ExceptionKind::from_signal(libc::SIGTERM), ExceptionKind::Other);
    }
}
