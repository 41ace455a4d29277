//! # procpipe
//!
//! **Purpose**: POSIX process-pipeline execution engine
//!
//! Launches a chain of child programs connected by pipes, multiplexes their
//! output back to the caller through a select loop, enforces wall-clock
//! timeouts, and reports per-child termination status.
//!
//! ## Features
//!
//! - **Pipelines**: each stage's stdout feeds the next stage's stdin
//! - **Output Multiplexing**: poll stdout/stderr of the whole pipeline,
//!   buffers tagged by originating pipe
//! - **Two Timeout Sources**: a process-lifetime timeout (terminal) and a
//!   per-call wait budget (recoverable), unified into one deadline
//! - **Exec Failure Detection**: a close-on-exec handshake pipe separates
//!   "child could not exec" from "child ran and failed"
//! - **Termination Sentinel**: a pipe held open across exec by every child,
//!   so the select loop unblocks exactly when the last child exits even if
//!   the children closed their own stdout and stderr
//! - **Status Decoding**: normal exit, signal exception, forced kill, timeout
//!   expiry, or internal error, with raw wait-status words kept per stage
//!
//! ## Usage
//!
//! ```no_run
//! use std::time::Duration;
//! use procpipe::{PipeInterest, ProcessGroup, WaitData};
//!
//! # fn main() -> Result<(), procpipe::ProcessError> {
//! let mut group = ProcessGroup::new();
//! group.add_command(["echo", "one", "two", "three"])?;
//! group.add_command(["wc", "-w"])?;
//! group.set_timeout(5.0);
//! group.execute();
//!
//! let mut budget = Duration::from_millis(100);
//! loop {
//!     match group.wait_for_data(PipeInterest::ALL, Some(&mut budget)) {
//!         WaitData::Stdout(data) => print!("{}", String::from_utf8_lossy(data)),
//!         WaitData::Stderr(data) => eprint!("{}", String::from_utf8_lossy(data)),
//!         WaitData::Timeout => budget = Duration::from_millis(100),
//!         WaitData::Done => break,
//!     }
//! }
//! group.wait_for_exit(None);
//! # Ok(())
//! # }
//! ```
//!
//! One thread drives one `ProcessGroup` at a time. The engine swaps the
//! process-wide SIGCHLD disposition for the duration of a run, so concurrent
//! groups in the same process are unsupported.

#![cfg(unix)]

mod deadline;
mod error;
mod fd;
mod group;
mod signals;
mod spawn;

pub use error::{ProcessError, Result};
pub use group::{
    ExceptionKind, Output, PipeInterest, ProcessGroup, ProcessState, WaitData, WaitResult,
    PIPE_BUFFER_SIZE,
};
