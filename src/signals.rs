//! Signal discipline: SIGCHLD disposition around a run, and the child-side
//! handler reset between fork and exec.
//!
//! The SIGCHLD swap is process-global state, which is why one process may
//! drive only one group at a time.

use nix::errno::Errno;
use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};

fn default_action() -> SigAction {
    SigAction::new(SigHandler::SigDfl, SaFlags::empty(), SigSet::empty())
}

/// Installs the default SIGCHLD handler for the duration of a pipeline run,
/// saving the caller's disposition for restore.
pub(crate) struct SigchldGuard {
    saved: Option<SigAction>,
}

impl SigchldGuard {
    pub fn install() -> Result<Self, Errno> {
        let default = default_action();
        let saved = loop {
            match unsafe { sigaction(Signal::SIGCHLD, &default) } {
                Ok(old) => break old,
                Err(Errno::EINTR) => continue,
                Err(err) => return Err(err),
            }
        };
        Ok(SigchldGuard { saved: Some(saved) })
    }

    /// Put the caller's SIGCHLD disposition back. Safe to call repeatedly.
    pub fn restore(&mut self) {
        if let Some(saved) = self.saved.take() {
            loop {
                match unsafe { sigaction(Signal::SIGCHLD, &saved) } {
                    Err(Errno::EINTR) => continue,
                    _ => break,
                }
            }
        }
    }
}

impl Drop for SigchldGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

/// Restore every catchable signal to its default disposition. Runs in the
/// child between fork and exec; must not allocate.
pub(crate) fn reset_child_signal_handlers() {
    let default = default_action();
    for signal in Signal::iterator() {
        if matches!(signal, Signal::SIGKILL | Signal::SIGSTOP) {
            continue;
        }
        let _ = unsafe { sigaction(signal, &default) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_restore_is_idempotent() {
        let mut guard = SigchldGuard::install().expect("install");
        guard.restore();
        guard.restore();
    }

    #[test]
    fn install_then_drop_round_trips() {
        let before = unsafe { sigaction(Signal::SIGCHLD, &default_action()) }.expect("probe");
        // Probing replaced the disposition; put it back before asserting.
        unsafe { sigaction(Signal::SIGCHLD, &before) }.expect("restore probe");

        {
            let _guard = SigchldGuard::install().expect("install");
        }
        let after = unsafe { sigaction(Signal::SIGCHLD, &default_action()) }.expect("probe");
        unsafe { sigaction(Signal::SIGCHLD, &after) }.expect("restore probe");
        assert_eq!(after.handler(), before.handler());
    }
}
