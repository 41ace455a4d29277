//! State-machine and buffer invariants.
//!
//! Builder calls never leave `Starting`; delivered buffers stay within the
//! scratch-buffer bound; exit values survive the round trip through the wait
//! status; kill and the two timeout sources compose the way the state
//! machine promises.

use std::time::Duration;

use proptest::prelude::*;

use procpipe::{
    ExceptionKind, PipeInterest, ProcessGroup, ProcessState, WaitData, WaitResult,
    PIPE_BUFFER_SIZE,
};

#[test]
fn builder_calls_leave_the_group_in_starting_state() {
    let mut group = ProcessGroup::new();
    group.add_command(["/bin/echo", "a"]).expect("add");
    group.set_command(["/bin/echo", "b"]).expect("set");
    group.add_command(["wc", "-l"]).expect("add");
    group.set_timeout(2.5);
    group.set_timeout(-1.0);
    group.set_working_directory("/tmp").expect("set dir");
    group.clear_working_directory();
    assert_eq!(group.state(), &ProcessState::Starting);

    // No pipes exist yet, so a wait returns immediately without touching the
    // budget beyond the call overhead.
    let mut budget = Duration::from_millis(50);
    assert!(matches!(
        group.wait_for_data(PipeInterest::ALL, Some(&mut budget)),
        WaitData::Done
    ));
}

#[test]
fn group_is_fully_released_and_reusable_after_exit() {
    let mut group = ProcessGroup::new();
    group.add_command(["/bin/echo", "first"]).expect("add");
    let output = group.run();
    assert_eq!(output.stdout, b"first\n");
    assert_eq!(group.state(), &ProcessState::Exited { exit_value: 0 });

    // Every descriptor slot is back to the closed sentinel.
    assert!(matches!(
        group.wait_for_data(PipeInterest::ALL, None),
        WaitData::Done
    ));

    group.set_command(["/bin/echo", "second"]).expect("set");
    let output = group.run();
    assert_eq!(output.stdout, b"second\n");
    assert_eq!(group.state(), &ProcessState::Exited { exit_value: 0 });
}

#[test]
fn delivered_buffers_are_nonempty_and_bounded() {
    let mut group = ProcessGroup::new();
    group
        .add_command(["/bin/sh", "-c", "head -c 8192 /dev/zero"])
        .expect("add sh");
    group.execute();

    let mut total = 0;
    loop {
        match group.wait_for_data(PipeInterest::ALL, None) {
            WaitData::Stdout(data) | WaitData::Stderr(data) => {
                assert!(!data.is_empty());
                assert!(data.len() <= PIPE_BUFFER_SIZE);
                total += data.len();
            }
            WaitData::Timeout | WaitData::Done => break,
        }
    }
    assert_eq!(group.wait_for_exit(None), WaitResult::Terminated);
    assert_eq!(total, 8192);
}

#[test]
fn kill_is_idempotent_and_gated_on_execution() {
    let mut group = ProcessGroup::new();
    group.add_command(["/bin/sleep", "5"]).expect("add sleep");

    // Before execute: no effect.
    group.kill();
    assert_eq!(group.state(), &ProcessState::Starting);

    group.execute();
    group.kill();
    group.kill();
    assert_eq!(group.wait_for_exit(None), WaitResult::Terminated);
    assert_eq!(group.state(), &ProcessState::Killed);

    // After termination: no effect.
    group.kill();
    assert_eq!(group.state(), &ProcessState::Killed);
}

#[test]
fn prop_exit_values_round_trip() {
    proptest!(ProptestConfig::with_cases(16), |(code in 0i32..=255)| {
        let script = format!("exit {}", code);
        let mut group = ProcessGroup::new();
        group
            .add_command(["/bin/sh", "-c", script.as_str()])
            .expect("add sh");
        group.run();
        prop_assert_eq!(group.state(), &ProcessState::Exited { exit_value: code });
        prop_assert_eq!(group.exit_value(), Some(code));
        prop_assert_eq!(group.exit_exception(), None);
    });
}

#[test]
fn signal_deaths_map_to_their_exception_categories() {
    let cases = [
        ("SEGV", ExceptionKind::Fault),
        ("FPE", ExceptionKind::Numerical),
        ("ILL", ExceptionKind::Illegal),
        ("INT", ExceptionKind::Interrupt),
    ];
    for (name, expected) in cases {
        let script = format!("kill -{} $$", name);
        let mut group = ProcessGroup::new();
        group
            .add_command(["/bin/sh", "-c", script.as_str()])
            .expect("add sh");
        group.run();
        assert_eq!(
            group.exit_exception(),
            Some(expected),
            "signal {} decoded wrong",
            name
        );
        assert_eq!(group.exit_value(), None, "signal {}", name);
    }
}

#[test]
fn expired_takes_precedence_over_the_internal_kill() {
    let mut group = ProcessGroup::new();
    group.add_command(["/bin/sleep", "10"]).expect("add sleep");
    group.set_timeout(0.15);
    group.execute();
    assert_eq!(group.wait_for_exit(None), WaitResult::Terminated);
    assert_eq!(group.state(), &ProcessState::Expired);
    assert_ne!(group.state(), &ProcessState::Killed);
}

#[test]
fn prop_user_budget_decrements_to_exactly_zero() {
    proptest!(ProptestConfig::with_cases(8), |(millis in 20u64..200)| {
        let mut group = ProcessGroup::new();
        group.add_command(["/bin/sleep", "10"]).expect("add sleep");
        group.execute();

        let mut budget = Duration::from_millis(millis);
        let timed_out = matches!(
            group.wait_for_data(PipeInterest::ALL, Some(&mut budget)),
            WaitData::Timeout
        );
        group.kill();
        group.wait_for_exit(None);

        prop_assert!(timed_out);
        prop_assert_eq!(budget, Duration::ZERO);
    });
}
