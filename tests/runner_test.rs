// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Background searches: cancellation, busy policies and progress delivery.

mod common;

use common::{endless_request, request};
use cover_search::{
    BusyPolicy, Progress, RunnerError, SearchConfig, SearchOutcome, SearchPhase, SearchRunner,
};

fn runner(busy_policy: BusyPolicy) -> SearchRunner {
    SearchRunner::new(&SearchConfig {
        busy_policy,
        ..SearchConfig::default()
    })
}

#[test]
fn test_cancel_running_search() {
    let mut runner = runner(BusyPolicy::CancelPrevious);
    let handle = runner.start(endless_request()).unwrap();
    assert!(runner.is_busy());

    handle.cancel();
    let outcome = handle.wait().unwrap();
    assert!(matches!(outcome, SearchOutcome::Cancelled(_)), "{outcome:?}");
    assert!(outcome.solution().is_none());
    assert!(!runner.is_busy());
}

#[test]
fn test_runner_cancel_reaches_worker() {
    let mut runner = runner(BusyPolicy::Reject);
    let handle = runner.start(endless_request()).unwrap();

    runner.cancel();
    assert!(matches!(handle.wait().unwrap(), SearchOutcome::Cancelled(_)));
}

#[test]
fn test_new_request_cancels_previous() {
    let mut runner = runner(BusyPolicy::CancelPrevious);
    let first = runner.start(endless_request()).unwrap();
    let second = runner
        .start(request(&["A", "B"], &[&["A", "B", "C"], &["D", "A", "B"]], 6))
        .unwrap();

    assert!(matches!(first.wait().unwrap(), SearchOutcome::Cancelled(_)));
    assert!(second.wait().unwrap().is_found());
}

#[test]
fn test_busy_runner_rejects() {
    let mut runner = runner(BusyPolicy::Reject);
    let first = runner.start(endless_request()).unwrap();

    let refused = runner.start(request(&["A", "B"], &[&["A", "B"], &["B", "A"]], 6));
    assert!(matches!(refused, Err(RunnerError::Busy)));

    first.cancel();
    first.wait().unwrap();
    let again = runner
        .start(request(&["A", "B"], &[&["A", "B"], &["B", "A"]], 6))
        .unwrap();
    assert!(again.wait().unwrap().is_found());
}

#[test]
fn test_progress_channel() {
    let mut runner = runner(BusyPolicy::CancelPrevious);
    let handle = runner
        .start(request(&["A", "B"], &[&["A", "B", "C"], &["D", "A", "B"]], 6))
        .unwrap();

    // The channel closes when the worker drops its sender.
    let events: Vec<Progress> = handle.progress().iter().collect();
    assert_eq!(events.first(), Some(&Progress::Phase(SearchPhase::Filtering)));
    assert_eq!(events.last(), Some(&Progress::Phase(SearchPhase::Found)));
    assert!(events.contains(&Progress::SizeStarted {
        size: 2,
        combinations: 1
    }));

    assert!(handle.wait().unwrap().is_found());
}

#[test]
fn test_invalid_input_in_background() {
    let mut runner = SearchRunner::default();
    let handle = runner.start(request(&["X"], &[], 6)).unwrap();
    assert!(matches!(
        handle.wait().unwrap(),
        SearchOutcome::InvalidInput { .. }
    ));
}
