// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Progress notifications.
//!
//! Observers are told about phase changes, size levels and periodic
//! combination counts. They are advisory: nothing they do can steer the
//! search, and a search runs the same with no observer at all.

use std::sync::mpsc::Sender;

use serde::Serialize;

/// Lifecycle of one search invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum SearchPhase {
    #[default]
    Idle,
    Filtering,
    /// Enumerating combinations of this size.
    Searching(usize),
    Found,
    Exhausted,
    Cancelled,
}

impl SearchPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Found | Self::Exhausted | Self::Cancelled)
    }
}

/// One notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    Phase(SearchPhase),
    /// A size level begins; `combinations` is C(n, size), saturating.
    SizeStarted { size: usize, combinations: u64 },
    /// Checkpoint; `examined` counts every combination so far, all sizes.
    Examined { size: usize, examined: u64 },
    /// Every combination of `size` failed; `examined` counts this level only.
    SizeExhausted { size: usize, examined: u64 },
}

pub trait SearchObserver: Send {
    fn notify(&mut self, progress: Progress);
}

impl<F> SearchObserver for F
where
    F: FnMut(Progress) + Send,
{
    fn notify(&mut self, progress: Progress) {
        self(progress)
    }
}

/// Forwards notifications over an unbounded channel.
///
/// Sending never blocks; notifications for a receiver that has gone away are
/// dropped.
#[derive(Debug)]
pub struct ChannelObserver {
    sender: Sender<Progress>,
}

impl ChannelObserver {
    pub fn new(sender: Sender<Progress>) -> Self {
        Self { sender }
    }
}

impl SearchObserver for ChannelObserver {
    fn notify(&mut self, progress: Progress) {
        let _ = self.sender.send(progress);
    }
}

/// C(n, k), saturating at `u64::MAX`.
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k) as u128;
    let n = n as u128;
    let mut result: u128 = 1;
    for i in 0..k {
        result = result * (n - i) / (i + 1);
        if result > u64::MAX as u128 {
            return u64::MAX;
        }
    }
    result as u64
}
