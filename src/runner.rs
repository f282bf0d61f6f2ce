// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Running searches on a worker thread.
//!
//! A [`SearchRunner`] allows one search in flight at a time. Depending on its
//! [`BusyPolicy`] a new request either cancels the running search or is
//! refused. Progress arrives on a channel owned by the [`SearchHandle`], so
//! an interactive caller can poll it without ever blocking the search.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::debug;

use crate::cancel::CancellationToken;
use crate::config::{BusyPolicy, SearchConfig};
use crate::error::RunnerError;
use crate::observer::{ChannelObserver, Progress};
use crate::search::{SearchOptions, SearchOutcome, SearchRequest};

/// Clears the running flag when the worker ends, even by panic.
struct RunningGuard(Arc<AtomicBool>);

impl Drop for RunningGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[derive(Debug)]
struct ActiveSearch {
    cancellation: CancellationToken,
    running: Arc<AtomicBool>,
}

/// Starts searches on background threads, one at a time.
#[derive(Debug)]
pub struct SearchRunner {
    policy: BusyPolicy,
    progress_interval: u64,
    active: Option<ActiveSearch>,
}

impl SearchRunner {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            policy: config.busy_policy,
            progress_interval: config.progress_interval,
            active: None,
        }
    }

    /// Whether the most recently started search is still running.
    pub fn is_busy(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|active| active.running.load(Ordering::Acquire))
    }

    /// Cancel the running search, if any.
    pub fn cancel(&self) {
        if let Some(active) = &self.active {
            active.cancellation.cancel();
        }
    }

    pub fn start(&mut self, request: SearchRequest) -> Result<SearchHandle, RunnerError> {
        if self.is_busy() {
            match self.policy {
                BusyPolicy::Reject => return Err(RunnerError::Busy),
                BusyPolicy::CancelPrevious => {
                    debug!("cancelling running search for a new request");
                    self.cancel();
                }
            }
        }

        let cancellation = CancellationToken::new();
        let running = Arc::new(AtomicBool::new(true));
        let (sender, receiver) = mpsc::channel();
        let options = SearchOptions::new()
            .with_observer(Box::new(ChannelObserver::new(sender)))
            .with_cancellation(cancellation.clone())
            .with_progress_interval(self.progress_interval);

        let guard = RunningGuard(running.clone());
        let worker = thread::Builder::new()
            .name("cover-search".into())
            .spawn(move || {
                let _guard = guard;
                request.run_with(options)
            })?;

        self.active = Some(ActiveSearch {
            cancellation: cancellation.clone(),
            running,
        });
        Ok(SearchHandle {
            cancellation,
            progress: receiver,
            worker,
        })
    }
}

impl Default for SearchRunner {
    fn default() -> Self {
        Self::new(&SearchConfig::default())
    }
}

/// A search running on a worker thread.
#[derive(Debug)]
pub struct SearchHandle {
    cancellation: CancellationToken,
    progress: Receiver<Progress>,
    worker: JoinHandle<SearchOutcome>,
}

impl SearchHandle {
    pub fn cancel(&self) {
        self.cancellation.cancel();
    }

    /// Progress notifications. The channel closes when the search ends.
    pub fn progress(&self) -> &Receiver<Progress> {
        &self.progress
    }

    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    /// Block until the search ends.
    pub fn wait(self) -> Result<SearchOutcome, RunnerError> {
        self.worker.join().map_err(|_| RunnerError::WorkerPanicked)
    }
}
