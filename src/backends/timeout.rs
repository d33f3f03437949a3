//! Deadline wrapper for slow taggers.
//!
//! Real taggers are heavyweight models and a single pathological text can
//! stall a batch. `TimeoutTagger` hands each call to a fixed pool of worker
//! threads over a bounded channel and waits for the reply with a deadline.
//!
//! ```text
//! caller ─► [job queue, cap = workers] ─► worker 1 ─► inner.tag()
//!   ▲                                     worker 2 ─► inner.tag()
//!   └──────── reply (recv_deadline) ◄─────────┘
//! ```
//!
//! A call that misses its deadline is reported as [`Error::Timeout`]; its
//! late result is dropped. A hung tagger can pin at most `workers` threads:
//! once they are all busy and the queue is full, further calls time out
//! without spawning anything. Queued jobs whose deadline has passed are
//! skipped by the workers.

use crate::{Entity, Error, PersonTagger, Result};
use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, SendTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

struct Job {
    text: String,
    deadline: Option<Instant>,
    reply: Sender<Result<Vec<Entity>>>,
}

/// Get number of CPUs (fallback to 4).
fn num_cpus() -> usize {
    thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(4)
}

/// Wraps a shared tagger with a per-call deadline.
///
/// Workers exit once every clone of the wrapper is dropped and their current
/// call returns.
#[derive(Clone)]
pub struct TimeoutTagger {
    inner: Arc<dyn PersonTagger>,
    timeout: Duration,
    jobs: Sender<Job>,
    workers: usize,
}

impl TimeoutTagger {
    /// Wrap `inner` so each call gives up after `timeout`, with one worker
    /// per CPU.
    pub fn new(inner: Arc<dyn PersonTagger>, timeout: Duration) -> Self {
        Self::with_workers(inner, timeout, num_cpus())
    }

    /// Wrap `inner` with an explicit worker count (at least 1).
    pub fn with_workers(inner: Arc<dyn PersonTagger>, timeout: Duration, workers: usize) -> Self {
        let workers = workers.max(1);
        let (tx, rx) = bounded::<Job>(workers);

        let mut spawned = 0;
        for i in 0..workers {
            let rx = rx.clone();
            let tagger = Arc::clone(&inner);
            let result = thread::Builder::new()
                .name(format!("fio-tagger-{}-{}", inner.name(), i))
                .spawn(move || worker_loop(tagger, rx));
            match result {
                Ok(_) => spawned += 1,
                Err(e) => log::warn!("failed to spawn tagger worker {}: {}", i, e),
            }
        }
        log::debug!("tagger '{}': {} workers, {:?} deadline", inner.name(), spawned, timeout);

        Self {
            inner,
            timeout,
            jobs: tx,
            workers: spawned,
        }
    }

    /// The configured deadline.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Number of running workers.
    #[must_use]
    pub fn workers(&self) -> usize {
        self.workers
    }
}

fn worker_loop(tagger: Arc<dyn PersonTagger>, jobs: Receiver<Job>) {
    for job in jobs.iter() {
        if job.deadline.is_some_and(|d| Instant::now() >= d) {
            continue;
        }
        // Receiver may be gone after a timeout.
        let _ = job.reply.send(tagger.tag(&job.text));
    }
}

impl PersonTagger for TimeoutTagger {
    fn tag(&self, text: &str) -> Result<Vec<Entity>> {
        if self.workers == 0 {
            return Err(Error::tagger("no tagger workers are running"));
        }

        let (reply, rx) = bounded(1);
        // `None` for deadlines too far out to represent: wait indefinitely.
        let deadline = Instant::now().checked_add(self.timeout);
        let job = Job {
            text: text.to_string(),
            deadline,
            reply,
        };

        let sent = match deadline {
            Some(d) => self.jobs.send_deadline(job, d),
            None => self.jobs.send(job).map_err(|e| SendTimeoutError::Disconnected(e.0)),
        };
        match sent {
            Ok(()) => {}
            Err(SendTimeoutError::Timeout(_)) => return Err(Error::Timeout(self.timeout)),
            Err(SendTimeoutError::Disconnected(_)) => {
                return Err(Error::tagger("tagger workers have exited"))
            }
        }

        let received = match deadline {
            Some(d) => rx.recv_deadline(d),
            None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };
        match received {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => Err(Error::Timeout(self.timeout)),
            Err(RecvTimeoutError::Disconnected) => {
                Err(Error::tagger("tagger worker exited without a result"))
            }
        }
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn is_available(&self) -> bool {
        self.workers > 0 && self.inner.is_available()
    }
}
