//! Progress reporting and cancellation for a single engine call
//!
//! A [`Reporter`] is the [`BlockMonitor`] every chaining loop of a call talks
//! to, whether the call runs on one thread or on several. It checks the
//! cancellation flag before each block and forwards progress to the caller's
//! callback after every `interval`-th block.
//!
//! Percentages handed to the callback never decrease within a call. A callback
//! that panics is logged and not invoked again for the rest of the call; the
//! call itself carries on.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use algorithms::block::BlockMonitor;
use api::error::{Error, Result};
use api::types::{CancelFlag, ProgressCallback, RunOptions};
use log::warn;

/// Direction of an engine call, used to word progress messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    fn verb(self) -> &'static str {
        match self {
            Self::Encrypt => "Encrypting",
            Self::Decrypt => "Decrypting",
        }
    }

    fn done(self) -> &'static str {
        match self {
            Self::Encrypt => "Encryption complete",
            Self::Decrypt => "Decryption complete",
        }
    }
}

#[derive(Default)]
struct Emitted {
    blocks: usize,
    muted: bool,
}

/// Per-call progress and cancellation monitor
pub(crate) struct Reporter<'a> {
    callback: Option<ProgressCallback<'a>>,
    cancel: Option<&'a CancelFlag>,
    direction: Direction,
    total: usize,
    interval: usize,
    completed: AtomicUsize,
    emitted: Mutex<Emitted>,
}

impl<'a> Reporter<'a> {
    pub(crate) fn new(
        options: &RunOptions<'a>,
        direction: Direction,
        total: usize,
        interval: usize,
    ) -> Self {
        Self {
            callback: options.progress,
            cancel: options.cancel,
            direction,
            total,
            interval: interval.max(1),
            completed: AtomicUsize::new(0),
            emitted: Mutex::new(Emitted::default()),
        }
    }

    /// Fail with `Cancelled` if the caller raised the flag
    pub(crate) fn check_cancelled(&self) -> Result<()> {
        match self.cancel {
            Some(flag) if flag.is_cancelled() => Err(Error::Cancelled),
            _ => Ok(()),
        }
    }

    /// Report completion of the whole call
    pub(crate) fn finish(&self) {
        if self.callback.is_none() {
            return;
        }
        let mut emitted = self.emitted.lock().unwrap_or_else(PoisonError::into_inner);
        emitted.blocks = self.total;
        self.emit(&mut emitted, 100.0, self.direction.done());
    }

    fn emit(&self, emitted: &mut Emitted, percent: f64, message: &str) {
        let Some(callback) = self.callback else {
            return;
        };
        if emitted.muted {
            return;
        }
        if catch_unwind(AssertUnwindSafe(|| callback(percent, message))).is_err() {
            warn!(
                "progress callback panicked at {:.1}%; further notifications for this call are suppressed",
                percent
            );
            emitted.muted = true;
        }
    }
}

impl BlockMonitor for Reporter<'_> {
    #[inline]
    fn before_block(&self, _index: usize) -> Result<()> {
        self.check_cancelled()
    }

    fn after_block(&self, index: usize) {
        if self.callback.is_none() {
            return;
        }
        let done = self.completed.fetch_add(1, Ordering::AcqRel) + 1;
        if index % self.interval != 0 {
            return;
        }

        let mut emitted = self.emitted.lock().unwrap_or_else(PoisonError::into_inner);
        // Another worker may already have reported a later count
        if done <= emitted.blocks {
            return;
        }
        emitted.blocks = done;
        let percent = done as f64 * 100.0 / self.total as f64;
        let message = format!("{} block {}/{}", self.direction.verb(), done, self.total);
        self.emit(&mut emitted, percent, &message);
    }
}

/// Shifts the indices a chaining loop reports by the position of its range
pub(crate) struct Offset<'r, M: ?Sized> {
    base: usize,
    inner: &'r M,
}

impl<'r, M: BlockMonitor + ?Sized> Offset<'r, M> {
    pub(crate) fn new(base: usize, inner: &'r M) -> Self {
        Self { base, inner }
    }
}

impl<M: BlockMonitor + ?Sized> BlockMonitor for Offset<'_, M> {
    #[inline]
    fn before_block(&self, index: usize) -> Result<()> {
        self.inner.before_block(self.base + index)
    }

    #[inline]
    fn after_block(&self, index: usize) {
        self.inner.after_block(self.base + index)
    }
}
