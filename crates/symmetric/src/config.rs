//! Engine configuration
//!
//! A [`CipherConfig`] controls how an engine schedules its work. It never
//! changes the bytes an engine produces.

use std::num::NonZeroUsize;

use api::error::{validate, Result};
use params::utils::symmetric::{DEFAULT_MIN_BLOCKS_PER_WORKER, DEFAULT_PROGRESS_INTERVAL};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Scheduling knobs shared by every engine
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct CipherConfig {
    /// Upper bound on worker threads for a single call
    pub workers: usize,
    /// Whether modes that allow it may split a call across workers
    pub parallel: bool,
    /// Smallest share of blocks worth handing to a worker
    pub min_blocks_per_worker: usize,
    /// Report progress every this many blocks
    pub progress_interval: usize,
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            workers: std::thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
            parallel: true,
            min_blocks_per_worker: DEFAULT_MIN_BLOCKS_PER_WORKER,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl CipherConfig {
    /// Configuration that keeps every call on the calling thread
    pub fn sequential() -> Self {
        Self {
            workers: 1,
            parallel: false,
            ..Self::default()
        }
    }

    /// Upper bound on worker threads per call
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Allow or forbid splitting a call across workers
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Smallest number of blocks worth handing to one worker
    pub fn with_min_blocks_per_worker(mut self, blocks: usize) -> Self {
        self.min_blocks_per_worker = blocks;
        self
    }

    /// Blocks between two progress notifications
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Reject values that would make scheduling meaningless
    pub fn validate(&self) -> Result<()> {
        validate::parameter(self.workers > 0, "workers", "must be at least 1")?;
        validate::parameter(
            self.min_blocks_per_worker > 0,
            "min_blocks_per_worker",
            "must be at least 1",
        )?;
        validate::parameter(
            self.progress_interval > 0,
            "progress_interval",
            "must be at least 1",
        )?;
        Ok(())
    }

    /// Number of workers to use for `total_blocks` blocks
    pub(crate) fn workers_for(&self, total_blocks: usize) -> usize {
        if !self.parallel {
            return 1;
        }
        let by_size = total_blocks / self.min_blocks_per_worker.max(1);
        self.workers.min(by_size).max(1)
    }
}
