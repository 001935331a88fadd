//! Splitting a block-aligned buffer across worker threads
//!
//! The buffer is cut into contiguous, block-aligned ranges, one per worker.
//! Each worker gets the index of the first block of its range so that it can
//! report absolute block numbers and, for CBC decryption, find the ciphertext
//! block that precedes its range.

use std::panic::resume_unwind;
use std::thread;

use api::error::Result;
use log::trace;
use params::utils::symmetric::AES_BLOCK_SIZE;

/// Runs `work` over `data`, either inline or on `workers` scoped threads
///
/// `work(first_block, range)` must leave `range` exactly as a sequential pass
/// over the whole buffer would. The first error in range order is returned;
/// a worker panic is propagated to the caller.
pub(crate) fn for_each_range<F>(data: &mut [u8], workers: usize, work: F) -> Result<()>
where
    F: Fn(usize, &mut [u8]) -> Result<()> + Sync,
{
    let total_blocks = data.len() / AES_BLOCK_SIZE;
    if workers <= 1 || total_blocks < 2 {
        return work(0, data);
    }

    let per_worker = total_blocks.div_ceil(workers);
    trace!(
        "dispatching {} blocks as ranges of {} blocks",
        total_blocks,
        per_worker
    );

    thread::scope(|scope| {
        let work = &work;
        let handles: Vec<_> = data
            .chunks_mut(per_worker * AES_BLOCK_SIZE)
            .enumerate()
            .map(|(i, range)| {
                let first = i * per_worker;
                trace!(
                    "range {} covers blocks {}..{}",
                    i,
                    first,
                    first + range.len() / AES_BLOCK_SIZE
                );
                scope.spawn(move || work(first, range))
            })
            .collect();

        let mut result = Ok(());
        for handle in handles {
            match handle.join() {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    if result.is_ok() {
                        result = Err(e);
                    }
                }
                Err(panic) => resume_unwind(panic),
            }
        }
        result
    })
}
