//! Block cipher modes of operation
//!
//! This module implements the block iteration for ECB and CBC. Both modes
//! work on block-aligned buffers only; padding is applied by the caller.
//! Every iteration reports to a [`BlockMonitor`] before and after each block.

use api::error::Result;

pub mod cbc;
pub mod ecb;

// Re-exports
pub use cbc::Cbc;
pub use ecb::Ecb;

/// Observer of per-block progress within a mode iteration
///
/// Block indices are relative to the buffer handed to the mode.
pub trait BlockMonitor {
    /// Called before block `index` is processed; an error aborts the iteration
    fn before_block(&self, index: usize) -> Result<()>;

    /// Called after block `index` has been written
    fn after_block(&self, index: usize);
}

/// No-op monitor
impl BlockMonitor for () {
    #[inline(always)]
    fn before_block(&self, _index: usize) -> Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn after_block(&self, _index: usize) {}
}

impl<M: BlockMonitor + ?Sized> BlockMonitor for &M {
    #[inline(always)]
    fn before_block(&self, index: usize) -> Result<()> {
        (**self).before_block(index)
    }

    #[inline(always)]
    fn after_block(&self, index: usize) {
        (**self).after_block(index)
    }
}

/// XOR `src` into `dst`
#[inline(always)]
pub(crate) fn xor_block(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d ^= s;
    }
}
