//! Node allocators.
//!
//! - [`HeapAllocator`] draws every node from the global allocator.
//! - [`FixedPool`] owns one block of fixed-size node slots and never touches
//!   the global allocator after construction.
//! - [`SharedPool`] puts a `FixedPool` behind a spin lock so several lists can
//!   draw from, and splice within, the same pool.

mod heap;
mod pool;

pub use heap::HeapAllocator;
pub use pool::{FixedPool, SharedPool};
