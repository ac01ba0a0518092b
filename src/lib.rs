//! # rallocator - Composable Memory Allocators
//!
//! This crate provides a small algebra of memory allocators that compose:
//! **leaves** that own or forward to real memory, **strategies** that carve
//! a single buffer into allocations, and **compositors** that combine two
//! child allocators into one.
//!
//! ## Overview
//!
//! Every allocator in this crate — no matter how deeply nested — implements
//! the same [`Allocator`] trait. A caller holding `&dyn Allocator` cannot
//! tell whether it's a bare [`StackAllocator`] or a [`SegregatorAllocator`]
//! routing between a [`FreeListAllocator`] and a [`FallbackAllocator`] of
//! [`StackAllocator`] and [`SystemAllocator`]:
//!
//! ```text
//!   Allocator (trait)
//!   │
//!   ├── leaves
//!   │     ├── NullAllocator    - zero-size requests only
//!   │     ├── PanicAllocator   - every call panics (unreachable guard)
//!   │     └── SystemAllocator  - forwards to the global heap
//!   │
//!   ├── strategies (own a buffer, carve it up)
//!   │     ├── StackAllocator   - bump pointer, LIFO free
//!   │     └── FreeListAllocator - fixed-size blocks, intrusive free list
//!   │
//!   └── compositors (combine two children)
//!         ├── FallbackAllocator  - try primary, then secondary
//!         └── SegregatorAllocator - route by a size threshold
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//!   rallocator
//!   ├── align      - alignment primitives (align!, align_up, is_power_of_two)
//!   ├── error      - AllocError / FreeError taxonomies
//!   ├── contract   - the Allocator trait and its typed AllocatorExt helpers
//!   ├── stack      - StackAllocator (bump, LIFO free)
//!   ├── freelist   - FreeListAllocator (fixed-block, intrusive free list)
//!   ├── fallback   - FallbackAllocator (try primary, then secondary)
//!   ├── segregator - SegregatorAllocator (route by size threshold)
//!   ├── null       - NullAllocator (zero-size leaf)
//!   ├── panic      - PanicAllocator (unreachable-guard leaf)
//!   └── system     - SystemAllocator (global heap leaf)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use rallocator::{AllocatorExt, StackAllocator};
//!
//! let mut buffer = [0u8; 1024];
//! let allocator = StackAllocator::new(&mut buffer);
//!
//! let value = allocator.alloc_value::<u64>().unwrap().cast::<u64>();
//! unsafe {
//!     value.as_ptr().write(42);
//!     assert_eq!(value.as_ptr().read(), 42);
//! }
//! ```
//!
//! Composing a small fixed-block pool with a system-heap fallback for
//! anything larger:
//!
//! ```rust
//! use rallocator::{Allocator, FallbackAllocator, FreeListAllocator, SystemAllocator};
//!
//! let mut buffer = [0u8; 1024];
//! let pool = FreeListAllocator::new(&mut buffer, 64, 16);
//! let allocator = FallbackAllocator::new(pool, SystemAllocator::new());
//!
//! let small = allocator.allocate(64).unwrap();
//! let large = allocator.allocate(4096).unwrap();
//! allocator.free(small).unwrap();
//! allocator.free(large).unwrap();
//! ```
//!
//! ## Limitations
//!
//! - **Single-threaded only**: no allocator here is `Sync`; sharing one
//!   across threads requires external synchronization.
//! - **No real-time guarantees**: `FallbackAllocator` and `SegregatorAllocator`
//!   both add a branch to every call, but every leaf and strategy remains O(1).
//!
//! ## Safety
//!
//! Every [`Allocator`] method returns typed `Result`/`Option` values rather
//! than raw pointers with sentinel encodings, but the memory underneath is
//! still raw: callers must not use a pointer after freeing it, and must not
//! free a pointer twice. Debug builds catch both mistakes where practical
//! (see [`stack::StackAllocator`] and the `0xCC` fill pattern used
//! throughout this crate).

pub mod align;
pub mod contract;
pub mod error;
pub mod fallback;
pub mod freelist;
pub mod null;
pub mod panic;
pub mod segregator;
pub mod stack;
pub mod system;

pub use contract::{Allocator, AllocatorExt, Operation, OperationArgs};
pub use error::{AllocError, FreeError};
pub use fallback::FallbackAllocator;
pub use freelist::FreeListAllocator;
pub use null::NullAllocator;
pub use panic::PanicAllocator;
pub use segregator::SegregatorAllocator;
pub use stack::StackAllocator;
pub use system::SystemAllocator;
