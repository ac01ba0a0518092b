//! The uniform allocator contract.
//!
//! Every leaf allocator, strategy, and compositor in this crate implements
//! [`Allocator`]. Callers that hold a `&dyn Allocator` or a generic
//! `impl Allocator` never observe which concrete strategy is underneath —
//! a stack allocator, a free-list, or a whole tree of fallbacks and
//! segregators all answer the same eleven calls.
//!
//! ```text
//!   Allocator (trait)
//!   ├── allocate / allocate_aligned / allocate_all / resize   -> Result<NonNull<u8>, AllocError>
//!   ├── free / free_all                                       -> Result<(), FreeError>
//!   └── query_used / query_owns / query_capacity /
//!       query_alignment / query_good_size                     -> Option<usize> / bool
//! ```
//!
//! The distilled spec this crate implements models a call as an operation
//! code plus a tagged argument record, dispatched through a single
//! `(function, state)` pair. That encoding is an artifact of writing a
//! polymorphic interface in C; [`Operation`] and [`OperationArgs`] preserve
//! it here purely for introspection (logging, exhaustive test generation) —
//! the actual calling convention is the trait above.

use std::fmt;
use std::panic::Location;
use std::ptr::NonNull;

use crate::error::{AllocError, FreeError};

/// Identifies which contract operation a call represents, for diagnostics
/// only — not used to dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
  Allocate,
  AllocateAligned,
  AllocateAll,
  Resize,
  Free,
  FreeAll,
  QueryUsed,
  QueryOwns,
  QueryCapacity,
  QueryAlignment,
  QueryGoodSize,
}

impl fmt::Display for Operation {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    let name = match self {
      Operation::Allocate => "allocate",
      Operation::AllocateAligned => "allocate_aligned",
      Operation::AllocateAll => "allocate_all",
      Operation::Resize => "resize",
      Operation::Free => "free",
      Operation::FreeAll => "free_all",
      Operation::QueryUsed => "query_used",
      Operation::QueryOwns => "query_owns",
      Operation::QueryCapacity => "query_capacity",
      Operation::QueryAlignment => "query_alignment",
      Operation::QueryGoodSize => "query_good_size",
    };
    f.write_str(name)
  }
}

/// The tagged argument record matching an [`Operation`], kept for the same
/// introspection purposes. Every typed helper in [`AllocatorExt`]
/// constructs one of these purely to hand it to the logging facade.
#[derive(Debug, Clone, Copy)]
pub enum OperationArgs {
  Size { size: usize },
  SizeAligned { size: usize, align: usize },
  Resize { memory: NonNull<u8>, old_size: usize, new_size: usize },
  Memory { memory: NonNull<u8> },
  None,
}

/// The uniform allocator contract.
///
/// Implementors use interior mutability (a `Cell`, `RefCell`, or manual
/// `UnsafeCell` bookkeeping) so that a shared `&self` suffices for every
/// call — this lets compositors hold two sibling allocators and call either
/// one through a shared reference, the same way the distilled spec's
/// `{procedure, data}` handle is freely copied and invoked.
pub trait Allocator {
  /// Allocates `size` bytes at this allocator's default alignment.
  fn allocate(
    &self,
    size: usize,
  ) -> Result<NonNull<u8>, AllocError>;

  /// Allocates `size` bytes aligned to `align`, which must be a power of
  /// two.
  fn allocate_aligned(
    &self,
    size: usize,
    align: usize,
  ) -> Result<NonNull<u8>, AllocError>;

  /// Allocates every byte this allocator currently has available.
  fn allocate_all(&self) -> Result<NonNull<u8>, AllocError>;

  /// Resizes a live allocation of `old_size` bytes to `new_size`, keeping
  /// the same alignment. Not every allocator can do this in place.
  fn resize(
    &self,
    memory: NonNull<u8>,
    old_size: usize,
    new_size: usize,
  ) -> Result<NonNull<u8>, AllocError>;

  /// Frees a single allocation previously returned by this allocator.
  fn free(
    &self,
    memory: NonNull<u8>,
  ) -> Result<(), FreeError>;

  /// Frees every outstanding allocation at once.
  fn free_all(&self) -> Result<(), FreeError>;

  /// Bytes currently handed out, or `None` if this allocator doesn't track
  /// usage.
  fn query_used(&self) -> Option<usize>;

  /// Whether `memory` was handed out by (and is still owned by) this
  /// allocator.
  fn query_owns(
    &self,
    memory: *const u8,
  ) -> bool;

  /// Total bytes this allocator can ever hand out, or `None` if unbounded
  /// / unknown.
  fn query_capacity(&self) -> Option<usize>;

  /// The alignment guaranteed by `allocate` (not `allocate_aligned`), or
  /// `None` if this allocator doesn't track one.
  fn query_alignment(&self) -> Option<usize>;

  /// The size for which this allocator wastes the least space, or `None`
  /// if not meaningful.
  fn query_good_size(&self) -> Option<usize>;
}

/// Typed convenience helpers layered over [`Allocator`].
///
/// These mirror the distilled spec's `nax_allocate_type`/`nax_allocate`/...
/// macros: they compute `size = count * size_of::<T>()` and
/// `align = align_of::<T>()` for the caller, and capture the call site via
/// [`Location::caller`] — the Rust equivalent of the original's
/// `__FILE__`/`__FUNCTION__`/`__LINE__` capture — for the `logging`
/// feature's diagnostic trace. None of this changes allocation semantics.
pub trait AllocatorExt: Allocator {
  /// Allocates space for a single `T`, aligned for `T`.
  #[track_caller]
  fn alloc_value<T>(&self) -> Result<NonNull<u8>, AllocError> {
    self.alloc_aligned(size_of::<T>(), align_of::<T>())
  }

  /// Allocates space for `count` contiguous `T`s, aligned for `T`.
  #[track_caller]
  fn alloc_slice<T>(
    &self,
    count: usize,
  ) -> Result<NonNull<u8>, AllocError> {
    self.alloc_aligned(count * size_of::<T>(), align_of::<T>())
  }

  /// Allocates `size` bytes at the allocator's default alignment.
  #[track_caller]
  fn alloc_bytes(
    &self,
    size: usize,
  ) -> Result<NonNull<u8>, AllocError> {
    trace_call(Operation::Allocate, OperationArgs::Size { size });
    self.allocate(size)
  }

  /// Allocates `size` bytes aligned to `align`.
  #[track_caller]
  fn alloc_aligned(
    &self,
    size: usize,
    align: usize,
  ) -> Result<NonNull<u8>, AllocError> {
    trace_call(Operation::AllocateAligned, OperationArgs::SizeAligned { size, align });
    self.allocate_aligned(size, align)
  }

  /// Allocates everything this allocator has left.
  #[track_caller]
  fn alloc_all(&self) -> Result<NonNull<u8>, AllocError> {
    trace_call(Operation::AllocateAll, OperationArgs::None);
    self.allocate_all()
  }

  /// Resizes a live allocation in place (or via reallocation).
  #[track_caller]
  fn resize_alloc(
    &self,
    memory: NonNull<u8>,
    old_size: usize,
    new_size: usize,
  ) -> Result<NonNull<u8>, AllocError> {
    trace_call(Operation::Resize, OperationArgs::Resize { memory, old_size, new_size });
    self.resize(memory, old_size, new_size)
  }

  /// Frees a single allocation.
  #[track_caller]
  fn free_one(
    &self,
    memory: NonNull<u8>,
  ) -> Result<(), FreeError> {
    trace_call(Operation::Free, OperationArgs::Memory { memory });
    self.free(memory)
  }

  /// Frees every outstanding allocation.
  #[track_caller]
  fn free_everything(&self) -> Result<(), FreeError> {
    trace_call(Operation::FreeAll, OperationArgs::None);
    self.free_all()
  }
}

impl<A: Allocator + ?Sized> AllocatorExt for A {}

/// Emits a `log::trace!` record naming the call site, when the `logging`
/// feature is enabled. A no-op otherwise, so the typed helpers above cost
/// nothing in a build that doesn't want the facade.
#[track_caller]
fn trace_call(
  op: Operation,
  _args: OperationArgs,
) {
  #[cfg(feature = "logging")]
  {
    let location = Location::caller();
    log::trace!("{op} called at {}:{}:{}", location.file(), location.line(), location.column());
  }
  #[cfg(not(feature = "logging"))]
  {
    let _ = op;
  }
}
