//! Error taxonomy for the allocator contract.
//!
//! The distilled C ancestor of this crate encodes both of these as small
//! integers returned through the same machine word as a successful
//! allocation, relying on the first page of the address space never being a
//! valid pointer. That trick does not belong in a typed language: here the
//! two taxonomies are ordinary enums threaded through `Result`, and a
//! successful allocation is simply `Ok`.

/// Failure modes for allocating operations (`allocate`, `allocate_aligned`,
/// `allocate_all`, `resize`).
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocError {
  /// The allocator has insufficient capacity left to satisfy this request.
  #[error("allocator has insufficient capacity for this request")]
  OutOfMemory,

  /// This allocator does not implement this operation at all (e.g.
  /// `allocate_all` on the system heap).
  #[error("this operation is not supported by this allocator")]
  Unsupported,

  /// The operation referenced memory this allocator did not hand out
  /// (e.g. `resize` on a pointer that isn't the stack allocator's current
  /// top allocation).
  #[error("the referenced memory is not owned by this allocator")]
  NonOwnedMemory,
}

/// Failure modes for freeing operations (`free`, `free_all`).
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreeError {
  /// The pointer being freed was not allocated by this allocator, or is no
  /// longer the live top-of-stack / chain entry.
  #[error("the freed pointer was not allocated by this allocator")]
  NotOwned,

  /// This allocator does not implement this operation at all (e.g.
  /// `free` on the segregator before routing was implemented).
  #[error("this operation is not supported by this allocator")]
  Unsupported,
}
