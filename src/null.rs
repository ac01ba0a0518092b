//! # Null allocator
//!
//! A leaf that never has any memory to give. Its only interesting behavior
//! is the zero-size case: requesting zero bytes always succeeds, because no
//! memory is actually needed to satisfy it.
//!
//! The distilled C ancestor represents that success case with the literal
//! address `0` — in a language without null pointers as a normal value,
//! [`NonNull::dangling`] is the idiomatic equivalent: a well-aligned,
//! never-dereferenced sentinel that every zero-size allocation from this
//! allocator shares.
//!
//! Used as the innermost leaf of a segregator or fallback tree to make
//! "no more memory available" an explicit, typed outcome instead of a
//! missing branch.

use std::ptr::NonNull;

use crate::contract::Allocator;
use crate::error::{AllocError, FreeError};

/// Grants zero-size requests instantly via a shared dangling sentinel;
/// refuses everything else.
#[derive(Debug, Default)]
pub struct NullAllocator;

impl NullAllocator {
  pub fn new() -> Self {
    Self
  }

  fn is_sentinel(memory: *const u8) -> bool {
    memory as usize == NonNull::<u8>::dangling().as_ptr() as usize
  }
}

impl Allocator for NullAllocator {
  fn allocate(
    &self,
    size: usize,
  ) -> Result<NonNull<u8>, AllocError> {
    if size == 0 {
      Ok(NonNull::dangling())
    } else {
      Err(AllocError::OutOfMemory)
    }
  }

  fn allocate_aligned(
    &self,
    size: usize,
    _align: usize,
  ) -> Result<NonNull<u8>, AllocError> {
    self.allocate(size)
  }

  fn allocate_all(&self) -> Result<NonNull<u8>, AllocError> {
    Err(AllocError::Unsupported)
  }

  fn resize(
    &self,
    memory: NonNull<u8>,
    _old_size: usize,
    new_size: usize,
  ) -> Result<NonNull<u8>, AllocError> {
    if !Self::is_sentinel(memory.as_ptr()) {
      return Err(AllocError::NonOwnedMemory);
    }
    if new_size == 0 {
      Ok(NonNull::dangling())
    } else {
      Err(AllocError::OutOfMemory)
    }
  }

  fn free(
    &self,
    memory: NonNull<u8>,
  ) -> Result<(), FreeError> {
    if Self::is_sentinel(memory.as_ptr()) {
      Ok(())
    } else {
      Err(FreeError::NotOwned)
    }
  }

  fn free_all(&self) -> Result<(), FreeError> {
    Ok(())
  }

  fn query_used(&self) -> Option<usize> {
    None
  }

  fn query_owns(
    &self,
    memory: *const u8,
  ) -> bool {
    Self::is_sentinel(memory)
  }

  fn query_capacity(&self) -> Option<usize> {
    None
  }

  fn query_alignment(&self) -> Option<usize> {
    None
  }

  fn query_good_size(&self) -> Option<usize> {
    None
  }
}
