//! # Fallback compositor
//!
//! Presents the union of two allocators, trying the primary first and
//! only reaching for the secondary once the primary refuses a request.
//!
//! ```text
//!   allocate(size)
//!        │
//!        ▼
//!   primary.allocate(size) ──── Ok(ptr) ───────────────────► return ptr
//!        │
//!        │ Err
//!        ▼
//!   (log: falling back to secondary, once per instance)
//!        │
//!        ▼
//!   secondary.allocate(size) ── Ok(ptr) ───────────────────► return ptr
//!        │
//!        │ Err(e)
//!        ▼
//!   return Err(e)               <- secondary's error, not primary's
//! ```
//!
//! A classic use is pairing a small, fast stack allocator with the system
//! heap as a safety net: allocations that fit in the stack are essentially
//! free, and only the overflow pays for a real `malloc`.

use std::ptr::NonNull;
use std::sync::Once;

use crate::contract::Allocator;
use crate::error::{AllocError, FreeError};

/// Tries `primary` first, falls back to `secondary` on failure.
pub struct FallbackAllocator<P, S> {
  primary: P,
  secondary: S,
  logged_fallback: Once,
}

impl<P: Allocator, S: Allocator> FallbackAllocator<P, S> {
  pub fn new(
    primary: P,
    secondary: S,
  ) -> Self {
    Self { primary, secondary, logged_fallback: Once::new() }
  }

  /// Borrow the primary allocator directly (e.g. to query it in isolation).
  pub fn primary(&self) -> &P {
    &self.primary
  }

  /// Borrow the secondary allocator directly.
  pub fn secondary(&self) -> &S {
    &self.secondary
  }

  fn log_fallback(&self) {
    self.logged_fallback.call_once(|| {
      #[cfg(feature = "logging")]
      log::debug!("fallback allocator: primary exhausted, routing to secondary");
    });
  }

  fn combine_owns(
    &self,
    memory: *const u8,
  ) -> bool {
    self.primary.query_owns(memory) || self.secondary.query_owns(memory)
  }

  fn combine_min(
    a: Option<usize>,
    b: Option<usize>,
  ) -> Option<usize> {
    match (a, b) {
      (Some(a), Some(b)) => Some(a.min(b)),
      (Some(a), None) => Some(a),
      (None, Some(b)) => Some(b),
      (None, None) => None,
    }
  }

  fn combine_sum(
    a: Option<usize>,
    b: Option<usize>,
  ) -> Option<usize> {
    match (a, b) {
      (Some(a), Some(b)) => Some(a + b),
      (Some(a), None) => Some(a),
      (None, Some(b)) => Some(b),
      (None, None) => None,
    }
  }
}

impl<P: Allocator, S: Allocator> Allocator for FallbackAllocator<P, S> {
  fn allocate(
    &self,
    size: usize,
  ) -> Result<NonNull<u8>, AllocError> {
    match self.primary.allocate(size) {
      Ok(ptr) => Ok(ptr),
      Err(_) => {
        self.log_fallback();
        self.secondary.allocate(size)
      }
    }
  }

  fn allocate_aligned(
    &self,
    size: usize,
    align: usize,
  ) -> Result<NonNull<u8>, AllocError> {
    match self.primary.allocate_aligned(size, align) {
      Ok(ptr) => Ok(ptr),
      Err(_) => {
        self.log_fallback();
        self.secondary.allocate_aligned(size, align)
      }
    }
  }

  fn allocate_all(&self) -> Result<NonNull<u8>, AllocError> {
    Err(AllocError::Unsupported)
  }

  fn resize(
    &self,
    memory: NonNull<u8>,
    old_size: usize,
    new_size: usize,
  ) -> Result<NonNull<u8>, AllocError> {
    if self.primary.query_owns(memory.as_ptr()) {
      self.primary.resize(memory, old_size, new_size)
    } else if self.secondary.query_owns(memory.as_ptr()) {
      self.secondary.resize(memory, old_size, new_size)
    } else {
      Err(AllocError::NonOwnedMemory)
    }
  }

  fn free(
    &self,
    memory: NonNull<u8>,
  ) -> Result<(), FreeError> {
    match self.primary.free(memory) {
      Err(FreeError::NotOwned) => self.secondary.free(memory),
      result => result,
    }
  }

  fn free_all(&self) -> Result<(), FreeError> {
    match (self.primary.free_all(), self.secondary.free_all()) {
      (Err(e), Err(_)) => Err(e),
      _ => Ok(()),
    }
  }

  fn query_used(&self) -> Option<usize> {
    Self::combine_sum(self.primary.query_used(), self.secondary.query_used())
  }

  fn query_owns(
    &self,
    memory: *const u8,
  ) -> bool {
    self.combine_owns(memory)
  }

  fn query_capacity(&self) -> Option<usize> {
    Self::combine_sum(self.primary.query_capacity(), self.secondary.query_capacity())
  }

  fn query_alignment(&self) -> Option<usize> {
    Self::combine_min(self.primary.query_alignment(), self.secondary.query_alignment())
  }

  fn query_good_size(&self) -> Option<usize> {
    Self::combine_min(self.primary.query_good_size(), self.secondary.query_good_size())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::stack::StackAllocator;
  use crate::system::SystemAllocator;

  #[test]
  fn falls_back_once_primary_is_full() {
    let mut buffer = vec![0u8; 512];
    let stack = StackAllocator::new(&mut buffer);
    let fallback = FallbackAllocator::new(stack, SystemAllocator::new());

    // Too big for the 512-byte primary; both spill to the secondary
    // system heap, which reports no ownership of its own (matching its
    // distilled ancestor) but still frees correctly through the fallback.
    let x = fallback.allocate(1000).unwrap();
    let y = fallback.allocate(1000).unwrap();

    fallback.free(x).unwrap();
    fallback.free(y).unwrap();
  }

  #[test]
  fn capacity_and_alignment_combinators() {
    let mut buffer_a = vec![0u8; 100];
    let mut buffer_b = vec![0u8; 200];
    let a = StackAllocator::new(&mut buffer_a);
    let b = StackAllocator::new(&mut buffer_b);
    let fallback = FallbackAllocator::new(a, b);

    assert_eq!(fallback.query_capacity(), Some(300));
    assert_eq!(fallback.query_alignment(), Some(1));
  }

  #[test]
  fn capacity_skips_unsupported_child() {
    let mut buffer = vec![0u8; 256];
    let stack = StackAllocator::new(&mut buffer);
    let fallback = FallbackAllocator::new(stack, SystemAllocator::new());

    // System heap reports no capacity; only the stack's should surface.
    assert_eq!(fallback.query_capacity(), Some(256));
  }

  #[test]
  fn allocate_all_is_unsupported() {
    let mut buffer = vec![0u8; 64];
    let stack = StackAllocator::new(&mut buffer);
    let fallback = FallbackAllocator::new(stack, SystemAllocator::new());
    assert_eq!(fallback.allocate_all(), Err(AllocError::Unsupported));
  }
}
