//! # Segregator compositor
//!
//! Splits requests by size: anything at or below `threshold` goes to
//! `small`, everything larger goes to `large`. A common pairing is a
//! fixed-block free-list for `small` (fast, no fragmentation for
//! uniformly-sized requests) and a stack or system heap for `large`.
//!
//! ```text
//!   allocate(size)
//!        │
//!        ▼
//!   size <= threshold? ── yes ──► small.allocate(size)
//!        │
//!        no
//!        │
//!        ▼
//!   large.allocate(size)
//! ```
//!
//! ## Alignment and the threshold
//!
//! `allocate_aligned(size, align)` cannot just compare `size` against
//! `threshold` — padding inserted to satisfy `align` can push the actual
//! footprint past the boundary even when `size` alone would not. This
//! allocator routes on the worst-case footprint `size + align - 1`, so a
//! request that might need padding past the threshold is never handed to
//! the small side only to fail there.

use std::ptr::NonNull;

use crate::contract::Allocator;
use crate::error::{AllocError, FreeError};

/// Routes requests to `small` or `large` by a size threshold.
pub struct SegregatorAllocator<Small, Large> {
  small: Small,
  large: Large,
  threshold: usize,
}

impl<Small: Allocator, Large: Allocator> SegregatorAllocator<Small, Large> {
  /// Requests of `size <= threshold` route to `small`; everything else to
  /// `large`.
  pub fn new(
    small: Small,
    large: Large,
    threshold: usize,
  ) -> Self {
    Self { small, large, threshold }
  }

  pub fn small(&self) -> &Small {
    &self.small
  }

  pub fn large(&self) -> &Large {
    &self.large
  }

  fn routes_small(
    &self,
    footprint: usize,
  ) -> bool {
    footprint <= self.threshold
  }

  fn combine_owns(
    &self,
    memory: *const u8,
  ) -> bool {
    self.small.query_owns(memory) || self.large.query_owns(memory)
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

impl<Small: Allocator, Large: Allocator> Allocator for SegregatorAllocator<Small, Large> {
  fn allocate(
    &self,
    size: usize,
  ) -> Result<NonNull<u8>, AllocError> {
    if self.routes_small(size) {
      self.small.allocate(size)
    } else {
      self.large.allocate(size)
    }
  }

  fn allocate_aligned(
    &self,
    size: usize,
    align: usize,
  ) -> Result<NonNull<u8>, AllocError> {
    let worst_case_footprint = size + align - 1;
    if self.routes_small(worst_case_footprint) {
      self.small.allocate_aligned(size, align)
    } else {
      self.large.allocate_aligned(size, align)
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
    if self.small.query_owns(memory.as_ptr()) {
      self.small.resize(memory, old_size, new_size)
    } else if self.large.query_owns(memory.as_ptr()) {
      self.large.resize(memory, old_size, new_size)
    } else {
      Err(AllocError::NonOwnedMemory)
    }
  }

  fn free(
    &self,
    memory: NonNull<u8>,
  ) -> Result<(), FreeError> {
    if self.small.query_owns(memory.as_ptr()) {
      self.small.free(memory)
    } else if self.large.query_owns(memory.as_ptr()) {
      self.large.free(memory)
    } else {
      Err(FreeError::NotOwned)
    }
  }

  fn free_all(&self) -> Result<(), FreeError> {
    match (self.small.free_all(), self.large.free_all()) {
      (Err(e), Err(_)) => Err(e),
      _ => Ok(()),
    }
  }

  fn query_used(&self) -> Option<usize> {
    Self::combine_sum(self.small.query_used(), self.large.query_used())
  }

  fn query_owns(
    &self,
    memory: *const u8,
  ) -> bool {
    self.combine_owns(memory)
  }

  fn query_capacity(&self) -> Option<usize> {
    Self::combine_sum(self.small.query_capacity(), self.large.query_capacity())
  }

  fn query_alignment(&self) -> Option<usize> {
    Self::combine_min(self.small.query_alignment(), self.large.query_alignment())
  }

  fn query_good_size(&self) -> Option<usize> {
    Self::combine_min(self.small.query_good_size(), self.large.query_good_size())
  }
}
