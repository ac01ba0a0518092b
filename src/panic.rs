//! # Panic allocator
//!
//! A leaf that refuses to exist quietly: every call panics. Useful as a
//! guard leaf in a composed tree to assert "this branch must never be
//! reached" — e.g. the innermost child of a segregator whose sibling is
//! expected to handle every request that routes here, so reaching this
//! leaf at all means the routing policy has a bug.

use std::ptr::NonNull;

use crate::contract::Allocator;
use crate::error::{AllocError, FreeError};

/// Every method panics. Never returns normally.
#[derive(Debug, Default)]
pub struct PanicAllocator;

impl PanicAllocator {
  pub fn new() -> Self {
    Self
  }
}

impl Allocator for PanicAllocator {
  fn allocate(
    &self,
    size: usize,
  ) -> Result<NonNull<u8>, AllocError> {
    panic!("panic allocator: allocate({size}) reached a leaf that must never be called")
  }

  fn allocate_aligned(
    &self,
    size: usize,
    align: usize,
  ) -> Result<NonNull<u8>, AllocError> {
    panic!("panic allocator: allocate_aligned({size}, {align}) reached a leaf that must never be called")
  }

  fn allocate_all(&self) -> Result<NonNull<u8>, AllocError> {
    panic!("panic allocator: allocate_all() reached a leaf that must never be called")
  }

  fn resize(
    &self,
    _memory: NonNull<u8>,
    old_size: usize,
    new_size: usize,
  ) -> Result<NonNull<u8>, AllocError> {
    panic!("panic allocator: resize({old_size} -> {new_size}) reached a leaf that must never be called")
  }

  fn free(
    &self,
    _memory: NonNull<u8>,
  ) -> Result<(), FreeError> {
    panic!("panic allocator: free() reached a leaf that must never be called")
  }

  fn free_all(&self) -> Result<(), FreeError> {
    panic!("panic allocator: free_all() reached a leaf that must never be called")
  }

  fn query_used(&self) -> Option<usize> {
    panic!("panic allocator: query_used() reached a leaf that must never be called")
  }

  fn query_owns(
    &self,
    _memory: *const u8,
  ) -> bool {
    panic!("panic allocator: query_owns() reached a leaf that must never be called")
  }

  fn query_capacity(&self) -> Option<usize> {
    panic!("panic allocator: query_capacity() reached a leaf that must never be called")
  }

  fn query_alignment(&self) -> Option<usize> {
    panic!("panic allocator: query_alignment() reached a leaf that must never be called")
  }

  fn query_good_size(&self) -> Option<usize> {
    panic!("panic allocator: query_good_size() reached a leaf that must never be called")
  }
}
