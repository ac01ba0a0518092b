//! End-to-end scenarios exercising a composed tree of allocators the way a
//! caller actually would: allocate a few values, inspect the queries, free
//! them back in some order.

use rallocator::{Allocator, AllocatorExt, FallbackAllocator, FreeListAllocator, NullAllocator, SegregatorAllocator, StackAllocator, SystemAllocator};

#[test]
fn stack_allocator_end_to_end() {
  let mut buffer = [0u8; 1024];
  let stack = StackAllocator::new(&mut buffer);

  let a = stack.allocate(10).unwrap();
  let b = stack.allocate_aligned(155, 64).unwrap();
  let c = stack.allocate(12).unwrap();
  let d = stack.alloc_slice::<i32>(12).unwrap();

  assert_eq!(b.as_ptr() as usize % 64, 0);
  assert!(stack.query_owns(d.as_ptr()));
  assert_eq!(stack.query_capacity(), Some(1024));
  assert_eq!(stack.query_alignment(), Some(1));
  assert_eq!(stack.query_good_size(), Some(1));
  assert!(stack.query_used().unwrap() > 0);

  stack.free(c).unwrap();
  stack.free(b).unwrap();
  stack.free(a).unwrap();
  stack.free_all().unwrap();

  assert_eq!(stack.query_used(), Some(0));
}

#[test]
fn freelist_allocator_end_to_end() {
  let mut buffer = [0u8; 1024];
  let freelist = FreeListAllocator::new(&mut buffer, 64, 1024 / 64);

  let x = freelist.allocate(64).unwrap();
  let y = freelist.allocate(13).unwrap();

  assert_eq!(freelist.query_capacity(), Some(1024));
  assert_eq!(freelist.query_alignment(), Some(64));
  assert_eq!(freelist.query_good_size(), Some(64));

  assert!(freelist.query_owns(x.as_ptr()));
  assert!(freelist.query_owns(y.as_ptr()));

  freelist.free(x).unwrap();
  freelist.free(y).unwrap();

  // Ownership of a block is structural (it belongs to this pool's memory
  // range), not lifecycle-dependent — freeing doesn't revoke it.
  assert!(freelist.query_owns(x.as_ptr()));
  assert!(freelist.query_owns(y.as_ptr()));
  assert_eq!(freelist.query_used(), Some(0));
}

#[test]
fn fallback_of_stack_and_system_heap() {
  let mut buffer = [0u8; 256];
  let primary = StackAllocator::new(&mut buffer);
  let secondary = SystemAllocator::new();
  let fallback = FallbackAllocator::new(primary, secondary);

  // Larger than the stack's 256-byte capacity, so both requests spill to
  // the system heap, which reports no capacity bound of its own.
  let x = fallback.allocate(1000).unwrap();
  let y = fallback.allocate(1000).unwrap();

  assert_eq!(fallback.query_capacity(), Some(256));

  fallback.free(x).unwrap();
  fallback.free(y).unwrap();
  fallback.free_all().unwrap();
}

#[test]
fn fallback_routes_small_requests_to_the_primary() {
  let mut buffer = [0u8; 256];
  let primary = StackAllocator::new(&mut buffer);
  let secondary = SystemAllocator::new();
  let fallback = FallbackAllocator::new(primary, secondary);

  let small = fallback.allocate(16).unwrap();
  assert!(fallback.primary().query_owns(small.as_ptr()));
  fallback.free(small).unwrap();
}

#[test]
fn segregator_with_threshold_routes_by_size() {
  let mut small_buffer = [0u8; 640];
  let mut large_buffer = [0u8; 4096];
  let small = FreeListAllocator::new(&mut small_buffer, 64, 10);
  let large = StackAllocator::new(&mut large_buffer);
  let segregator = SegregatorAllocator::new(small, large, 128);

  let tiny = segregator.allocate(32).unwrap();
  let huge = segregator.allocate(512).unwrap();

  assert!(segregator.small().query_owns(tiny.as_ptr()));
  assert!(segregator.large().query_owns(huge.as_ptr()));
  assert_eq!(segregator.query_capacity(), Some(640 + 4096));

  segregator.free(tiny).unwrap();
  segregator.free(huge).unwrap();
}

#[test]
fn null_allocator_only_satisfies_zero_size_requests() {
  let null = NullAllocator::new();

  let zero = null.allocate(0).unwrap();
  assert!(null.query_owns(zero.as_ptr()));
  assert_eq!(null.allocate(1), Err(rallocator::AllocError::OutOfMemory));
  null.free(zero).unwrap();
}

#[test]
fn query_combinators_across_a_fallback_tree() {
  let mut pool_buffer = [0u8; 640];
  let pool = FreeListAllocator::new(&mut pool_buffer, 64, 10);
  let fallback = FallbackAllocator::new(pool, SystemAllocator::new());

  // The system heap doesn't track an alignment guarantee of its own, so
  // the combinator degrades to just the pool's.
  assert_eq!(fallback.query_alignment(), Some(64));

  // System heap reports no capacity bound, so the combinator degrades to
  // just the pool's.
  assert_eq!(fallback.query_capacity(), Some(640));
}
