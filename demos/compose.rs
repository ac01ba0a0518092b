//! Demonstrates the three allocation strategies and how a fallback
//! compositor stitches two of them together.
//!
//! Run with `RUST_LOG=trace cargo run --example compose` to see the
//! `logging` feature's call-site tracing and the fallback compositor's
//! once-per-instance fallback notice.

use rallocator::{Allocator, AllocatorExt, FallbackAllocator, FreeListAllocator, StackAllocator, SystemAllocator};

fn main() {
  env_logger::init();

  println!("---- Stack allocator ----");
  let mut stack_buffer = [0u8; 1024];
  let stack = StackAllocator::new(&mut stack_buffer);
  {
    let a = stack.allocate(10).unwrap();
    let b = stack.allocate_aligned(155, 64).unwrap();
    let c = stack.allocate(12).unwrap();
    let d = stack.alloc_slice::<i32>(12).unwrap();
    assert!(stack.query_owns(d.as_ptr()));

    println!("{:?}", stack.query_capacity());
    println!("{:?}", stack.query_alignment());
    println!("{:?}", stack.query_good_size());
    println!("{:?}", stack.query_used());

    stack.free(c).unwrap();
    stack.free(b).unwrap();
    stack.free(a).unwrap();

    stack.free_all().unwrap();
  }

  println!("---- Freelist allocator ----");
  let mut pool_buffer = [0u8; 1024];
  let freelist = FreeListAllocator::new(&mut pool_buffer, 64, 1024 / 64);
  {
    let x = freelist.allocate(64).unwrap();
    let y = freelist.allocate(13).unwrap();

    println!("{:?}", freelist.query_capacity());
    println!("{:?}", freelist.query_alignment());
    println!("{:?}", freelist.query_good_size());

    println!("{}", freelist.query_owns(x.as_ptr()));
    println!("{}", freelist.query_owns(y.as_ptr()));

    freelist.free(x).unwrap();
    freelist.free(y).unwrap();

    println!("{}", freelist.query_owns(x.as_ptr()));
    println!("{}", freelist.query_owns(y.as_ptr()));
  }

  println!("---- Fallback allocator ----");
  let mut fallback_buffer = [0u8; 256];
  let primary = StackAllocator::new(&mut fallback_buffer);
  let secondary = SystemAllocator::new();
  let fallback = FallbackAllocator::new(primary, secondary);
  {
    let x = fallback.allocate(1000).unwrap();
    let y = fallback.allocate(1000).unwrap();

    println!("{:?}", fallback.query_capacity());
    println!("{:?}", fallback.query_alignment());
    println!("{:?}", fallback.query_good_size());

    println!("{}", fallback.query_owns(x.as_ptr()));
    println!("{}", fallback.query_owns(y.as_ptr()));

    fallback.free(x).unwrap();
    fallback.free(y).unwrap();

    fallback.free_all().unwrap();
  }
}
