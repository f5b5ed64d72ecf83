#![no_std]

//! `CircularDeque`: a growable double-ended queue stored in a circular buffer.
//!
//! Elements live in a single slot vector that is treated as a ring: the first
//! logical element sits at some physical `offset`, and the logical range may
//! wrap past the end of the buffer back to slot 0. Growing and shrinking the
//! buffer relocates only the part of the range that the new boundary affects.
//!
//! This crate is `no_std` compatible; it needs `alloc` for the slot vector.
//!
//! # Performance Characteristics
//!
//! ## Time Complexity
//! - `push_back()`, `push_front()`: amortized O(1)
//! - `pop_back()`, `pop_front()`: amortized O(1), including the shrink check
//! - `get()`, `Index`: O(1) - one wrap of `offset + index`
//! - `insert()`: O(n) - shifts whichever side the slot layout allows
//! - `sort_by()`: O(n log n), plus an O(capacity) rotation when the range wraps
//!
//! ## Space
//! - One `Option<T>` slot per unit of capacity; vacant slots hold `None`
//! - With auto-shrink on, capacity stays below four times the length
//!   (and never below 8 once allocated)
//!
//! # Capacity Policies
//!
//! The growth strategy is injected at construction as a [`CapacityPolicy`]:
//!
//! - [`PowerOfTwo`] (the default): capacity is 0 or a power of two, starts at
//!   8 and doubles; slots are found with a bitmask. Shrinks automatically.
//! - [`Arbitrary`]: capacity grows by half (at least 8) or is taken exactly
//!   from [`CircularDeque::try_with_capacity`]; slots are found with a modulo.
//!   Never shrinks unless configured to.
//!
//! ```
//! # use circdeque::{Arbitrary, CircularDeque};
//! let mut deque = CircularDeque::with_policy(Arbitrary);
//! for i in 0..20 {
//!     deque.push_back(i).unwrap();
//! }
//! assert_eq!(deque.capacity(), 24);
//!
//! while deque.pop_front().is_some() {}
//! assert_eq!(deque.capacity(), 24);
//! ```
//!
//! # Double-Ended Interface
//!
//! ```
//! # use circdeque::CircularDeque;
//! let mut deque = CircularDeque::new();
//!
//! for i in 0..15 {
//!     if i % 2 == 1 {
//!         deque.push_back(i).unwrap();
//!     } else {
//!         deque.push_front(i).unwrap();
//!     }
//! }
//! assert_eq!(deque.len(), 15);
//! assert_eq!(deque[0], 14);
//! assert_eq!(deque[14], 13);
//!
//! deque.insert(9, 100).unwrap();
//! assert_eq!(deque[9], 100);
//!
//! deque.sort();
//! assert_eq!(deque.pop_front(), Some(0));
//! assert_eq!(deque.pop_back(), Some(100));
//! ```
//!
//! # Checked and Unchecked Access
//!
//! `get()` returns `Option`, the `try_*` methods return [`DequeError`], and
//! indexing panics. `get_unchecked()` skips the bounds check entirely:
//!
//! ```
//! # use circdeque::{CircularDeque, DequeError};
//! let mut deque = CircularDeque::new();
//! deque.push_back("a").unwrap();
//!
//! assert_eq!(deque.get(1), None);
//! assert_eq!(
//!     deque.try_get(1),
//!     Err(DequeError::IndexOutOfBounds { index: 1, length: 1 })
//! );
//! assert_eq!(unsafe { *deque.get_unchecked(0) }, "a");
//!
//! deque.pop_back();
//! assert_eq!(deque.try_pop_front(), Err(DequeError::EmptyDeque));
//! ```
//!
//! # Allocation Failure
//!
//! By default running out of memory aborts the process, as `Vec` does.
//! [`AllocFailure::Propagate`] turns failures into errors instead:
//!
//! ```
//! # use circdeque::{AllocFailure, CircularDeque, DequeConfig, DequeError, PowerOfTwo};
//! let config = DequeConfig::default().on_alloc_failure(AllocFailure::Propagate);
//! let mut deque: CircularDeque<u64> = CircularDeque::with_config(PowerOfTwo, config);
//!
//! assert!(matches!(
//!     deque.reserve(usize::MAX),
//!     Err(DequeError::CapacityOverflow { .. })
//! ));
//! assert_eq!(deque.capacity(), 0);
//! ```

extern crate alloc;

mod config;
mod core;
mod error;
mod policy;
mod relocate;

// Re-export public types and traits
pub use crate::config::{AllocFailure, DequeConfig};
pub use crate::core::CircularDeque;
pub use crate::error::DequeError;
pub use crate::policy::{Arbitrary, CapacityPolicy, PowerOfTwo, MIN_CAPACITY};
