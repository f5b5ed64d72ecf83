//! Capacity strategies.
//!
//! A [`CapacityPolicy`] decides how the slot count evolves and how a logical
//! position maps onto a physical slot. The deque owns one policy value,
//! injected at construction.

/// Smallest capacity a growing deque allocates, and the floor for shrinking.
pub const MIN_CAPACITY: usize = 8;

/// Growth, shrink and index-wrapping rules for a [`CircularDeque`].
///
/// Implementations must keep `wrap(i, cap) < cap` for every `i < 2 * cap`,
/// and `grow(cap) > cap` whenever it returns `Some`.
///
/// [`CircularDeque`]: crate::CircularDeque
pub trait CapacityPolicy {
    /// One growth step from `capacity`, or `None` if it would overflow.
    fn grow(&self, capacity: usize) -> Option<usize>;

    /// One shrink step from `capacity`.
    fn shrink(&self, capacity: usize) -> usize {
        (capacity / 2).max(MIN_CAPACITY)
    }

    /// Slot count for a deque pre-sized to hold `requested` elements.
    fn initial_capacity(&self, requested: usize) -> Option<usize>;

    /// Physical slot for the raw position `index` in a buffer of `capacity`.
    ///
    /// `capacity` is never zero when this is called.
    fn wrap(&self, index: usize, capacity: usize) -> usize;

    /// Whether removals shrink the buffer unless configured otherwise.
    fn shrinks_by_default(&self) -> bool;
}

/// Capacity is always zero or a power of two; slots are found with a bitmask.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PowerOfTwo;

impl CapacityPolicy for PowerOfTwo {
    fn grow(&self, capacity: usize) -> Option<usize> {
        if capacity >= MIN_CAPACITY {
            capacity.checked_mul(2)
        } else {
            Some(MIN_CAPACITY)
        }
    }

    fn initial_capacity(&self, requested: usize) -> Option<usize> {
        if requested == 0 {
            Some(0)
        } else {
            requested.checked_next_power_of_two()
        }
    }

    #[inline]
    fn wrap(&self, index: usize, capacity: usize) -> usize {
        // index % capacity == index & (capacity - 1), capacity is a power of 2
        index & (capacity - 1)
    }

    fn shrinks_by_default(&self) -> bool {
        true
    }
}

/// Capacity grows by half (at least [`MIN_CAPACITY`]) and may take any value;
/// slots are found with a modulo.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Arbitrary;

impl CapacityPolicy for Arbitrary {
    fn grow(&self, capacity: usize) -> Option<usize> {
        capacity.checked_add((capacity / 2).max(MIN_CAPACITY))
    }

    fn initial_capacity(&self, requested: usize) -> Option<usize> {
        Some(requested)
    }

    #[inline]
    fn wrap(&self, index: usize, capacity: usize) -> usize {
        index % capacity
    }

    fn shrinks_by_default(&self) -> bool {
        false
    }
}
