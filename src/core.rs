use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::ops::{Index, IndexMut};

use crate::config::{AllocFailure, DequeConfig};
use crate::error::DequeError;
use crate::policy::{CapacityPolicy, PowerOfTwo, MIN_CAPACITY};
use crate::relocate;

/// A growable double-ended queue stored in a circular buffer
///
/// Logical element `i` lives in slot `policy.wrap(offset + i, capacity)`.
/// The slot vector is always exactly `capacity` long. Slots inside the live
/// range are occupied and slots outside it are vacant.
#[derive(Clone)]
pub struct CircularDeque<T, P = PowerOfTwo> {
    slots: Vec<Option<T>>,
    offset: usize,
    len: usize,
    policy: P,
    config: DequeConfig,
}

impl<T> CircularDeque<T, PowerOfTwo> {
    /// Creates an empty deque with the power-of-two policy.
    ///
    /// Nothing is allocated until the first element is inserted.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            offset: 0,
            len: 0,
            policy: PowerOfTwo,
            config: DequeConfig {
                auto_shrink: true,
                on_alloc_failure: AllocFailure::Abort,
            },
        }
    }

    /// Creates an empty deque with room for at least `capacity` elements.
    ///
    /// The slot count is `capacity` rounded up to a power of two.
    ///
    /// # Panics
    ///
    /// Panics if the rounded capacity does not fit in `usize`. Aborts the
    /// process if the allocation fails.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::try_with_capacity(PowerOfTwo, DequeConfig::default(), capacity)
            .expect("Abort policy never reports allocation failure")
    }
}

impl<T, P: CapacityPolicy> CircularDeque<T, P> {
    /// Creates an empty, unallocated deque with the given capacity policy
    /// and that policy's default configuration.
    pub fn with_policy(policy: P) -> Self {
        let config = DequeConfig::for_policy(&policy);
        Self::with_config(policy, config)
    }

    /// Creates an empty, unallocated deque with an explicit configuration.
    pub fn with_config(policy: P, config: DequeConfig) -> Self {
        Self {
            slots: Vec::new(),
            offset: 0,
            len: 0,
            policy,
            config,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Physical slot of the first element.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The capacity policy the deque was built with.
    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// The configuration the deque was built with.
    #[must_use]
    pub fn config(&self) -> &DequeConfig {
        &self.config
    }

    /// Releases the buffer and returns the deque to the unallocated state.
    pub fn destroy(&mut self) {
        self.slots = Vec::new();
        self.offset = 0;
        self.len = 0;
    }

    #[inline]
    fn physical(&self, index: usize) -> usize {
        self.policy.wrap(self.offset + index, self.slots.len())
    }

    #[allow(clippy::expect_used)]
    fn occupied(&self, index: usize) -> &T {
        self.slots[self.physical(index)]
            .as_ref()
            .expect("live slots are occupied")
    }

    #[allow(clippy::expect_used)]
    fn occupied_mut(&mut self, index: usize) -> &mut T {
        let slot = self.physical(index);
        self.slots[slot]
            .as_mut()
            .expect("live slots are occupied")
    }

    fn check_bounds(&self, index: usize) -> Result<(), DequeError> {
        if index >= self.len {
            Err(DequeError::IndexOutOfBounds {
                index,
                length: self.len,
            })
        } else {
            Ok(())
        }
    }

    /// Gets the element at logical `index`.
    ///
    /// Returns `None` if the index is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.slots.get(self.physical(index))?.as_ref()
    }

    /// Gets the element at logical `index` mutably.
    ///
    /// Returns `None` if the index is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let slot = self.physical(index);
        self.slots.get_mut(slot)?.as_mut()
    }

    /// Tries to get the element at logical `index`.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::IndexOutOfBounds` if `index` is out of bounds.
    pub fn try_get(&self, index: usize) -> Result<&T, DequeError> {
        self.check_bounds(index)?;
        Ok(self.occupied(index))
    }

    /// Tries to get the element at logical `index` mutably.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::IndexOutOfBounds` if `index` is out of bounds.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, DequeError> {
        self.check_bounds(index)?;
        Ok(self.occupied_mut(index))
    }

    /// Gets the element at logical `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `self.len()`.
    #[must_use]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        let slot = self.physical(index);
        // SAFETY: index < len <= capacity, wrap keeps slot < capacity, and
        // every slot in the live range is occupied
        unsafe { self.slots.get_unchecked(slot).as_ref().unwrap_unchecked() }
    }

    /// Gets the element at logical `index` mutably without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `self.len()`.
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        let slot = self.physical(index);
        // SAFETY: index < len <= capacity, wrap keeps slot < capacity, and
        // every slot in the live range is occupied
        unsafe { self.slots.get_unchecked_mut(slot).as_mut().unwrap_unchecked() }
    }

    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|last| self.get(last))
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        let last = self.len.checked_sub(1)?;
        self.get_mut(last)
    }

    /// Drops every element. The shrink check runs afterwards.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Shortens the deque to `new_len`, dropping the elements past it.
    ///
    /// Does nothing to the elements if `new_len >= len()`. The buffer is not
    /// reallocated except by the shrink check, which runs afterwards.
    pub fn truncate(&mut self, new_len: usize) {
        for index in new_len..self.len {
            let slot = self.physical(index);
            self.slots[slot] = None;
        }
        self.len = self.len.min(new_len);
        self.reduce_capacity();
    }

    /// Sorts the elements with a comparator.
    ///
    /// A range that wraps around the end of the buffer is first rotated into
    /// one run starting at slot 0. The sort is not stable.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.offset + self.len > self.slots.len() {
            relocate::unwrap_to_front(&mut self.slots, self.offset);
            self.offset = 0;
        }
        self.slots[self.offset..self.offset + self.len].sort_unstable_by(|left, right| {
            match (left, right) {
                (Some(left), Some(right)) => compare(left, right),
                // the run holds live slots only
                _ => left.is_some().cmp(&right.is_some()),
            }
        });
    }

    /// Sorts the elements in ascending order. The sort is not stable.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(Ord::cmp);
    }

    /// Halves the buffer while it is at most a quarter full.
    fn reduce_capacity(&mut self) {
        if !self.config.auto_shrink {
            return;
        }

        let old_capacity = self.slots.len();
        let mut new_capacity = old_capacity;
        while self.len.saturating_mul(4) <= new_capacity && new_capacity > MIN_CAPACITY {
            let next = self.policy.shrink(new_capacity);
            if next >= new_capacity {
                break;
            }
            new_capacity = next;
        }
        if new_capacity == old_capacity {
            return;
        }

        self.offset = relocate::fit_within(&mut self.slots, self.offset, self.len, new_capacity);
        self.slots.truncate(new_capacity);
        self.slots.shrink_to_fit();
    }

    /// Builds the capacity overflow error, or panics under the abort policy.
    fn capacity_overflow(&self, additional: usize) -> DequeError {
        let error = DequeError::CapacityOverflow {
            length: self.len,
            additional,
        };
        match self.config.on_alloc_failure {
            AllocFailure::Abort => panic!("{error}"),
            AllocFailure::Propagate => error,
        }
    }

    /// Creates an empty deque with `policy.initial_capacity(capacity)` slots.
    ///
    /// # Errors
    ///
    /// Under [`AllocFailure::Propagate`], returns
    /// `DequeError::CapacityOverflow` if the slot count does not fit in
    /// `usize` and `DequeError::AllocationFailed` if the allocator refuses.
    pub fn try_with_capacity(
        policy: P,
        config: DequeConfig,
        capacity: usize,
    ) -> Result<Self, DequeError> {
        let mut deque = Self::with_config(policy, config);
        let Some(initial) = deque.policy.initial_capacity(capacity) else {
            return Err(deque.capacity_overflow(capacity));
        };
        if initial > 0 {
            deque.grow_slots(initial)?;
        }
        Ok(deque)
    }

    /// Extends the slot vector to exactly `new_capacity` slots.
    fn grow_slots(&mut self, new_capacity: usize) -> Result<(), DequeError> {
        let additional = new_capacity - self.slots.len();
        match self.config.on_alloc_failure {
            AllocFailure::Abort => self.slots.reserve_exact(additional),
            AllocFailure::Propagate => self
                .slots
                .try_reserve_exact(additional)
                .map_err(|_| DequeError::AllocationFailed {
                    requested: new_capacity,
                })?,
        }
        self.slots.resize_with(new_capacity, || None);
        Ok(())
    }

    /// Ensures room for at least `additional` more elements.
    ///
    /// Growth follows the capacity policy. A range that wrapped around the
    /// old end of the buffer is made to wrap around the new end, and the
    /// offset moves up by the number of slots added.
    ///
    /// # Errors
    ///
    /// Under [`AllocFailure::Propagate`], returns
    /// `DequeError::CapacityOverflow` or `DequeError::AllocationFailed`;
    /// the deque is unchanged in that case.
    pub fn reserve(&mut self, additional: usize) -> Result<(), DequeError> {
        let Some(required) = self.len.checked_add(additional) else {
            return Err(self.capacity_overflow(additional));
        };
        let old_capacity = self.slots.len();
        if required <= old_capacity {
            return Ok(());
        }

        let mut new_capacity = old_capacity;
        while required > new_capacity {
            match self.policy.grow(new_capacity) {
                Some(next) => new_capacity = next,
                None => return Err(self.capacity_overflow(additional)),
            }
        }
        self.grow_slots(new_capacity)?;

        if self.offset + self.len > old_capacity {
            // it wraps around: make it wrap around the new boundary
            self.offset = relocate::spread_head(&mut self.slots, self.offset, old_capacity);
        }
        Ok(())
    }

    /// Appends an element to the back.
    ///
    /// # Errors
    ///
    /// Propagates allocation failures from [`reserve`](Self::reserve).
    pub fn push_back(&mut self, value: T) -> Result<(), DequeError> {
        self.reserve(1)?;
        let slot = self.physical(self.len);
        self.slots[slot] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Prepends an element to the front.
    ///
    /// # Errors
    ///
    /// Propagates allocation failures from [`reserve`](Self::reserve).
    pub fn push_front(&mut self, value: T) -> Result<(), DequeError> {
        self.reserve(1)?;
        let capacity = self.slots.len();
        self.offset = self.policy.wrap(self.offset + capacity - 1, capacity);
        self.slots[self.offset] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the last element.
    ///
    /// Returns `None` if the deque is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        let slot = self.physical(self.len);
        let value = self.slots[slot].take();
        self.reduce_capacity();
        value
    }

    /// Removes and returns the first element.
    ///
    /// Returns `None` if the deque is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        let value = self.slots[self.offset].take();
        self.offset = self.physical(1);
        self.len -= 1;
        self.reduce_capacity();
        value
    }

    /// Tries to remove and return the last element.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::EmptyDeque` if the deque is empty.
    pub fn try_pop_back(&mut self) -> Result<T, DequeError> {
        self.pop_back().ok_or(DequeError::EmptyDeque)
    }

    /// Tries to remove and return the first element.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::EmptyDeque` if the deque is empty.
    pub fn try_pop_front(&mut self) -> Result<T, DequeError> {
        self.pop_front().ok_or(DequeError::EmptyDeque)
    }

    /// Inserts an element at logical `index`, shifting later elements back.
    ///
    /// When the target slot lies after the offset in the same physical run
    /// and the offset is not zero, the prefix moves one slot toward the front
    /// instead. `index == len()` appends.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::IndexOutOfBounds` if `index > len()`, and
    /// propagates allocation failures from [`reserve`](Self::reserve).
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), DequeError> {
        if index > self.len {
            return Err(DequeError::IndexOutOfBounds {
                index,
                length: self.len,
            });
        }
        self.reserve(1)?;

        if index < self.len {
            let target = self.physical(index);
            if target > self.offset && self.offset != 0 {
                relocate::shift_prefix_down(&mut self.slots, self.offset, target);
                self.offset -= 1;
            } else {
                let free = self.physical(self.len);
                relocate::shift_suffix_up(&mut self.slots, target, free);
            }
        }

        self.len += 1;
        let slot = self.physical(index);
        self.slots[slot] = Some(value);
        Ok(())
    }

    /// Sets the length to `new_len`, filling new elements by calling `fill`.
    ///
    /// Shrinking behaves like [`truncate`](Self::truncate). Either way the
    /// shrink check runs afterwards.
    ///
    /// # Errors
    ///
    /// Propagates allocation failures from [`reserve`](Self::reserve).
    pub fn resize_with<F>(&mut self, new_len: usize, mut fill: F) -> Result<(), DequeError>
    where
        F: FnMut() -> T,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }

        self.reserve(new_len - self.len)?;
        while self.len < new_len {
            let slot = self.physical(self.len);
            self.slots[slot] = Some(fill());
            self.len += 1;
        }
        self.reduce_capacity();
        Ok(())
    }

    /// Sets the length to `new_len`. New elements are `T::default()`.
    ///
    /// # Errors
    ///
    /// Propagates allocation failures from [`reserve`](Self::reserve).
    pub fn resize(&mut self, new_len: usize) -> Result<(), DequeError>
    where
        T: Default,
    {
        self.resize_with(new_len, T::default)
    }
}

impl<T> Default for CircularDeque<T, PowerOfTwo> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: CapacityPolicy> Index<usize> for CircularDeque<T, P> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    fn index(&self, index: usize) -> &T {
        assert!(
            index < self.len,
            "Index {} out of bounds for deque of length {}",
            index,
            self.len
        );
        self.occupied(index)
    }
}

impl<T, P: CapacityPolicy> IndexMut<usize> for CircularDeque<T, P> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        assert!(
            index < self.len,
            "Index {} out of bounds for deque of length {}",
            index,
            self.len
        );
        self.occupied_mut(index)
    }
}

impl<T: fmt::Debug, P: CapacityPolicy> fmt::Debug for CircularDeque<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Elements<'a, T, P>(&'a CircularDeque<T, P>);

        impl<T: fmt::Debug, P: CapacityPolicy> fmt::Debug for Elements<'_, T, P> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list()
                    .entries((0..self.0.len).map(|i| &self.0[i]))
                    .finish()
            }
        }

        f.debug_struct("CircularDeque")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("offset", &self.offset)
            .field("elements", &Elements(self))
            .finish()
    }
}
