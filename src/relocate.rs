//! Slot moves that keep a logical range consistent while the physical buffer
//! grows, shrinks or is reordered.
//!
//! Every helper works on the full slot slice (its length is the capacity) and
//! only ever swaps or rotates, so live values are moved, never duplicated.
//! Slots outside the live range are vacant and may end up anywhere.

/// Moves the head segment `[offset, old_capacity)` to the top of a freshly
/// grown buffer, so a range that wrapped around the old boundary wraps around
/// the new one. Returns the new offset.
pub(crate) fn spread_head<T>(slots: &mut [T], offset: usize, old_capacity: usize) -> usize {
    let delta = slots.len() - old_capacity;
    slots[offset..].rotate_right(delta);
    offset + delta
}

/// Shifts the contiguous prefix `[offset, target)` one slot down.
///
/// Requires `0 < offset < target`. Afterwards slot `target - 1` is free.
pub(crate) fn shift_prefix_down<T>(slots: &mut [T], offset: usize, target: usize) {
    debug_assert!(offset > 0 && offset < target);
    slots[offset - 1..target].rotate_left(1);
}

/// Shifts the run starting at slot `start` and ending just before the free
/// slot `free` one slot up, following wraparound. Afterwards `start` is free.
pub(crate) fn shift_suffix_up<T>(slots: &mut [T], start: usize, free: usize) {
    if start <= free {
        slots[start..=free].rotate_right(1);
    } else {
        // [start, cap) then [0, free): move the low part, carry the last
        // high slot across the boundary, then move the high part.
        let last = slots.len() - 1;
        slots[..=free].rotate_right(1);
        slots.swap(0, last);
        slots[start..].rotate_right(1);
    }
}

/// Relocates the `len` live slots starting at `offset` so they all lie in
/// `[0, new_capacity)`. Returns the new offset.
///
/// Requires `len < new_capacity` and, for a wrapped range, that the head
/// segment fits once moved down by `slots.len() - new_capacity`. Both hold
/// whenever the deque is at most a quarter full of the old capacity and the
/// new capacity is at least half of it.
pub(crate) fn fit_within<T>(
    slots: &mut [T],
    offset: usize,
    len: usize,
    new_capacity: usize,
) -> usize {
    let old_capacity = slots.len();
    let contiguous = offset + len <= old_capacity;

    if contiguous && offset >= new_capacity {
        // the whole run is above the new boundary, in one piece
        let (low, high) = slots.split_at_mut(offset);
        low[..len].swap_with_slice(&mut high[..len]);
        0
    } else if !contiguous {
        // already wraps: pull the head segment down to the new boundary
        let delta = old_capacity - new_capacity;
        debug_assert!(offset >= delta);
        slots[offset - delta..].rotate_left(delta);
        offset - delta
    } else if offset + len > new_capacity {
        // crosses the new boundary: wrap the overflow to the start
        let overflow = offset + len - new_capacity;
        let (low, high) = slots.split_at_mut(new_capacity);
        low[..overflow].swap_with_slice(&mut high[..overflow]);
        offset
    } else {
        offset
    }
}

/// Rotates the buffer so the slot at `offset` becomes slot 0.
pub(crate) fn unwrap_to_front<T>(slots: &mut [T], offset: usize) {
    slots.rotate_left(offset);
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    /// Reads `len` logical values out of a ring starting at `offset`.
    fn logical(slots: &[i32], offset: usize, len: usize) -> Vec<i32> {
        (0..len).map(|i| slots[(offset + i) % slots.len()]).collect()
    }

    #[test]
    fn test_spread_head_keeps_order() {
        // ring of 4 holding 1,2,3,4 starting at slot 2
        let mut slots = vec![3, 4, 1, 2, 0, 0, 0, 0];
        let offset = spread_head(&mut slots, 2, 4);
        assert_eq!(offset, 6);
        assert_eq!(logical(&slots, offset, 4), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_shift_prefix_down() {
        let mut slots = vec![0, 0, 10, 11, 12, 13, 0, 0];
        shift_prefix_down(&mut slots, 2, 4);
        assert_eq!(&slots[1..6], &[10, 11, 0, 12, 13]);
    }

    #[test]
    fn test_shift_suffix_up_contiguous() {
        let mut slots = vec![10, 11, 12, 13, 0, 0, 0, 0];
        shift_suffix_up(&mut slots, 1, 4);
        assert_eq!(&slots[..5], &[10, 0, 11, 12, 13]);
    }

    #[test]
    fn test_shift_suffix_up_wrapping() {
        // logical 10..=15 starting at slot 4, free slot 2
        let mut slots = vec![14, 15, 0, 0, 10, 11, 12, 13];
        shift_suffix_up(&mut slots, 5, 2);
        assert_eq!(slots[5], 0);
        assert_eq!(slots[4], 10);
        assert_eq!(&slots[6..], &[11, 12]);
        assert_eq!(&slots[..3], &[13, 14, 15]);
    }

    #[test]
    fn test_shift_suffix_up_free_slot_at_zero() {
        let mut slots = vec![0, 0, 0, 0, 0, 10, 11, 12];
        shift_suffix_up(&mut slots, 6, 0);
        assert_eq!(&slots[5..], &[10, 0, 11]);
        assert_eq!(slots[0], 12);
    }

    #[test]
    fn test_fit_within_moves_high_run_down() {
        let mut slots = vec![0; 16];
        slots[12..15].copy_from_slice(&[1, 2, 3]);
        let offset = fit_within(&mut slots, 12, 3, 8);
        assert_eq!(offset, 0);
        assert_eq!(&slots[..3], &[1, 2, 3]);
    }

    #[test]
    fn test_fit_within_wrapped_range() {
        let mut slots = vec![0; 16];
        slots[14] = 1;
        slots[15] = 2;
        slots[0] = 3;
        let offset = fit_within(&mut slots, 14, 3, 8);
        assert_eq!(offset, 6);
        slots.truncate(8);
        assert_eq!(logical(&slots, offset, 3), vec![1, 2, 3]);
    }

    #[test]
    fn test_fit_within_overflowing_range() {
        let mut slots = vec![0; 16];
        slots[6..10].copy_from_slice(&[1, 2, 3, 4]);
        let offset = fit_within(&mut slots, 6, 4, 8);
        assert_eq!(offset, 6);
        slots.truncate(8);
        assert_eq!(logical(&slots, offset, 4), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_fit_within_already_fits() {
        let mut slots = vec![0; 16];
        slots[1..3].copy_from_slice(&[1, 2]);
        assert_eq!(fit_within(&mut slots, 1, 2, 8), 1);
        assert_eq!(&slots[1..3], &[1, 2]);
    }

    #[test]
    fn test_unwrap_to_front() {
        let mut slots = vec![3, 4, 0, 1, 2];
        unwrap_to_front(&mut slots, 3);
        assert_eq!(&slots[..4], &[1, 2, 3, 4]);
    }
}
