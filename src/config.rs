//! Construction-time configuration.

use crate::policy::CapacityPolicy;

/// What happens when the buffer cannot grow.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AllocFailure {
    /// Exhaustion goes to the global allocation error handler, which aborts
    /// the process. A capacity that does not fit in `usize` panics.
    #[default]
    Abort,
    /// Growing operations return [`DequeError::AllocationFailed`] or
    /// [`DequeError::CapacityOverflow`] and leave the deque untouched.
    ///
    /// [`DequeError::AllocationFailed`]: crate::DequeError::AllocationFailed
    /// [`DequeError::CapacityOverflow`]: crate::DequeError::CapacityOverflow
    Propagate,
}

/// Configuration for a [`CircularDeque`](crate::CircularDeque).
///
/// Fixed at construction; there is no way to change it on a live deque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DequeConfig {
    /// Halve the buffer after removals while it is at most a quarter full.
    ///
    /// Default: `true`, matching [`PowerOfTwo`](crate::PowerOfTwo).
    pub auto_shrink: bool,

    /// Allocation failure handling.
    ///
    /// Default: [`AllocFailure::Abort`].
    pub on_alloc_failure: AllocFailure,
}

impl DequeConfig {
    /// Config with the defaults a given policy expects.
    pub fn for_policy<P: CapacityPolicy>(policy: &P) -> Self {
        Self {
            auto_shrink: policy.shrinks_by_default(),
            on_alloc_failure: AllocFailure::Abort,
        }
    }

    #[must_use]
    pub fn auto_shrink(mut self, enabled: bool) -> Self {
        self.auto_shrink = enabled;
        self
    }

    #[must_use]
    pub fn on_alloc_failure(mut self, policy: AllocFailure) -> Self {
        self.on_alloc_failure = policy;
        self
    }
}

impl Default for DequeConfig {
    fn default() -> Self {
        Self {
            auto_shrink: true,
            on_alloc_failure: AllocFailure::Abort,
        }
    }
}
