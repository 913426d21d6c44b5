//! The growable fixed-element-width buffer.
//!
//! [`DynBuffer`] owns one contiguous block at a time. Capacity management is
//! the whole job: the growth policy decides the target size, reallocation
//! copies the live prefix into a fresh block and swaps it in, and the
//! get/set/push/pop protocol keeps the logical length inside the physical
//! capacity at every step.

use std::fmt;

use crate::element::Element;
use crate::error::BufferError;
use crate::policy::{GrowthPolicy, HalfAgain};

/// A growable buffer of fixed-width numeric elements.
///
/// The buffer tracks a logical `length` (live prefix, counted from index 0)
/// separately from the physical `capacity` (allocated slots). Writes past
/// the capacity grow the backing block according to the policy; reads past
/// the length return `None`. Slots between `length` and `capacity`, and gap
/// slots skipped over by a sparse [`set`](Self::set), hold unspecified
/// values.
///
/// Capacity only ever increases over the buffer's lifetime; there is no
/// shrink path. The buffer is single-threaded — callers needing shared
/// access wrap the whole buffer in a lock.
///
/// # Example
///
/// ```
/// use dynbuf::U32Buffer;
///
/// let mut buf = U32Buffer::with_capacity(2);
/// buf.push(10)?;
/// buf.push(20)?;
/// buf.push(30)?; // triggers growth: ceil(2 * 1.5) == 3
/// assert_eq!(buf.len(), 3);
/// assert_eq!(buf.capacity(), 3);
/// assert_eq!(buf.get(1), Some(20));
/// # Ok::<(), dynbuf::BufferError>(())
/// ```
pub struct DynBuffer<T: Element, P: GrowthPolicy = HalfAgain> {
    /// Backing storage. Always allocated to full capacity; the vector's
    /// length IS the buffer's capacity, never tracked separately.
    storage: Vec<T>,
    /// Number of logically valid slots, counted from index 0.
    length: usize,
    /// Pure capacity -> capacity map consulted whenever more room is needed.
    policy: P,
}

impl<T: Element> DynBuffer<T, HalfAgain> {
    /// Create an empty buffer with zero capacity and the default policy.
    ///
    /// No allocation happens until the first write; the default policy
    /// grows 0 to 1 (see [`HalfAgain`]).
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a buffer with exactly `initial_capacity` slots allocated
    /// and the default [`HalfAgain`] policy. Length starts at 0.
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self::with_policy(initial_capacity, HalfAgain)
    }
}

impl<T: Element> Default for DynBuffer<T, HalfAgain> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element, P: GrowthPolicy> DynBuffer<T, P> {
    /// Create a buffer with exactly `initial_capacity` slots and a custom
    /// growth policy.
    ///
    /// The policy is not validated here — a non-increasing policy surfaces
    /// as [`BufferError::PolicyViolation`] on the first growth attempt.
    pub fn with_policy(initial_capacity: usize, policy: P) -> Self {
        Self {
            storage: vec![T::default(); initial_capacity],
            length: 0,
            policy,
        }
    }

    /// Read the slot at `index`.
    ///
    /// Returns `None` for `index >= len()` — a tolerant read, not an error.
    /// Slots below the length always hold the last value written there.
    pub fn get(&self, index: usize) -> Option<T> {
        if index >= self.length {
            return None;
        }
        Some(self.storage[index])
    }

    /// Write `value` at `index`, growing the buffer if the index is out of
    /// capacity, and extend the length to cover it.
    ///
    /// Writing past the current length is permitted: gap slots between the
    /// old length and `index` are left at unspecified values, and the length
    /// advances past them to `index + 1`. Returns `&mut Self` for chaining.
    ///
    /// # Errors
    ///
    /// [`BufferError::PolicyViolation`] if, while finding a capacity that
    /// covers `index`, any policy application fails to strictly increase
    /// capacity. The check runs before any allocation, so the buffer is
    /// unchanged on error.
    pub fn set(&mut self, index: usize, value: T) -> Result<&mut Self, BufferError> {
        let target = self.capacity_for(index)?;
        if target > self.storage.len() {
            self.reallocate(target);
        }
        self.storage[index] = value;
        self.length = self.length.max(index + 1);
        Ok(self)
    }

    /// Grow capacity by one policy application without writing anything.
    ///
    /// Length is unchanged; the live prefix is copied into the new block.
    /// Returns the new capacity.
    ///
    /// # Errors
    ///
    /// [`BufferError::PolicyViolation`] if the policy's proposal is not
    /// strictly greater than the current capacity. Capacity is unchanged
    /// on error.
    pub fn grow(&mut self) -> Result<usize, BufferError> {
        let current = self.storage.len();
        let proposed = self.policy.next_capacity(current);
        if proposed <= current {
            return Err(BufferError::PolicyViolation { current, proposed });
        }
        self.reallocate(proposed);
        Ok(proposed)
    }

    /// Append `value` at the end of the live prefix, growing if full.
    ///
    /// Unlike [`set`](Self::set) this never skips slots. Returns the new
    /// length. Amortized O(1) across a push sequence under any geometric
    /// policy.
    ///
    /// # Errors
    ///
    /// [`BufferError::PolicyViolation`] propagated from [`grow`](Self::grow)
    /// when the buffer is full and the policy is broken.
    pub fn push(&mut self, value: T) -> Result<usize, BufferError> {
        if self.length >= self.storage.len() {
            self.grow()?;
        }
        self.storage[self.length] = value;
        self.length += 1;
        Ok(self.length)
    }

    /// Remove and return the last live value, or `None` if empty.
    ///
    /// The vacated slot is not cleared; it simply falls outside the length
    /// and becomes unspecified again.
    pub fn pop(&mut self) -> Option<T> {
        if self.length == 0 {
            return None;
        }
        self.length -= 1;
        Some(self.storage[self.length])
    }

    /// Number of logically valid slots.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether the live prefix is empty.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Number of slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Width of one element slot in bytes.
    pub fn element_width(&self) -> usize {
        T::WIDTH
    }

    /// Memory usage of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.storage.len() * T::WIDTH
    }

    /// The live prefix as a slice.
    ///
    /// Gap slots created by sparse writes are inside this slice and hold
    /// unspecified values; only slots actually written are meaningful.
    pub fn as_slice(&self) -> &[T] {
        &self.storage[..self.length]
    }

    /// Iterate over the live prefix by value.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.as_slice().iter().copied()
    }

    /// Reset the length to zero without touching the storage.
    ///
    /// Capacity is retained and all slots become unspecified. The next
    /// writes reuse the existing allocation.
    pub fn clear(&mut self) {
        self.length = 0;
    }

    /// Run the growth loop: the smallest policy-reachable capacity that
    /// covers `index`, or the current capacity if it already does.
    ///
    /// Applications are sequential, each feeding on the previous result.
    /// Every application is checked for strict increase before any
    /// allocation is committed.
    fn capacity_for(&self, index: usize) -> Result<usize, BufferError> {
        let mut target = self.storage.len();
        while target <= index {
            let proposed = self.policy.next_capacity(target);
            if proposed <= target {
                return Err(BufferError::PolicyViolation {
                    current: target,
                    proposed,
                });
            }
            target = proposed;
        }
        Ok(target)
    }

    /// Replace the backing block: allocate new, copy the live prefix, swap.
    ///
    /// The old block is released when the swap completes; it is never
    /// mutated in place, so no half-copied state is ever observable.
    /// Slots at `length..new_capacity` in the new block are fresh and
    /// unspecified.
    fn reallocate(&mut self, new_capacity: usize) {
        let mut next = vec![T::default(); new_capacity];
        next[..self.length].copy_from_slice(&self.storage[..self.length]);
        self.storage = next;
    }
}

impl<T: Element, P: GrowthPolicy> fmt::Debug for DynBuffer<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynBuffer")
            .field("length", &self.length)
            .field("capacity", &self.storage.len())
            .field("live", &self.as_slice())
            .finish()
    }
}

impl<T: Element> FromIterator<T> for DynBuffer<T, HalfAgain> {
    /// Collect into a buffer via repeated push under the default policy.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut buf = Self::new();
        buf.extend(iter);
        buf
    }
}

impl<T: Element, P: GrowthPolicy> Extend<T> for DynBuffer<T, P> {
    /// Push every item in order.
    ///
    /// # Panics
    ///
    /// Panics if the growth policy violates the strict-increase requirement
    /// mid-extend; the std trait leaves no room to propagate the error.
    /// Unreachable with [`HalfAgain`] or [`Doubling`](crate::Doubling).
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value)
                .expect("growth policy violated strict increase during extend");
        }
    }
}

/// Buffer of 8-bit signed integers.
pub type I8Buffer = DynBuffer<i8>;
/// Buffer of 8-bit unsigned integers.
pub type U8Buffer = DynBuffer<u8>;
/// Buffer of 16-bit signed integers.
pub type I16Buffer = DynBuffer<i16>;
/// Buffer of 16-bit unsigned integers.
pub type U16Buffer = DynBuffer<u16>;
/// Buffer of 32-bit signed integers.
pub type I32Buffer = DynBuffer<i32>;
/// Buffer of 32-bit unsigned integers.
pub type U32Buffer = DynBuffer<u32>;
/// Buffer of 64-bit signed integers.
pub type I64Buffer = DynBuffer<i64>;
/// Buffer of 64-bit unsigned integers.
pub type U64Buffer = DynBuffer<u64>;
/// Buffer of 32-bit floats.
pub type F32Buffer = DynBuffer<f32>;
/// Buffer of 64-bit floats.
pub type F64Buffer = DynBuffer<f64>;
