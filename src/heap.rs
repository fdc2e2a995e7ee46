use crate::{
    error::{HeapError, Result},
    order::Order,
};
use num::PrimInt;
use std::fmt;

/// Fixed capacity binary heap over a dense, 1-indexed array.
///
/// Slot `0` is never used, so node `i` has children `2i`, `2i + 1` and parent `i / 2`.
/// Slots `1..=len` are occupied, everything past `len` is zeroed spare capacity.
#[derive(Clone)]
pub struct Heap<T: PrimInt = i32> {
    data: Vec<T>,
    len: usize,
    order: Order,
    violates: fn(&T, &T) -> bool,
}

impl<T: PrimInt> Heap<T> {
    /// O(n)
    pub fn new(capacity: usize, order: Order) -> Result<Self> {
        if capacity == 0 {
            return Err(HeapError::InvalidCapacity(capacity));
        }
        tracing::debug!(capacity, %order, "new heap");

        Ok(Self {
            data: vec![T::zero(); capacity + 1],
            len: 0,
            order,
            violates: order.violates(),
        })
    }

    /// Builds a full heap out of `values`, so `capacity() == values.len()`.
    ///
    /// O(n)
    pub fn from_vec(values: Vec<T>, order: Order) -> Result<Self> {
        if values.is_empty() {
            return Err(HeapError::InvalidCapacity(0));
        }

        let mut data = Vec::with_capacity(values.len() + 1);
        data.push(T::zero());
        data.extend(values);

        let mut heap = Self {
            len: data.len() - 1,
            data,
            order,
            violates: order.violates(),
        };
        for i in (1..=heap.len / 2).rev() {
            heap.sift_down(i);
        }
        tracing::debug!(len = heap.len, %order, "heap built from vec");

        Ok(heap)
    }

    /// O(1)
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// O(1)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// O(1)
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// O(1)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len() - 1
    }

    /// O(1)
    #[inline]
    pub fn order(&self) -> Order {
        self.order
    }

    /// The occupied slots in array order, root first.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data[1..=self.len]
    }

    /// O(1)
    #[inline]
    pub fn peek(&self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            Some(self.data[1])
        }
    }

    /// O(log n)
    pub fn push(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            tracing::debug!(capacity = self.capacity(), "push rejected, heap is full");
            return Err(HeapError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }

        self.len += 1;
        self.data[self.len] = value;
        self.sift_up(self.len);

        Ok(())
    }

    /// Pushes every value of `iter` in order, stopping at the first one that doesn't fit.
    pub fn try_extend<Iter: IntoIterator<Item = T>>(&mut self, iter: Iter) -> Result<()> {
        for value in iter {
            self.push(value)?;
        }
        Ok(())
    }

    /// O(log n)
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let root = self.data[1];
        self.data[1] = self.data[self.len];
        self.data[self.len] = T::zero();
        self.len -= 1;
        self.sift_down(1);

        Some(root)
    }

    /// O(n)
    pub fn clear(&mut self) {
        tracing::trace!(len = self.len, "clear");
        for slot in self.data[1..=self.len].iter_mut() {
            *slot = T::zero();
        }
        self.len = 0;
    }

    /// Drains the heap in extraction order: ascending for `Order::Min`, descending for
    /// `Order::Max`. Returns `None` if there is nothing to sort.
    ///
    /// O(n log n)
    pub fn sort(&mut self) -> Option<Vec<T>> {
        if self.is_empty() {
            return None;
        }
        tracing::trace!(len = self.len, order = %self.order, "sort");

        let mut sorted = Vec::with_capacity(self.len);
        while let Some(x) = self.pop() {
            sorted.push(x);
        }

        Some(sorted)
    }

    /// Checks that no occupied node is out of order relative to its parent.
    pub fn is_heap(&self) -> bool {
        (2..=self.len).all(|i| !(self.violates)(&self.data[i], &self.data[i / 2]))
    }

    /// O(log n)
    fn sift_up(&mut self, mut node: usize) {
        while node > 1 {
            let parent = node / 2;

            if (self.violates)(&self.data[node], &self.data[parent]) {
                self.data.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
    }

    /// O(log n)
    fn sift_down(&mut self, mut node: usize) {
        loop {
            let left = 2 * node;
            let right = left + 1;

            if self.len < left {
                break;
            }

            // Left wins ties.
            let child = if right <= self.len && (self.violates)(&self.data[right], &self.data[left])
            {
                right
            } else {
                left
            };

            if (self.violates)(&self.data[child], &self.data[node]) {
                self.data.swap(node, child);
                node = child;
            } else {
                break;
            }
        }
    }
}

impl<T: PrimInt + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Heap")
            .field("order", &self.order)
            .field("capacity", &self.capacity())
            .field("data", &self.as_slice())
            .finish()
    }
}
