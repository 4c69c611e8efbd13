use std::{cmp::Reverse, collections::BinaryHeap};

/// Retains the `capacity` largest elements inserted so far.
///
/// The elements are kept in a min-heap, such that the smallest retained element can be evicted in logarithmic time.
#[derive(Debug, Clone)]
pub struct BoundedMaxHeap<T> {
    heap: BinaryHeap<Reverse<T>>,
    capacity: usize,
}

impl<T: Ord> BoundedMaxHeap<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            capacity,
        }
    }

    /// Inserts `element` if it is among the `capacity` largest elements seen so far.
    ///
    /// Returns `true` if the element was retained.
    /// If the heap is full, the current minimum is evicted for an element that compares greater,
    /// while an element that compares less than or equal to the minimum is discarded.
    pub fn insert(&mut self, element: T) -> bool {
        if self.heap.len() < self.capacity {
            self.heap.push(Reverse(element));
            true
        } else if let Some(mut minimum) = self.heap.peek_mut() {
            if element > minimum.0 {
                *minimum = Reverse(element);
                true
            } else {
                false
            }
        } else {
            // Capacity is zero.
            false
        }
    }

    pub fn into_sorted_vec(self) -> Vec<T> {
        // The ascending order of `Reverse` is descending for the wrapped elements.
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(element)| element)
            .collect()
    }
}

impl<T: Ord + Clone> BoundedMaxHeap<T> {
    /// Returns the retained elements, largest first.
    pub fn top_n(&self) -> Vec<T> {
        self.clone().into_sorted_vec()
    }
}

impl<T> BoundedMaxHeap<T> {
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
