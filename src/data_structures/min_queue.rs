use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A min-ordered wrapper around `BinaryHeap` for the relaxation loops in the
/// shortest-path and spanning-tree algorithms.
///
/// Items pop in ascending `Ord` order; `Edge` and `VertexDistance` order
/// themselves by weight/distance, so they can be queued directly.
#[derive(Debug, Clone)]
pub struct MinQueue<I>
where
    I: Ord,
{
    heap: BinaryHeap<Reverse<I>>,
}

impl<I> MinQueue<I>
where
    I: Ord,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinQueue {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an item into the priority queue
    pub fn push(&mut self, item: I) {
        self.heap.push(Reverse(item));
    }

    /// Removes and returns the smallest item
    pub fn pop(&mut self) -> Option<I> {
        self.heap.pop().map(|Reverse(item)| item)
    }

    /// Returns the smallest item without removing it
    pub fn peek(&self) -> Option<&I> {
        self.heap.peek().map(|Reverse(item)| item)
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<I> Default for MinQueue<I>
where
    I: Ord,
{
    fn default() -> Self {
        MinQueue::new()
    }
}

impl<I> Extend<I> for MinQueue<I>
where
    I: Ord,
{
    fn extend<It: IntoIterator<Item = I>>(&mut self, iter: It) {
        self.heap.extend(iter.into_iter().map(Reverse));
    }
}

impl<I> FromIterator<I> for MinQueue<I>
where
    I: Ord,
{
    fn from_iter<It: IntoIterator<Item = I>>(iter: It) -> Self {
        MinQueue {
            heap: iter.into_iter().map(Reverse).collect(),
        }
    }
}
