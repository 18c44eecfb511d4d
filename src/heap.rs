//! implements the binary min-heap algorithms over a generic storage
//! trait, keeping the mechanical heap maintenance separate from any
//! particular ordering policy.

/// Storage the heap algorithms can maintain in min-heap order.
///
/// Implementors provide a flat, indexable collection plus the ordering
/// relation; the algorithms in this module only ever observe elements
/// through `less` and move them through `swap`, `push_back`, and
/// `pop_back`. Any per-element bookkeeping an implementor performs in
/// those primitives (such as a position back-reference) therefore stays
/// accurate no matter which algorithm ran.
///
/// `less` must be a strict weak ordering and must not change its
/// answer while both elements stay put. If it does, the algorithms
/// still terminate but the pop order is meaningless.
///
/// Calling `swap` or the boundary primitives directly can break heap
/// order; `init` restores it.
pub trait HeapStorage {
    /// The element type held in the storage.
    type Item;

    /// Returns the number of elements currently stored.
    fn len(&self) -> usize;

    /// Reports whether the storage holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reports whether the element at `a` sorts strictly before the
    /// element at `b`.
    fn less(&self, a: usize, b: usize) -> bool;

    /// Exchanges the elements at positions `a` and `b`.
    fn swap(&mut self, a: usize, b: usize);

    /// Appends `item` after the last element.
    fn push_back(&mut self, item: Self::Item);

    /// Removes and returns the last element, or `None` if empty.
    fn pop_back(&mut self) -> Option<Self::Item>;
}

/// Inserts `item`, then restores heap order by sifting it up from the
/// last position. O(log n).
pub fn push<H: HeapStorage>(h: &mut H, item: H::Item) {
    h.push_back(item);
    if let Some(last) = h.len().checked_sub(1) {
        sift_up(h, last);
    }
}

/// Removes and returns the minimum element (position 0), or `None` if
/// the storage is empty. O(log n).
///
/// The root is swapped with the last element, the new root is sifted
/// down over the shrunk range, and the old root is then taken off the
/// end.
pub fn pop<H: HeapStorage>(h: &mut H) -> Option<H::Item> {
    let n = h.len().checked_sub(1)?;
    h.swap(0, n);
    sift_down(h, 0, n);
    h.pop_back()
}

/// Establishes heap order over the whole storage, whatever order it was
/// in beforehand. Bottom-up: sifts down each parent starting from the
/// last one, which is O(n) rather than the O(n log n) of repeated
/// `push`.
pub fn init<H: HeapStorage>(h: &mut H) {
    let n = h.len();
    for i in (0..n / 2).rev() {
        sift_down(h, i, n);
    }
}

/// Restores heap order after the element at `i` changed its ordering
/// key in place. Cheaper than a `remove` followed by a `push`; a no-op
/// when `i` is out of range. O(log n).
pub fn fix<H: HeapStorage>(h: &mut H, i: usize) {
    if i >= h.len() {
        return;
    }
    if !sift_down(h, i, h.len()) {
        sift_up(h, i);
    }
}

/// Removes and returns the element at position `i`, or `None` when `i`
/// is out of range. O(log n).
pub fn remove<H: HeapStorage>(h: &mut H, i: usize) -> Option<H::Item> {
    let n = h.len().checked_sub(1)?;
    if i > n {
        return None;
    }
    if i != n {
        h.swap(i, n);
        if !sift_down(h, i, n) {
            sift_up(h, i);
        }
    }
    h.pop_back()
}

/// Moves the element at `j` towards the root until its parent no longer
/// sorts after it.
fn sift_up<H: HeapStorage>(h: &mut H, mut j: usize) {
    while j > 0 {
        let parent = (j - 1) / 2;
        if !h.less(j, parent) {
            break;
        }
        h.swap(parent, j);
        j = parent;
    }
}

/// Moves the element at `start` towards the leaves, always into the
/// smaller child, considering only positions below `n`. Returns whether
/// the element moved at all; callers use this to decide whether a
/// sift-up is still needed.
fn sift_down<H: HeapStorage>(h: &mut H, start: usize, n: usize) -> bool {
    let mut i = start;
    loop {
        let left = 2 * i + 1;
        if left >= n {
            break;
        }
        let mut child = left;
        let right = left + 1;
        if right < n && h.less(right, left) {
            child = right;
        }
        if !h.less(child, i) {
            break;
        }
        h.swap(i, child);
        i = child;
    }
    i > start
}
