/// An array-backed binary min-heap keyed by weight, used as the priority
/// frontier of the weighted search.
///
/// The heap orders entries by weight only; ties are broken by heap layout,
/// which is an artifact and not a contract. There is no decrease-key
/// operation: the search pushes a fresh entry on every relaxation and
/// filters the stale duplicates when they surface at extraction time, which
/// keeps the heap a plain array at the cost of at most one extra entry per
/// relaxation.
#[derive(Debug)]
pub struct MinHeap<T, W: Ord> {
    entries: Vec<(T, W)>,
}

impl<T, W: Ord> MinHeap<T, W> {
    /// Creates a new empty frontier.
    pub fn new() -> Self {
        MinHeap {
            entries: Vec::new(),
        }
    }

    /// Creates a new empty frontier with room for `capacity` entries before
    /// the backing storage has to grow.
    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns true if the frontier holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries in the frontier, counting duplicates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Inserts an entry with the given weight. O(log n); the backing storage
    /// doubles when full.
    pub fn insert(&mut self, item: T, weight: W) {
        self.entries.push((item, weight));
        self.sift_up(self.entries.len() - 1);
    }

    /// Removes and returns the minimum-weight entry. O(log n).
    ///
    /// # Panics
    ///
    /// Panics if the frontier is empty. Extracting from an empty frontier is
    /// a contract violation on the caller's side, not a runtime condition;
    /// check [`is_empty`](Self::is_empty) first.
    pub fn extract_min(&mut self) -> (T, W) {
        assert!(
            !self.entries.is_empty(),
            "cannot extract an entry from an empty frontier"
        );
        let entry = self.entries.swap_remove(0);
        self.sift_down(0);
        entry
    }

    /// Returns the minimum-weight entry without removing it.
    pub fn peek(&self) -> Option<(&T, &W)> {
        self.entries.first().map(|(item, weight)| (item, weight))
    }

    /// Drops all entries, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn weight(&self, index: usize) -> &W {
        &self.entries[index].1
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.weight(index) >= self.weight(parent) {
                return;
            }
            self.entries.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let count = self.entries.len();
        while index < count / 2 {
            // The last internal node may have a single child.
            if count % 2 == 0 && index == count / 2 - 1 {
                if self.weight(index) > self.weight(count - 1) {
                    self.entries.swap(index, count - 1);
                }
                return;
            }

            let left = 2 * index + 1;
            let right = left + 1;
            if self.weight(left) <= self.weight(right) && self.weight(left) < self.weight(index) {
                self.entries.swap(left, index);
                index = left;
            } else if self.weight(right) <= self.weight(left)
                && self.weight(right) < self.weight(index)
            {
                self.entries.swap(right, index);
                index = right;
            } else {
                return;
            }
        }
    }
}

impl<T, W: Ord> Default for MinHeap<T, W> {
    fn default() -> Self {
        MinHeap::new()
    }
}
