//! HeightIndex - O(log n) prefix sums and offset lookup via Fenwick tree
//!
//! Holds the real pixel height of every content node in document order.
//! Content growth (an image finishing load) updates one node in O(log n);
//! the document's total height and any node's top offset stay O(log n).
//!
//! # Complexity
//!
//! - `set`: O(log n)
//! - `prefix_sum`: O(log n)
//! - `offset_of`: O(log n)
//! - `lower_bound`: O(log² n)
//! - `total`: O(log n)
//! - `len`: O(1)

/// HeightIndex wraps a Fenwick tree for O(log n) prefix sum queries and updates.
///
/// The backing tree is sized exactly once at construction, so every slot is a
/// valid Fenwick node for the lifetime of the index.
#[derive(Debug, Clone)]
pub struct HeightIndex {
    /// Fenwick tree backing storage (1-indexed internally, but we expose 0-indexed API)
    tree: Vec<isize>,
}

impl HeightIndex {
    /// Builds an index over `heights` in document order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use docmap::view_state::height_index::HeightIndex;
    /// let index = HeightIndex::from_heights([3, 4, 5]);
    /// assert_eq!(index.len(), 3);
    /// assert_eq!(index.total(), 12);
    /// ```
    pub fn from_heights(heights: impl IntoIterator<Item = usize>) -> Self {
        let heights: Vec<usize> = heights.into_iter().collect();
        let mut tree = vec![0; heights.len()];
        for (i, &h) in heights.iter().enumerate() {
            fenwick::array::update(&mut tree, i, h as isize);
        }
        Self { tree }
    }

    /// Sets the height at the given index.
    ///
    /// Computes the delta from the current height and updates the Fenwick tree.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use docmap::view_state::height_index::HeightIndex;
    /// let mut index = HeightIndex::from_heights([5]);
    /// index.set(0, 10);
    /// assert_eq!(index.prefix_sum(0), 10);
    /// ```
    pub fn set(&mut self, index: usize, height: usize) {
        let current_height = self.height(index);

        let delta = height as isize - current_height as isize;
        if delta != 0 {
            fenwick::array::update(&mut self.tree, index, delta);
        }
    }

    /// Height of the entry at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn height(&self, index: usize) -> usize {
        if index == 0 {
            self.prefix_sum(0)
        } else {
            self.prefix_sum(index) - self.prefix_sum(index - 1)
        }
    }

    /// Returns the cumulative height up to and including the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use docmap::view_state::height_index::HeightIndex;
    /// let index = HeightIndex::from_heights([3, 4, 5]);
    /// assert_eq!(index.prefix_sum(0), 3);
    /// assert_eq!(index.prefix_sum(1), 7);
    /// assert_eq!(index.prefix_sum(2), 12);
    /// ```
    pub fn prefix_sum(&self, index: usize) -> usize {
        assert!(
            index < self.len(),
            "index {} out of bounds (len: {})",
            index,
            self.len()
        );

        let sum = fenwick::array::prefix_sum(&self.tree, index);
        sum.max(0) as usize
    }

    /// Top offset of the entry at `index` (sum of all preceding heights).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn offset_of(&self, index: usize) -> usize {
        self.prefix_sum(index) - self.height(index)
    }

    /// Binary search for the first index where `prefix_sum(index) > value`.
    ///
    /// Returns the index of the entry containing the given vertical offset.
    ///
    /// # Returns
    ///
    /// - `Some(index)` if there exists an index where `prefix_sum(index) > value`
    /// - `None` if `value >= total()` or the index is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use docmap::view_state::height_index::HeightIndex;
    /// let index = HeightIndex::from_heights([10, 20, 15]);
    ///
    /// assert_eq!(index.lower_bound(0), Some(0));
    /// assert_eq!(index.lower_bound(10), Some(1));
    /// assert_eq!(index.lower_bound(30), Some(2));
    /// assert_eq!(index.lower_bound(100), None);
    /// ```
    pub fn lower_bound(&self, value: usize) -> Option<usize> {
        if self.is_empty() {
            return None;
        }

        // Entry i covers range [prefix_sum(i-1), prefix_sum(i))
        let mut left = 0;
        let mut right = self.len();

        while left < right {
            let mid = left + (right - left) / 2;
            if self.prefix_sum(mid) > value {
                right = mid;
            } else {
                left = mid + 1;
            }
        }

        if left >= self.len() {
            None
        } else {
            Some(left)
        }
    }

    /// Returns the total cumulative height of all entries.
    pub fn total(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.prefix_sum(self.len() - 1)
        }
    }

    /// Returns the number of entries in the index.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns true if the index contains no entries.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}
