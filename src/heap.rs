//! An array-backed binary heap ordered by element keys.
//!
//! The heap is either a min-heap or a max-heap, picked once at construction.
//! Every method takes `&self` and holds a single lock for its whole body, so
//! a `Heap` can be shared between threads (behind an `Arc` or a scoped
//! borrow) and callers see the operations in some total order.
//!
//! # Examples
//!
//! ```
//! use dsa::heap::{Heap, Kind};
//!
//! let heap = Heap::<i64>::new(Kind::Max);
//! heap.heapify(vec![17, 2, 15, 23, 4, 9, 0]);
//!
//! assert_eq!(heap.peek(), Some(23));
//!
//! // `Display` shows the backing array, not sorted order.
//! assert_eq!(heap.to_string(), "[23] -> [17] -> [15] -> [2] -> [4] -> [9] -> [0]");
//!
//! let drained: Vec<_> = std::iter::from_fn(|| heap.pop()).collect();
//! assert_eq!(drained, vec![23, 17, 15, 9, 4, 2, 0]);
//! assert!(heap.is_empty());
//! ```

use std::fmt;

use parking_lot::Mutex;

use crate::element::{Key, Keyed};

/// Which end of the key range sits at the root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Smallest key at the root.
    #[default]
    Min,
    /// Largest key at the root.
    Max,
}

impl Kind {
    /// Whether `a` should sit above `b`. Strict, so equal keys never swap.
    fn prefers(self, a: Key, b: Key) -> bool {
        match self {
            Self::Min => a < b,
            Self::Max => a > b,
        }
    }
}

/// `0` is `Min`, `1` is `Max`. Anything else falls back to `Min`.
impl From<u8> for Kind {
    fn from(code: u8) -> Self {
        match code {
            1 => Self::Max,
            _ => Self::Min,
        }
    }
}

/// A binary heap of [`Keyed`] elements guarded by one exclusive lock.
pub struct Heap<T> {
    kind: Kind,
    elements: Mutex<Vec<T>>,
}

impl<T: Keyed> Default for Heap<T> {
    fn default() -> Self {
        Self::new(Kind::default())
    }
}

impl<T: Keyed> Heap<T> {
    /// Creates an empty heap with the given ordering.
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            elements: Mutex::new(Vec::new()),
        }
    }

    /// Creates an empty min-heap.
    pub fn min() -> Self {
        Self::new(Kind::Min)
    }

    /// Creates an empty max-heap.
    pub fn max() -> Self {
        Self::new(Kind::Max)
    }

    /// The ordering this heap was built with.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Adds an element, bubbling it up until its parent dominates it.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::heap::Heap;
    ///
    /// let heap = Heap::<i64>::min();
    /// heap.push(5);
    /// heap.push(1);
    ///
    /// assert_eq!(heap.to_string(), "[1] -> [5]");
    /// ```
    pub fn push(&self, element: T) {
        let mut elements = self.elements.lock();
        elements.push(element);
        let last = elements.len() - 1;
        sift_up(self.kind, &mut elements, last);
    }

    /// Removes and returns the root, or `None` if the heap is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::heap::Heap;
    ///
    /// let heap = Heap::<i64>::max();
    /// assert_eq!(heap.pop(), None);
    ///
    /// heap.heapify(vec![3, 9, 4]);
    /// assert_eq!(heap.pop(), Some(9));
    /// assert_eq!(heap.pop(), Some(4));
    /// ```
    pub fn pop(&self) -> Option<T> {
        let mut elements = self.elements.lock();
        if elements.is_empty() {
            return None;
        }

        let root = elements.swap_remove(0);
        sift_down(self.kind, &mut elements, 0);
        Some(root)
    }

    /// Whether the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.lock().is_empty()
    }

    /// Number of elements in the heap.
    pub fn len(&self) -> usize {
        self.elements.lock().len()
    }

    /// Pushes every element, in order, onto the heap. Elements already in
    /// the heap stay put.
    ///
    /// This is repeated [`push`](Self::push), not linear-time heap
    /// construction, so the resulting layout depends on input order.
    /// Each push takes the lock separately.
    pub fn heapify<I>(&self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        for element in elements {
            self.push(element);
        }
    }

    /// Consumes the heap and returns its backing array in layout order.
    pub fn into_vec(self) -> Vec<T> {
        self.elements.into_inner()
    }
}

impl<T: Keyed + Clone> Heap<T> {
    /// Returns a copy of the root without removing it, or `None` if the heap
    /// is empty.
    pub fn peek(&self) -> Option<T> {
        self.elements.lock().first().cloned()
    }
}

impl<T: Keyed> Extend<T> for Heap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let kind = self.kind;
        let elements = self.elements.get_mut();
        for element in iter {
            elements.push(element);
            let last = elements.len() - 1;
            sift_up(kind, elements, last);
        }
    }
}

/// Collects into a min-heap.
impl<T: Keyed> FromIterator<T> for Heap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::min();
        heap.extend(iter);
        heap
    }
}

/// Renders the backing array as `[k1] -> [k2] -> ...`, or `[]` when empty.
impl<T: Keyed> fmt::Display for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let elements = self.elements.lock();
        if elements.is_empty() {
            return f.write_str("[]");
        }

        for (i, element) in elements.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "[{}]", element.key())?;
        }
        Ok(())
    }
}

impl<T: Keyed> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("kind", &self.kind)
            .field("elements", &format_args!("{}", self))
            .finish()
    }
}

fn parent(i: usize) -> usize {
    (i - 1) / 2
}

fn children(i: usize) -> (usize, usize) {
    (2 * i + 1, 2 * i + 2)
}

fn sift_up<T: Keyed>(kind: Kind, elements: &mut [T], mut i: usize) {
    while i > 0 {
        let p = parent(i);
        if !kind.prefers(elements[i].key(), elements[p].key()) {
            break;
        }
        elements.swap(i, p);
        i = p;
    }
}

/// Pushes the element at `i` down until neither child beats it. When both
/// children beat it, the preferred child wins; on a tie the left one does.
fn sift_down<T: Keyed>(kind: Kind, elements: &mut [T], mut i: usize) {
    let len = elements.len();
    loop {
        let (left, right) = children(i);
        let mut best = i;
        if left < len && kind.prefers(elements[left].key(), elements[best].key()) {
            best = left;
        }
        if right < len && kind.prefers(elements[right].key(), elements[best].key()) {
            best = right;
        }
        if best == i {
            return;
        }
        elements.swap(i, best);
        i = best;
    }
}
