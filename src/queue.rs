//! A first-in first-out queue guarded by one exclusive lock.
//!
//! # Examples
//!
//! ```
//! use dsa::queue::Queue;
//!
//! let queue = Queue::new();
//! queue.enqueue("a");
//! queue.enqueue("b");
//!
//! assert_eq!(queue.to_string(), "[a] -> [b]");
//! assert_eq!(queue.dequeue(), Some("a"));
//! assert_eq!(queue.peek(), Some("b"));
//! ```

use std::collections::VecDeque;
use std::fmt;

use parking_lot::Mutex;

/// A FIFO queue. All methods take `&self` and are serialized by an internal
/// lock.
pub struct Queue<T> {
    elements: Mutex<VecDeque<T>>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            elements: Mutex::new(VecDeque::new()),
        }
    }

    /// Adds a value at the back.
    pub fn enqueue(&self, value: T) {
        self.elements.lock().push_back(value);
    }

    /// Removes the value at the front, or returns `None` if the queue is
    /// empty.
    pub fn dequeue(&self) -> Option<T> {
        self.elements.lock().pop_front()
    }

    /// Whether the queue holds no values.
    pub fn is_empty(&self) -> bool {
        self.elements.lock().is_empty()
    }

    /// Number of values in the queue.
    pub fn len(&self) -> usize {
        self.elements.lock().len()
    }
}

impl<T: Clone> Queue<T> {
    /// Returns a copy of the front value without removing it.
    pub fn peek(&self) -> Option<T> {
        self.elements.lock().front().cloned()
    }
}

/// Renders front to back as `[a] -> [b]`, or `[]` when empty.
impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let elements = self.elements.lock();
        if elements.is_empty() {
            return f.write_str("[]");
        }

        for (i, value) in elements.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "[{}]", value)?;
        }
        Ok(())
    }
}
