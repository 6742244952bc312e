//! A last-in first-out stack guarded by one exclusive lock.
//!
//! # Examples
//!
//! ```
//! use dsa::stack::Stack;
//!
//! let stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//!
//! assert_eq!(stack.to_string(), "[2] -> [1]");
//! assert_eq!(stack.pop(), Some(2));
//! assert_eq!(stack.peek(), Some(1));
//! ```

use std::fmt;

use parking_lot::Mutex;

/// A LIFO stack. All methods take `&self` and are serialized by an internal
/// lock.
pub struct Stack<T> {
    elements: Mutex<Vec<T>>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self {
            elements: Mutex::new(Vec::new()),
        }
    }

    /// Puts a value on top.
    pub fn push(&self, value: T) {
        self.elements.lock().push(value);
    }

    /// Takes the top value off, or returns `None` if the stack is empty.
    pub fn pop(&self) -> Option<T> {
        self.elements.lock().pop()
    }

    /// Whether the stack holds no values.
    pub fn is_empty(&self) -> bool {
        self.elements.lock().is_empty()
    }

    /// Number of values on the stack.
    pub fn len(&self) -> usize {
        self.elements.lock().len()
    }
}

impl<T: Clone> Stack<T> {
    /// Returns a copy of the top value without removing it.
    pub fn peek(&self) -> Option<T> {
        self.elements.lock().last().cloned()
    }
}

/// Renders top to bottom as `[c] -> [b] -> [a]`, or `[]` when empty.
impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let elements = self.elements.lock();
        if elements.is_empty() {
            return f.write_str("[]");
        }

        for (i, value) in elements.iter().rev().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "[{}]", value)?;
        }
        Ok(())
    }
}
