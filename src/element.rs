//! The capability every stored value needs: an integer key.
//!
//! Containers in this crate never look at anything but the key. Whatever
//! else an element carries is opaque payload that travels with it.
//!
//! # Examples
//!
//! ```
//! use dsa::element::{Key, Keyed, KeyedMut};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Job {
//!     priority: Key,
//!     name: &'static str,
//! }
//!
//! impl Keyed for Job {
//!     fn key(&self) -> Key {
//!         self.priority
//!     }
//! }
//!
//! impl KeyedMut for Job {
//!     fn set_key(&mut self, key: Key) {
//!         self.priority = key;
//!     }
//! }
//!
//! let mut job = Job { priority: 3, name: "build" };
//! job.set_key(1);
//! assert_eq!(job.key(), 1);
//! ```

/// The key type containers order their elements by.
pub type Key = i64;

/// Anything that can report its key.
pub trait Keyed {
    /// Returns the key. Must be pure: calling it twice without mutating the
    /// element gives the same answer.
    fn key(&self) -> Key;
}

/// Anything whose key can also be replaced.
///
/// [`Tree`](crate::tree::Tree) requires this so elements can be re-keyed
/// later, though no tree operation calls it today.
pub trait KeyedMut: Keyed {
    /// Replaces the key.
    fn set_key(&mut self, key: Key);
}

/// A bare key is its own element.
impl Keyed for Key {
    fn key(&self) -> Key {
        *self
    }
}

impl KeyedMut for Key {
    fn set_key(&mut self, key: Key) {
        *self = key;
    }
}

impl<T: Keyed + ?Sized> Keyed for Box<T> {
    fn key(&self) -> Key {
        (**self).key()
    }
}

impl<T: KeyedMut + ?Sized> KeyedMut for Box<T> {
    fn set_key(&mut self, key: Key) {
        (**self).set_key(key)
    }
}
