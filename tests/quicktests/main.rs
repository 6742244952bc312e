#[macro_use]
extern crate quickcheck_macros;

use dsa::element::{Key, Keyed, KeyedMut};
use quickcheck::{Arbitrary, Gen};

mod heap;
mod tree;

/// An element with a payload, so tests can tell equal keys apart.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Tagged {
    pub(crate) key: Key,
    pub(crate) tag: u8,
}

impl Keyed for Tagged {
    fn key(&self) -> Key {
        self.key
    }
}

impl KeyedMut for Tagged {
    fn set_key(&mut self, key: Key) {
        self.key = key;
    }
}

impl Arbitrary for Tagged {
    /// Keys come from `i8` so duplicates are common.
    fn arbitrary(g: &mut Gen) -> Self {
        Tagged {
            key: Key::from(i8::arbitrary(g)),
            tag: u8::arbitrary(g),
        }
    }
}
