use dsa::element::{Key, Keyed};
use dsa::heap::{Heap, Kind};

use crate::Tagged;

fn drain<T: Keyed>(heap: &Heap<T>) -> Vec<T> {
    std::iter::from_fn(|| heap.pop()).collect()
}

#[quickcheck]
fn min_heap_drains_ascending(xs: Vec<Tagged>) -> bool {
    let heap = Heap::min();
    heap.heapify(xs.clone());

    let drained = drain(&heap);
    let mut keys: Vec<Key> = xs.iter().map(Keyed::key).collect();
    keys.sort_unstable();

    drained.len() == xs.len() && drained.iter().map(Keyed::key).eq(keys)
}

#[quickcheck]
fn max_heap_drains_descending(xs: Vec<Tagged>) -> bool {
    let heap = Heap::max();
    for x in &xs {
        heap.push(x.clone());
    }

    let drained = drain(&heap);
    let mut keys: Vec<Key> = xs.iter().map(Keyed::key).collect();
    keys.sort_unstable_by(|a, b| b.cmp(a));

    drained.iter().map(Keyed::key).eq(keys)
}

/// Every pushed element comes back out, payload included.
#[quickcheck]
fn drain_is_a_permutation(xs: Vec<Tagged>) -> bool {
    let heap = Heap::new(Kind::Max);
    heap.heapify(xs.clone());

    let mut drained = drain(&heap);
    let mut expected = xs;
    let order = |a: &Tagged, b: &Tagged| (a.key, a.tag).cmp(&(b.key, b.tag));
    drained.sort_by(order);
    expected.sort_by(order);

    drained == expected
}

#[quickcheck]
fn peek_matches_pop(xs: Vec<Tagged>) -> bool {
    let heap = Heap::min();
    heap.heapify(xs);

    loop {
        let before = heap.len();
        let peeked = heap.peek();
        if heap.len() != before {
            return false;
        }
        let popped = heap.pop();
        if peeked != popped {
            return false;
        }
        if popped.is_none() {
            return heap.is_empty();
        }
    }
}

#[quickcheck]
fn same_multiset_same_pop_sequence(xs: Vec<i8>) -> bool {
    let forward = Heap::<Key>::max();
    forward.heapify(xs.iter().map(|&x| Key::from(x)));
    let backward = Heap::<Key>::max();
    backward.heapify(xs.iter().rev().map(|&x| Key::from(x)));

    drain(&forward) == drain(&backward)
}
