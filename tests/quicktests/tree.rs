use dsa::element::{Key, Keyed};
use dsa::tree::{Traversal, Tree};

use std::collections::HashSet;

use crate::Tagged;

fn build(xs: &[Tagged]) -> Tree<Tagged> {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(x.clone());
    }
    tree
}

fn orders(tree: &Tree<Tagged>) -> [String; 3] {
    [
        tree.traverse(Traversal::InOrder),
        tree.traverse(Traversal::PreOrder),
        tree.traverse(Traversal::PostOrder),
    ]
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<Tagged>) -> bool {
    let tree = build(&xs);
    let mut keys: Vec<Key> = xs.iter().map(Keyed::key).collect();
    keys.sort_unstable();

    tree.len() == xs.len() && tree.iter(Traversal::InOrder).map(Keyed::key).eq(keys)
}

#[quickcheck]
fn every_walk_visits_everything_once(xs: Vec<Tagged>) -> bool {
    let tree = build(&xs);
    let walks = [Traversal::InOrder, Traversal::PreOrder, Traversal::PostOrder];

    walks.iter().all(|&order| {
        let mut keys: Vec<Key> = tree.iter(order).map(Keyed::key).collect();
        keys.sort_unstable();
        let mut expected: Vec<Key> = xs.iter().map(Keyed::key).collect();
        expected.sort_unstable();
        keys == expected
    })
}

#[quickcheck]
fn contains(xs: Vec<Tagged>) -> bool {
    let tree = build(&xs);

    xs.iter()
        .all(|x| tree.search(x.key).map(Keyed::key) == Some(x.key))
}

#[quickcheck]
fn contains_not(xs: Vec<Tagged>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);
    let added: HashSet<Key> = xs.iter().map(Keyed::key).collect();

    nots.into_iter()
        .map(Key::from)
        .filter(|k| !added.contains(k))
        .all(|k| tree.search(k).is_none())
}

#[quickcheck]
fn removing_absent_keys_changes_nothing(xs: Vec<Tagged>, nots: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    let added: HashSet<Key> = xs.iter().map(Keyed::key).collect();
    let before = orders(&tree);

    for k in nots.into_iter().map(Key::from).filter(|k| !added.contains(k)) {
        if tree.remove(k).is_some() {
            return false;
        }
    }

    orders(&tree) == before && tree.len() == xs.len()
}

#[quickcheck]
fn with_deletions(xs: Vec<Tagged>, deletes: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    let mut still_present: Vec<Key> = xs.iter().map(Keyed::key).collect();

    for delete in deletes.into_iter().map(Key::from) {
        let removed = tree.remove(delete).map(|x| x.key);
        match still_present.iter().position(|&k| k == delete) {
            Some(pos) => {
                still_present.swap_remove(pos);
                if removed != Some(delete) {
                    return false;
                }
            }
            None if removed.is_some() => return false,
            None => {}
        }
    }

    still_present.sort_unstable();
    tree.iter(Traversal::InOrder).map(Keyed::key).eq(still_present)
}
