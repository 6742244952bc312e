//! An unbalanced Binary Search Tree over [`KeyedMut`] elements.
//!
//! Nodes live in an arena owned by the [`Tree`]. Children are owning links
//! into that arena and every node also keeps a non-owning link back to its
//! parent, which lets [`Tree::remove`] splice nodes in place without walking
//! down from the root a second time.
//!
//! Duplicate keys are allowed. Ties go to the right subtree, so every key in
//! a node's left subtree is strictly smaller than its own and every key in
//! its right subtree is greater or equal.
//!
//! The tree is not synchronized. Share it behind your own lock if several
//! threads need it.
//!
//! # Examples
//!
//! ```
//! use dsa::tree::{Traversal, Tree};
//!
//! let mut tree: Tree<i64> = Tree::new();
//! for key in [8, 3, 10, 1, 6, 14, 4, 7, 13] {
//!     tree.insert(key);
//! }
//!
//! assert_eq!(tree.search(6), Some(&6));
//! assert_eq!(tree.search(42), None);
//!
//! tree.remove(8);
//! assert_eq!(tree.traverse(Traversal::InOrder), "[1] [3] [4] [6] [7] [10] [13] [14] ");
//! assert!(tree.traverse(Traversal::PreOrder).starts_with("[10] "));
//! ```

use std::fmt::{self, Write};
use std::str::FromStr;

use crate::element::{Key, KeyedMut};
use crate::error::Error;

/// The depth-first orders a [`Tree`] can be walked in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Traversal {
    /// Left subtree, node, right subtree. Keys come out sorted.
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
}

/// `0` is in-order, `1` pre-order and `2` post-order.
impl TryFrom<u8> for Traversal {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::InOrder),
            1 => Ok(Self::PreOrder),
            2 => Ok(Self::PostOrder),
            _ => Err(Error::UnknownTraversal(code)),
        }
    }
}

/// Accepts `in-order`, `pre-order` and `post-order`, ignoring case and
/// `-`/`_` separators.
impl FromStr for Traversal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match name.as_str() {
            "inorder" => Ok(Self::InOrder),
            "preorder" => Ok(Self::PreOrder),
            "postorder" => Ok(Self::PostOrder),
            _ => Err(Error::UnknownTraversalName(s.to_owned())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct NodeId(usize);

struct Node<T> {
    key: Key,
    element: T,
    parent: Option<NodeId>,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

/// An unbalanced Binary Search Tree. This can be used for inserting,
/// searching, removing and walking keyed elements.
pub struct Tree<T> {
    nodes: Vec<Option<Node<T>>>,
    free: Vec<NodeId>,
    root: Option<NodeId>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            root: None,
            len: 0,
        }
    }

    /// Number of elements in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Walks the tree lazily in the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::tree::{Traversal, Tree};
    ///
    /// let mut tree: Tree<i64> = Tree::new();
    /// for key in [2, 1, 3] {
    ///     tree.insert(key);
    /// }
    ///
    /// let post: Vec<_> = tree.iter(Traversal::PostOrder).copied().collect();
    /// assert_eq!(post, vec![1, 3, 2]);
    /// ```
    pub fn iter(&self, order: Traversal) -> Iter<'_, T> {
        Iter {
            tree: self,
            order,
            stack: self.root.map(|root| (root, false)).into_iter().collect(),
        }
    }

    fn node(&self, id: NodeId) -> &Node<T> {
        self.nodes[id.0]
            .as_ref()
            .expect("`Tree::node()` - `id` points at a free slot")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.nodes[id.0]
            .as_mut()
            .expect("`Tree::node_mut()` - `id` points at a free slot")
    }

    fn alloc(&mut self, node: Node<T>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id.0] = Some(node);
                id
            }
            None => {
                self.nodes.push(Some(node));
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    fn release(&mut self, id: NodeId) -> Node<T> {
        let node = self.nodes[id.0]
            .take()
            .expect("`Tree::release()` - `id` points at a free slot");
        self.free.push(id);
        node
    }

    fn set_parent(&mut self, child: Option<NodeId>, parent: Option<NodeId>) {
        if let Some(child) = child {
            self.node_mut(child).parent = parent;
        }
    }

    fn left_most(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.node(id).left {
            id = left;
        }
        id
    }
}

impl<T: KeyedMut> Tree<T> {
    /// Inserts the element below the first empty slot on its search path.
    /// Equal keys go right, so duplicates are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::tree::{Traversal, Tree};
    ///
    /// let mut tree: Tree<i64> = Tree::new();
    /// tree.insert(5);
    /// tree.insert(5);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.traverse(Traversal::PreOrder), "[5] [2] [5] ");
    /// ```
    pub fn insert(&mut self, element: T) {
        let key = element.key();
        let mut parent = None;
        let mut went_left = false;
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.node(id);
            parent = Some(id);
            went_left = key < node.key;
            current = if went_left { node.left } else { node.right };
        }

        let id = self.alloc(Node {
            key,
            element,
            parent,
            left: None,
            right: None,
        });
        match parent {
            None => self.root = Some(id),
            Some(parent) if went_left => self.node_mut(parent).left = Some(id),
            Some(parent) => self.node_mut(parent).right = Some(id),
        }
        self.len += 1;
    }

    /// Finds an element with the given key. With duplicates this is the first
    /// one met on the way down, which isn't necessarily the oldest.
    pub fn search(&self, key: Key) -> Option<&T> {
        self.find(key).map(|id| &self.node(id).element)
    }

    /// Removes the element [`search`](Self::search) would return and hands it
    /// back. Nothing happens if no element has the key.
    ///
    /// A node without a right child is replaced by its left subtree. Otherwise
    /// its in-order successor takes its place.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::tree::{Traversal, Tree};
    ///
    /// let mut tree: Tree<i64> = Tree::new();
    /// for key in [8, 3, 10, 1, 6, 14, 4, 7, 13] {
    ///     tree.insert(key);
    /// }
    ///
    /// assert_eq!(tree.remove(6), Some(6));
    /// assert_eq!(tree.remove(6), None);
    /// assert_eq!(tree.traverse(Traversal::PreOrder), "[8] [3] [1] [7] [4] [10] [14] [13] ");
    /// ```
    pub fn remove(&mut self, key: Key) -> Option<T> {
        let id = self.find(key)?;
        let Node {
            parent,
            left,
            right,
            ..
        } = *self.node(id);

        let replacement = match right {
            None => left,
            Some(right) => {
                let successor = self.left_most(right);
                if successor != right {
                    // Lift the successor out, its right subtree takes its slot.
                    let successor_parent = self
                        .node(successor)
                        .parent
                        .expect("a left-most node below `right` has a parent");
                    let orphan = self.node(successor).right;
                    self.node_mut(successor_parent).left = orphan;
                    self.set_parent(orphan, Some(successor_parent));

                    self.node_mut(successor).right = Some(right);
                    self.set_parent(Some(right), Some(successor));
                }
                self.node_mut(successor).left = left;
                self.set_parent(left, Some(successor));
                Some(successor)
            }
        };

        self.set_parent(replacement, parent);
        match parent {
            None => self.root = replacement,
            Some(parent) => {
                let parent = self.node_mut(parent);
                if parent.left == Some(id) {
                    parent.left = replacement;
                } else {
                    parent.right = replacement;
                }
            }
        }

        self.len -= 1;
        Some(self.release(id).element)
    }

    /// Renders every key in the given order as `[k] `, trailing space
    /// included. An empty tree renders as an empty string.
    pub fn traverse(&self, order: Traversal) -> String {
        self.iter(order).fold(String::new(), |mut out, element| {
            // Writing into a `String` can't fail.
            let _ = write!(out, "[{}] ", element.key());
            out
        })
    }

    /// Like [`traverse`](Self::traverse) but takes the order as a raw code
    /// (see `Traversal: TryFrom<u8>`). Unknown codes render as
    /// `"unknown traversal algorithm"` instead of a key listing.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::tree::Tree;
    ///
    /// let mut tree: Tree<i64> = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.traverse_code(0), "[1] ");
    /// assert_eq!(tree.traverse_code(9), "unknown traversal algorithm");
    /// ```
    pub fn traverse_code(&self, code: u8) -> String {
        match Traversal::try_from(code) {
            Ok(order) => self.traverse(order),
            Err(e) => e.to_string(),
        }
    }

    fn find(&self, key: Key) -> Option<NodeId> {
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.node(id);
            current = match key.cmp(&node.key) {
                std::cmp::Ordering::Equal => return Some(id),
                std::cmp::Ordering::Greater => node.right,
                std::cmp::Ordering::Less => node.left,
            };
        }
        None
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter(Traversal::InOrder)).finish()
    }
}

/// A lazy depth-first walk over a [`Tree`], created by [`Tree::iter`].
///
/// Uses an explicit stack, so degenerate (list-shaped) trees don't recurse.
pub struct Iter<'a, T> {
    tree: &'a Tree<T>,
    order: Traversal,
    /// Nodes still to visit. The flag marks nodes whose children have
    /// already been scheduled.
    stack: Vec<(NodeId, bool)>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        while let Some((id, expanded)) = self.stack.pop() {
            let node = tree.node(id);
            if expanded {
                return Some(&node.element);
            }

            // Pushed in reverse of the visit order.
            let later = |child: Option<NodeId>| child.map(|c| (c, false));
            match self.order {
                Traversal::PreOrder => {
                    self.stack.extend(later(node.right));
                    self.stack.extend(later(node.left));
                    return Some(&node.element);
                }
                Traversal::InOrder => {
                    self.stack.extend(later(node.right));
                    self.stack.push((id, true));
                    self.stack.extend(later(node.left));
                }
                Traversal::PostOrder => {
                    self.stack.push((id, true));
                    self.stack.extend(later(node.right));
                    self.stack.extend(later(node.left));
                }
            }
        }
        None
    }
}
