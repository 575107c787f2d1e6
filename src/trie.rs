//! Provides a generic multi-key trie. Values are addressed by a path: an
//! ordered sequence of key segments. Every node of the tree is itself a
//! [`Node`], so any subtree can be queried with the same operations as the
//! root.
//!
//! Segments must support the TrieKey trait. Values must support the
//! TrieValue trait.
//!
//! It is up to the user to decide what a segment is. Splitting a string
//! path on `/` gives a filesystem index, splitting a hostname on `.` gives
//! a routing table, and so on.
//!
//! Example 1
//! ```
//! use multitrie::trie::{Mode, Trie};
//!
//! let mut trie = Trie::new();
//! trie.insert(["usr", "local", "bin"], 3);
//! trie.insert(["usr", "lib"], 2);
//!
//! assert!(trie.search(Mode::Exact, ["usr", "lib"]));
//! assert!(trie.search(Mode::Prefix, ["usr", "local"]));
//! assert!(!trie.search(Mode::Exact, ["usr", "local"]));
//! assert_eq!(trie.get_value(["usr", "local", "bin"]), Some(&3));
//!
//! // Removal detaches the whole subtree and hands it back
//! let local = trie.remove(["usr", "local"]).expect("present");
//! assert_eq!(local.get_value(["bin"]), Some(&3));
//! assert!(!trie.search(Mode::Prefix, ["usr", "local"]));
//! ```
//!
//! The three insertion policies differ only in how they treat the
//! terminal node.
//!
//! Example 2
//! ```
//! use multitrie::error::InsertError;
//! use multitrie::trie::Trie;
//!
//! let mut trie: Trie<i32, &str> = Trie::new();
//! assert!(trie.insert_strict([1, 2], "1,2").is_err()); // [1] is missing
//! trie.insert_strict([1], "1").expect("parent exists");
//! trie.insert_strict([1, 2], "1,2").expect("parent exists");
//! assert_eq!(trie.insert_strict([1, 2], "again").unwrap_err(), InsertError::NodeExists(2));
//!
//! trie.insert_no_overwrite([5, 6, 7], "5,6,7").expect("nothing there");
//! assert_eq!(
//!     trie.insert_no_overwrite([5, 6, 7], "again").unwrap_err(),
//!     InsertError::ValueExists("5,6,7")
//! );
//!
//! trie.insert([5, 6, 7], "overwritten");
//! assert_eq!(trie.get_value([5, 6, 7]), Some(&"overwritten"));
//! ```
//!
//! Prefix enumeration returns the nodes below a path.
//!
//! Example 3
//! ```
//! use multitrie::trie::{Mode, Trie};
//!
//! let mut trie: Trie<i32, &str> = Trie::new();
//! trie.insert([1], "1");
//! trie.insert([1, 2], "1,2");
//! trie.insert([1, 2, 3], "1,2,3");
//!
//! // Node [1] itself plus its two descendants
//! assert_eq!(trie.predict(Mode::Prefix, [1]).map(|n| n.len()), Some(3));
//! assert_eq!(trie.predict(Mode::Exact, [1, 2]).map(|n| n.len()), Some(2));
//! assert!(trie.predict(Mode::Exact, [4]).is_none());
//! assert!(trie.unique([1, 2, 3]));
//! assert!(!trie.unique([1]));
//! ```

use std::borrow::Borrow;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::error::InsertError;
use crate::iterator::{Iter, KeyValueRef, Nodes};

/// Segments which we wish to use as trie edges must implement
/// TrieKey.
pub trait TrieKey: Eq + Hash {}

// Blanket implementation which satisfies the compiler
impl<K> TrieKey for K
where
    K: Eq + Hash,
{
    // Nothing to implement, since K already supports the other traits.
}

/// Values which we wish to store in a Trie must implement
/// TrieValue. The default value is held by nodes which have no value.
pub trait TrieValue: Default {}

// Blanket implementation which satisfies the compiler
impl<V> TrieValue for V
where
    V: Default,
{
    // Nothing to implement, since V already supports the other traits.
}

/// Selects how a path is matched by [`Node::search`] and [`Node::predict`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Only nodes which hold a value match.
    Exact,
    /// Any reachable node matches.
    Prefix,
}

/// A node of the trie. The root of a trie is a node like any other.
#[derive(Clone, Debug)]
pub struct Node<K, V> {
    pub(crate) children: Option<HashMap<K, Node<K, V>>>,
    pub(crate) value: V,
    pub(crate) valued: bool,
}

/// The root of a trie.
pub type Trie<K, V> = Node<K, V>;

impl<K, V: TrieValue> Default for Node<K, V> {
    fn default() -> Self {
        Self {
            children: None,
            value: V::default(),
            valued: false,
        }
    }
}

impl<K: TrieKey, V: PartialEq> PartialEq for Node<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.valued == other.valued
            && (!self.valued || self.value == other.value)
            && self.children_len() == other.children_len()
            && self
                .children()
                .all(|(k, child)| other.get_direct(k) == Some(child))
    }
}

impl<K: TrieKey, V: Eq> Eq for Node<K, V> {}

// Free descendants from a work stack so that dropping a deep trie does not
// recurse once per level.
impl<K, V> Drop for Node<K, V> {
    fn drop(&mut self) {
        let mut stack: Vec<Node<K, V>> = self
            .children
            .take()
            .into_iter()
            .flatten()
            .map(|(_, child)| child)
            .collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.take().into_iter().flatten().map(|(_, child)| child));
        }
    }
}

impl<K, V> Node<K, V> {
    /// Does this node hold a value?
    #[inline(always)]
    pub fn is_valued(&self) -> bool {
        self.valued
    }

    /// Get a reference to this node's value, if it has one.
    pub fn value(&self) -> Option<&V> {
        self.valued.then_some(&self.value)
    }

    /// Get a mutable reference to this node's value, if it has one.
    pub fn value_mut(&mut self) -> Option<&mut V> {
        if self.valued {
            Some(&mut self.value)
        } else {
            None
        }
    }

    /// Consume the node, returning its value. Useful on a subtree returned
    /// by [`Node::remove`].
    pub fn into_value(mut self) -> Option<V>
    where
        V: Default,
    {
        self.valued.then(|| std::mem::take(&mut self.value))
    }

    /// The immediate children of this node, in no particular order.
    pub fn children(&self) -> impl Iterator<Item = (&K, &Node<K, V>)> {
        self.children.iter().flatten()
    }

    /// How many immediate children does this node have?
    pub fn children_len(&self) -> usize {
        self.children.as_ref().map_or(0, HashMap::len)
    }

    /// Does this node have no children?
    pub fn is_leaf(&self) -> bool {
        self.children_len() == 0
    }

    /// Is this node unvalued and childless?
    pub fn is_empty(&self) -> bool {
        !self.valued && self.is_leaf()
    }

    /// Depth-first iterator over this node and all of its descendants.
    pub fn nodes(&self) -> Nodes<'_, K, V> {
        Nodes::new(self)
    }

    /// Create an iterator over the values stored in this subtree.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Create a sorted iterator over the values stored in this subtree.
    pub fn iter_sorted(&self) -> impl Iterator<Item = KeyValueRef<'_, K, V>>
    where
        K: Ord,
    {
        let mut v = self.iter().collect::<Vec<KeyValueRef<'_, K, V>>>();
        v.sort_by(|a, b| a.key.cmp(&b.key));
        v.into_iter()
    }

    /// How many values are stored in this subtree, this node included?
    pub fn count(&self) -> usize {
        self.nodes().filter(|n| n.valued).count()
    }

    /// Collect every node of this subtree, this node included, for which
    /// `predicate` holds. Traversal is depth first; sibling order is
    /// unspecified.
    pub fn collect<F>(&self, mut predicate: F) -> Vec<&Self>
    where
        F: FnMut(&Self) -> bool,
    {
        self.nodes().filter(|node| predicate(*node)).collect()
    }

    /// Collect every node of this subtree, junctions included.
    pub fn collect_all(&self) -> Vec<&Self> {
        self.nodes().collect()
    }

    /// Collect every valued node of this subtree.
    pub fn collect_valued(&self) -> Vec<&Self> {
        self.collect(Self::is_valued)
    }

    /// Collect every node of this subtree which has no children.
    pub fn collect_leaf(&self) -> Vec<&Self> {
        self.collect(Self::is_leaf)
    }

    fn set(&mut self, value: V) {
        self.value = value;
        self.valued = true;
    }
}

impl<K: TrieKey, V> Node<K, V> {
    /// Is there an immediate child for `k`?
    pub fn has_direct<Q>(&self, k: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_direct(k).is_some()
    }

    /// Get the immediate child for `k`.
    pub fn get_direct<Q>(&self, k: &Q) -> Option<&Self>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.children.as_ref()?.get(k)
    }

    /// Get the immediate child for `k` mutably.
    pub fn get_direct_mut<Q>(&mut self, k: &Q) -> Option<&mut Self>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.children.as_mut()?.get_mut(k)
    }

    /// Detach the immediate child for `k` and return it with its subtree.
    pub fn remove_direct<Q>(&mut self, k: &Q) -> Option<Self>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.children.as_mut()?.remove(k)
    }

    /// Get the immediate child for `k`, inserting `node` there if there is
    /// none. The flag is true if the child already existed, in which case
    /// `node` is dropped.
    pub fn get_or_insert_direct(&mut self, k: K, node: Self) -> (&mut Self, bool) {
        match self.children.get_or_insert_with(HashMap::new).entry(k) {
            Entry::Occupied(o) => (o.into_mut(), true),
            Entry::Vacant(v) => (v.insert(node), false),
        }
    }

    /// Get the node at `path`. The empty path is this node.
    pub fn get<P>(&self, path: P) -> Option<&Self>
    where
        P: IntoIterator,
        P::Item: Borrow<K>,
    {
        path.into_iter()
            .try_fold(self, |node, segment| node.get_direct::<K>(segment.borrow()))
    }

    /// Get the node at `path` mutably. The empty path is this node.
    pub fn get_mut<P>(&mut self, path: P) -> Option<&mut Self>
    where
        P: IntoIterator,
        P::Item: Borrow<K>,
    {
        let mut node = self;
        for segment in path {
            node = node.get_direct_mut::<K>(segment.borrow())?;
        }
        Some(node)
    }

    /// Get a reference to the value at `path`, if the node there is valued.
    pub fn get_value<P>(&self, path: P) -> Option<&V>
    where
        P: IntoIterator,
        P::Item: Borrow<K>,
    {
        self.get(path)?.value()
    }

    /// Clone the value at `path`, or return the default value if the path
    /// is missing or unvalued.
    pub fn get_value_or_default<P>(&self, path: P) -> V
    where
        P: IntoIterator,
        P::Item: Borrow<K>,
        V: Clone + Default,
    {
        self.get_value(path).cloned().unwrap_or_default()
    }

    /// Detach the node at `path` and return it with its subtree. Ancestors
    /// are left in place, even if they end up empty. Returns None for the
    /// empty path or a missing path.
    pub fn remove<P>(&mut self, path: P) -> Option<Self>
    where
        P: IntoIterator,
        P::Item: Borrow<K>,
    {
        let mut segments: Vec<P::Item> = path.into_iter().collect();
        let Some(last) = segments.pop() else {
            debug!("refusing to remove with an empty path");
            return None;
        };
        let depth = segments.len() + 1;
        let removed = self
            .get_mut(segments)
            .and_then(|parent| parent.remove_direct::<K>(last.borrow()));
        debug!(depth, detached = removed.is_some(), "remove");
        removed
    }

    /// Does `path` exist? In [`Mode::Exact`] the node must also hold a
    /// value.
    pub fn search<P>(&self, mode: Mode, path: P) -> bool
    where
        P: IntoIterator,
        P::Item: Borrow<K>,
    {
        match (self.get(path), mode) {
            (None, _) => false,
            (Some(_), Mode::Prefix) => true,
            (Some(node), Mode::Exact) => node.valued,
        }
    }

    /// Collect the subtree at `path`: valued nodes in [`Mode::Exact`],
    /// every node in [`Mode::Prefix`]. The node at `path` is part of the
    /// subtree. Returns None if `path` does not exist.
    pub fn predict<P>(&self, mode: Mode, path: P) -> Option<Vec<&Self>>
    where
        P: IntoIterator,
        P::Item: Borrow<K>,
    {
        let target = self.get(path)?;
        Some(match mode {
            Mode::Exact => target.collect_valued(),
            Mode::Prefix => target.collect_all(),
        })
    }

    /// Is exactly one value stored at or below `path`?
    pub fn unique<P>(&self, path: P) -> bool
    where
        P: IntoIterator,
        P::Item: Borrow<K>,
    {
        // Stop at the second value, there is no need to walk the rest.
        self.get(path)
            .map_or(false, |target| {
                target.nodes().filter(|n| n.valued).take(2).count() == 1
            })
    }
}

impl<K: TrieKey, V: TrieValue> Node<K, V> {
    /// Create a new, empty node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new node holding `value`.
    pub fn with_value(value: V) -> Self {
        Self {
            children: None,
            value,
            valued: true,
        }
    }

    /// Clear the node: drop its value and all of its children.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Insert `value` at `path`, creating any missing nodes. A value already
    /// at `path` is overwritten in place: the node and its children are
    /// kept. Returns the node at `path`.
    ///
    /// An empty path sets the value of this node.
    pub fn insert<P>(&mut self, path: P, value: V) -> &mut Self
    where
        P: IntoIterator<Item = K>,
    {
        let node = self.materialize(path);
        node.set(value);
        node
    }

    /// Insert `value` at `path` only if doing so creates exactly one new
    /// node: the parent of `path` must exist and must not already have the
    /// final segment as a child.
    pub fn insert_strict<P>(&mut self, path: P, value: V) -> Result<&mut Self, InsertError<K, V>>
    where
        P: IntoIterator<Item = K>,
    {
        let mut segments: Vec<K> = path.into_iter().collect();
        let Some(last) = segments.pop() else {
            debug!(policy = "strict", "rejected insert: empty path");
            return Err(InsertError::EmptyPath);
        };
        let Some(parent) = self.get_mut(&segments) else {
            debug!(
                policy = "strict",
                depth = segments.len() + 1,
                "rejected insert: missing parent path"
            );
            return Err(InsertError::MissingPath);
        };
        if parent.has_direct(&last) {
            debug!(
                policy = "strict",
                depth = segments.len() + 1,
                "rejected insert: node exists"
            );
            return Err(InsertError::NodeExists(last));
        }
        trace!(depth = segments.len() + 1, "strict insert");
        Ok(parent.insert([last], value))
    }

    /// Insert `value` at `path`, creating any missing nodes, unless the node
    /// at `path` already holds a value. A refusal leaves the trie unchanged.
    ///
    /// An empty path targets this node.
    pub fn insert_no_overwrite<P>(
        &mut self,
        path: P,
        value: V,
    ) -> Result<&mut Self, InsertError<K, V>>
    where
        P: IntoIterator<Item = K>,
        V: Clone,
    {
        let node = self.materialize(path);
        if node.valued {
            debug!(policy = "no_overwrite", "rejected insert: valued node exists");
            return Err(InsertError::ValueExists(node.value.clone()));
        }
        node.set(value);
        Ok(node)
    }

    // Walk `path`, creating empty nodes where edges are missing.
    fn materialize<P>(&mut self, path: P) -> &mut Self
    where
        P: IntoIterator<Item = K>,
    {
        let mut node = self;
        let mut depth = 0usize;
        let mut created = 0usize;
        for segment in path {
            let (next, existed) = node.get_or_insert_direct(segment, Node::new());
            if !existed {
                created += 1;
            }
            depth += 1;
            node = next;
        }
        trace!(depth, created, "materialized path");
        node
    }
}
