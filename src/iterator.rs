//! Provides Trie iterators.
//!
//! All of them walk a subtree depth first with an explicit stack. Sibling
//! order follows the children maps, so it is unspecified; use
//! [`crate::trie::Node::iter_sorted`] when a stable order is needed.
use crate::trie::Node;

/// Iterator Item
#[derive(Debug, PartialEq)]
pub struct KeyValue<K, V> {
    pub key: Vec<K>,
    pub value: V,
}

/// Iterator Item
#[derive(Debug, PartialEq)]
pub struct KeyValueRef<'a, K, V> {
    pub key: Vec<&'a K>,
    pub value: &'a V,
}

/// Iterator over a node and all of its descendants, valued or not.
#[derive(Debug)]
pub struct Nodes<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
}

impl<'a, K, V> Nodes<'a, K, V> {
    pub(crate) fn new(root: &'a Node<K, V>) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a, K, V> Iterator for Nodes<'a, K, V> {
    type Item = &'a Node<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().map(|(_, child)| child));
        Some(node)
    }
}

// Each pending entry records how long the key was at its parent, the
// segment leading to it (None for the starting node) and the node itself.
type Pending<S, N> = (usize, Option<S>, N);

/// Iterator over the values of a Trie. Keys are relative to the node the
/// iterator was created from.
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    key: Vec<&'a K>,
    stack: Vec<Pending<&'a K, &'a Node<K, V>>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = KeyValueRef<'a, K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((depth, segment, node)) = self.stack.pop() {
            self.key.truncate(depth);
            self.key.extend(segment);
            let len = self.key.len();
            self.stack
                .extend(node.children().map(|(k, child)| (len, Some(k), child)));
            if let Some(value) = node.value() {
                return Some(KeyValueRef {
                    key: self.key.clone(),
                    value,
                });
            }
        }
        None
    }
}

impl<'a, K, V> IntoIterator for &'a Node<K, V> {
    type Item = KeyValueRef<'a, K, V>;
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            key: vec![],
            stack: vec![(0, None, self)],
        }
    }
}

/// Consuming iterator over the values of a Trie.
#[derive(Debug)]
pub struct IntoIter<K, V> {
    key: Vec<K>,
    stack: Vec<Pending<K, Node<K, V>>>,
}

impl<K: Clone, V: Default> Iterator for IntoIter<K, V> {
    type Item = KeyValue<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((depth, segment, mut node)) = self.stack.pop() {
            self.key.truncate(depth);
            self.key.extend(segment);
            let len = self.key.len();
            self.stack.extend(
                node.children
                    .take()
                    .into_iter()
                    .flatten()
                    .map(|(k, child)| (len, Some(k), child)),
            );
            if node.valued {
                return Some(KeyValue {
                    key: self.key.clone(),
                    value: std::mem::take(&mut node.value),
                });
            }
        }
        None
    }
}

impl<K: Clone, V: Default> IntoIterator for Node<K, V> {
    type Item = KeyValue<K, V>;
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            key: vec![],
            stack: vec![(0, None, self)],
        }
    }
}
