//! Provides a generic multi-key Trie. Values are addressed by a path: an
//! ordered sequence of key segments. Every node of the trie is a
//! [`crate::trie::Node`], and the root is just a node with no parent, so a
//! subtree can be queried with the same operations as the whole trie.
//!
//! Segments must support the [`crate::trie::TrieKey`] trait (anything
//! `Eq + Hash`). Values must support the [`crate::trie::TrieValue`] trait
//! (anything `Default`); the default value is held by the junction nodes
//! which have no value of their own.
//!
//! Paths are passed as iterators, so the caller decides what a segment is:
//! the components of a filesystem path, the labels of a hostname, the
//! numbers of an OID, ...
//!
//! The interface offers:
//!  - exact and prefix lookup: [`crate::trie::Node::get`],
//!    [`crate::trie::Node::search`]
//!  - three insertion policies: [`crate::trie::Node::insert`] (upsert),
//!    [`crate::trie::Node::insert_strict`] and
//!    [`crate::trie::Node::insert_no_overwrite`], the latter two reporting
//!    an [`crate::error::InsertError`]
//!  - subtree removal, which hands the detached subtree back:
//!    [`crate::trie::Node::remove`]
//!  - subtree enumeration: [`crate::trie::Node::predict`],
//!    [`crate::trie::Node::collect`], [`crate::trie::Node::unique`]
//!  - keyed iteration over stored values: [`crate::iterator`]
//!
//! Mutating operations emit `tracing` events; install a subscriber to see
//! them.
//!
//! Examples:
//! * trie : [`crate::trie`]
//! * iterator : [`crate::iterator`]
//!
//! Typical usages for this data structure:
//!  - Routing tables
//!  - Filesystem path indexes
//!  - Hierarchical namespaces
//!  - ...

pub mod error;

pub mod iterator;

pub mod trie;
