//! Errors reported by the conflict-checking insertion policies.
//!
//! Lookups and removals never fail loudly: a missing path is an ordinary
//! outcome and is reported as `None` or `false`. Only
//! [`crate::trie::Node::insert_strict`] and
//! [`crate::trie::Node::insert_no_overwrite`] produce an [`InsertError`].

/// Reasons an insertion was refused.
///
/// `K` is the key segment type and `V` the value type of the trie which
/// refused the insertion.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InsertError<K, V> {
    /// A strict insertion needs at least one segment to create.
    #[error("empty path not allowed")]
    EmptyPath,

    /// Some segment of the parent path does not exist.
    #[error("missing some path")]
    MissingPath,

    /// The final segment already exists under the parent, valued or not.
    #[error("node already had path {0:?}")]
    NodeExists(K),

    /// The target node already holds a value. Carries a copy of it.
    #[error("valued node exists: {0:?}")]
    ValueExists(V),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_displays_errors() {
        let err: InsertError<usize, &str> = InsertError::EmptyPath;
        assert_eq!(err.to_string(), "empty path not allowed");

        let err: InsertError<usize, &str> = InsertError::MissingPath;
        assert_eq!(err.to_string(), "missing some path");

        let err: InsertError<usize, &str> = InsertError::NodeExists(7);
        assert_eq!(err.to_string(), "node already had path 7");

        let err: InsertError<usize, &str> = InsertError::ValueExists("1,2,3");
        assert_eq!(err.to_string(), "valued node exists: \"1,2,3\"");
    }

    #[test]
    fn it_is_a_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        let err: InsertError<&str, String> = InsertError::NodeExists("/src");
        assert_error(&err);
        assert_eq!(err.to_string(), "node already had path \"/src\"");
    }
}
