//! Descendant counting with memoization.
//!
//! Branch heights are proportional to the number of nodes below a branch.
//! [`DescendantCounts`] computes those counts once per layout call, for every
//! node reachable from a start node, and fails with [`GraphError::Cycle`] if
//! the walk ever returns to a node on its own path.

use std::collections::{HashMap, HashSet};

use mindmap_core::identifier::Id;

use crate::{error::GraphError, structure::MindMapTree};

/// Lookup of a node's direct children.
pub(crate) trait ChildLookup {
    fn child_ids(&self, id: Id) -> Vec<Id>;
}

impl ChildLookup for MindMapTree {
    fn child_ids(&self, id: Id) -> Vec<Id> {
        self.children(id)
    }
}

/// Memoized descendant counts for one layout invocation.
#[derive(Debug, Default)]
pub(crate) struct DescendantCounts {
    counts: HashMap<Id, usize>,
}

impl DescendantCounts {
    /// Counts descendants of `start` and of every node below it.
    ///
    /// The walk is an explicit post-order traversal, so its depth is bounded
    /// by the heap rather than the call stack.
    pub(crate) fn compute<T>(tree: &T, start: Id) -> Result<Self, GraphError>
    where
        T: ChildLookup + ?Sized,
    {
        let mut counts = Self::default();
        let mut path = HashSet::new();
        // `true` marks a node whose children have all been pushed
        let mut stack = vec![(start, false)];

        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                let count: usize = tree
                    .child_ids(id)
                    .into_iter()
                    .map(|child| 1 + counts.get(child))
                    .sum();
                path.remove(&id);
                counts.counts.insert(id, count);
                continue;
            }

            if counts.counts.contains_key(&id) {
                continue;
            }
            // Everything on `path` is an ancestor of the node being expanded
            if !path.insert(id) {
                return Err(GraphError::Cycle(id));
            }

            stack.push((id, true));
            stack.extend(tree.child_ids(id).into_iter().rev().map(|child| (child, false)));
        }

        Ok(counts)
    }

    /// Returns the number of nodes below `id`; 0 for leaves and unknown ids.
    pub(crate) fn get(&self, id: Id) -> usize {
        self.counts.get(&id).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Adjacency list that, unlike a validated tree, may contain cycles.
    struct RawChildren(HashMap<Id, Vec<Id>>);

    impl RawChildren {
        fn new(pairs: &[(&str, &[&str])]) -> Self {
            Self(
                pairs
                    .iter()
                    .map(|(parent, children)| {
                        (
                            Id::new(parent),
                            children.iter().map(|c| Id::new(c)).collect(),
                        )
                    })
                    .collect(),
            )
        }
    }

    impl ChildLookup for RawChildren {
        fn child_ids(&self, id: Id) -> Vec<Id> {
            self.0.get(&id).cloned().unwrap_or_default()
        }
    }

    #[test]
    fn test_leaf_has_zero_descendants() {
        let tree = RawChildren::new(&[]);
        let counts = DescendantCounts::compute(&tree, Id::new("leaf")).unwrap();
        assert_eq!(counts.get(Id::new("leaf")), 0);
    }

    #[test]
    fn test_counts_whole_subtree() {
        //   r
        //  / \
        // a   b
        //    / \
        //   b1  b2
        //   |
        //   b11
        let tree = RawChildren::new(&[
            ("r", &["a", "b"]),
            ("b", &["b1", "b2"]),
            ("b1", &["b11"]),
        ]);

        let counts = DescendantCounts::compute(&tree, Id::new("r")).unwrap();

        assert_eq!(counts.get(Id::new("r")), 5);
        assert_eq!(counts.get(Id::new("a")), 0);
        assert_eq!(counts.get(Id::new("b")), 3);
        assert_eq!(counts.get(Id::new("b1")), 1);
        assert_eq!(counts.get(Id::new("b11")), 0);
    }

    #[test]
    fn test_unknown_id_reads_as_zero() {
        let tree = RawChildren::new(&[("r", &["a"])]);
        let counts = DescendantCounts::compute(&tree, Id::new("r")).unwrap();
        assert_eq!(counts.get(Id::new("elsewhere")), 0);
    }

    #[test]
    fn test_cycle_fails_fast() {
        let tree = RawChildren::new(&[("r", &["a"]), ("a", &["b"]), ("b", &["a"])]);

        let err = DescendantCounts::compute(&tree, Id::new("r")).unwrap_err();
        assert_eq!(err, GraphError::Cycle(Id::new("a")));
    }

    #[test]
    fn test_self_loop_fails_fast() {
        let tree = RawChildren::new(&[("r", &["r"])]);

        let err = DescendantCounts::compute(&tree, Id::new("r")).unwrap_err();
        assert_eq!(err, GraphError::Cycle(Id::new("r")));
    }

    #[test]
    fn test_shared_child_is_not_a_cycle() {
        // Not a tree, but revisiting a finished node is not a cycle
        let tree = RawChildren::new(&[("r", &["a", "b"]), ("a", &["x"]), ("b", &["x"])]);

        let counts = DescendantCounts::compute(&tree, Id::new("r")).unwrap();
        assert_eq!(counts.get(Id::new("a")), 1);
        assert_eq!(counts.get(Id::new("b")), 1);
    }

    /// n0 -> n1 -> ... -> n{len-1}, answered without storing the chain.
    struct Chain(usize);

    impl ChildLookup for Chain {
        fn child_ids(&self, id: Id) -> Vec<Id> {
            let index: usize = id.to_string()[1..].parse().unwrap();
            if index + 1 < self.0 {
                vec![Id::new(&format!("n{}", index + 1))]
            } else {
                Vec::new()
            }
        }
    }

    #[test]
    fn test_long_chain_does_not_exhaust_stack() {
        let counts = DescendantCounts::compute(&Chain(100_000), Id::new("n0")).unwrap();

        assert_eq!(counts.get(Id::new("n0")), 99_999);
        assert_eq!(counts.get(Id::new("n50000")), 49_999);
        assert_eq!(counts.get(Id::new("n99999")), 0);
    }
}
