use std::cmp::Ordering;

use crate::tree::{BucketTree, NodeId};

/// In-order iterator over a [`BucketTree`], yielding `(key, bucket)` pairs
pub struct Iter<'a, K, V> {
    tree: &'a BucketTree<K, V>,
    stack: Vec<NodeId>,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(tree: &'a BucketTree<K, V>) -> Self {
        let mut iter = Self { tree, stack: Vec::new() };
        iter.push_left_spine(tree.root);
        iter
    }

    /// Seeds the stack with the ancestors of the lower bound of `key`
    pub(crate) fn starting_at(tree: &'a BucketTree<K, V>, key: &K) -> Self {
        let mut stack = Vec::new();
        let mut current = tree.root;

        while let Some(id) = current {
            let node = &tree.nodes[id];
            if tree.compare(&node.key, key) == Ordering::Less {
                current = node.right;
            } else {
                stack.push(id);
                current = node.left;
            }
        }

        Self { tree, stack }
    }

    fn push_left_spine(&mut self, mut current: Option<NodeId>) {
        while let Some(id) = current {
            self.stack.push(id);
            current = self.tree.nodes[id].left;
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a [V]);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let tree = self.tree;
        let node = &tree.nodes[id];
        self.push_left_spine(node.right);
        Some((&node.key, node.bucket.as_slice()))
    }
}

impl<'a, K, V> IntoIterator for &'a BucketTree<K, V> {
    type Item = (&'a K, &'a [V]);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::BucketTree;

    #[test]
    fn test_iter_is_sorted() {
        let mut tree = BucketTree::new();
        for k in [50, 20, 80, 10, 30, 70, 90, 25] {
            tree.add(k, k * 10);
        }
        let keys: Vec<_> = tree.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![10, 20, 25, 30, 50, 70, 80, 90]);

        let values: Vec<_> = (&tree).into_iter().flat_map(|(_, b)| b.iter().copied()).collect();
        assert_eq!(values, vec![100, 200, 250, 300, 500, 700, 800, 900]);
    }

    #[test]
    fn test_iter_from_lower_bound() {
        let mut tree = BucketTree::new();
        for k in [50, 20, 80, 10, 30, 70, 90] {
            tree.add(k, ());
        }

        let from = |k| tree.iter_from(&k).map(|(k, _)| *k).collect::<Vec<_>>();
        assert_eq!(from(30), vec![30, 50, 70, 80, 90]);
        assert_eq!(from(31), vec![50, 70, 80, 90]);
        assert_eq!(from(0), vec![10, 20, 30, 50, 70, 80, 90]);
        assert!(from(91).is_empty());
    }

    #[test]
    fn test_iter_on_empty_tree() {
        let tree: BucketTree<u8, u8> = BucketTree::new();
        assert_eq!(tree.iter().count(), 0);
        assert_eq!(tree.iter_from(&3).count(), 0);
    }
}
