//! AVL tree of buckets.
//!
//! Nodes live in a dense arena (`Vec<Node>`) and refer to their children by
//! index, so rotations and deletions are index reassignments. Removing a node
//! uses `swap_remove` and re-points whichever link referred to the node that
//! moved into the freed slot, keeping every stored index live.
//!
//! ## Heights and balance
//! - A leaf has height 0; a missing child counts as -1
//! - `bf(node) = height(right) - height(left)`, with `-height(node)` when the
//!   right child is missing and `+height(node)` when the left child is missing
//! - After a structural change every node on the root-to-change path is
//!   re-measured bottom-up and rotated when `|bf| == 2`

use std::cmp::Ordering;
use std::fmt;

use tracing::trace;

use crate::iter::Iter;

pub(crate) type NodeId = usize;

/// Total order over keys. Must be a valid total order; an inconsistent
/// comparator leaves the tree in an unspecified (but memory-safe) state.
pub type Comparator<K> = Box<dyn Fn(&K, &K) -> Ordering + Send + Sync>;

pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) bucket: Vec<V>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    height: i32,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V) -> Self {
        Self {
            key,
            bucket: vec![value],
            left: None,
            right: None,
            height: 0,
        }
    }
}

/// Ordered multi-map: each key owns a bucket of values in insertion order.
///
/// ## Usage
/// ```ignore
/// let mut index = BucketTree::new();
/// index.add("dune".to_string(), 1);
/// index.add("dune".to_string(), 2);
///
/// assert_eq!(index.get(&"dune".to_string()), Some(&[1, 2][..]));
/// ```
pub struct BucketTree<K, V> {
    pub(crate) nodes: Vec<Node<K, V>>,
    pub(crate) root: Option<NodeId>,
    compare: Comparator<K>,
}

impl<K: Ord + 'static, V> BucketTree<K, V> {
    /// Creates an empty tree ordered by `K`'s natural ordering
    pub fn new() -> Self {
        Self::with_comparator(|a: &K, b: &K| a.cmp(b))
    }
}

impl<K: Ord + 'static, V> Default for BucketTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> BucketTree<K, V> {
    /// Creates an empty tree ordered by `compare`
    pub fn with_comparator(
        compare: impl Fn(&K, &K) -> Ordering + Send + Sync + 'static,
    ) -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            compare: Box::new(compare),
        }
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of values across all buckets
    pub fn value_count(&self) -> usize {
        self.nodes.iter().map(|n| n.bucket.len()).sum()
    }

    /// Height of the root: -1 when empty, 0 for a single node
    pub fn height(&self) -> i32 {
        self.height_of(self.root)
    }

    /// Returns the bucket stored under `key`, or `None` when the key is absent
    pub fn get(&self, key: &K) -> Option<&[V]> {
        self.find(key).map(|id| self.nodes[id].bucket.as_slice())
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Adds `value` under `key`.
    ///
    /// A new key gets a fresh node with a one-element bucket and the path to
    /// it is rebalanced. An existing key just has the value appended; the tree
    /// shape does not change. Always returns `true`.
    pub fn add(&mut self, key: K, value: V) -> bool {
        let mut path = Vec::new();
        let mut current = self.root;
        let mut went_left = false;

        while let Some(id) = current {
            path.push(id);
            match (self.compare)(&key, &self.nodes[id].key) {
                Ordering::Less => {
                    went_left = true;
                    current = self.nodes[id].left;
                }
                Ordering::Greater => {
                    went_left = false;
                    current = self.nodes[id].right;
                }
                Ordering::Equal => {
                    self.nodes[id].bucket.push(value);
                    return true;
                }
            }
        }

        let new_id = self.nodes.len();
        self.nodes.push(Node::new(key, value));

        match path.last() {
            None => self.root = Some(new_id),
            Some(&parent) if went_left => self.nodes[parent].left = Some(new_id),
            Some(&parent) => self.nodes[parent].right = Some(new_id),
        }

        path.push(new_id);
        self.balance_path(&path);
        true
    }

    /// Removes `key` and its whole bucket, returning the bucket.
    ///
    /// Returns `None` when the key is absent (including on an empty tree).
    pub fn remove(&mut self, key: &K) -> Option<Vec<V>> {
        let mut path = Vec::new();
        let mut current = self.root;

        while let Some(id) = current {
            match (self.compare)(key, &self.nodes[id].key) {
                Ordering::Less => current = self.nodes[id].left,
                Ordering::Greater => current = self.nodes[id].right,
                Ordering::Equal => break,
            }
            path.push(id);
        }

        let target = current?;
        let parent = path.last().copied();

        let removed = match self.nodes[target].left {
            // Case 1: no left child, so the right child takes the node's place
            None => {
                let right = self.nodes[target].right;
                match parent {
                    None => self.root = right,
                    Some(p) => {
                        if self.nodes[p].left == Some(target) {
                            self.nodes[p].left = right;
                        } else {
                            self.nodes[p].right = right;
                        }
                        self.balance_path(&path);
                    }
                }
                target
            }
            // Case 2: swap in the in-order predecessor, then splice it out
            Some(left) => {
                path.push(target);
                let mut parent_of_right_most = target;
                let mut right_most = left;
                while let Some(next) = self.nodes[right_most].right {
                    path.push(right_most);
                    parent_of_right_most = right_most;
                    right_most = next;
                }

                self.swap_entries(target, right_most);

                let orphan = self.nodes[right_most].left;
                if self.nodes[parent_of_right_most].right == Some(right_most) {
                    self.nodes[parent_of_right_most].right = orphan;
                } else {
                    self.nodes[parent_of_right_most].left = orphan;
                }

                self.balance_path(&path);
                right_most
            }
        };

        Some(self.release(removed).bucket)
    }

    /// Removes the first value equal to `value` from `key`'s bucket.
    ///
    /// When that empties the bucket the key itself is removed, so `get`
    /// reports it as absent afterwards. Returns `false` when the key or the
    /// value is not present.
    pub fn remove_value(&mut self, key: &K, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.remove_value_by(key, |v| v == value)
    }

    /// Like [`remove_value`](Self::remove_value), but removes the first value
    /// matching `pred`
    pub fn remove_value_by(&mut self, key: &K, pred: impl Fn(&V) -> bool) -> bool {
        let Some(id) = self.find(key) else {
            return false;
        };
        let bucket = &mut self.nodes[id].bucket;
        let Some(pos) = bucket.iter().position(|v| pred(v)) else {
            return false;
        };
        bucket.remove(pos);

        if bucket.is_empty() {
            self.remove(key);
        }
        true
    }

    /// Drops every key and value
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Keys on the way from the root to `key` (ending at `key` when present,
    /// otherwise at the last node visited)
    pub fn path(&self, key: &K) -> Vec<&K> {
        let mut keys = Vec::new();
        let mut current = self.root;

        while let Some(id) = current {
            let node = &self.nodes[id];
            keys.push(&node.key);
            current = match (self.compare)(key, &node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => None,
            };
        }

        keys
    }

    /// In-order iterator over `(key, bucket)` pairs
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self)
    }

    /// In-order iterator starting at the first key `>= key`
    pub fn iter_from(&self, key: &K) -> Iter<'_, K, V> {
        Iter::starting_at(self, key)
    }

    /// Checks ordering, stored heights and the AVL balance condition at every node
    pub fn is_balanced(&self) -> bool {
        self.check_subtree(self.root, None, None).is_some()
    }

    pub(crate) fn compare(&self, a: &K, b: &K) -> Ordering {
        (self.compare)(a, b)
    }

    fn find(&self, key: &K) -> Option<NodeId> {
        let mut current = self.root;
        while let Some(id) = current {
            match (self.compare)(key, &self.nodes[id].key) {
                Ordering::Less => current = self.nodes[id].left,
                Ordering::Greater => current = self.nodes[id].right,
                Ordering::Equal => return Some(id),
            }
        }
        None
    }

    fn height_of(&self, id: Option<NodeId>) -> i32 {
        id.map_or(-1, |id| self.nodes[id].height)
    }

    fn update_height(&mut self, id: NodeId) {
        let node = &self.nodes[id];
        let height = 1 + self.height_of(node.left).max(self.height_of(node.right));
        self.nodes[id].height = height;
    }

    fn balance_factor(&self, id: NodeId) -> i32 {
        let node = &self.nodes[id];
        match (node.left, node.right) {
            (_, None) => -node.height,
            (None, Some(_)) => node.height,
            (Some(l), Some(r)) => self.nodes[r].height - self.nodes[l].height,
        }
    }

    /// Re-measures and rebalances `path` (root first) from the bottom up
    fn balance_path(&mut self, path: &[NodeId]) {
        for i in (0..path.len()).rev() {
            let a = path[i];
            self.update_height(a);
            let parent = if i == 0 { None } else { Some(path[i - 1]) };

            match self.balance_factor(a) {
                -2 => {
                    if let Some(left) = self.nodes[a].left {
                        if self.balance_factor(left) <= 0 {
                            self.rotate_ll(a, parent);
                        } else {
                            self.rotate_lr(a, parent);
                        }
                    }
                }
                2 => {
                    if let Some(right) = self.nodes[a].right {
                        if self.balance_factor(right) >= 0 {
                            self.rotate_rr(a, parent);
                        } else {
                            self.rotate_rl(a, parent);
                        }
                    }
                }
                _ => {}
            }
        }
    }

    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: NodeId) {
        match parent {
            None => self.root = Some(new),
            Some(p) if self.nodes[p].left == Some(old) => self.nodes[p].left = Some(new),
            Some(p) => self.nodes[p].right = Some(new),
        }
    }

    fn rotate_ll(&mut self, a: NodeId, parent: Option<NodeId>) {
        let Some(b) = self.nodes[a].left else { return };
        trace!(node = a, "LL rotation");

        self.replace_child(parent, a, b);
        self.nodes[a].left = self.nodes[b].right;
        self.nodes[b].right = Some(a);

        self.update_height(a);
        self.update_height(b);
    }

    fn rotate_lr(&mut self, a: NodeId, parent: Option<NodeId>) {
        let Some(b) = self.nodes[a].left else { return };
        let Some(c) = self.nodes[b].right else { return };
        trace!(node = a, "LR rotation");

        self.replace_child(parent, a, c);
        self.nodes[a].left = self.nodes[c].right;
        self.nodes[b].right = self.nodes[c].left;
        self.nodes[c].left = Some(b);
        self.nodes[c].right = Some(a);

        self.update_height(a);
        self.update_height(b);
        self.update_height(c);
    }

    fn rotate_rr(&mut self, a: NodeId, parent: Option<NodeId>) {
        let Some(b) = self.nodes[a].right else { return };
        trace!(node = a, "RR rotation");

        self.replace_child(parent, a, b);
        self.nodes[a].right = self.nodes[b].left;
        self.nodes[b].left = Some(a);

        self.update_height(a);
        self.update_height(b);
    }

    fn rotate_rl(&mut self, a: NodeId, parent: Option<NodeId>) {
        let Some(b) = self.nodes[a].right else { return };
        let Some(c) = self.nodes[b].left else { return };
        trace!(node = a, "RL rotation");

        self.replace_child(parent, a, c);
        self.nodes[a].right = self.nodes[c].left;
        self.nodes[b].left = self.nodes[c].right;
        self.nodes[c].left = Some(a);
        self.nodes[c].right = Some(b);

        self.update_height(a);
        self.update_height(b);
        self.update_height(c);
    }

    /// Exchanges the key and bucket of two distinct nodes, leaving links alone
    fn swap_entries(&mut self, x: NodeId, y: NodeId) {
        let (lo, hi) = if x < y { (x, y) } else { (y, x) };
        let (head, tail) = self.nodes.split_at_mut(hi);
        let (a, b) = (&mut head[lo], &mut tail[0]);
        std::mem::swap(&mut a.key, &mut b.key);
        std::mem::swap(&mut a.bucket, &mut b.bucket);
    }

    /// Frees an already-unlinked node, moving the last arena slot into its place
    fn release(&mut self, id: NodeId) -> Node<K, V> {
        let last = self.nodes.len() - 1;
        let node = self.nodes.swap_remove(id);

        if id == last {
            return node;
        }

        // `last` now lives at `id`; fix whichever link pointed at it
        if self.root == Some(last) {
            self.root = Some(id);
            return node;
        }

        let mut current = self.root;
        let mut link = None;
        while let Some(p) = current {
            let next = match (self.compare)(&self.nodes[id].key, &self.nodes[p].key) {
                Ordering::Less => self.nodes[p].left,
                _ => self.nodes[p].right,
            };
            if next == Some(last) {
                link = Some(p);
                break;
            }
            current = next;
        }

        if let Some(p) = link {
            if self.nodes[p].left == Some(last) {
                self.nodes[p].left = Some(id);
            } else {
                self.nodes[p].right = Some(id);
            }
        }

        node
    }

    /// Returns the subtree height when valid
    fn check_subtree(
        &self,
        id: Option<NodeId>,
        low: Option<&K>,
        high: Option<&K>,
    ) -> Option<i32> {
        let Some(id) = id else { return Some(-1) };
        let node = &self.nodes[id];

        if low.is_some_and(|l| (self.compare)(&node.key, l) != Ordering::Greater) {
            return None;
        }
        if high.is_some_and(|h| (self.compare)(&node.key, h) != Ordering::Less) {
            return None;
        }

        let left = self.check_subtree(node.left, low, Some(&node.key))?;
        let right = self.check_subtree(node.right, Some(&node.key), high)?;
        let height = 1 + left.max(right);

        if height != node.height || (right - left).abs() > 1 || node.bucket.is_empty() {
            return None;
        }
        Some(height)
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BucketTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
