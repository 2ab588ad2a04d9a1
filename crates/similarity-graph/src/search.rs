//! Depth-first and breadth-first traversal.

use std::collections::VecDeque;

use crate::error::Result;
use crate::graph::WeightedGraph;

/// Parent-pointer tree produced by a traversal
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTree {
    root: usize,
    parent: Vec<Option<usize>>,
    search_order: Vec<usize>,
}

impl SearchTree {
    pub(crate) fn new(root: usize, parent: Vec<Option<usize>>, search_order: Vec<usize>) -> Self {
        Self {
            root,
            parent,
            search_order,
        }
    }

    pub fn root(&self) -> usize {
        self.root
    }

    /// Parent of `v`; `None` for the root, unreached vertices and
    /// out-of-range indices
    pub fn parent(&self, v: usize) -> Option<usize> {
        self.parent.get(v).copied().flatten()
    }

    /// Vertices in the order they were reached
    pub fn search_order(&self) -> &[usize] {
        &self.search_order
    }

    pub fn vertices_found(&self) -> usize {
        self.search_order.len()
    }

    pub fn is_reached(&self, v: usize) -> bool {
        v == self.root || self.parent(v).is_some()
    }

    /// Indices from `v` back to the root (leaf first).
    ///
    /// An unreached vertex yields just `[v]`; an out-of-range index yields
    /// an empty path.
    pub fn path(&self, v: usize) -> Vec<usize> {
        let mut path = Vec::new();
        let mut current = (v < self.parent.len()).then_some(v);
        while let Some(i) = current {
            path.push(i);
            current = self.parent[i];
        }
        path
    }

    /// [`path`](Self::path) resolved to vertex values
    pub fn path_in<'g, V>(&self, graph: &'g WeightedGraph<V>, v: usize) -> Vec<&'g V> {
        graph.resolve(&self.path(v))
    }
}

impl<V> WeightedGraph<V> {
    /// Recursive depth-first search from `start`, following edges in
    /// insertion order
    pub fn dfs(&self, start: usize) -> Result<SearchTree> {
        self.check_index(start)?;

        let mut parent = vec![None; self.len()];
        let mut visited = vec![false; self.len()];
        let mut order = Vec::with_capacity(self.len());
        self.dfs_visit(start, &mut parent, &mut order, &mut visited);

        Ok(SearchTree::new(start, parent, order))
    }

    fn dfs_visit(
        &self,
        u: usize,
        parent: &mut [Option<usize>],
        order: &mut Vec<usize>,
        visited: &mut [bool],
    ) {
        order.push(u);
        visited[u] = true;

        for edge in &self.neighbors[u] {
            if !visited[edge.v] {
                parent[edge.v] = Some(u);
                self.dfs_visit(edge.v, parent, order, visited);
            }
        }
    }

    /// Breadth-first search from `start`. Vertices are marked visited when
    /// enqueued, so each is reported once.
    pub fn bfs(&self, start: usize) -> Result<SearchTree> {
        self.check_index(start)?;

        let mut parent = vec![None; self.len()];
        let mut visited = vec![false; self.len()];
        let mut order = Vec::with_capacity(self.len());
        let mut queue = VecDeque::from([start]);
        visited[start] = true;

        while let Some(u) = queue.pop_front() {
            order.push(u);
            for edge in &self.neighbors[u] {
                if !visited[edge.v] {
                    visited[edge.v] = true;
                    parent[edge.v] = Some(u);
                    queue.push_back(edge.v);
                }
            }
        }

        Ok(SearchTree::new(start, parent, order))
    }
}
