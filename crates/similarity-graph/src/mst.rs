//! Prim's minimum spanning tree.
//!
//! Selection is a linear scan over unvisited vertices (no heap), which is
//! adequate for the small per-query graphs this crate builds. Ties go to the
//! lowest index.

use std::ops::Deref;

use tracing::debug;

use crate::error::Result;
use crate::graph::WeightedGraph;
use crate::search::SearchTree;

#[derive(Debug, Clone, PartialEq)]
pub struct MinimumSpanningTree {
    tree: SearchTree,
    total_weight: f64,
}

impl MinimumSpanningTree {
    /// Sum of the weights of the edges selected into the tree
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    pub fn search_tree(&self) -> &SearchTree {
        &self.tree
    }
}

impl Deref for MinimumSpanningTree {
    type Target = SearchTree;

    fn deref(&self) -> &SearchTree {
        &self.tree
    }
}

/// Unvisited vertex with the strictly smallest finite cost
pub(crate) fn cheapest_unvisited(cost: &[f64], visited: &[bool]) -> Option<usize> {
    let mut best = None;
    let mut min = f64::INFINITY;
    for (i, (&c, &seen)) in cost.iter().zip(visited).enumerate() {
        if !seen && c < min {
            min = c;
            best = Some(i);
        }
    }
    best
}

impl<V> WeightedGraph<V> {
    /// Spanning tree of the vertices reachable from `root`, following
    /// outgoing edges. Unreachable vertices are left without a parent.
    pub fn minimum_spanning_tree(&self, root: usize) -> Result<MinimumSpanningTree> {
        self.check_index(root)?;

        let n = self.len();
        let mut cost = vec![f64::INFINITY; n];
        let mut parent = vec![None; n];
        let mut visited = vec![false; n];
        let mut order = Vec::with_capacity(n);
        let mut total_weight = 0.0;
        cost[root] = 0.0;

        while let Some(u) = cheapest_unvisited(&cost, &visited) {
            visited[u] = true;
            order.push(u);
            total_weight += cost[u];

            for edge in &self.neighbors[u] {
                if !visited[edge.v] && cost[edge.v] > edge.weight {
                    cost[edge.v] = edge.weight;
                    parent[edge.v] = Some(u);
                }
            }
        }

        debug!(root, reached = order.len(), total_weight, "Built minimum spanning tree");

        Ok(MinimumSpanningTree {
            tree: SearchTree::new(root, parent, order),
            total_weight,
        })
    }
}
