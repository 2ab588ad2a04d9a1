//! Dijkstra single-source shortest paths.

use std::ops::Deref;

use tracing::debug;

use crate::error::Result;
use crate::graph::WeightedGraph;
use crate::mst::cheapest_unvisited;
use crate::search::SearchTree;

#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathTree {
    tree: SearchTree,
    cost: Vec<f64>,
}

impl ShortestPathTree {
    /// Path cost from the source to `v`; `+∞` when unreachable or out of range
    pub fn cost(&self, v: usize) -> f64 {
        self.cost.get(v).copied().unwrap_or(f64::INFINITY)
    }

    pub fn costs(&self) -> &[f64] {
        &self.cost
    }

    pub fn search_tree(&self) -> &SearchTree {
        &self.tree
    }
}

impl Deref for ShortestPathTree {
    type Target = SearchTree;

    fn deref(&self) -> &SearchTree {
        &self.tree
    }
}

impl<V> WeightedGraph<V> {
    /// Cheapest paths from `source` along outgoing edges.
    ///
    /// Edge weights are non-negative by construction (`add_edge` rejects
    /// anything else), which is what the greedy selection relies on.
    pub fn shortest_paths(&self, source: usize) -> Result<ShortestPathTree> {
        self.check_index(source)?;

        let n = self.len();
        let mut cost = vec![f64::INFINITY; n];
        let mut parent = vec![None; n];
        let mut visited = vec![false; n];
        let mut order = Vec::with_capacity(n);
        cost[source] = 0.0;

        while let Some(u) = cheapest_unvisited(&cost, &visited) {
            visited[u] = true;
            order.push(u);

            for edge in &self.neighbors[u] {
                let through_u = cost[u] + edge.weight;
                if !visited[edge.v] && cost[edge.v] > through_u {
                    cost[edge.v] = through_u;
                    parent[edge.v] = Some(u);
                }
            }
        }

        debug!(source, reached = order.len(), "Computed shortest paths");

        Ok(ShortestPathTree {
            tree: SearchTree::new(source, parent, order),
            cost,
        })
    }
}
