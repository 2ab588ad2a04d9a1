//! Directed weighted graph over an arena of vertices.
//!
//! Vertices are identified by their dense index, assigned in insertion
//! order. Each vertex owns an adjacency list of outgoing [`Edge`]s, kept in
//! the order the edges were added. Undirected relationships are modelled by
//! adding both directions.

use crate::error::{GraphError, Result};

/// A directed, weighted edge `u -> v`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub u: usize,
    pub v: usize,
    pub weight: f64,
}

impl Edge {
    pub fn new(u: usize, v: usize, weight: f64) -> Self {
        Self { u, v, weight }
    }
}

#[derive(Debug, Clone)]
pub struct WeightedGraph<V> {
    vertices: Vec<V>,
    pub(crate) neighbors: Vec<Vec<Edge>>,
}

impl<V> Default for WeightedGraph<V> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            neighbors: Vec::new(),
        }
    }
}

impl<V> WeightedGraph<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty graph with room for `capacity` vertices
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
            neighbors: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn vertex(&self, index: usize) -> Option<&V> {
        self.vertices.get(index)
    }

    /// Total number of directed edges
    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum()
    }

    /// Outgoing edges of `u`, in insertion order
    pub fn edges(&self, u: usize) -> Result<&[Edge]> {
        self.check_index(u)?;
        Ok(&self.neighbors[u])
    }

    /// Indices adjacent to `u`, in edge insertion order
    pub fn neighbors(&self, u: usize) -> Result<impl Iterator<Item = usize> + '_> {
        Ok(self.edges(u)?.iter().map(|e| e.v))
    }

    pub fn degree(&self, u: usize) -> Result<usize> {
        Ok(self.edges(u)?.len())
    }

    /// Weight of the first edge `u -> v`
    ///
    /// # Errors
    /// `InvalidIndex` for an out-of-range `u`, `EdgeNotFound` when the two
    /// vertices are not adjacent.
    pub fn weight(&self, u: usize, v: usize) -> Result<f64> {
        self.edges(u)?
            .iter()
            .find(|e| e.v == v)
            .map(|e| e.weight)
            .ok_or(GraphError::EdgeNotFound { u, v })
    }

    /// Adds the edge `u -> v`.
    ///
    /// Returns `Ok(false)` without changing the graph when an identical edge
    /// (same endpoints and same weight) already exists.
    ///
    /// # Errors
    /// `InvalidIndex` when either endpoint is out of range, `InvalidWeight`
    /// for a negative or NaN weight.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: f64) -> Result<bool> {
        self.insert_edge(Edge::new(u, v, weight))
    }

    pub fn insert_edge(&mut self, edge: Edge) -> Result<bool> {
        self.check_index(edge.u)?;
        self.check_index(edge.v)?;
        if edge.weight.is_nan() || edge.weight < 0.0 {
            return Err(GraphError::InvalidWeight {
                u: edge.u,
                v: edge.v,
                weight: edge.weight,
            });
        }

        let adjacency = &mut self.neighbors[edge.u];
        if adjacency.contains(&edge) {
            return Ok(false);
        }
        adjacency.push(edge);
        Ok(true)
    }

    /// Removes every vertex and edge
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.neighbors.clear();
    }

    /// Vertices for a list of indices, skipping any that are out of range
    pub fn resolve<'a>(&'a self, indices: &[usize]) -> Vec<&'a V> {
        indices.iter().filter_map(|&i| self.vertices.get(i)).collect()
    }

    pub(crate) fn check_index(&self, index: usize) -> Result<()> {
        if index < self.vertices.len() {
            Ok(())
        } else {
            Err(GraphError::InvalidIndex {
                index,
                size: self.vertices.len(),
            })
        }
    }
}

impl<V: PartialEq> WeightedGraph<V> {
    /// Builds a graph from a vertex list and an edge list.
    ///
    /// Vertices are added with [`add_vertex`](Self::add_vertex), so repeated
    /// vertices collapse onto their first occurrence; edges must refer to the
    /// resulting indices.
    pub fn from_edges(
        vertices: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Result<Self> {
        let mut graph = Self::new();
        for vertex in vertices {
            graph.add_vertex(vertex);
        }
        for edge in edges {
            graph.insert_edge(edge)?;
        }
        Ok(graph)
    }

    /// Index of the first vertex equal to `vertex`
    pub fn index_of(&self, vertex: &V) -> Option<usize> {
        self.vertices.iter().position(|v| v == vertex)
    }

    /// Appends `vertex` with an empty adjacency list.
    ///
    /// Returns `false` and leaves the graph unchanged when an equal vertex is
    /// already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.vertices.contains(&vertex) {
            return false;
        }
        self.vertices.push(vertex);
        self.neighbors.push(Vec::new());
        true
    }
}
